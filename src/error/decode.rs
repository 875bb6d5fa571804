use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unknown tag 0x{0:02X}")]
    UnknownTag(u8),

    #[error("Unexpected end of input while {context}")]
    UnexpectedEof { context: &'static str },

    #[error("Archive truncated after {records_read} record(s), while {context}")]
    TruncatedArchive {
        records_read: u64,
        context: &'static str,
    },

    #[error("Expected string key in map entry, got tag 0x{got:02X}")]
    ExpectedStringKey { got: u8 },

    #[error("Invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("{remaining} trailing byte(s) after decoded record")]
    TrailingBytes { remaining: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
