use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Value out of range: {what} length {len} does not fit in u32")]
    ValueOutOfRange { what: &'static str, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
