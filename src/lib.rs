//! # zpak
//!
//! Compact binary serialization and streaming archives for JSON-like
//! values (null, booleans, 64-bit integers, doubles, UTF-8 strings,
//! arrays, string-keyed maps).
//!
//! An archive is a plain concatenation of self-delimiting records, with
//! no header, footer or end marker: end of the source at a record
//! boundary is the end of the archive. Records can be appended one by
//! one and read back lazily, one record per step, so peak memory is
//! bounded by the largest single record rather than the archive size.
//!
//! ```
//! use zpak::{dumpb, loadb, Value};
//!
//! let values = vec![
//!     Value::Int(1),
//!     Value::Bool(true),
//!     Value::Null,
//!     Value::Map(vec![("hello".to_string(), Value::Str("world".to_string()))]),
//!     Value::Float(1.5),
//! ];
//!
//! let bytes = dumpb(&values)?;
//! assert_eq!(loadb(&bytes)?, values);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A single top-level value is just a one-record archive: use
//! [`encode_to_vec`]/[`decode_from_slice`] when exactly one record is
//! meant, and `dumpb`/`loadb` for sequences. The two interoperate on
//! the wire.

/// Whole-archive convenience operations, buffer- and file-backed.
pub mod api;
/// Append-only archive writer and lazy archive reader.
pub mod archive;
/// Binary codec: type tags, encoder, decoder.
pub mod codec;
/// Conversions to and from `serde_json::Value`.
pub mod convert;
/// Error types: encoding, decoding, conversion.
pub mod error;
/// The `Value` data model.
pub mod value;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Bulk dump/load plus lazy open, over buffers and files.
pub use api::{create, dump, dumpb, load, loadb, open, openb};
/// Streaming archive handles.
pub use archive::{ArchiveReader, ArchiveWriter};
/// Single-record codec entry points.
pub use codec::{decode_from_slice, encode_to_vec, encoded_len, read_value, write_value};
/// Operation errors.
pub use error::{ConvertError, DecodeError, EncodeError};
/// The value model.
pub use value::Value;
