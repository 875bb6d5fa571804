pub mod convert;
pub mod decode;
pub mod encode;

pub use convert::ConvertError;
pub use decode::DecodeError;
pub use encode::EncodeError;
