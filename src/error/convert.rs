use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Integer {0} does not fit in i64")]
    IntOutOfRange(u64),

    #[error("Non-finite float {0} has no JSON representation")]
    NonFiniteFloat(f64),
}
