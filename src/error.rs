use thiserror::Error;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug, Error, PartialEq)]
pub enum QuatError {
    #[error("cannot invert a zero-norm quaternion")]
    ZeroNorm,
    #[error("cannot rotate about a zero-length axis")]
    ZeroAxis,
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid number for {0}: {1}")]
    InvalidNumber(String, String),
    #[error("unknown flag {0}")]
    UnknownFlag(String),
}
