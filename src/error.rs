use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 文档校验流程中的错误。摘要计算本身没有错误。
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input type: expected {expected}, found {found}")]
    InvalidInputType { expected: String, found: String },

    #[error("input of {size} bytes exceeds the {limit} byte limit")]
    SizeLimitExceeded { size: u64, limit: u64 },

    #[error("native SHA-256 implementation is unavailable")]
    NativeUnavailable,

    #[error("hash computation failed: {0}")]
    Computation(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("registry lookup failed: {0}")]
    Registry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
