use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    InvalidOidFormat(String),
    InvalidEncoding(&'static str),
    MalformedVarint { offset: usize },
    VarintOverflow { offset: usize },
    InvalidHex(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidOidFormat(reason) =>
                write!(f, "invalid OID format: {}", reason),
            CodecError::InvalidEncoding(reason) =>
                write!(f, "invalid OID encoding: {}", reason),
            CodecError::MalformedVarint { offset } =>
                write!(f, "truncated base-128 group starting at byte {}", offset),
            CodecError::VarintOverflow { offset } =>
                write!(f, "base-128 group starting at byte {} exceeds 64 bits", offset),
            CodecError::InvalidHex(reason) =>
                write!(f, "invalid hex input: {}", reason),
        }
    }
}

impl std::error::Error for CodecError {}
