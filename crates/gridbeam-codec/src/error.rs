//! Codec and pipeline errors

use thiserror::Error;

/// Wire-format errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("unexpected end of buffer")]
    Truncated,

    #[error("varint does not fit in 64 bits")]
    VarintOverflow,

    #[error("unsupported wire type {0}")]
    UnsupportedWireType(u32),

    #[error("{0} is required")]
    MissingRequired(&'static str),

    #[error("decoded message is not valid")]
    InvalidMessage,

    #[error("unknown {name} value {value}")]
    UnknownEnum { name: &'static str, value: u64 },
}

/// Fragment pipeline errors.
///
/// Each stage fails with its own variant so callers can tell a bad link
/// apart from a corrupted save.
#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("fragment is empty")]
    Empty,

    #[error("unexpected fragment version '{0}'")]
    UnexpectedVersion(char),

    #[error("base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("compression failed: {0}")]
    Compression(#[source] std::io::Error),

    #[error("decompression failed: {0}")]
    Decompression(#[source] std::io::Error),

    #[error("payload decoding failed: {0}")]
    Codec(#[from] CodecError),
}
