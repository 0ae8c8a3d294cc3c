//! Byte-array utilities for certificate tooling: OID encoding and decoding,
//! padding and trimming, and hex dumps.

pub mod config;
pub mod error;
pub mod oid;
pub mod utils;

pub use error::CodecError;
pub use oid::{decode_oid, encode_oid, ObjectIdentifier};
pub use utils::{
    format_hex, pad_bytes, pad_bytes_in_place, trim_padding, trim_padding_in_place, PadSide,
};
