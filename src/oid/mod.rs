//! Object identifier codec.
//!
//! Converts between dotted-decimal text and the DER content octets of an
//! OBJECT IDENTIFIER. The first two arcs share the leading byte
//! (`first * 40 + second`); every later arc is a base-128 group. Only the
//! content octets are handled, there is no tag or length framing here.

pub mod decoder;
pub mod encoder;
pub mod known;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::utils::limits::FIRST_ARC_RADIX;

pub use decoder::{decode_arcs, decode_oid};
pub use encoder::{encode_arcs, encode_oid, parse_arcs};

/// An OID held as its arcs.
///
/// Always has at least two arcs, the second below 40, whose leading pair
/// fits in one byte, so [`ObjectIdentifier::to_der`] cannot fail and
/// [`ObjectIdentifier::from_der`] gives the same value back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectIdentifier {
    arcs: Vec<u64>,
}

impl ObjectIdentifier {
    pub fn new(arcs: Vec<u64>) -> Result<Self, CodecError> {
        encode_arcs(&arcs)?;
        Ok(Self { arcs })
    }

    pub fn from_der(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(Self { arcs: decode_arcs(bytes)? })
    }

    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    pub fn to_der(&self) -> Vec<u8> {
        let lead = self.arcs[0] * FIRST_ARC_RADIX + self.arcs[1];
        let mut out = Vec::with_capacity(self.arcs.len());
        out.push(lead as u8);
        encoder::encode_tail(&self.arcs[2..], &mut out);
        out
    }

    pub fn name(&self) -> Option<&'static str> {
        known::name_of(&self.to_string())
    }
}

impl FromStr for ObjectIdentifier {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_arcs(s)?)
    }
}

impl TryFrom<String> for ObjectIdentifier {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectIdentifier> for String {
    fn from(value: ObjectIdentifier) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}
