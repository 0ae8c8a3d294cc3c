use tracing::debug;

use crate::error::CodecError;
use crate::utils::limits::{FIRST_ARC_RADIX, MIN_OID_ARCS};
use crate::utils::varint::encode_varint;

/// Split dotted (or whitespace separated) text into arcs
pub fn parse_arcs(text: &str) -> Result<Vec<u64>, CodecError> {
    let normalized: String = text
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { c })
        .collect();

    let components: Vec<&str> = normalized.split('.').collect();
    if components.len() < MIN_OID_ARCS {
        return Err(CodecError::InvalidOidFormat(format!(
            "{:?} has fewer than {} arcs",
            text, MIN_OID_ARCS
        )));
    }

    components.into_iter().map(parse_arc).collect()
}

fn parse_arc(component: &str) -> Result<u64, CodecError> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidOidFormat(format!(
            "arc {:?} is not a non-negative integer",
            component
        )));
    }
    component.parse::<u64>().map_err(|_| {
        CodecError::InvalidOidFormat(format!("arc {} does not fit in 64 bits", component))
    })
}

/// Fold the first two arcs into the leading byte.
///
/// The second arc must stay below 40, otherwise the byte splits back
/// into a different pair.
pub fn pack_first_arcs(first: u64, second: u64) -> Result<u8, CodecError> {
    if second >= FIRST_ARC_RADIX {
        return Err(CodecError::InvalidOidFormat(format!(
            "second arc of {}.{} must be below {}",
            first, second, FIRST_ARC_RADIX
        )));
    }
    first
        .checked_mul(FIRST_ARC_RADIX)
        .and_then(|v| v.checked_add(second))
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| {
            CodecError::InvalidOidFormat(format!(
                "{}.{} does not fit in the leading byte",
                first, second
            ))
        })
}

/// Append arcs three onward
pub fn encode_tail(arcs: &[u64], out: &mut Vec<u8>) {
    for &arc in arcs {
        if arc < 0x80 {
            out.push(arc as u8);
        } else {
            encode_varint(arc, out);
        }
    }
}

pub fn encode_arcs(arcs: &[u64]) -> Result<Vec<u8>, CodecError> {
    let [first, second, tail @ ..] = arcs else {
        return Err(CodecError::InvalidOidFormat(format!(
            "{} arcs given, at least {} required",
            arcs.len(),
            MIN_OID_ARCS
        )));
    };

    let mut out = Vec::with_capacity(1 + tail.len());
    out.push(pack_first_arcs(*first, *second)?);
    encode_tail(tail, &mut out);
    Ok(out)
}

/// Encode a dotted-decimal OID into its DER content bytes
pub fn encode_oid(text: &str) -> Result<Vec<u8>, CodecError> {
    let arcs = parse_arcs(text)?;
    let bytes = encode_arcs(&arcs)?;
    debug!("encoded OID {} into {} bytes", text.trim(), bytes.len());
    Ok(bytes)
}
