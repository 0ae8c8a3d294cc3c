use tracing::{debug, trace};

use crate::error::CodecError;
use crate::utils::limits::{CONTINUATION_BIT, FIRST_ARC_RADIX};
use crate::utils::varint::decode_varint;

pub fn decode_arcs(bytes: &[u8]) -> Result<Vec<u64>, CodecError> {
    let Some(&lead) = bytes.first() else {
        return Err(CodecError::InvalidEncoding("no bytes to decode"));
    };

    let lead = u64::from(lead);
    let second = lead % FIRST_ARC_RADIX;
    let mut arcs = vec![(lead - second) / FIRST_ARC_RADIX, second];

    let mut i = 1;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte & CONTINUATION_BIT == 0 {
            arcs.push(u64::from(byte));
            i += 1;
        } else {
            let (arc, next) = decode_varint(bytes, i)?;
            trace!("group at {}..{} decoded to {}", i, next, arc);
            arcs.push(arc);
            i = next;
        }
    }

    Ok(arcs)
}

/// Decode DER content bytes back into dotted-decimal text
pub fn decode_oid(bytes: &[u8]) -> Result<String, CodecError> {
    let arcs = decode_arcs(bytes)?;
    let text = arcs
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");
    debug!("decoded {} bytes into OID {}", bytes.len(), text);
    Ok(text)
}
