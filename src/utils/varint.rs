use crate::error::CodecError;
use crate::utils::limits::{CONTINUATION_BIT, MAX_VARINT_LEN, VALUE_MASK};
use crate::utils::padding::{strip_padding, PadSide};

/// Encode u64 as an ASN.1 base-128 group (big-endian, minimal length)
pub fn encode_varint(value: u64, out: &mut Vec<u8>) {
    let mut digits = [0u8; MAX_VARINT_LEN];
    let mut rest = value;
    for digit in digits.iter_mut().rev() {
        *digit = (rest as u8) & VALUE_MASK;
        rest >>= 7;
    }

    let digits = strip_padding(&digits, 0x00, PadSide::Front);
    let Some((last, leading)) = digits.split_last() else {
        out.push(0x00);
        return;
    };

    out.extend(leading.iter().map(|d| d | CONTINUATION_BIT));
    out.push(*last);
}

pub fn varint_bytes(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    encode_varint(value, &mut out);
    out
}

/// Decode one base-128 group beginning at `start`.
///
/// Returns the value and the index just past the group's final byte.
pub fn decode_varint(buf: &[u8], start: usize) -> Result<(u64, usize), CodecError> {
    let mut value = 0u64;

    for (i, &byte) in buf.iter().enumerate().skip(start) {
        if value > u64::MAX >> 7 {
            return Err(CodecError::VarintOverflow { offset: start });
        }
        value = (value << 7) | u64::from(byte & VALUE_MASK);

        if byte & CONTINUATION_BIT == 0 {
            return Ok((value, i + 1));
        }
    }

    Err(CodecError::MalformedVarint { offset: start })
}
