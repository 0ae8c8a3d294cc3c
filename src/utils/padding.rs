use serde::{Deserialize, Serialize};

/// Which end of a byte sequence padding is added to or removed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSide {
    #[default]
    Front,
    End,
}

/// Return `input` widened to `target_len` bytes with `padding` filling
/// the requested side. Inputs already at or past the target come back unchanged.
pub fn pad_bytes(input: &[u8], target_len: usize, padding: u8, side: PadSide) -> Vec<u8> {
    if input.len() >= target_len {
        return input.to_vec();
    }

    let fill = target_len - input.len();
    let mut out = Vec::with_capacity(target_len);
    match side {
        PadSide::Front => {
            out.resize(fill, padding);
            out.extend_from_slice(input);
        }
        PadSide::End => {
            out.extend_from_slice(input);
            out.resize(target_len, padding);
        }
    }
    out
}

/// Same as [`pad_bytes`], but rewrites the caller's buffer
pub fn pad_bytes_in_place(buf: &mut Vec<u8>, target_len: usize, padding: u8, side: PadSide) {
    if buf.len() >= target_len {
        return;
    }

    match side {
        PadSide::Front => {
            let fill = target_len - buf.len();
            buf.splice(0..0, std::iter::repeat(padding).take(fill));
        }
        PadSide::End => buf.resize(target_len, padding),
    }
}

/// Borrow `input` without its maximal run of `padding` on the given side
pub fn strip_padding(input: &[u8], padding: u8, side: PadSide) -> &[u8] {
    match side {
        PadSide::Front => {
            let start = input
                .iter()
                .position(|&b| b != padding)
                .unwrap_or(input.len());
            &input[start..]
        }
        PadSide::End => {
            let end = input
                .iter()
                .rposition(|&b| b != padding)
                .map_or(0, |i| i + 1);
            &input[..end]
        }
    }
}

pub fn trim_padding(input: &[u8], padding: u8, side: PadSide) -> Vec<u8> {
    strip_padding(input, padding, side).to_vec()
}

pub fn trim_padding_in_place(buf: &mut Vec<u8>, padding: u8, side: PadSide) {
    match side {
        PadSide::Front => {
            let removed = buf.len() - strip_padding(buf, padding, side).len();
            buf.drain(..removed);
        }
        PadSide::End => {
            let kept = strip_padding(buf, padding, side).len();
            buf.truncate(kept);
        }
    }
}
