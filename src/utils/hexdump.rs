use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::utils::limits::DEFAULT_BYTES_PER_LINE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexDumpOptions {
    /// Bytes per output line; 0 keeps everything on one line
    pub bytes_per_line: usize,
    pub delimiter: char,
}

impl Default for HexDumpOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
            delimiter: ' ',
        }
    }
}

impl HexDumpOptions {
    pub fn format(&self, input: &[u8]) -> String {
        format_hex(input, self.bytes_per_line, self.delimiter)
    }
}

/// Render bytes as uppercase hex pairs for display
pub fn format_hex(input: &[u8], bytes_per_line: usize, delimiter: char) -> String {
    let width = if bytes_per_line == 0 { input.len().max(1) } else { bytes_per_line };
    let mut sep = [0u8; 4];
    let sep: &str = delimiter.encode_utf8(&mut sep);

    input
        .chunks(width)
        .map(|line| {
            line.iter()
                .map(|b| hex::encode_upper([*b]))
                .collect::<Vec<_>>()
                .join(sep)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse user-supplied hex such as `0x2A8648`, `2a 86 48` or `2A:86:48`
pub fn parse_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    hex::decode(&digits).map_err(|e| CodecError::InvalidHex(e.to_string()))
}
