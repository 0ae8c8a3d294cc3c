pub mod hexdump;
pub mod limits;
pub mod padding;
pub mod varint;

pub use hexdump::{format_hex, parse_hex, HexDumpOptions};
pub use padding::*;
pub use varint::*;
