/// Longest base-128 group a u64 can need (ceil(64 / 7))
pub const MAX_VARINT_LEN: usize = 10;

/// Continuation flag carried by every non-final byte of a group
pub const CONTINUATION_BIT: u8 = 0x80;

/// Value bits carried by each byte of a group
pub const VALUE_MASK: u8 = 0x7F;

/// Multiplier folding the first two arcs into one byte
pub const FIRST_ARC_RADIX: u64 = 40;

/// An OID has at least this many arcs
pub const MIN_OID_ARCS: usize = 2;

/// Default hex dump width
pub const DEFAULT_BYTES_PER_LINE: usize = 8;
