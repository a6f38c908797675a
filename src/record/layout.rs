use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::util::Error;

/// Width of the widest supported layout.
pub const MAX_RECORD_SIZE: usize = 64;

/// Byte offsets of every field inside one fixed-width record. The outer kind
/// always sits at offset 0.
pub(super) struct Offsets {
    pub record_size: usize,
    pub payload_kind: usize,
    pub value: usize,
    pub value_timestamp: usize,
    pub values: usize,
    pub values_timestamp: usize,
    pub message: usize,
    /// Bytes outside the active variant must be zero.
    pub zero_filled: bool,
}

/// kind(4) payload kind(4) then the widest payload: 10 floats(40) timestamp(8).
const PORTABLE: Offsets = Offsets {
    record_size: 56,
    payload_kind: 4,
    value: 8,
    value_timestamp: 12,
    values: 8,
    values_timestamp: 48,
    message: 8,
    zero_filled: true,
};

/// LP64 native struct layout: the union is 8-aligned, so it starts at 8 and the
/// 64-bit timestamps are padded up to an 8-byte boundary.
const LEGACY: Offsets = Offsets {
    record_size: 64,
    payload_kind: 8,
    value: 12,
    value_timestamp: 16,
    values: 12,
    values_timestamp: 56,
    message: 12,
    zero_filled: false,
};

/// On-disk record layout. Both layouts are little-endian and fixed-width.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Layout {
    /// 56 bytes, no padding. Every byte outside the active variant, including
    /// the message slot past its NUL, must be zero; anything else decodes as
    /// Corruption, so re-encoding a decoded record reproduces its bytes.
    #[default]
    Portable,
    /// Matches the native C struct layout (`int` kind, 8-aligned union of
    /// payload structs) on x86-64/aarch64 Linux. C writers leave garbage in
    /// padding and unused union bytes, so those bytes are ignored on decode
    /// and written as zero.
    Legacy,
}

impl Layout {
    pub(super) fn offsets(&self) -> &'static Offsets {
        match self {
            Layout::Portable => &PORTABLE,
            Layout::Legacy => &LEGACY,
        }
    }

    pub fn record_size(&self) -> usize {
        self.offsets().record_size
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Layout::Portable => "portable",
            Layout::Legacy => "legacy",
        };
        f.write_str(str)
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portable" => Ok(Layout::Portable),
            "legacy" => Ok(Layout::Legacy),
            _ => Err(Error::InvalidArgument(format!("unknown layout {:?}", s))),
        }
    }
}
