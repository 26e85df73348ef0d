use derive_more::{Deref, From};
use std::fmt;

/// The native protocol version negotiated at connection startup.
///
/// Versions before 3 frame collections with `u16` counts and lengths; 3 and later use `i32`.
#[derive(From, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ProtocolVersion(u8);

impl ProtocolVersion {
    pub const V1: Self = Self(1);
    pub const V2: Self = Self(2);
    pub const V3: Self = Self(3);
    pub const V4: Self = Self(4);

    pub const fn new(version: u8) -> Self {
        Self(version)
    }

    pub fn has_int32_collection_lengths(self) -> bool {
        self >= Self::V3
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
