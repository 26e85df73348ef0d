use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::any;
use std::fmt;

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ValueTypeInt(u16);
impl From<ValueType> for ValueTypeInt {
    fn from(val_type: ValueType) -> Self {
        Self(val_type as u16)
    }
}
impl From<CollectionKind> for ValueTypeInt {
    fn from(kind: CollectionKind) -> Self {
        Self(kind as u16)
    }
}

/// Type option codes, as carried in the protocol's column metadata.
///
/// Discriminants are fixed by the protocol and must never be renumbered.
#[repr(u16)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum ValueType {
    Custom = 0x0000,
    Ascii = 0x0001,
    Bigint = 0x0002,
    Blob = 0x0003,
    Boolean = 0x0004,
    Counter = 0x0005,
    Decimal = 0x0006,
    Double = 0x0007,
    Float = 0x0008,
    Int = 0x0009,
    Text = 0x000A,
    Timestamp = 0x000B,
    Uuid = 0x000C,
    Varchar = 0x000D,
    Varint = 0x000E,
    Timeuuid = 0x000F,
    Inet = 0x0010,
    List = 0x0020,
    Map = 0x0021,
    Set = 0x0022,
    Udt = 0x0030,
    Tuple = 0x0031,
}
impl TryFrom<ValueTypeInt> for ValueType {
    type Error = anyhow::Error;
    fn try_from(int: ValueTypeInt) -> Result<Self> {
        ValueType::from_u16(int.0).ok_or(anyhow!(
            "Unknown {} {:#06x}",
            any::type_name::<ValueTypeInt>(),
            int.0
        ))
    }
}

impl ValueType {
    pub fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Set)
    }
    pub fn is_tuple(self) -> bool {
        self == Self::Tuple
    }
    pub fn is_user_type(self) -> bool {
        self == Self::Udt
    }

    /// `text` and `varchar` name the same type on the wire.
    pub fn is_alias_of(self, other: ValueType) -> bool {
        let canon = |vt: ValueType| match vt {
            Self::Varchar => Self::Text,
            vt => vt,
        };
        canon(self) == canon(other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Ascii => "ascii",
            Self::Bigint => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Varchar => "varchar",
            Self::Varint => "varint",
            Self::Timeuuid => "timeuuid",
            Self::Inet => "inet",
            Self::List => "list",
            Self::Map => "map",
            Self::Set => "set",
            Self::Udt => "udt",
            Self::Tuple => "tuple",
        }
    }
}
impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The composite kinds a [`crate::types::DataType::Collection`] may take.
///
/// Shares its codes with [`ValueType`], so conversion in either direction is by code.
#[repr(u16)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum CollectionKind {
    List = 0x0020,
    Map = 0x0021,
    Set = 0x0022,
    Tuple = 0x0031,
}
impl From<CollectionKind> for ValueType {
    fn from(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::List => ValueType::List,
            CollectionKind::Map => ValueType::Map,
            CollectionKind::Set => ValueType::Set,
            CollectionKind::Tuple => ValueType::Tuple,
        }
    }
}
impl TryFrom<ValueType> for CollectionKind {
    type Error = anyhow::Error;
    fn try_from(val_type: ValueType) -> Result<Self> {
        let int = ValueTypeInt::from(val_type);
        CollectionKind::from_u16(*int)
            .ok_or(anyhow!("{} is neither a collection nor a tuple type", val_type))
    }
}
impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ValueType::from(*self), f)
    }
}
