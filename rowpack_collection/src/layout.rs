//! # Collection layouts
//!
//! A collection serialized as a standalone value (eg a query parameter) is framed
//! by an outer length. The widths of the count and of each item length depend on
//! the negotiated [`ProtocolVersion`], except that tuples always use `i32`.
//!
//! ```text
//! struct CollectionValue {
//!     total_len:      i32,                // len of everything below
//!     count:          u16 or i32,
//!     item_0: {
//!         item_len:       u16 or i32,
//!         item_body:      [u8; item_len],
//!     },
//!     item_1: ...
//! }
//! ```
//!
//! A collection nested as an item of another composite omits `total_len`, and
//! always uses `i32`, regardless of the version the outermost value is sent with.
//! The parent's `item_len` frames it.
//!
//! ```text
//! struct NestedCollection {
//!     count:          i32,
//!     item_0: {
//!         item_len:       i32,
//!         item_body:      [u8; item_len],
//!     },
//!     ...
//! }
//! ```

use crate::{Collection, Error, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use rowpack_types::serde::Buffer;
use rowpack_types::types::{CollectionKind, ProtocolVersion};
use std::io::{self, Read, Write};
use std::mem;


/// The width of a collection's count field and of each of its item length fields.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LenWidth {
    Short,
    Int,
}

impl LenWidth {
    pub fn for_collection(kind: CollectionKind, version: ProtocolVersion) -> Self {
        if kind == CollectionKind::Tuple || version.has_int32_collection_lengths() {
            Self::Int
        } else {
            Self::Short
        }
    }

    pub const fn byte_len(self) -> usize {
        match self {
            Self::Short => mem::size_of::<u16>(),
            Self::Int => mem::size_of::<i32>(),
        }
    }

    pub const fn max_value(self) -> usize {
        match self {
            Self::Short => u16::MAX as usize,
            Self::Int => i32::MAX as usize,
        }
    }

    pub(crate) fn check(self, what: &'static str, value: usize) -> Result<()> {
        if value <= self.max_value() {
            return Ok(());
        }
        Err(Error::LengthOverflow {
            what,
            value,
            width: self.byte_len(),
            max: self.max_value(),
        })
    }

    /// The caller must have [`Self::check`]ed `value`.
    pub(crate) fn write<W: Write>(self, w: &mut W, value: usize) -> io::Result<()> {
        match self {
            Self::Short => w.write_u16::<BigEndian>(value as u16),
            Self::Int => w.write_i32::<BigEndian>(value as i32),
        }
    }

    pub(crate) fn read<R: Read>(self, r: &mut R) -> io::Result<usize> {
        match self {
            Self::Short => Ok(r.read_u16::<BigEndian>()? as usize),
            Self::Int => {
                let int = r.read_i32::<BigEndian>()?;
                usize::try_from(int).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("Negative length {int}"))
                })
            }
        }
    }
}

/* Sizes. */
impl Collection {
    pub fn len_width(&self, version: ProtocolVersion) -> LenWidth {
        LenWidth::for_collection(self.kind, version)
    }

    /// The exact length of [`Self::serialize_as_value`]'s output, computed without encoding.
    pub fn serialized_length(&self, version: ProtocolVersion) -> usize {
        mem::size_of::<i32>() + self.body_len(self.len_width(version))
    }

    /// The exact length of [`Self::serialize_inner`]'s output.
    pub fn inner_len(&self) -> usize {
        self.body_len(LenWidth::Int)
    }

    fn body_len(&self, width: LenWidth) -> usize {
        let items_len: usize = self
            .items
            .iter()
            .map(|item| width.byte_len() + item.len())
            .sum();
        width.byte_len() + items_len
    }

    fn check_body(&self, width: LenWidth) -> Result<()> {
        width.check("item count", self.items.len())?;
        for item in self.items.iter() {
            width.check("item length", item.len())?;
        }
        Ok(())
    }
}

/* Serialization. */
impl Collection {
    /// Encodes this collection as a standalone value, per the version's widths.
    pub fn serialize_as_value(&self, version: ProtocolVersion) -> Result<Buffer> {
        let mut buf = Buffer::with_capacity(self.serialized_length(version));
        self.write_value_into(version, &mut buf)?;
        Ok(buf)
    }

    /// Encodes this collection as a standalone value at the end of `w`,
    /// eg into a message buffer pre-sized by [`Self::serialized_length`].
    ///
    /// Nothing is written if a count or length overflows its prefix.
    pub fn write_value_into<W: Write>(&self, version: ProtocolVersion, w: &mut W) -> Result<usize> {
        let width = self.len_width(version);
        self.check_body(width)?;
        let body_len = self.body_len(width);
        LenWidth::Int.check("total length", body_len)?;

        if !self.is_map_complete() {
            tracing::warn!(
                "Serializing a map with an odd item count {}; its last key has no value.",
                self.items.len()
            );
        }

        LenWidth::Int.write(w, body_len)?;
        self.write_body(width, w)?;

        let w_len = mem::size_of::<i32>() + body_len;
        tracing::trace!(
            "Serialized {} of {} items as a {} value: {} bytes",
            self.kind,
            self.items.len(),
            version,
            w_len
        );
        Ok(w_len)
    }

    /// Encodes this collection for nesting as an item of another composite.
    pub fn serialize_inner(&self) -> Result<Buffer> {
        let width = LenWidth::Int;
        self.check_body(width)?;

        let mut buf = Buffer::with_capacity(self.inner_len());
        self.write_body(width, &mut buf)?;
        Ok(buf)
    }

    fn write_body<W: Write>(&self, width: LenWidth, w: &mut W) -> io::Result<()> {
        width.write(w, self.items.len())?;
        for item in self.items.iter() {
            width.write(w, item.len())?;
            w.write_all(item)?;
        }
        Ok(())
    }
}
