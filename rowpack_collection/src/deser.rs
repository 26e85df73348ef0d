//! Reads the layouts written by [`crate::Collection`] and [`crate::UserTypeValue`]
//! back into their item bodies. Item bodies themselves are not interpreted.
//!
//! Every reader returns the number of bytes it consumed alongside what it read.

use crate::LenWidth;
use anyhow::{anyhow, Result};
use byteorder::{BigEndian, ReadBytesExt};
use rowpack_types::serde::Buffer;
use rowpack_types::types::{CollectionKind, ProtocolVersion};
use std::io::Read;
use std::mem;

/// Reads a standalone collection value of the given kind, framed per `version`.
pub fn deser_value<R: Read>(
    r: &mut R,
    kind: CollectionKind,
    version: ProtocolVersion,
) -> Result<(usize, Vec<Buffer>)> {
    /* total_len */
    let total_len = LenWidth::Int
        .read(r)
        .map_err(|e| anyhow!("While reading total_len: {e}"))?;
    let mut r_len = mem::size_of::<i32>();

    /* count and items */
    let width = LenWidth::for_collection(kind, version);
    let (body_r_len, items) = deser_body(r, width)?;
    r_len += body_r_len;

    if body_r_len != total_len {
        return Err(anyhow!(
            "total_len {} disagrees with the {} bytes of the {} body",
            total_len,
            body_r_len,
            kind
        ));
    }
    Ok((r_len, items))
}

/// Reads a collection nested as an item of another composite.
pub fn deser_inner<R: Read>(r: &mut R) -> Result<(usize, Vec<Buffer>)> {
    deser_body(r, LenWidth::Int)
}

/// Reads a user type value of `field_count` fields. Unset fields read as `None`.
pub fn deser_user_type<R: Read>(
    r: &mut R,
    field_count: usize,
) -> Result<(usize, Vec<Option<Buffer>>)> {
    let mut r_len = 0;
    let mut fields = Vec::with_capacity(field_count);
    for field_i in 0..field_count {
        let field_len = r
            .read_i32::<BigEndian>()
            .map_err(|e| anyhow!("While reading length of field {field_i}: {e}"))?;
        r_len += mem::size_of::<i32>();

        if field_len < 0 {
            fields.push(None);
            continue;
        }
        let field = read_body(r, field_len as usize)?;
        r_len += field.len();
        fields.push(Some(field));
    }
    Ok((r_len, fields))
}

fn deser_body<R: Read>(r: &mut R, width: LenWidth) -> Result<(usize, Vec<Buffer>)> {
    /* count */
    let count = width
        .read(r)
        .map_err(|e| anyhow!("While reading count: {e}"))?;
    let mut r_len = width.byte_len();

    /* items */
    let mut items = vec![];
    for item_i in 0..count {
        let item_len = width
            .read(r)
            .map_err(|e| anyhow!("While reading length of item {item_i} of {count}: {e}"))?;
        r_len += width.byte_len();

        let item = read_body(r, item_len)?;
        r_len += item.len();
        items.push(item);
    }
    Ok((r_len, items))
}

/// Does not trust `len` for allocation; a corrupt length fails as a short read.
fn read_body<R: Read>(r: &mut R, len: usize) -> Result<Buffer> {
    let mut buf = vec![];
    (&mut *r).take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        return Err(anyhow!(
            "EOF after {} of a {} byte body",
            buf.len(),
            len
        ));
    }
    Ok(Buffer::from(buf))
}
