use crate::serde::Buffer;
use anyhow::{anyhow, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::ffi::CStr;
use std::io::{Cursor, Read};
use std::mem;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use uuid::Uuid;


/* Encoders. Each returns the item body only; the enclosing composite writes its length. */

pub fn encode_int32(i: i32) -> Buffer {
    Buffer::from(i.to_be_bytes())
}
pub fn encode_int64(i: i64) -> Buffer {
    Buffer::from(i.to_be_bytes())
}
pub fn encode_float(f: f32) -> Buffer {
    Buffer::from(f.to_bits().to_be_bytes())
}
pub fn encode_double(f: f64) -> Buffer {
    Buffer::from(f.to_bits().to_be_bytes())
}
pub fn encode_bool(b: bool) -> Buffer {
    Buffer::from([u8::from(b)])
}
pub fn encode_uuid(uuid: &Uuid) -> Buffer {
    Buffer::from(*uuid.as_bytes())
}
pub fn encode_inet(addr: &IpAddr) -> Buffer {
    match addr {
        IpAddr::V4(v4) => Buffer::from(v4.octets()),
        IpAddr::V6(v6) => Buffer::from(v6.octets()),
    }
}
pub fn encode_bytes(bytes: &[u8]) -> Buffer {
    Buffer::from_slice(bytes)
}
pub fn encode_str(s: &str) -> Buffer {
    Buffer::from_slice(s.as_bytes())
}
/// The terminator is not part of the encoded text.
pub fn encode_cstr(s: &CStr) -> Buffer {
    Buffer::from_slice(s.to_bytes())
}
pub fn encode_decimal(varint: &[u8], scale: i32) -> Buffer {
    let mut buf = Vec::with_capacity(mem::size_of::<i32>() + varint.len());
    buf.extend_from_slice(&scale.to_be_bytes());
    buf.extend_from_slice(varint);
    Buffer::from(buf)
}

/* Decoders. These read one whole item body, and reject trailing bytes. */

fn decode_exact<T>(
    item: &[u8],
    read: impl FnOnce(&mut Cursor<&[u8]>) -> std::io::Result<T>,
) -> Result<T> {
    let mut r = Cursor::new(item);
    let t = read(&mut r).map_err(|e| anyhow!("Short item of {} bytes: {}", item.len(), e))?;
    if r.position() as usize != item.len() {
        return Err(anyhow!(
            "Item of {} bytes has {} trailing bytes",
            item.len(),
            item.len() - r.position() as usize
        ));
    }
    Ok(t)
}

pub fn decode_int32(item: &[u8]) -> Result<i32> {
    decode_exact(item, |r| r.read_i32::<BigEndian>())
}
pub fn decode_int64(item: &[u8]) -> Result<i64> {
    decode_exact(item, |r| r.read_i64::<BigEndian>())
}
pub fn decode_float(item: &[u8]) -> Result<f32> {
    decode_exact(item, |r| r.read_f32::<BigEndian>())
}
pub fn decode_double(item: &[u8]) -> Result<f64> {
    decode_exact(item, |r| r.read_f64::<BigEndian>())
}
pub fn decode_bool(item: &[u8]) -> Result<bool> {
    decode_exact(item, |r| r.read_u8()).map(|b| b != 0)
}
pub fn decode_uuid(item: &[u8]) -> Result<Uuid> {
    Ok(Uuid::from_slice(item)?)
}
pub fn decode_inet(item: &[u8]) -> Result<IpAddr> {
    if let Ok(octets) = <[u8; 4]>::try_from(item) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(item) {
        return Ok(IpAddr::V6(Ipv6Addr::from(octets)));
    }
    Err(anyhow!("Inet item of {} bytes", item.len()))
}
pub fn decode_str(item: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(item)?)
}
/// Returns `(varint, scale)`.
pub fn decode_decimal(item: &[u8]) -> Result<(Vec<u8>, i32)> {
    decode_exact(item, |r| {
        let scale = r.read_i32::<BigEndian>()?;
        let mut varint = vec![];
        r.read_to_end(&mut varint)?;
        Ok((varint, scale))
    })
}
