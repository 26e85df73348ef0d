use crate::{Error, Result, UserTypeValue};
use rowpack_types::serde::{self, Buffer};
use rowpack_types::types::{CollectionKind, DataType, DataTypeShared};
use std::ffi::CStr;
use std::net::IpAddr;
use std::sync::Arc;
use uuid::Uuid;


pub type CollectionShared = Arc<Collection>;

/// A [`Collection`] accumulates the encoded items of one list, set, map or tuple value.
///
/// Items are stored already encoded, in insertion order, and are never reordered.
/// A map stores its keys and values as alternating items: `k0, v0, k1, v1, ...`.
///
/// A nested collection or user type value is stored as its fixed inner encoding
/// (see [`Collection::serialize_inner`]), so the outer value never looks into it again.
///
/// Appends take `&mut self` and serialization takes `&self`: once built, a collection
/// may be shared as a [`CollectionShared`] and serialized from several threads.
#[derive(Clone, Debug)]
pub struct Collection {
    pub(crate) kind: CollectionKind,
    pub(crate) data_type: Option<DataTypeShared>,
    pub(crate) items: Vec<Buffer>,
}

/* Construction. */
impl Collection {
    /// `size_hint` counts elements; for a map, it counts key-value pairs.
    pub fn new(kind: CollectionKind, size_hint: usize) -> Self {
        Self {
            kind,
            data_type: None,
            items: Vec::with_capacity(Self::items_capacity(kind, size_hint)),
        }
    }

    pub fn new_from_data_type(data_type: DataTypeShared, size_hint: usize) -> Result<Self> {
        let kind = data_type
            .collection_kind()
            .ok_or_else(|| Error::invalid_data_type(&data_type, "a collection or tuple type"))?;
        Ok(Self {
            kind,
            data_type: Some(data_type),
            items: Vec::with_capacity(Self::items_capacity(kind, size_hint)),
        })
    }

    fn items_capacity(kind: CollectionKind, size_hint: usize) -> usize {
        match kind {
            CollectionKind::Map => size_hint.saturating_mul(2),
            _ => size_hint,
        }
    }
}

/* Accessors. */
impl Collection {
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn data_type(&self) -> Option<&DataTypeShared> {
        self.data_type.as_ref()
    }

    /// The type this value presents when it is appended into another composite.
    pub fn value_data_type(&self) -> DataTypeShared {
        match &self.data_type {
            Some(data_type) => Arc::clone(data_type),
            None => Arc::new(DataType::new(self.kind.into())),
        }
    }

    pub fn items(&self) -> &[Buffer] {
        &self.items
    }

    /// For a map, keys and values are counted separately.
    pub fn encoded_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// False only for a map that holds a key without its value.
    pub fn is_map_complete(&self) -> bool {
        self.kind != CollectionKind::Map || self.items.len() % 2 == 0
    }
}

/* Primitive appends. These are not checked against the declared type. */
impl Collection {
    pub fn append_int32(&mut self, i: i32) {
        self.items.push(serde::encode_int32(i));
    }
    pub fn append_int64(&mut self, i: i64) {
        self.items.push(serde::encode_int64(i));
    }
    pub fn append_float(&mut self, f: f32) {
        self.items.push(serde::encode_float(f));
    }
    pub fn append_double(&mut self, f: f64) {
        self.items.push(serde::encode_double(f));
    }
    pub fn append_bool(&mut self, b: bool) {
        self.items.push(serde::encode_bool(b));
    }
    pub fn append_uuid(&mut self, uuid: &Uuid) {
        self.items.push(serde::encode_uuid(uuid));
    }
    pub fn append_inet(&mut self, addr: &IpAddr) {
        self.items.push(serde::encode_inet(addr));
    }
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.items.push(serde::encode_bytes(bytes));
    }
    pub fn append_decimal(&mut self, varint: &[u8], scale: i32) {
        self.items.push(serde::encode_decimal(varint, scale));
    }
    pub fn append_str(&mut self, s: &str) {
        self.items.push(serde::encode_str(s));
    }
    pub fn append_cstr(&mut self, s: &CStr) {
        self.items.push(serde::encode_cstr(s));
    }
}

/* Nested appends. These are checked against the declared type. */
impl Collection {
    pub fn append_collection(&mut self, value: &Collection) -> Result<()> {
        self.check_nested_type(&value.value_data_type())?;
        let item = value.serialize_inner()?;
        self.items.push(item);
        Ok(())
    }

    pub fn append_user_type(&mut self, value: &UserTypeValue) -> Result<()> {
        self.check_nested_type(value.data_type())?;
        let item = value.encode()?;
        self.items.push(item);
        Ok(())
    }
}
