use crate::validate::check_compatible;
use crate::{Collection, Error, LenWidth, Result};
use byteorder::{BigEndian, WriteBytesExt};
use rowpack_types::serde::Buffer;
use rowpack_types::types::{DataTypeShared, UserTypeDef};
use std::io::Write;
use std::mem;
use std::sync::Arc;


pub type UserTypeValueShared = Arc<UserTypeValue>;

/// A value of a user defined type: a fixed list of named fields, each optionally set.
///
/// ```text
/// struct UserTypeValue {
///     field_0: {
///         field_len:      i32,                // -1 if the field is unset
///         field_body:     [u8; field_len],
///     },
///     field_1: ...
///     // One entry per declared field, in declaration order. No count.
/// }
/// ```
#[derive(Clone, Debug)]
pub struct UserTypeValue {
    data_type: DataTypeShared,
    fields: Vec<Option<Buffer>>,
}

impl UserTypeValue {
    pub fn new_from_data_type(data_type: DataTypeShared) -> Result<Self> {
        let field_count = match data_type.user_type_def() {
            Some(def) => def.fields.len(),
            None => return Err(Error::invalid_data_type(&data_type, "a user type")),
        };
        Ok(Self {
            data_type,
            fields: vec![None; field_count],
        })
    }

    pub fn data_type(&self) -> &DataTypeShared {
        &self.data_type
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&Buffer> {
        self.fields.get(index).and_then(|field| field.as_ref())
    }

    fn def(&self) -> Option<&UserTypeDef> {
        self.data_type.user_type_def()
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.def()
            .and_then(|def| def.field_index(name))
            .ok_or_else(|| Error::NameDoesNotExist {
                type_name: self.data_type.to_string(),
                name: name.to_string(),
            })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.fields.len() {
            return Ok(());
        }
        Err(Error::IndexOutOfBounds {
            index,
            count: self.fields.len(),
        })
    }
}

/* Setters. Pre-encoded items are stored as-is; nested values are checked against the field's type. */
impl UserTypeValue {
    pub fn set_by_index(&mut self, index: usize, item: Buffer) -> Result<()> {
        self.check_index(index)?;
        self.fields[index] = Some(item);
        Ok(())
    }
    pub fn set_by_name(&mut self, name: &str, item: Buffer) -> Result<()> {
        let index = self.index_of(name)?;
        self.set_by_index(index, item)
    }

    pub fn set_collection_by_index(&mut self, index: usize, value: &Collection) -> Result<()> {
        self.check_index(index)?;
        if let Some(def) = self.def() {
            check_compatible(&def.fields[index].data_type, &value.value_data_type())?;
        }
        let item = value.serialize_inner()?;
        self.set_by_index(index, item)
    }
    pub fn set_collection_by_name(&mut self, name: &str, value: &Collection) -> Result<()> {
        let index = self.index_of(name)?;
        self.set_collection_by_index(index, value)
    }

    pub fn set_user_type_by_index(&mut self, index: usize, value: &UserTypeValue) -> Result<()> {
        self.check_index(index)?;
        if let Some(def) = self.def() {
            check_compatible(&def.fields[index].data_type, value.data_type())?;
        }
        let item = value.encode()?;
        self.set_by_index(index, item)
    }
    pub fn set_user_type_by_name(&mut self, name: &str, value: &UserTypeValue) -> Result<()> {
        let index = self.index_of(name)?;
        self.set_user_type_by_index(index, value)
    }
}

/* Serialization. */
impl UserTypeValue {
    pub fn encoded_len(&self) -> usize {
        self.fields
            .iter()
            .map(|field| mem::size_of::<i32>() + field.as_ref().map_or(0, |item| item.len()))
            .sum()
    }

    pub fn encode(&self) -> Result<Buffer> {
        let mut buf = Buffer::with_capacity(self.encoded_len());
        for field in self.fields.iter() {
            match field {
                Some(item) => {
                    LenWidth::Int.check("field length", item.len())?;
                    LenWidth::Int.write(&mut buf, item.len())?;
                    buf.write_all(item)?;
                }
                None => buf.write_i32::<BigEndian>(-1)?,
            }
        }
        Ok(buf)
    }
}
