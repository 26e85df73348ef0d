use rowpack_types::types::DataType;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid data type {data_type}: expected {expected}")]
    InvalidDataType {
        data_type: String,
        expected: &'static str,
    },

    #[error("invalid value type: expected {expected}, found {found}")]
    InvalidValueType { expected: String, found: String },

    #[error("{what} {value} does not fit a {width}-byte length prefix (max {max})")]
    LengthOverflow {
        what: &'static str,
        value: usize,
        width: usize,
        max: usize,
    },

    #[error("field index {index} is out of bounds for {count} fields")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("user type {type_name} has no field named '{name}'")]
    NameDoesNotExist { type_name: String, name: String },

    #[error("failed to write encoded value: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    #[cold]
    pub fn invalid_data_type(data_type: &DataType, expected: &'static str) -> Error {
        Error::InvalidDataType {
            data_type: data_type.to_string(),
            expected,
        }
    }

    #[cold]
    pub fn invalid_value_type(expected: impl ToString, found: &DataType) -> Error {
        Error::InvalidValueType {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
