use crate::{Collection, Error, Result};
use rowpack_types::types::{CollectionKind, DataType};

pub(crate) fn check_compatible(expected: &DataType, found: &DataType) -> Result<()> {
    if expected.is_compatible_with(found) {
        return Ok(());
    }
    tracing::debug!("Rejected nested value: expected {}, found {}", expected, found);
    Err(Error::invalid_value_type(expected, found))
}

impl Collection {
    /// Checks the type of the nested value that would become the next item.
    ///
    /// The slot is implied by the current item count: a map alternates key and value,
    /// and a tuple takes its fields in order.
    pub(crate) fn check_nested_type(&self, found: &DataType) -> Result<()> {
        let data_type = match &self.data_type {
            Some(data_type) if data_type.is_parameterized() => data_type,
            _ => return Ok(()),
        };

        let slot = match self.kind {
            CollectionKind::List | CollectionKind::Set => 0,
            CollectionKind::Map => self.items.len() % 2,
            CollectionKind::Tuple => self.items.len(),
        };

        match data_type.sub_types().get(slot) {
            Some(expected) => check_compatible(expected, found),
            None => {
                tracing::debug!(
                    "Rejected nested value {}: all {} fields of {} are filled",
                    found,
                    slot,
                    data_type
                );
                Err(Error::invalid_value_type(
                    format!("no field at index {} of {}", slot, data_type),
                    found,
                ))
            }
        }
    }
}
