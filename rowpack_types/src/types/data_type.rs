use crate::types::{CollectionKind, ValueType};
use itertools::Itertools;
use std::fmt;
use std::sync::Arc;


pub type DataTypeShared = Arc<DataType>;

/// [`DataType`] describes a column or element type.
///
/// #### Parameterization
///
/// A composite type may omit its parameters: a `Collection` with empty `sub_types`,
/// or a `UserType` with empty `fields`. Such a type is *unparameterized*; it only
/// constrains the value type, and is compatible with any parameterization of it.
///
/// Sub types by kind:
/// - `list<e>`, `set<e>`: `[e]`
/// - `map<k, v>`: `[k, v]`
/// - `tuple<f0, f1, ...>`: `[f0, f1, ...]`
#[derive(PartialEq, Eq, Debug)]
pub enum DataType {
    Primitive(ValueType),
    Collection {
        kind: CollectionKind,
        sub_types: Vec<DataTypeShared>,
    },
    UserType(UserTypeDef),
}

#[derive(PartialEq, Eq, Default, Debug)]
pub struct UserTypeDef {
    pub keyspace: String,
    pub type_name: String,
    pub fields: Vec<UserTypeField>,
}

#[derive(PartialEq, Eq, Debug)]
pub struct UserTypeField {
    pub name: String,
    pub data_type: DataTypeShared,
}

/* Construction. */
impl DataType {
    /// The unparameterized type for a bare value type code.
    pub fn new(val_type: ValueType) -> Self {
        if val_type.is_user_type() {
            return Self::UserType(UserTypeDef::default());
        }
        match CollectionKind::try_from(val_type) {
            Ok(kind) => Self::Collection {
                kind,
                sub_types: vec![],
            },
            Err(_) => Self::Primitive(val_type),
        }
    }

    pub fn list(elem: DataTypeShared) -> Self {
        Self::Collection {
            kind: CollectionKind::List,
            sub_types: vec![elem],
        }
    }
    pub fn set(elem: DataTypeShared) -> Self {
        Self::Collection {
            kind: CollectionKind::Set,
            sub_types: vec![elem],
        }
    }
    pub fn map(key: DataTypeShared, val: DataTypeShared) -> Self {
        Self::Collection {
            kind: CollectionKind::Map,
            sub_types: vec![key, val],
        }
    }
    pub fn tuple(fields: Vec<DataTypeShared>) -> Self {
        Self::Collection {
            kind: CollectionKind::Tuple,
            sub_types: fields,
        }
    }
    pub fn user_type(
        keyspace: impl Into<String>,
        type_name: impl Into<String>,
        fields: Vec<(String, DataTypeShared)>,
    ) -> Self {
        let fields = fields
            .into_iter()
            .map(|(name, data_type)| UserTypeField { name, data_type })
            .collect();
        Self::UserType(UserTypeDef {
            keyspace: keyspace.into(),
            type_name: type_name.into(),
            fields,
        })
    }
}

/* Accessors. */
impl DataType {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Primitive(val_type) => *val_type,
            Self::Collection { kind, .. } => ValueType::from(*kind),
            Self::UserType(_) => ValueType::Udt,
        }
    }

    pub fn collection_kind(&self) -> Option<CollectionKind> {
        match self {
            Self::Collection { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.value_type().is_collection()
    }
    pub fn is_tuple(&self) -> bool {
        self.value_type().is_tuple()
    }
    pub fn is_user_type(&self) -> bool {
        self.value_type().is_user_type()
    }

    pub fn sub_types(&self) -> &[DataTypeShared] {
        match self {
            Self::Collection { sub_types, .. } => sub_types,
            _ => &[],
        }
    }

    pub fn user_type_def(&self) -> Option<&UserTypeDef> {
        match self {
            Self::UserType(def) => Some(def),
            _ => None,
        }
    }

    pub fn is_parameterized(&self) -> bool {
        match self {
            Self::Primitive(_) => true,
            Self::Collection { sub_types, .. } => !sub_types.is_empty(),
            Self::UserType(def) => !def.fields.is_empty(),
        }
    }
}

/* Compatibility. */
impl DataType {
    /// Whether a value of type `other` may be stored where `self` is declared.
    pub fn is_compatible_with(&self, other: &DataType) -> bool {
        if !self.value_type().is_alias_of(other.value_type()) {
            return false;
        }
        if !self.is_parameterized() || !other.is_parameterized() {
            return true;
        }
        match (self, other) {
            (Self::Collection { sub_types: slf, .. }, Self::Collection { sub_types: oth, .. }) => {
                slf.len() == oth.len()
                    && slf
                        .iter()
                        .zip(oth.iter())
                        .all(|(s, o)| s.is_compatible_with(o))
            }
            (Self::UserType(slf), Self::UserType(oth)) => {
                slf.keyspace == oth.keyspace
                    && slf.type_name == oth.type_name
                    && slf.fields.len() == oth.fields.len()
                    && slf.fields.iter().zip(oth.fields.iter()).all(|(s, o)| {
                        s.name == o.name && s.data_type.is_compatible_with(&o.data_type)
                    })
            }
            _ => true,
        }
    }
}

impl UserTypeDef {
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(val_type) => write!(f, "{val_type}"),
            Self::Collection { kind, sub_types } if sub_types.is_empty() => write!(f, "{kind}"),
            Self::Collection { kind, sub_types } => {
                write!(f, "{}<{}>", kind, sub_types.iter().join(", "))
            }
            Self::UserType(def) if def.type_name.is_empty() => write!(f, "{}", ValueType::Udt),
            Self::UserType(def) if def.keyspace.is_empty() => write!(f, "{}", def.type_name),
            Self::UserType(def) => write!(f, "{}.{}", def.keyspace, def.type_name),
        }
    }
}
