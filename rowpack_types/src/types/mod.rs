mod data_type;
mod protocol_version;
mod value_type;

pub use data_type::*;
pub use protocol_version::*;
pub use value_type::*;
