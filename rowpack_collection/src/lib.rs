mod collection;
pub mod deser;
mod error;
mod layout;
mod user_type;
mod validate;

pub use collection::*;
pub use error::*;
pub use layout::LenWidth;
pub use user_type::*;
