//! # Item encodings
//!
//! Every value that can be stored in a composite is first encoded on its own,
//! into a self-contained [`Buffer`] called an *item*. Items carry no type tag
//! and no length; the enclosing composite writes each item's length prefix.
//!
//! All integers are big-endian.
//!
//! ```text
//! int:        [u8; 4]
//! bigint:     [u8; 8]
//! float:      [u8; 4]         // IEEE-754 bits
//! double:     [u8; 8]         // IEEE-754 bits
//! boolean:    u8              // 0 or 1
//! uuid:       [u8; 16]
//! inet:       [u8; 4] or [u8; 16]
//! blob:       [u8; item_len]
//! text:       [u8; item_len]  // UTF-8, no terminator
//! decimal: {
//!     scale:      i32,
//!     unscaled:   [u8; item_len - 4],     // two's-complement varint
//! }
//! ```

mod buffer;
mod primitives;

pub use buffer::*;
pub use primitives::*;
