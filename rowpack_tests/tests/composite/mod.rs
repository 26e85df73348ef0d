pub mod helpers;
pub mod shared_handles;
pub mod worked_examples;
