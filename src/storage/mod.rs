//! Key-value persistence for user preferences.
//!
//! The browser keeps favorites and the theme in local storage; here that role
//! is played by any [`KeyValueStore`]. Values are plain strings, and callers
//! own their encoding.

mod error;
mod in_memory;
mod json_file;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use store::KeyValueStore;
