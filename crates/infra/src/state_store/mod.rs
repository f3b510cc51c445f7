//! Registry persistence (whole-registry snapshots).

mod r#trait;
pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStateStore;
pub use json_file::JsonFileStateStore;
pub use r#trait::{StateStore, StoreError};
