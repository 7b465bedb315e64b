//! Project configuration stores.

mod file;
mod memory;

pub use file::{PROJECT_FILE, TomlConfigStore};
pub use memory::MemoryConfigStore;
