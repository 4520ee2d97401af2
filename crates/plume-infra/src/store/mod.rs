//! Post store implementations - JSON file and in-memory fallback.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryPostStore;
