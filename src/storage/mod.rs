pub mod engine;
pub mod memory;

pub use engine::StorageEngine;
pub use memory::InMemoryStore;
