//! Property storage: repository trait and the in-memory demo backend.

pub mod memory;
pub mod traits;

pub use memory::InMemoryStore;
pub use traits::PropertyRepository;
