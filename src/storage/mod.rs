//! Storage implementations for different backends

#[cfg(feature = "in-memory")]
pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;

#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryOrderService;
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbOrderService;
