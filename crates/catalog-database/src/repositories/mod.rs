//! Product repository implementations.

pub mod memory;
pub mod product;

pub use memory::MemoryProductRepository;
pub use product::PostgresProductRepository;
