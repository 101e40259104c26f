// bmark/src/infrastructure/storage/mod.rs
pub mod file_storage;
pub mod memory_storage;
