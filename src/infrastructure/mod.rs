// bmark/src/infrastructure/mod.rs
pub mod di;
pub mod interaction;
pub mod storage;
