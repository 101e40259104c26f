// bmark/src/domain/repositories/mod.rs
pub mod storage;
