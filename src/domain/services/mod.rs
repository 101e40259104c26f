// bmark/src/domain/services/mod.rs
pub mod interaction;
