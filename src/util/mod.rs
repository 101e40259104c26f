// bmark/src/util/mod.rs
pub mod helper;
