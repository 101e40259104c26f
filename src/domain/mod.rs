// bmark/src/domain/mod.rs
pub mod bookmark;
pub mod category;
pub mod error;
pub mod repositories;
pub mod services;
