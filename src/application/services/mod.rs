// bmark/src/application/services/mod.rs
pub mod bookmark_service;
pub mod bookmark_service_impl;
pub mod theme_service;
pub mod theme_service_impl;

pub use bookmark_service::BookmarkService;
pub use bookmark_service_impl::BookmarkServiceImpl;
pub use theme_service::{Theme, ThemeService};
pub use theme_service_impl::ThemeServiceImpl;
