// bmark/src/infrastructure/di/service_container.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::theme_service::ThemeService;
use crate::application::{BookmarkServiceImpl, ThemeServiceImpl};
use crate::config::Settings;
use crate::domain::repositories::storage::KeyValueStorage;
use crate::domain::services::interaction::InteractionService;
use crate::infrastructure::interaction::TerminalInteraction;
use crate::infrastructure::storage::file_storage::FileStorage;

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub storage: Arc<dyn KeyValueStorage>,
    pub bookmark_service: Box<dyn BookmarkService>,
    pub theme_service: Box<dyn ThemeService>,
    pub interaction: Arc<dyn InteractionService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection and load the
    /// persisted state (seeding defaults on first run).
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(&settings.store_dir)?);

        let mut bookmark_service = BookmarkServiceImpl::new(storage.clone());
        bookmark_service.initialize()?;

        let theme_service = ThemeServiceImpl::new(storage.clone());

        Ok(Self {
            storage,
            bookmark_service: Box::new(bookmark_service),
            theme_service: Box::new(theme_service),
            interaction: Arc::new(TerminalInteraction::new()),
        })
    }
}
