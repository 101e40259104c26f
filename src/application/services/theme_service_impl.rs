// bmark/src/application/services/theme_service_impl.rs
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::ApplicationResult;
use crate::application::services::theme_service::{Theme, ThemeService};
use crate::domain::repositories::storage::{KeyValueStorage, THEME_KEY};

/// Stores the theme as the raw word `light`/`dark` under the theme slot.
/// An absent or unreadable value falls back to light.
#[derive(Debug)]
pub struct ThemeServiceImpl {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemeServiceImpl {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl ThemeService for ThemeServiceImpl {
    fn current(&self) -> ApplicationResult<Theme> {
        let theme = self
            .storage
            .load(THEME_KEY)?
            .and_then(|text| text.parse().ok())
            .unwrap_or(Theme::Light);
        Ok(theme)
    }

    #[instrument(skip(self), level = "debug")]
    fn set(&self, theme: Theme) -> ApplicationResult<()> {
        self.storage.save(THEME_KEY, &theme.to_string())?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    fn toggle(&self) -> ApplicationResult<Theme> {
        let theme = self.current()?.toggled();
        self.set(theme)?;
        debug!("Theme set to {}", theme);
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::memory_storage::InMemoryStorage;

    fn setup_service() -> ThemeServiceImpl {
        ThemeServiceImpl::new(Arc::new(InMemoryStorage::new()))
    }

    #[test]
    fn given_empty_storage_when_current_then_defaults_to_light() {
        let service = setup_service();
        assert_eq!(service.current().unwrap(), Theme::Light);
    }

    #[test]
    fn given_toggle_when_called_twice_then_back_to_light() {
        let service = setup_service();

        assert_eq!(service.toggle().unwrap(), Theme::Dark);
        assert_eq!(service.current().unwrap(), Theme::Dark);

        assert_eq!(service.toggle().unwrap(), Theme::Light);
        assert_eq!(service.current().unwrap(), Theme::Light);
    }

    #[test]
    fn given_set_dark_when_reloaded_then_dark_persisted() {
        let storage = Arc::new(InMemoryStorage::new());
        ThemeServiceImpl::new(storage.clone()).set(Theme::Dark).unwrap();

        let service = ThemeServiceImpl::new(storage);
        assert_eq!(service.current().unwrap(), Theme::Dark);
    }
}
