// bmark/src/application/services/bookmark_service_impl.rs
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::ApplicationResult;
use crate::application::services::bookmark_service::BookmarkService;
use crate::domain::bookmark::{self, Bookmark};
use crate::domain::category::{Category, CategoryGroup};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::storage::{KeyValueStorage, BOOKMARKS_KEY, CATEGORIES_KEY};

/// Default data written on first run, when the bookmarks slot is empty.
const DEFAULT_BOOKMARKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "开发"),
    ("Stack Overflow", "https://stackoverflow.com", "开发"),
    ("MDN Web Docs", "https://developer.mozilla.org", "开发"),
    ("BBC News", "https://www.bbc.com/news", "新闻"),
    ("Reuters", "https://www.reuters.com", "新闻"),
    ("YouTube", "https://www.youtube.com", "视频"),
    ("Vimeo", "https://vimeo.com", "视频"),
    ("DeepSeek", "https://www.deepseek.com", "AI工具"),
    ("Hugging Face", "https://huggingface.co", "AI工具"),
    ("Google AI", "https://ai.google", "AI工具"),
    ("CSS-Tricks", "https://css-tricks.com", "设计"),
    ("Dribbble", "https://dribbble.com", "设计"),
];

const DEFAULT_CATEGORIES: &[&str] = &["开发", "新闻", "视频", "AI工具", "设计", "其他"];

#[derive(Debug)]
pub struct BookmarkServiceImpl {
    storage: Arc<dyn KeyValueStorage>,
    bookmarks: Vec<Bookmark>,
    categories: Vec<Category>,
}

impl BookmarkServiceImpl {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            bookmarks: Vec::new(),
            categories: Vec::new(),
        }
    }

    fn load_bookmarks(&self) -> DomainResult<Vec<Bookmark>> {
        match self.storage.load(BOOKMARKS_KEY)? {
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                DomainError::Serialization(format!("Stored bookmarks are not valid JSON: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn load_categories(&self) -> DomainResult<Vec<Category>> {
        match self.storage.load(CATEGORIES_KEY)? {
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                DomainError::Serialization(format!("Stored categories are not valid JSON: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn persist_bookmarks(&self) -> DomainResult<()> {
        let text = serde_json::to_string(&self.bookmarks)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        self.storage.save(BOOKMARKS_KEY, &text)
    }

    fn persist_categories(&self) -> DomainResult<()> {
        let text = serde_json::to_string(&self.categories)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        self.storage.save(CATEGORIES_KEY, &text)
    }

    /// Seed the default bookmarks and categories, skipping any bookmark
    /// whose url is already present and any category that already exists.
    fn seed_defaults(&mut self) -> DomainResult<usize> {
        let mut seeded = 0;
        for (name, url, category) in DEFAULT_BOOKMARKS {
            if self.bookmarks.iter().any(|b| b.url == *url) {
                continue;
            }
            self.bookmarks.push(Bookmark {
                id: bookmark::generate_id(),
                name: (*name).to_string(),
                url: (*url).to_string(),
                category: (*category).to_string(),
            });
            seeded += 1;
        }

        for name in DEFAULT_CATEGORIES {
            let category = Category::new(*name)?;
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }

        self.persist_bookmarks()?;
        self.persist_categories()?;
        Ok(seeded)
    }
}

impl BookmarkService for BookmarkServiceImpl {
    #[instrument(skip(self), level = "debug")]
    fn initialize(&mut self) -> ApplicationResult<usize> {
        self.bookmarks = self.load_bookmarks()?;
        self.categories = self.load_categories()?;
        debug!(
            "Loaded {} bookmarks, {} categories",
            self.bookmarks.len(),
            self.categories.len()
        );

        // Seeding is gated only on the bookmark collection being empty at
        // load time, not on a separate seeded flag.
        if self.bookmarks.is_empty() {
            let seeded = self.seed_defaults()?;
            debug!("Seeded {} default bookmarks", seeded);
            return Ok(seeded);
        }

        Ok(0)
    }

    #[instrument(skip(self), level = "debug", fields(name = %name, url = %url))]
    fn add_bookmark(
        &mut self,
        name: &str,
        url: &str,
        category: &str,
    ) -> ApplicationResult<Bookmark> {
        // Validation and normalization happen in the entity constructor;
        // the category is not checked against the category set.
        let bookmark = Bookmark::new(name, url, category)?;

        self.bookmarks.push(bookmark.clone());
        self.persist_bookmarks()?;

        Ok(bookmark)
    }

    #[instrument(skip(self), level = "debug", fields(name = %name))]
    fn add_category(&mut self, name: &str) -> ApplicationResult<Category> {
        let category = Category::new(name)?;

        if self.categories.contains(&category) {
            return Err(DomainError::DuplicateCategory(category.value().to_string()).into());
        }

        self.categories.push(category.clone());
        self.persist_categories()?;

        Ok(category)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_bookmark(&mut self, id: &str) -> ApplicationResult<bool> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        let removed = self.bookmarks.len() < before;

        self.persist_bookmarks()?;
        Ok(removed)
    }

    #[instrument(skip(self), level = "debug", fields(name = %name))]
    fn delete_category(&mut self, name: &str) -> ApplicationResult<usize> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.category != name);
        let removed = before - self.bookmarks.len();

        self.categories.retain(|c| c.value() != name);

        self.persist_bookmarks()?;
        self.persist_categories()?;

        debug!("Removed category '{}' and {} bookmarks", name, removed);
        Ok(removed)
    }

    fn get_bookmark(&self, id: &str) -> Option<Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id).cloned()
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn grouped_view(&self) -> Vec<CategoryGroup> {
        self.categories
            .iter()
            .filter_map(|category| {
                let bookmarks: Vec<Bookmark> = self
                    .bookmarks
                    .iter()
                    .filter(|b| b.category == category.value())
                    .cloned()
                    .collect();

                if bookmarks.is_empty() {
                    None
                } else {
                    Some(CategoryGroup {
                        category: category.clone(),
                        bookmarks,
                    })
                }
            })
            .collect()
    }
}
