// bmark/src/application/services/bookmark_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;
use crate::domain::category::{Category, CategoryGroup};
use std::fmt::Debug;

/// Service interface for the bookmark store.
///
/// The store owns the authoritative in-memory bookmark and category
/// collections and writes them back to storage after every mutation.
pub trait BookmarkService: Debug {
    /// Load both collections from storage and seed defaults if the bookmark
    /// collection is empty. Returns the number of seeded bookmarks.
    fn initialize(&mut self) -> ApplicationResult<usize>;

    /// Add a new bookmark; the category is accepted as given.
    fn add_bookmark(&mut self, name: &str, url: &str, category: &str)
        -> ApplicationResult<Bookmark>;

    /// Append a new category to the ordered category set.
    fn add_category(&mut self, name: &str) -> ApplicationResult<Category>;

    /// Delete a bookmark by id. Returns false if no such id existed.
    fn delete_bookmark(&mut self, id: &str) -> ApplicationResult<bool>;

    /// Delete a category and every bookmark belonging to it. Returns the
    /// number of bookmarks that were removed; an absent category removes
    /// nothing.
    fn delete_category(&mut self, name: &str) -> ApplicationResult<usize>;

    /// Get a bookmark by id
    fn get_bookmark(&self, id: &str) -> Option<Bookmark>;

    /// All bookmarks in insertion order
    fn bookmarks(&self) -> &[Bookmark];

    /// All categories in insertion order, including empty ones
    fn categories(&self) -> &[Category];

    /// Bookmarks grouped by category, in category-set order, omitting
    /// categories that currently hold no bookmarks.
    fn grouped_view(&self) -> Vec<CategoryGroup>;
}
