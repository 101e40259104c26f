// bmark/src/domain/repositories/storage.rs
use crate::domain::error::DomainResult;

/// Slot key for the serialized bookmark collection.
pub const BOOKMARKS_KEY: &str = "bookmarks";
/// Slot key for the serialized category sequence.
pub const CATEGORIES_KEY: &str = "categories";
/// Slot key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Port for the persistence adapter: independent string-keyed text slots.
///
/// An absent key on load is an empty collection, never an error. Writes are
/// synchronous and immediate; the store saves after every mutation.
pub trait KeyValueStorage: std::fmt::Debug + Send + Sync {
    /// Read the text stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `text` under `key`, replacing any previous value.
    fn save(&self, key: &str, text: &str) -> DomainResult<()>;
}
