// bmark/src/domain/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::bookmark::Bookmark;
use crate::domain::error::{DomainError, DomainResult};

/// Represents a single category name as a value object.
///
/// Names are trimmed but otherwise kept verbatim: uniqueness in the category
/// set is case-sensitive exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    value: String,
}

impl Category {
    /// Creates a new Category with validation
    pub fn new<S: AsRef<str>>(value: S) -> DomainResult<Self> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(DomainError::InvalidCategory(
                "Category name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Get the category name
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One entry of the grouped view: a category together with its bookmarks,
/// in category-set order. Categories without bookmarks never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub bookmarks: Vec<Bookmark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_valid_name_when_create_category_then_returns_category() {
        let category = Category::new("开发").unwrap();
        assert_eq!(category.value(), "开发");

        // Should trim whitespace
        let category = Category::new(" 设计 ").unwrap();
        assert_eq!(category.value(), "设计");
    }

    #[test]
    fn given_empty_name_when_create_category_then_returns_error() {
        assert!(Category::new("").is_err());
        assert!(Category::new("   ").is_err());
    }

    #[test]
    fn given_differently_cased_names_when_compared_then_distinct() {
        let lower = Category::new("news").unwrap();
        let upper = Category::new("News").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn given_category_when_serialized_then_plain_string() {
        let category = Category::new("AI工具").unwrap();
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"AI工具\"");

        let restored: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, category);
    }
}
