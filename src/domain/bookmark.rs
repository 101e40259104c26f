// bmark/src/domain/bookmark.rs
use crate::domain::error::{DomainError, DomainResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;
use uuid::Uuid;

/// Represents a bookmark domain entity.
///
/// The category is stored as given: it is not checked against the category
/// set, so a bookmark may reference a category that does not exist (it will
/// simply not show up in any grouped view until the category is created).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category: String,
}

impl Bookmark {
    /// Create a bookmark with a freshly generated id.
    ///
    /// Name and url are trimmed; both must be non-empty. The url is
    /// normalized to carry a scheme and must parse as an absolute URL.
    pub fn new<S: AsRef<str>>(name: S, url: S, category: S) -> DomainResult<Self> {
        let name = name.as_ref().trim();
        let url = url.as_ref().trim();

        if name.is_empty() || url.is_empty() {
            return Err(DomainError::Validation(
                "Bookmark name and URL are required".to_string(),
            ));
        }

        let url = normalize_url(url);
        validate_url(&url)?;

        Ok(Self {
            id: generate_id(),
            name: name.to_string(),
            url,
            category: category.as_ref().to_string(),
        })
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.id, self.name, self.url)
    }
}

/// Prepend `https://` unless the url already starts with `http://` or
/// `https://`. Other schemes are left for the parser to judge.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Parse as absolute URL; any parse failure is a validation error.
pub fn validate_url(url: &str) -> DomainResult<()> {
    Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(())
}

/// Generate an id unique with overwhelming probability, also across
/// restarts: millisecond timestamp plus a random suffix.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(12);
    format!("{:x}{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn given_valid_input_when_create_bookmark_then_returns_bookmark() {
        let bookmark = Bookmark::new("GitHub", "https://github.com", "开发").unwrap();

        assert_eq!(bookmark.name, "GitHub");
        assert_eq!(bookmark.url, "https://github.com");
        assert_eq!(bookmark.category, "开发");
        assert!(!bookmark.id.is_empty());
    }

    #[test]
    fn given_whitespace_input_when_create_bookmark_then_trims_name_and_url() {
        let bookmark = Bookmark::new("  GitHub  ", "  https://github.com  ", "开发").unwrap();

        assert_eq!(bookmark.name, "GitHub");
        assert_eq!(bookmark.url, "https://github.com");
    }

    #[test]
    fn given_empty_name_or_url_when_create_bookmark_then_returns_validation_error() {
        assert!(matches!(
            Bookmark::new("", "https://github.com", ""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Bookmark::new("GitHub", "   ", ""),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn given_schemeless_url_when_create_bookmark_then_normalizes_to_https() {
        let bookmark = Bookmark::new("Example", "example.com", "").unwrap();
        assert_eq!(bookmark.url, "https://example.com");

        // http stays http
        let bookmark = Bookmark::new("Example", "http://example.com", "").unwrap();
        assert_eq!(bookmark.url, "http://example.com");
    }

    #[test]
    fn given_unparseable_url_when_create_bookmark_then_returns_invalid_url() {
        assert!(matches!(
            Bookmark::new("Bad", "not a url", ""),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn given_unknown_category_when_create_bookmark_then_accepted_as_given() {
        // No foreign-key check against the category set, by observed contract.
        let bookmark = Bookmark::new("Loose", "https://example.com", "no-such-category").unwrap();
        assert_eq!(bookmark.category, "no-such-category");
    }

    #[test]
    fn given_many_generated_ids_when_compared_then_all_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn given_bookmark_when_serde_round_trip_then_fields_identical() {
        let bookmark = Bookmark::new("MDN Web Docs", "https://developer.mozilla.org", "开发")
            .unwrap();

        let json = serde_json::to_string(&bookmark).unwrap();
        let restored: Bookmark = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, bookmark);
    }
}
