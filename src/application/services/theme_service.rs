// bmark/src/application/services/theme_service.rs
use std::fmt;
use std::str::FromStr;

use crate::application::error::ApplicationResult;

/// Two-valued display theme, persisted independently of the bookmark data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Service interface for the persisted theme preference.
pub trait ThemeService: std::fmt::Debug {
    /// The stored theme, defaulting to light when nothing is stored.
    fn current(&self) -> ApplicationResult<Theme>;

    /// Persist the given theme.
    fn set(&self, theme: Theme) -> ApplicationResult<()>;

    /// Flip between light and dark, persist, and return the new theme.
    fn toggle(&self) -> ApplicationResult<Theme>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_theme_when_toggled_then_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn given_theme_string_when_parsed_then_round_trips() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert!("solarized".parse::<Theme>().is_err());
    }
}
