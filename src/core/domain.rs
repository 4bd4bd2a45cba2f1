use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_MAX_BOOKS: usize = 10;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_books: usize,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_books: DEFAULT_MAX_BOOKS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn with_max_books(mut self, max_books: usize) -> Self {
        self.max_books = max_books;
        self
    }

    // Reads CATALOG_BRANCH, CATALOG_MAX_BOOKS and CATALOG_LOG_LEVEL, falling back to defaults
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("CATALOG_BRANCH").unwrap_or_else(|| "main".to_string()).as_str());
        if let Some(max_books) = lookup("CATALOG_MAX_BOOKS") {
            config.max_books = parse_max_books(max_books.as_str())?;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            tracing::Level::from_str(level.as_str()).map_err(|_| LibraryError::validation(
                format!("invalid log level {}", level).as_str(), Some("CATALOG_LOG_LEVEL".to_string())))?;
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::WARN)
    }
}

fn parse_max_books(value: &str) -> LibraryResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(LibraryError::validation(
            format!("max books must be a positive integer but was {}", value).as_str(),
            Some("CATALOG_MAX_BOOKS".to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, DEFAULT_MAX_BOOKS};
    use crate::core::library::LibraryError;

    fn lookup_from(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(DEFAULT_MAX_BOOKS, config.max_books);
        assert_eq!(10, config.max_books);
        assert_eq!(tracing::Level::WARN, config.tracing_level());
    }

    #[tokio::test]
    async fn test_should_override_max_books() {
        let config = Configuration::new("test").with_max_books(3);
        assert_eq!(3, config.max_books);
    }

    #[tokio::test]
    async fn test_should_read_config_from_lookup() {
        let config = Configuration::from_lookup(lookup_from(HashMap::from([
            ("CATALOG_BRANCH", "north"),
            ("CATALOG_MAX_BOOKS", "25"),
            ("CATALOG_LOG_LEVEL", "debug"),
        ]))).expect("should build config");
        assert_eq!("north", config.branch_id.as_str());
        assert_eq!(25, config.max_books);
        assert_eq!(tracing::Level::DEBUG, config.tracing_level());
    }

    #[tokio::test]
    async fn test_should_default_missing_vars() {
        let config = Configuration::from_lookup(lookup_from(HashMap::new())).expect("should build config");
        assert_eq!(Configuration::new("main"), config);
    }

    #[tokio::test]
    async fn test_should_reject_bad_max_books() {
        for bad in ["0", "-1", "ten", ""] {
            let res = Configuration::from_lookup(lookup_from(HashMap::from([("CATALOG_MAX_BOOKS", bad)])));
            assert!(matches!(res, Err(LibraryError::Validation{ .. })), "{} should be rejected", bad);
        }
    }

    #[tokio::test]
    async fn test_should_reject_bad_log_level() {
        let res = Configuration::from_lookup(lookup_from(HashMap::from([("CATALOG_LOG_LEVEL", "loud")])));
        assert!(matches!(res, Err(LibraryError::Validation{ .. })));
    }
}
