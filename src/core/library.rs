use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    // The catalog already holds the configured maximum number of books.
    CapacityExceeded {
        message: String,
        capacity: usize,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    InvalidMenuSelection {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn capacity_exceeded(message: &str, capacity: usize) -> LibraryError {
        LibraryError::CapacityExceeded { message: message.to_string(), capacity }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn invalid_menu_selection(message: &str) -> LibraryError {
        LibraryError::InvalidMenuSelection { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // every error except a broken console can be recovered by prompting again
    pub fn recoverable(&self) -> bool {
        match self {
            LibraryError::CapacityExceeded { .. } => { true }
            LibraryError::DuplicateKey { .. } => { true }
            LibraryError::NotFound { .. } => { true }
            LibraryError::Validation { .. } => { true }
            LibraryError::InvalidMenuSelection { .. } => { true }
            LibraryError::Serialization { .. } => { true }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::CapacityExceeded { message, capacity } => {
                write!(f, "{} (capacity {})", message, capacity)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::InvalidMenuSelection { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_capacity_exceeded_error() {
        assert!(matches!(LibraryError::capacity_exceeded("test", 10), LibraryError::CapacityExceeded{ message: _, capacity: 10 }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_menu_selection_error() {
        assert!(matches!(LibraryError::invalid_menu_selection("test"), LibraryError::InvalidMenuSelection{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_io_error() {
        let err = LibraryError::from(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed"));
        assert!(matches!(err, LibraryError::Runtime{ message: _, reason_code: Some(_) }));
    }

    #[tokio::test]
    async fn test_should_classify_recoverable_errors() {
        assert!(LibraryError::capacity_exceeded("test", 1).recoverable());
        assert!(LibraryError::duplicate_key("test").recoverable());
        assert!(LibraryError::not_found("test").recoverable());
        assert!(LibraryError::validation("test", None).recoverable());
        assert!(LibraryError::invalid_menu_selection("test").recoverable());
        assert!(LibraryError::serialization("test").recoverable());
        assert!(!LibraryError::runtime("test", None).recoverable());
    }

    #[tokio::test]
    async fn test_should_display_message() {
        assert_eq!("book not found for B1", LibraryError::not_found("book not found for B1").to_string());
        assert_eq!("catalog is full (capacity 10)", LibraryError::capacity_exceeded("catalog is full", 10).to_string());
    }
}
