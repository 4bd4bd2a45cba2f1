use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

pub const CATALOG_FULL_MESSAGE: &str = "Library is full. Cannot add more books.";
pub const DUPLICATE_ID_MESSAGE: &str = "Duplicate ID! Please enter a unique ID.";
pub const NOT_FOUND_MESSAGE: &str = "Book not found!";
pub const INVALID_CATEGORY_MESSAGE: &str = "Invalid category. Please enter either fiction or non-fiction.";

// AppState is owned by the menu loop for the whole session
pub struct AppState {
    pub config: Configuration,
    pub catalog_service: Box<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, via: GatewayPublisherVia) -> AppState {
        let catalog_service = factory::create_catalog_service(&config, via);
        AppState {
            config,
            catalog_service,
        }
    }
}

// ConsoleError is the line shown to the operator when a command fails
pub type ConsoleError = String;

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::CapacityExceeded { .. } => {
                CATALOG_FULL_MESSAGE.to_string()
            }
            CommandError::DuplicateKey { .. } => {
                DUPLICATE_ID_MESSAGE.to_string()
            }
            CommandError::NotFound { .. } => {
                NOT_FOUND_MESSAGE.to_string()
            }
            CommandError::Validation { ref reason_code, .. } if reason_code.as_deref() == Some("category") => {
                INVALID_CATEGORY_MESSAGE.to_string()
            }
            CommandError::Validation { message, .. } => {
                format!("Invalid input: {}", message)
            }
            CommandError::Serialization { message } => {
                format!("Operation failed: {}", message)
            }
            CommandError::Runtime { message, .. } => {
                format!("Operation failed: {}", message)
            }
        }
    }
}
