use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// category None lists the whole catalog
#[derive(Debug, Clone, Default)]
pub struct ListBooksCommandRequest {
    pub category: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn all() -> Self {
        Self { category: None }
    }

    pub fn by_category(category: &str) -> Self {
        Self { category: Some(category.to_string()) }
    }
}


#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    async fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = match req.category {
            Some(category) => self.catalog_service.find_books_by_category(category.as_str()).await,
            None => self.catalog_service.find_all_books().await,
        };
        res.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
