use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::core::validation::normalize_category;

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddBookCommandRequest {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub edition: String,
    pub publication: String,
    pub category: String,
}

impl AddBookCommandRequest {
    pub fn new(book_id: &str, isbn: &str, title: &str, author: &str,
               edition: &str, publication: &str, category: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            edition: edition.to_string(),
            publication: publication.to_string(),
            category: category.to_string(),
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        Ok(BookEntity::new(self.book_id.as_str(), self.isbn.as_str(), self.title.as_str(),
                           self.author.as_str(), self.edition.as_str(), self.publication.as_str(),
                           normalize_category(self.category.as_str())?))
    }
}


#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    async fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
