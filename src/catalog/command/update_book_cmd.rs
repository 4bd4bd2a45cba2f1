use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::core::validation::normalize_category;

pub struct UpdateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id selects the book; every other field replaces the stored value
#[derive(Debug, Clone)]
pub struct UpdateBookCommandRequest {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub edition: String,
    pub publication: String,
    pub category: String,
}

impl UpdateBookCommandRequest {
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
pub struct UpdateBookCommandResponse {
    pub book: BookEntity,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'a> {
    async fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Category;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Logs);
        let _ = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("B1", "isbn", "test book", "author", "1st", "Penguin", "fiction"))
            .await.expect("should add book");

        let req = UpdateBookCommandRequest::new("b1", "isbn2", "new title", "new author", "2nd", "Vintage", "non-fiction");
        let res = UpdateBookCommand::new(svc.as_mut()).execute(req).await.expect("should update book");
        assert_eq!("B1", res.book.book_id.as_str());
        assert_eq!("new title", res.book.title.as_str());
        assert_eq!(Category::NonFiction, res.book.category);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Logs);
        let req = UpdateBookCommandRequest::new("B9", "isbn", "title", "author", "1st", "Penguin", "fiction");
        let res = UpdateBookCommand::new(svc.as_mut()).execute(req).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
