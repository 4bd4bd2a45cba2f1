use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug)]
pub struct GetBookCommandResponse {
    pub book: BookEntity,
}

impl GetBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl<'a> Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'a> {
    async fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Logs);
        let added = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("Ab1", "isbn", "test book", "author", "1st", "Penguin", "fiction"))
            .await.expect("should add book");

        let loaded = GetBookCommand::new(svc.as_mut())
            .execute(GetBookCommandRequest::new("AB1")).await.expect("should get book");
        assert_eq!(added.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), GatewayPublisherVia::Logs);
        let res = GetBookCommand::new(svc.as_mut()).execute(GetBookCommandRequest::new("X1")).await;
        assert!(matches!(res, Err(CommandError::NotFound{ .. })));
    }
}
