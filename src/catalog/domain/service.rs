use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::validation::normalize_category;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // the store change is already committed, so a failed publish is only logged
    async fn publish(&self, event: LibraryResult<DomainEvent>) {
        let published = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(err),
        };
        if let Err(err) = published {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&mut self, book: &BookEntity) -> LibraryResult<BookEntity> {
        let size = self.book_repository.create(book)?;
        debug!(book_id = book.book_id.as_str(), size, "added book");
        self.publish(DomainEvent::added(
            "books", "catalog", book.book_id.as_str(), &self.metadata(), book).map_err(LibraryError::from)).await;
        Ok(book.clone())
    }

    async fn remove_book(&mut self, id: &str) -> LibraryResult<BookEntity> {
        let removed = self.book_repository.delete(id)?;
        debug!(book_id = removed.book_id.as_str(), size = self.book_repository.len(), "removed book");
        self.publish(DomainEvent::deleted(
            "books", "catalog", removed.book_id.as_str(), &self.metadata(), &removed).map_err(LibraryError::from)).await;
        Ok(removed)
    }

    async fn update_book(&mut self, book: &BookEntity) -> LibraryResult<BookEntity> {
        let _ = self.book_repository.update(book)?;
        let updated = self.book_repository.get(book.book_id.as_str())?;
        debug!(book_id = updated.book_id.as_str(), "updated book");
        self.publish(DomainEvent::updated(
            "books", "catalog", updated.book_id.as_str(), &self.metadata(), &updated).map_err(LibraryError::from)).await;
        Ok(updated)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity> {
        self.book_repository.get(id)
    }

    async fn find_books_by_category(&self, category: &str) -> LibraryResult<Vec<BookEntity>> {
        let category = normalize_category(category)?;
        Ok(self.book_repository.find_by_category(category))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.book_repository.find_all())
    }

    fn is_full(&self) -> bool {
        self.book_repository.is_full()
    }
}
