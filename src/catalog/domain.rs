pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&mut self, book: &BookEntity) -> LibraryResult<BookEntity>;
    async fn remove_book(&mut self, id: &str) -> LibraryResult<BookEntity>;
    async fn update_book(&mut self, book: &BookEntity) -> LibraryResult<BookEntity>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn find_books_by_category(&self, category: &str) -> LibraryResult<Vec<BookEntity>>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookEntity>>;
    fn is_full(&self) -> bool;
}
