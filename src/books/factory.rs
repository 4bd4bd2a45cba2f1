use crate::books::repository::BookRepository;
use crate::books::repository::book_store::BookStore;
use crate::core::domain::Configuration;

pub fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    Box::new(BookStore::new(config.max_books))
}
