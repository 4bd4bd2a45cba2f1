pub mod book_store;

use crate::books::domain::model::{BookEntity, Category};
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // position of the book whose id matches ignoring case
    fn position(&self, id: &str) -> Option<usize>;

    fn find_by_category(&self, category: Category) -> Vec<BookEntity>;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}
