use crate::books::domain::model::{BookEntity, Category};
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::core::validation::is_alphanumeric;

// BookStore keeps books in insertion order up to a fixed capacity. Deleting a book
// shifts the later books down so the remaining order is preserved.
#[derive(Debug)]
pub struct BookStore {
    books: Vec<BookEntity>,
    capacity: usize,
}

impl BookStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            books: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn position_or_not_found(&self, id: &str) -> LibraryResult<usize> {
        self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", id).as_str()))
    }
}

impl Repository<BookEntity> for BookStore {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.is_full() {
            return Err(LibraryError::capacity_exceeded(
                format!("cannot add book {}, catalog is full", id).as_str(), self.capacity));
        }
        if id.is_empty() || !is_alphanumeric(id.as_str()) {
            return Err(LibraryError::validation(
                format!("book id must be non-empty and alphanumeric but was {:?}", id).as_str(),
                Some("book_id".to_string())));
        }
        if self.position(id.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", id).as_str()));
        }
        self.books.push(entity.clone());
        Ok(self.books.len())
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let index = self.position_or_not_found(entity.book_id.as_str())?;
        if let Some(existing) = self.books.get_mut(index) {
            existing.replace_details(entity);
        }
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.iter().find(|b| b.has_id(id)).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        let index = self.position_or_not_found(id)?;
        Ok(self.books.remove(index))
    }

    fn find_all(&self) -> Vec<BookEntity> {
        self.books.clone()
    }
}

impl BookRepository for BookStore {
    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.has_id(id))
    }

    fn find_by_category(&self, category: Category) -> Vec<BookEntity> {
        self.books.iter().filter(|b| b.category == category).cloned().collect()
    }

    fn len(&self) -> usize {
        self.books.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
