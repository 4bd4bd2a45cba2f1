use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "FICTION")]
    Fiction,
    #[serde(rename = "NON-FICTION")]
    NonFiction,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "FICTION",
            Category::NonFiction => "NON-FICTION",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// BookEntity is a single catalog record; book_id never changes once the book is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub edition: String,
    pub publication: String,
    pub category: Category,
}

impl BookEntity {
    pub fn new(book_id: &str, isbn: &str, title: &str, author: &str,
               edition: &str, publication: &str, category: Category) -> Self {
        Self {
            book_id: book_id.to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            edition: edition.to_string(),
            publication: publication.to_string(),
            category,
        }
    }

    // copies every field except book_id from other
    pub(crate) fn replace_details(&mut self, other: &BookEntity) {
        self.isbn = other.isbn.to_string();
        self.title = other.title.to_string();
        self.author = other.author.to_string();
        self.edition = other.edition.to_string();
        self.publication = other.publication.to_string();
        self.category = other.category;
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.book_id.eq_ignore_ascii_case(id)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}
