use crate::books::domain::model::{BookEntity, Category};

const ID_WIDTH: usize = 10;
const ISBN_WIDTH: usize = 20;
const TITLE_WIDTH: usize = 30;
const AUTHOR_WIDTH: usize = 20;
const EDITION_WIDTH: usize = 10;
const PUBLICATION_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 15;

const CATEGORY_RULE_WIDTH: usize = 116;
const ALL_BOOKS_RULE_WIDTH: usize = 124;

/// Labelled, one-field-per-line block used by search and delete.
pub fn render_book_details(book: &BookEntity) -> String {
    format!("ID: {}\nISBN: {}\nTitle: {}\nAuthor: {}\nEdition: {}\nPublication: {}\nCategory: {}\n",
            book.book_id, book.isbn, book.title, book.author, book.edition, book.publication, book.category)
}

// columns are left aligned and padded; longer values are not truncated
fn render_row(cells: &[&str], with_category: bool) -> String {
    let widths = [ID_WIDTH, ISBN_WIDTH, TITLE_WIDTH, AUTHOR_WIDTH, EDITION_WIDTH, PUBLICATION_WIDTH, CATEGORY_WIDTH];
    let columns = if with_category { widths.len() } else { widths.len() - 1 };
    let mut row = String::new();
    for (cell, width) in cells.iter().zip(widths.iter()).take(columns) {
        row.push_str(format!("{:<width$}", cell, width = *width).as_str());
    }
    row.push('\n');
    row
}

fn render_table(books: &[BookEntity], with_category: bool, rule_width: usize) -> String {
    let rule = format!("{}\n", "-".repeat(rule_width));
    let mut out = String::new();
    out.push_str(rule.as_str());
    out.push_str(render_row(&["ID", "ISBN", "Title", "Author", "Edition", "Publication", "Category"], with_category).as_str());
    out.push_str(rule.as_str());
    for book in books {
        out.push_str(render_row(&[book.book_id.as_str(), book.isbn.as_str(), book.title.as_str(),
                                  book.author.as_str(), book.edition.as_str(), book.publication.as_str(),
                                  book.category.as_str()], with_category).as_str());
    }
    out
}

pub fn render_category_table(category: Category, books: &[BookEntity]) -> String {
    format!("\n----- Books in Category: {} -----\n{}", category, render_table(books, false, CATEGORY_RULE_WIDTH))
}

pub fn render_all_books_table(books: &[BookEntity]) -> String {
    format!("\n----- All Books in Library -----\n{}", render_table(books, true, ALL_BOOKS_RULE_WIDTH))
}
