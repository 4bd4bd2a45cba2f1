use tracing::debug;
use crate::books::domain::model::Category;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::view::{render_all_books_table, render_book_details, render_category_table};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, CATALOG_FULL_MESSAGE, ConsoleError, DUPLICATE_ID_MESSAGE, INVALID_CATEGORY_MESSAGE, NOT_FOUND_MESSAGE};
use crate::core::library::LibraryResult;
use crate::core::validation::{is_alphanumeric, normalize_category};
use crate::utils::console::{Console, get_input};

pub const INVALID_ID_MESSAGE: &str = "Invalid ID format! ID must contain only alphanumeric characters.";

// Fields entered for add and edit, in prompt order after the id.
struct BookFields {
    isbn: String,
    title: String,
    author: String,
    edition: String,
    publication: String,
}

async fn prompt_fields(console: &mut dyn Console) -> LibraryResult<BookFields> {
    Ok(BookFields {
        isbn: get_input(console, "Enter ISBN: ", false).await?,
        title: get_input(console, "Enter Title: ", false).await?,
        author: get_input(console, "Enter Author: ", false).await?,
        edition: get_input(console, "Enter Edition: ", false).await?,
        publication: get_input(console, "Enter Publication: ", false).await?,
    })
}

async fn prompt_category(console: &mut dyn Console) -> LibraryResult<Category> {
    loop {
        let input = get_input(console, "Enter Category (Fiction or Non-fiction): ", false).await?;
        match normalize_category(input.as_str()) {
            Ok(category) => return Ok(category),
            Err(_) => console.write_line(INVALID_CATEGORY_MESSAGE).await?,
        }
    }
}

async fn prompt_new_book_id(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<String> {
    loop {
        let id = get_input(console, "Enter Book ID (alphanumeric): ", false).await?;
        if !is_alphanumeric(id.as_str()) {
            console.write_line(INVALID_ID_MESSAGE).await?;
            continue;
        }
        let existing = GetBookCommand::new(state.catalog_service.as_mut())
            .execute(GetBookCommandRequest::new(id.as_str())).await;
        match existing {
            Ok(_) => console.write_line(DUPLICATE_ID_MESSAGE).await?,
            Err(_) => return Ok(id),
        }
    }
}

// Looks the book up and prints the failure message when it cannot be shown.
async fn find_book(state: &mut AppState, console: &mut dyn Console, prompt: &str) -> LibraryResult<Option<(String, String)>> {
    let id = get_input(console, prompt, false).await?;
    match GetBookCommand::new(state.catalog_service.as_mut()).execute(GetBookCommandRequest::new(id.as_str())).await {
        Ok(res) => Ok(Some((id, render_book_details(&res.book)))),
        Err(err) => {
            report(console, err).await?;
            Ok(None)
        }
    }
}

async fn report(console: &mut dyn Console, err: CommandError) -> LibraryResult<()> {
    debug!(error = ?err, "command failed");
    console.write_line(ConsoleError::from(err).as_str()).await
}

pub async fn add_book(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    if state.catalog_service.is_full() {
        console.write_line(CATALOG_FULL_MESSAGE).await?;
        return console.wait_for_key_press().await;
    }

    let category = prompt_category(console).await?;
    let book_id = prompt_new_book_id(state, console).await?;
    let fields = prompt_fields(console).await?;

    let req = AddBookCommandRequest::new(book_id.as_str(), fields.isbn.as_str(), fields.title.as_str(),
                                         fields.author.as_str(), fields.edition.as_str(),
                                         fields.publication.as_str(), category.as_str());
    match AddBookCommand::new(state.catalog_service.as_mut()).execute(req).await {
        Ok(_) => console.write_line("Book added successfully!").await?,
        Err(err) => report(console, err).await?,
    }
    console.wait_for_key_press().await
}

pub async fn edit_book(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    let Some((book_id, _)) = find_book(state, console, "Enter Book ID to edit: ").await? else {
        return console.wait_for_key_press().await;
    };

    console.write_line("Book found. Please enter new details (except ID):").await?;
    let fields = prompt_fields(console).await?;
    let category = prompt_category(console).await?;

    let req = UpdateBookCommandRequest::new(book_id.as_str(), fields.isbn.as_str(), fields.title.as_str(),
                                            fields.author.as_str(), fields.edition.as_str(),
                                            fields.publication.as_str(), category.as_str());
    match UpdateBookCommand::new(state.catalog_service.as_mut()).execute(req).await {
        Ok(_) => console.write_line("Book edited successfully!").await?,
        Err(err) => report(console, err).await?,
    }
    console.wait_for_key_press().await
}

pub async fn search_book(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    if let Some((_, details)) = find_book(state, console, "Enter Book ID to search: ").await? {
        console.write_line("Book found:").await?;
        console.write(details.as_str()).await?;
    }
    console.wait_for_key_press().await
}

pub async fn delete_book(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    let Some((book_id, details)) = find_book(state, console, "Enter Book ID to delete: ").await? else {
        return console.wait_for_key_press().await;
    };

    console.write_line("Book found. Details:").await?;
    console.write(details.as_str()).await?;
    let response = get_input(console, "Do you want to delete this book? (y/n): ", false).await?;
    if response.starts_with('y') || response.starts_with('Y') {
        match RemoveBookCommand::new(state.catalog_service.as_mut())
            .execute(RemoveBookCommandRequest::new(book_id.as_str())).await {
            Ok(_) => console.write_line("Book Deleted successfully!").await?,
            Err(err) => report(console, err).await?,
        }
    } else {
        console.write_line("Deletion cancelled.").await?;
    }
    console.wait_for_key_press().await
}

pub async fn view_books_by_category(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    let input = get_input(console, "Enter Category to view (Fiction or Non-fiction): ", false).await?;
    // an unknown category can never match a stored book
    let Ok(category) = normalize_category(input.as_str()) else {
        console.write_line("Category not found!").await?;
        return console.wait_for_key_press().await;
    };

    match ListBooksCommand::new(state.catalog_service.as_mut())
        .execute(ListBooksCommandRequest::by_category(category.as_str())).await {
        Ok(res) if res.books.is_empty() => console.write_line("Category not found!").await?,
        Ok(res) => console.write(render_category_table(category, &res.books).as_str()).await?,
        Err(err) => report(console, err).await?,
    }
    console.wait_for_key_press().await
}

pub async fn view_all_books(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    match ListBooksCommand::new(state.catalog_service.as_mut()).execute(ListBooksCommandRequest::all()).await {
        Ok(res) if res.books.is_empty() => console.write_line("No books to display.").await?,
        Ok(res) => console.write(render_all_books_table(&res.books).as_str()).await?,
        Err(err) => report(console, err).await?,
    }
    console.wait_for_key_press().await
}
