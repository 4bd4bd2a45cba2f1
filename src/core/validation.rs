use crate::books::domain::model::Category;
use crate::core::library::{LibraryError, LibraryResult};

/// Returns true when every character is an ASCII letter or digit.
///
/// The empty string passes; callers that need a value reject empty input themselves.
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Uppercases the input and accepts only the two canonical categories.
pub fn normalize_category(s: &str) -> LibraryResult<Category> {
    match s.to_ascii_uppercase().as_str() {
        "FICTION" => Ok(Category::Fiction),
        "NON-FICTION" => Ok(Category::NonFiction),
        _ => Err(LibraryError::validation(
            format!("invalid category {}", s).as_str(), Some("category".to_string()))),
    }
}

/// Parses a menu selection made only of decimal digits and within `[min, max]`.
pub fn parse_menu_option(s: &str, min: usize, max: usize) -> LibraryResult<usize> {
    let invalid = || LibraryError::invalid_menu_selection(
        format!("Invalid choice. Please enter a number between {} and {}.", min, max).as_str());
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    // overflow falls through to the same error
    match s.parse::<usize>() {
        Ok(n) if n >= min && n <= max => Ok(n),
        _ => Err(invalid()),
    }
}

pub fn is_valid_menu_option(s: &str, min: usize, max: usize) -> bool {
    parse_menu_option(s, min, max).is_ok()
}
