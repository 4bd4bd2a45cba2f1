use tracing::{debug, info, warn};
use crate::catalog::controller;
use crate::core::controller::AppState;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::validation::parse_menu_option;
use crate::utils::console::Console;

pub const MENU_MIN: usize = 1;
pub const MENU_MAX: usize = MENU_OPTIONS.len();

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuOption {
    AddBook,
    EditBook,
    SearchBook,
    DeleteBook,
    ViewBooksByCategory,
    ViewAllBooks,
    Exit,
}

// in menu order; option n is MENU_OPTIONS[n - 1]
const MENU_OPTIONS: [MenuOption; 7] = [
    MenuOption::AddBook,
    MenuOption::EditBook,
    MenuOption::SearchBook,
    MenuOption::DeleteBook,
    MenuOption::ViewBooksByCategory,
    MenuOption::ViewAllBooks,
    MenuOption::Exit,
];

impl MenuOption {
    /// Parses the operator's menu choice.
    pub fn from_choice(choice: &str) -> LibraryResult<MenuOption> {
        let n = parse_menu_option(choice, MENU_MIN, MENU_MAX)?;
        Ok(MENU_OPTIONS[n - MENU_MIN])
    }
}

pub fn render_menu() -> String {
    [
        "",
        "================================",
        "    LIBRARY MANAGEMENT SYSTEM    ",
        "================================",
        "[1] Add Book",
        "[2] Edit Book",
        "[3] Search Book",
        "[4] Delete Book",
        "[5] View Books by Category",
        "[6] View All Books",
        "[7] Exit",
        "================================",
        "Enter your choice: ",
    ].join("\n")
}

async fn dispatch(option: MenuOption, state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    match option {
        MenuOption::AddBook => controller::add_book(state, console).await,
        MenuOption::EditBook => controller::edit_book(state, console).await,
        MenuOption::SearchBook => controller::search_book(state, console).await,
        MenuOption::DeleteBook => controller::delete_book(state, console).await,
        MenuOption::ViewBooksByCategory => controller::view_books_by_category(state, console).await,
        MenuOption::ViewAllBooks => controller::view_all_books(state, console).await,
        MenuOption::Exit => console.write_line("Exiting program. Goodbye!").await,
    }
}

/// Runs the menu until the operator exits or the console input closes.
pub async fn run(state: &mut AppState, console: &mut dyn Console) -> LibraryResult<()> {
    loop {
        console.write(render_menu().as_str()).await?;
        let Some(choice) = console.read_line().await? else {
            info!("console input closed, leaving menu");
            return Ok(());
        };

        let option = match MenuOption::from_choice(choice.as_str()) {
            Ok(option) => option,
            Err(err) => {
                console.write_line(err.to_string().as_str()).await?;
                continue;
            }
        };

        debug!(?option, "dispatching menu option");
        match dispatch(option, state, console).await {
            Ok(()) if option == MenuOption::Exit => return Ok(()),
            Ok(()) => {}
            Err(LibraryError::Runtime { reason_code: Some(ref reason), .. }) if reason == "eof" => {
                info!(?option, "console input closed during prompt, leaving menu");
                return Ok(());
            }
            Err(err) if err.recoverable() => {
                warn!(?option, error = %err, "menu option failed");
                console.write_line(err.to_string().as_str()).await?;
            }
            Err(err) => {
                warn!(?option, error = %err, "menu option aborted");
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::menu::{MENU_MAX, MenuOption, render_menu, run};
    use crate::core::library::LibraryError;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::utils::console::ScriptedConsole;

    const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 7.";

    #[tokio::test]
    async fn test_should_map_menu_options() {
        assert_eq!(MenuOption::AddBook, MenuOption::from_choice("1").expect("valid option"));
        assert_eq!(MenuOption::ViewBooksByCategory, MenuOption::from_choice("5").expect("valid option"));
        assert_eq!(MenuOption::ViewAllBooks, MenuOption::from_choice("6").expect("valid option"));
        assert_eq!(MenuOption::Exit, MenuOption::from_choice("7").expect("valid option"));
        assert_eq!(7, MENU_MAX);
        for choice in ["0", "8", "", "x"] {
            assert!(matches!(MenuOption::from_choice(choice), Err(LibraryError::InvalidMenuSelection{ .. })));
        }
    }

    #[tokio::test]
    async fn test_should_render_menu() {
        let menu = render_menu();
        assert!(menu.contains("[1] Add Book"));
        assert!(menu.contains("[5] View Books by Category"));
        assert!(menu.ends_with("Enter your choice: "));
    }

    #[tokio::test]
    async fn test_should_exit_on_seven() {
        let mut state = AppState::new(Configuration::new("test"), GatewayPublisherVia::Logs);
        let mut console = ScriptedConsole::new(&["7", "1"]);
        run(&mut state, &mut console).await.expect("should run menu");
        assert!(console.output().contains("Exiting program. Goodbye!"));
        assert_eq!(1, console.remaining_input());
    }

    #[tokio::test]
    async fn test_should_reprompt_on_invalid_choice() {
        let mut state = AppState::new(Configuration::new("test"), GatewayPublisherVia::Logs);
        let mut console = ScriptedConsole::new(&["", "0", "8", "1 2", "abc", "7"]);
        run(&mut state, &mut console).await.expect("should run menu");
        assert_eq!(5, console.output().matches(INVALID_CHOICE).count());
        assert_eq!(6, console.output().matches("Enter your choice: ").count());
    }

    #[tokio::test]
    async fn test_should_stop_when_input_closes() {
        let mut state = AppState::new(Configuration::new("test"), GatewayPublisherVia::Logs);
        let mut console = ScriptedConsole::new(&["1", "fiction"]);
        run(&mut state, &mut console).await.expect("should stop cleanly");
        assert!(console.output().contains("Enter Book ID (alphanumeric): "));
    }

    #[tokio::test]
    async fn test_should_run_catalog_session() {
        let publisher = MemoryPublisher::new();
        let mut state = AppState::new(Configuration::new("test"), GatewayPublisherVia::Memory(publisher.clone()));
        let mut console = ScriptedConsole::new(&[
            "1", "fiction", "A", "i1", "t1", "a1", "e1", "p1",
            "1", "non-fiction", "B", "i2", "t2", "a2", "e2", "p2",
            "1", "Fiction", "C", "i3", "t3", "a3", "e3", "p3",
            "4", "B", "y",
            "6",
            "7",
        ]);
        run(&mut state, &mut console).await.expect("should run menu");

        let ids: Vec<String> = state.catalog_service.find_all_books().await.expect("should list")
            .iter().map(|b| b.book_id.to_string()).collect();
        assert_eq!(vec!["A".to_string(), "C".to_string()], ids);
        assert_eq!(4, publisher.events().len());
        assert_eq!(5, console.key_presses());
        assert!(console.output().contains("----- All Books in Library -----"));
        assert_eq!(0, console.remaining_input());
    }
}
