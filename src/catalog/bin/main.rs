use tracing::info;
use book_catalog::catalog::menu;
use book_catalog::core::controller::AppState;
use book_catalog::core::domain::Configuration;
use book_catalog::core::library::LibraryError;
use book_catalog::gateway::GatewayPublisherVia;
use book_catalog::utils::console::StdConsole;
use book_catalog::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);
    info!(branch_id = config.branch_id.as_str(), max_books = config.max_books, "starting catalog");

    let mut state = AppState::new(config, GatewayPublisherVia::Logs);
    let mut console = StdConsole::new();
    menu::run(&mut state, &mut console).await
}
