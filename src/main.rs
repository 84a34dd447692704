use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use shopsearch::app::config::{CliArgs, Config};
use shopsearch::app::{logging, r#loop::run_loop, state::AppState};
use shopsearch::domain::catalog::ProductCatalog;
use shopsearch::infrastructure::http_catalog::HttpCatalog;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config, logging and the HTTP client are set up BEFORE the terminal so
    // a bad config file or URL doesn't leave the terminal in raw mode.
    let config = Config::load(&args)?;
    logging::init(&config.log_path())?;
    let catalog: Arc<dyn ProductCatalog> =
        Arc::new(HttpCatalog::new(&config.api_url, config.timeout())?);
    let app_state = AppState::new(&config, catalog.base_url());

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, catalog, config.debounce()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "search loop failed");
        println!("{err:?}");
    }

    Ok(())
}
