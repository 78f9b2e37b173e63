use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod anim;
mod app;
mod cli;
mod config;
mod contact;
mod models;
mod theme;
mod ui;
mod utils;
mod watcher;

use app::App;
use config::RelayConfig;
use contact::RelayClient;
use models::Portfolio;

fn main() -> io::Result<()> {
    let cli_config = cli::parse_args()?;

    let portfolio = match &cli_config.content_path {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::embedded()?,
    };

    // Runtime for the contact relay; the UI itself stays synchronous
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let relay = RelayConfig::load().and_then(|cfg| RelayClient::new(cfg).ok());

    let mut app = App::new(
        portfolio,
        cli_config.content_path.clone(),
        relay,
        runtime.handle().clone(),
        Instant::now(),
    );

    // Keep the watcher alive for the life of the UI
    let _watcher = match (&cli_config.content_path, cli_config.watch) {
        (Some(path), true) => {
            watcher::setup_content_watcher(path.clone(), Arc::clone(&app.content_needs_reload))
        }
        _ => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut rng = rand::rng();

    loop {
        app.reload_content_if_needed(Instant::now());
        app.poll_submit();
        app.on_tick(Instant::now(), &mut rng);

        terminal.draw(|frame| ui::render(frame, app))?;

        // The poll timeout doubles as the animation tick cadence
        if event::poll(Duration::from_millis(25))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key, Instant::now()) {
                    break;
                }
            }
        }
    }

    app.shutdown();
    Ok(())
}
