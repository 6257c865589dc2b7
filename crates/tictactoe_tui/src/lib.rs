//! Terminal front end for a two-player tic-tac-toe series.
//!
//! Keys become [`input::Command`]s, the [`app::App`] applies them to a
//! [`tictactoe_core::Game`], and [`ui::draw`] renders whatever the game
//! reports. Nothing here decides game rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod ui;

use anyhow::{Context, Result};
use app::App;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the game until the user exits.
pub fn run(cli: Cli) -> Result<()> {
    let config = TuiConfig::resolve(&cli)?;
    logging::init(config.log_file())?;
    info!(?config, "Starting tic-tac-toe");

    let mut app = App::new(&config);
    let mut terminal = setup_terminal()?;
    let res = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;

    if cli.summary_json {
        let summary = serde_json::to_string_pretty(&app.summary())
            .context("Failed to serialize summary")?;
        println!("{}", summary);
    }
    info!(score = %app.game().score(), "Exiting");
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_exit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = input::command_for(key, app.screen()) {
                        app.handle(command, Instant::now());
                    }
                }
            }
        }
        app.tick(Instant::now());
    }
    Ok(())
}
