//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::Command;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tictactoe_core::{
    Game, GameEvent, Player, Position, SeriesPhase, Sign, Snapshot, TracingObserver,
};
use tracing::{debug, instrument, warn};

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the series to start.
    Start,
    /// The board, during a round and until the result panel shows.
    Board,
    /// Result panel after a round.
    Result,
}

/// Final state printed by `--summary-json`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// X player's name.
    pub x_name: String,
    /// O player's name.
    pub o_name: String,
    /// Game state at exit.
    pub snapshot: Snapshot,
}

/// Main application state.
pub struct App {
    game: Game,
    events: Receiver<GameEvent>,
    cursor: Position,
    status_message: String,
    result_delay: Duration,
    result_due: Option<Instant>,
    show_result: bool,
    show_cell_numbers: bool,
    exit: bool,
}

impl App {
    /// Creates an app on the start screen.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let mut game = Game::idle_with_players(
            Player::new(Sign::X, config.x_name().clone()),
            Player::new(Sign::O, config.o_name().clone()),
        );
        let (tx, events) = mpsc::channel();
        game.subscribe(Box::new(tx));
        game.subscribe(Box::new(TracingObserver));

        Self {
            game,
            events,
            cursor: Position::Center,
            status_message: "Press Enter to start".to_string(),
            result_delay: Duration::from_millis(*config.result_delay_ms()),
            result_due: None,
            show_result: false,
            show_cell_numbers: *config.show_cell_numbers(),
            exit: false,
        }
    }

    /// Gets the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether empty cells show their key.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to leave.
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Screen to draw.
    pub fn screen(&self) -> Screen {
        if self.game.phase() == SeriesPhase::Idle {
            Screen::Start
        } else if self.show_result {
            Screen::Result
        } else {
            Screen::Board
        }
    }

    /// Applies a command, then folds the resulting game events into the status.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, command: Command, now: Instant) {
        match command {
            Command::StartSeries => self.game.start_series(),
            Command::Place(index) => self.place(index, now),
            Command::PlaceAtCursor => self.place(self.cursor.to_index(), now),
            Command::MoveCursor(step) => self.cursor = self.cursor.step(step),
            Command::NextRound => {
                self.clear_result();
                self.game.start_next_round();
            }
            Command::QuitSeries => {
                self.clear_result();
                self.game.quit_series();
            }
            Command::Exit => self.exit = true,
        }
        self.drain_events();
    }

    /// Reveals the result panel once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.result_due.is_some_and(|due| now >= due) {
            debug!("Showing result panel");
            self.result_due = None;
            self.show_result = true;
        }
    }

    /// State to report on exit.
    pub fn summary(&self) -> Summary {
        Summary {
            x_name: self.game.player(Sign::X).name().to_string(),
            o_name: self.game.player(Sign::O).name().to_string(),
            snapshot: self.game.snapshot(),
        }
    }

    fn place(&mut self, index: usize, now: Instant) {
        match self.game.play_move(index) {
            Ok(_) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                if self.game.is_over() {
                    self.result_due = Some(now + self.result_delay);
                }
            }
            Err(e) => {
                warn!(error = %e, index, "Move not applied");
                self.status_message = e.to_string();
            }
        }
    }

    fn clear_result(&mut self) {
        self.result_due = None;
        self.show_result = false;
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::SeriesStarted | GameEvent::RoundStarted => {
                    self.status_message = format!("{} to move", self.name(Sign::X));
                }
                GameEvent::MovePlayed { index, sign } => {
                    let label = Position::from_index(index).map_or("?", Position::label);
                    self.status_message = format!(
                        "{} played {}. {} to move",
                        self.name(sign),
                        label,
                        self.name(sign.opponent())
                    );
                }
                GameEvent::RoundWon { winner, .. } => {
                    self.status_message = format!("{} takes the round!", self.name(winner));
                }
                GameEvent::RoundTied => {
                    self.status_message = "It's a tie!".to_string();
                }
                GameEvent::ScoreChanged(_) => {}
                GameEvent::SeriesQuit => {
                    self.status_message = "Scores reset. Press Enter to start".to_string();
                }
            }
        }
    }

    fn name(&self, sign: Sign) -> &str {
        self.game.player(sign).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, Score};

    fn started_app(delay_ms: u64) -> App {
        let config = TuiConfig::from_toml_str(&format!("result_delay_ms = {}", delay_ms)).unwrap();
        let mut app = App::new(&config);
        app.handle(Command::StartSeries, Instant::now());
        app
    }

    fn place_all(app: &mut App, moves: &[usize], now: Instant) {
        for &index in moves {
            app.handle(Command::Place(index), now);
        }
    }

    #[test]
    fn test_starts_idle() {
        let app = App::new(&TuiConfig::default());
        assert_eq!(app.screen(), Screen::Start);
        assert_eq!(app.status_message(), "Press Enter to start");
    }

    #[test]
    fn test_status_follows_moves() {
        let mut app = started_app(0);
        assert_eq!(app.screen(), Screen::Board);
        assert_eq!(app.status_message(), "Player X to move");

        app.handle(Command::Place(4), Instant::now());
        assert_eq!(app.status_message(), "Player X played Center. Player O to move");
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_rejected_move_shows_error() {
        let mut app = started_app(0);
        let now = Instant::now();
        app.handle(Command::Place(0), now);
        app.handle(Command::Place(0), now);

        assert_eq!(app.status_message(), "Cell 0 is already occupied");
        assert_eq!(app.game().board().get(0), Some(Cell::Occupied(Sign::X)));
    }

    #[test]
    fn test_result_panel_waits_for_delay() {
        let mut app = started_app(1000);
        let start = Instant::now();
        place_all(&mut app, &[0, 3, 1, 4, 2], start);

        assert_eq!(app.status_message(), "Player X takes the round!");
        assert_eq!(app.screen(), Screen::Board);

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.screen(), Screen::Board);

        app.tick(start + Duration::from_millis(1000));
        assert_eq!(app.screen(), Screen::Result);
    }

    #[test]
    fn test_next_round_from_result_panel() {
        let mut app = started_app(0);
        let now = Instant::now();
        place_all(&mut app, &[0, 3, 1, 4, 2], now);
        app.tick(now);
        assert_eq!(app.screen(), Screen::Result);

        app.handle(Command::NextRound, now);
        assert_eq!(app.screen(), Screen::Board);
        assert_eq!(app.game().board().occupied_count(), 0);
        assert_eq!(app.game().score().wins(Sign::X), 1);
    }

    #[test]
    fn test_quit_returns_to_start() {
        let mut app = started_app(0);
        let now = Instant::now();
        place_all(&mut app, &[0, 4, 2, 1, 3, 5, 7, 6, 8], now);
        assert_eq!(app.status_message(), "It's a tie!");
        app.tick(now);

        app.handle(Command::QuitSeries, now);
        assert_eq!(app.screen(), Screen::Start);
        assert_eq!(app.game().score(), Score::default());
        assert_eq!(app.status_message(), "Scores reset. Press Enter to start");
    }

    #[test]
    fn test_cursor_placement() {
        let mut app = started_app(0);
        let now = Instant::now();
        app.handle(Command::MoveCursor(tictactoe_core::Step::Up), now);
        app.handle(Command::MoveCursor(tictactoe_core::Step::Left), now);
        assert_eq!(app.cursor(), Position::TopLeft);

        app.handle(Command::PlaceAtCursor, now);
        assert_eq!(app.game().board().get(0), Some(Cell::Occupied(Sign::X)));
    }

    #[test]
    fn test_summary_uses_names() {
        let mut config = TuiConfig::default();
        config.apply_overrides(&crate::cli::Cli {
            x_name: Some("Ada".to_string()),
            ..Default::default()
        });
        let app = App::new(&config);
        let summary = app.summary();
        assert_eq!(summary.x_name, "Ada");
        assert_eq!(summary.o_name, "Player O");
        assert_eq!(summary.snapshot.phase, SeriesPhase::Idle);
    }
}
