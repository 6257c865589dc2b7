//! Tic-tac-toe series logic.
//!
//! Board storage, turn sequencing, win and tie detection, and a scoreboard
//! carried across rounds. Presentation is left to the caller, which drives a
//! [`Game`] and draws what it reports.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, MoveOutcome, Sign};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4] {
//!     game.play_move(index)?;
//! }
//! let outcome = game.play_move(2)?;
//! assert_eq!(outcome, MoveOutcome::Won { winner: Sign::X, line: [0, 1, 2] });
//! assert_eq!(game.score().wins(Sign::X), 1);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod events;
mod game;
mod invariants;
mod position;
mod rules;
mod score;
mod types;

pub use error::MoveError;
pub use events::{GameEvent, GameObserver, TracingObserver};
pub use game::{Game, MAX_ROUND, MoveOutcome, RoundState, SeriesPhase, Snapshot};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, OccupancyMatchesMoves,
    SignsAlternate, WinningLineOwned, assert_invariants,
};
pub use position::{Position, Step};
pub use rules::{WINNING_LINES, WinningLine, completed_line, lines_through, owns_line};
pub use score::Score;
pub use types::{Board, CELL_COUNT, Cell, Player, Sign};
