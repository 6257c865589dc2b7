//! Invariants that hold for every reachable game.
//!
//! Checked after each accepted move in debug builds. They are public so tests
//! can run them directly.

use crate::game::{Game, RoundState};
use crate::rules;
use crate::types::Sign;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Occupied cells equal the moves made this round.
pub struct OccupancyMatchesMoves;

impl Invariant<Game> for OccupancyMatchesMoves {
    fn holds(game: &Game) -> bool {
        game.board().occupied_count() == game.moves_played()
    }

    fn description() -> &'static str {
        "Occupied cells match moves played this round"
    }
}

/// X moves first and signs alternate, so X leads O by zero or one.
pub struct SignsAlternate;

impl Invariant<Game> for SignsAlternate {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Sign::X);
        let o = game.board().count(Sign::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or leads it by one"
    }
}

/// A recorded winning line is owned entirely by the winner.
pub struct WinningLineOwned;

impl Invariant<Game> for WinningLineOwned {
    fn holds(game: &Game) -> bool {
        match game.state() {
            RoundState::Won { winner, line } => rules::owns_line(game.board(), &line, winner),
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Winning line is fully owned by the winner"
    }
}

/// All game invariants as one set.
pub type GameInvariants = (OccupancyMatchesMoves, SignsAlternate, WinningLineOwned);

/// Panics in debug builds if any game invariant is broken.
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(false, "Game invariants violated: {:?}", violations);
    }
}
