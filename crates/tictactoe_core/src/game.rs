//! Game engine: turns, rounds and the series scoreboard.

use crate::error::MoveError;
use crate::events::{GameEvent, GameObserver};
use crate::rules::{self, WinningLine};
use crate::score::Score;
use crate::types::{Board, Cell, CELL_COUNT, Player, Sign};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Last round number; the move on this round fills the board.
pub const MAX_ROUND: u8 = CELL_COUNT as u8;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for the sign to move to play.
    AwaitingMove,
    /// A line was completed.
    Won {
        /// Sign that completed the line.
        winner: Sign,
        /// First completed line in check order.
        line: WinningLine,
    },
    /// The board filled without a line.
    Tied,
}

impl RoundState {
    /// True for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundState::AwaitingMove)
    }
}

/// Whether a series is underway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesPhase {
    /// Before the first round, or after quitting.
    Idle,
    /// Rounds are being played.
    Playing,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Round goes on with `next` to move.
    Continue {
        /// Sign to move next.
        next: Sign,
    },
    /// The move completed `line`.
    Won {
        /// Sign that moved.
        winner: Sign,
        /// Completed line.
        line: WinningLine,
    },
    /// The move filled the board with no line.
    Tied,
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board cells, row-major.
    pub cells: [Cell; CELL_COUNT],
    /// Sign whose turn it is (the last mover once the round is over).
    pub turn: Sign,
    /// Current round number (1-9).
    pub round: u8,
    /// Round state.
    pub state: RoundState,
    /// Series phase.
    pub phase: SeriesPhase,
    /// Scoreboard.
    pub score: Score,
}

impl Snapshot {
    /// Winning line, if the round was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.state {
            RoundState::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Whether the round is over.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}

/// A series of tic-tac-toe rounds between two players.
///
/// The caller owns the game and drives it; nothing here is global. The turn
/// is never stored: it is derived from the round number, so the two can't
/// drift apart.
pub struct Game {
    pub(crate) board: Board,
    pub(crate) round: u8,
    pub(crate) state: RoundState,
    pub(crate) phase: SeriesPhase,
    pub(crate) score: Score,
    players: [Player; 2],
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a game with a series already underway.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(
            Player::with_default_name(Sign::X),
            Player::with_default_name(Sign::O),
        )
    }

    /// Creates a game waiting on [`Game::start_series`].
    #[instrument]
    pub fn idle() -> Self {
        Self::idle_with_players(
            Player::with_default_name(Sign::X),
            Player::with_default_name(Sign::O),
        )
    }

    /// Like [`Game::with_players`], but waiting on [`Game::start_series`].
    pub fn idle_with_players(first: Player, second: Player) -> Self {
        let mut game = Self::with_players(first, second);
        game.phase = SeriesPhase::Idle;
        game
    }

    /// Creates a playing game with the given players.
    ///
    /// Players are stored by sign; passing them in either order works.
    #[instrument(skip(first, second), fields(first = first.name(), second = second.name()))]
    pub fn with_players(first: Player, second: Player) -> Self {
        let players = if first.sign() == Sign::X {
            [first, second]
        } else {
            [second, first]
        };
        Self {
            board: Board::new(),
            round: 1,
            state: RoundState::AwaitingMove,
            phase: SeriesPhase::Playing,
            score: Score::default(),
            players,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for every future event.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Places the current sign at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the game untouched, if the series is idle,
    /// the round is over, the index is out of range or the cell is taken.
    #[instrument(skip(self), fields(round = self.round, turn = %self.current_turn()))]
    pub fn play_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.check_move(index) {
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        let sign = self.current_turn();
        self.board.set(index, sign)?;
        info!(index, %sign, "Move played");

        let mut events = vec![GameEvent::MovePlayed { index, sign }];
        let outcome = if let Some(line) = rules::completed_line(&self.board, index, sign) {
            self.state = RoundState::Won { winner: sign, line };
            self.score.record_win(sign);
            events.push(GameEvent::RoundWon { winner: sign, line });
            events.push(GameEvent::ScoreChanged(self.score));
            MoveOutcome::Won { winner: sign, line }
        } else if self.round == MAX_ROUND {
            self.state = RoundState::Tied;
            self.score.record_tie();
            events.push(GameEvent::RoundTied);
            events.push(GameEvent::ScoreChanged(self.score));
            MoveOutcome::Tied
        } else {
            self.round += 1;
            MoveOutcome::Continue {
                next: self.current_turn(),
            }
        };

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        debug!(?outcome, "Move evaluated");
        for event in &events {
            self.emit(event);
        }
        Ok(outcome)
    }

    fn check_move(&self, index: usize) -> Result<(), MoveError> {
        if self.phase == SeriesPhase::Idle {
            return Err(MoveError::SeriesIdle);
        }
        if self.is_over() {
            return Err(MoveError::RoundOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::InvalidIndex(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }
        Ok(())
    }

    /// Sign to move: X on odd rounds, O on even ones.
    pub fn current_turn(&self) -> Sign {
        Sign::for_round(self.round)
    }

    /// Whether the round has been won or tied.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Clears the board for a new round. Scores are kept.
    ///
    /// Works from any state, so it doubles as a mid-round restart.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self) {
        self.reset_round();
        info!(score = %self.score, "Round started");
        self.emit(&GameEvent::RoundStarted);
    }

    /// Leaves the idle phase with a fresh round. No-op while playing.
    #[instrument(skip(self))]
    pub fn start_series(&mut self) {
        if self.phase == SeriesPhase::Playing {
            debug!("Series already playing");
            return;
        }
        self.reset_round();
        self.phase = SeriesPhase::Playing;
        info!("Series started");
        self.emit(&GameEvent::SeriesStarted);
    }

    /// Zeroes the scoreboard, clears the round and returns to idle.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn quit_series(&mut self) {
        self.reset_round();
        self.score.clear();
        self.phase = SeriesPhase::Idle;
        info!("Series quit");
        self.emit(&GameEvent::ScoreChanged(self.score));
        self.emit(&GameEvent::SeriesQuit);
    }

    fn reset_round(&mut self) {
        self.board.reset();
        self.round = 1;
        self.state = RoundState::AwaitingMove;
    }

    fn emit(&mut self, event: &GameEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current round number (1-9).
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Moves placed so far this round.
    pub fn moves_played(&self) -> usize {
        if self.is_over() {
            usize::from(self.round)
        } else {
            usize::from(self.round) - 1
        }
    }

    /// Round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The completed line, if the round was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.state {
            RoundState::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Scoreboard.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Series phase.
    pub fn phase(&self) -> SeriesPhase {
        self.phase
    }

    /// Player holding `sign`.
    pub fn player(&self, sign: Sign) -> &Player {
        match sign {
            Sign::X => &self.players[0],
            Sign::O => &self.players[1],
        }
    }

    /// Copy of everything needed to draw the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.board.cells(),
            turn: self.current_turn(),
            round: self.round,
            state: self.state,
            phase: self.phase,
            score: self.score,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("round", &self.round)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("players", &self.players)
            .field("observers", &self.observers.len())
            .finish()
    }
}
