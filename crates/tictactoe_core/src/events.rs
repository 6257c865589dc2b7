//! Notifications emitted by the game after each state change.

use crate::rules::WinningLine;
use crate::score::Score;
use crate::types::Sign;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::{debug, info};

/// Something that happened to the game.
///
/// Events are delivered after the change they describe is complete, so an
/// observer reading the game back sees the new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The series left the idle phase.
    SeriesStarted,
    /// A sign was placed.
    MovePlayed {
        /// Cell index (0-8).
        index: usize,
        /// Sign placed.
        sign: Sign,
    },
    /// The move completed a line.
    RoundWon {
        /// Sign that completed the line.
        winner: Sign,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled with no line completed.
    RoundTied,
    /// Scoreboard after a change.
    ScoreChanged(Score),
    /// A fresh round began with an empty board.
    RoundStarted,
    /// Scores were zeroed and the series went back to idle.
    SeriesQuit,
}

/// Receives [`GameEvent`]s from a [`Game`](crate::Game).
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

/// Forwards events into a channel. A dropped receiver is ignored.
impl GameObserver for Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        if self.send(event.clone()).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// Writes every event to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundWon { winner, line } => info!(%winner, ?line, "Round won"),
            GameEvent::RoundTied => info!("Round tied"),
            GameEvent::ScoreChanged(score) => info!(%score, "Score changed"),
            other => debug!(event = ?other, "Game event"),
        }
    }
}
