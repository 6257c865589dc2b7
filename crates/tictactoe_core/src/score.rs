//! Scoreboard accumulated across the rounds of a series.

use crate::types::Sign;
use serde::{Deserialize, Serialize};

/// Wins per sign plus ties.
///
/// Counters only grow within a series; [`Score::clear`] is reserved for
/// quitting the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Score {
    /// Rounds won by `sign`.
    pub fn wins(&self, sign: Sign) -> u32 {
        match sign {
            Sign::X => self.x_wins,
            Sign::O => self.o_wins,
        }
    }

    /// Tied rounds.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Finished rounds of any outcome.
    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    pub(crate) fn record_win(&mut self, sign: Sign) {
        match sign {
            Sign::X => self.x_wins += 1,
            Sign::O => self.o_wins += 1,
        }
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - {} ties - O {}", self.x_wins, self.ties, self.o_wins)
    }
}
