//! Move rejection reasons.

/// Why a call into the game was rejected.
///
/// A rejected call leaves the game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The cell already holds a sign.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The round has been won or tied; start the next round first.
    #[display("Round is already over")]
    RoundOver,

    /// The series has not been started (or was quit).
    #[display("Series has not started")]
    SeriesIdle,
}
