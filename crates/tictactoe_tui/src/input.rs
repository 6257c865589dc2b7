//! Key bindings.

use crate::app::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Step;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the start screen.
    StartSeries,
    /// Place at a board index (0-8).
    Place(usize),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    MoveCursor(Step),
    /// Clear the board, keeping scores. Used for both restart and next round.
    NextRound,
    /// Zero the scores and go back to the start screen.
    QuitSeries,
    /// Close the program.
    Exit,
}

/// Maps a key on the given screen to a command.
pub fn command_for(key: KeyEvent, screen: Screen) -> Option<Command> {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(Command::Exit);
    }

    match screen {
        Screen::Start => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::StartSeries),
            _ => None,
        },
        Screen::Board => match key.code {
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|digit| Command::Place(digit as usize - 1)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
            KeyCode::Up => Some(Command::MoveCursor(Step::Up)),
            KeyCode::Down => Some(Command::MoveCursor(Step::Down)),
            KeyCode::Left => Some(Command::MoveCursor(Step::Left)),
            KeyCode::Right => Some(Command::MoveCursor(Step::Right)),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::NextRound),
            _ => None,
        },
        Screen::Result => match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                Some(Command::NextRound)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::QuitSeries),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_place_zero_based() {
        assert_eq!(
            command_for(key(KeyCode::Char('1')), Screen::Board),
            Some(Command::Place(0))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('9')), Screen::Board),
            Some(Command::Place(8))
        );
        assert_eq!(command_for(key(KeyCode::Char('0')), Screen::Board), None);
    }

    #[test]
    fn test_bindings_depend_on_screen() {
        assert_eq!(command_for(key(KeyCode::Char('5')), Screen::Start), None);
        assert_eq!(
            command_for(key(KeyCode::Enter), Screen::Start),
            Some(Command::StartSeries)
        );
        assert_eq!(
            command_for(key(KeyCode::Enter), Screen::Result),
            Some(Command::NextRound)
        );
        assert_eq!(command_for(key(KeyCode::Char('q')), Screen::Board), None);
        assert_eq!(
            command_for(key(KeyCode::Char('q')), Screen::Result),
            Some(Command::QuitSeries)
        );
    }

    #[test]
    fn test_exit_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for screen in [Screen::Start, Screen::Board, Screen::Result] {
            assert_eq!(command_for(key(KeyCode::Esc), screen), Some(Command::Exit));
            assert_eq!(command_for(ctrl_c, screen), Some(Command::Exit));
        }
    }

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(
            command_for(key(KeyCode::Left), Screen::Board),
            Some(Command::MoveCursor(Step::Left))
        );
    }
}
