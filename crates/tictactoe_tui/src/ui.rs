//! Stateless UI rendering.

use crate::app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::{Cell, Position, RoundState, Sign, Snapshot};

const TITLE: &str = "Tic Tac Toe";

/// Draws whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Start => draw_start(frame, app),
        Screen::Board => draw_game(frame, app),
        Screen::Result => {
            draw_game(frame, app);
            draw_result(frame, app);
        }
    }
}

fn sign_color(sign: Sign) -> Color {
    match sign {
        Sign::X => Color::Blue,
        Sign::O => Color::Red,
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_start(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    let x = app.game().player(Sign::X).name();
    let o = app.game().player(Sign::O).name();
    let text = vec![
        Line::from(vec![
            Span::styled(x, Style::default().fg(sign_color(Sign::X))),
            Span::raw(" vs "),
            Span::styled(o, Style::default().fg(sign_color(Sign::O))),
        ]),
        Line::from(""),
        Line::from(app.status_message()),
        Line::from(Span::styled(
            "Esc: Exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let body = center_rect(chunks[1], 40, 6);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), body);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Scoreboard
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Help
        ])
        .split(frame.area());

    let snapshot = app.game().snapshot();

    draw_title(frame, chunks[0]);
    draw_scoreboard(frame, chunks[1], app, &snapshot);
    draw_board(frame, chunks[2], app, &snapshot);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-9 / arrows+Enter: Move | R: Restart round | Esc: Exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    // The side to move gets a highlighted border while the round is live.
    let tally = |sign: Sign| {
        let active = !snapshot.is_over() && snapshot.turn == sign;
        let border = if active {
            Style::default().fg(sign_color(sign)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(snapshot.score.wins(sign).to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(sign_color(sign)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!("{} ({})", app.game().player(sign).name(), sign)),
            )
    };

    frame.render_widget(tally(Sign::X), cols[0]);
    frame.render_widget(
        Paragraph::new(snapshot.score.ties().to_string())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Ties")),
        cols[1],
    );
    frame.render_widget(tally(Sign::O), cols[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, snapshot, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        let index = row * 3 + col;
        draw_cell(frame, cols[col * 2], app, snapshot, index);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot, index: usize) {
    let (symbol, mut style) = match snapshot.cells[index] {
        Cell::Empty if app.show_cell_numbers() => (
            format!(" {} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => ("   ".to_string(), Style::default()),
        Cell::Occupied(sign) => (
            format!(" {} ", sign),
            Style::default()
                .fg(sign_color(sign))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if let RoundState::Won { winner, line } = snapshot.state {
        if line.contains(&index) {
            style = style.bg(sign_color(winner)).fg(Color::White);
        }
    } else if !snapshot.is_over() && Position::from_index(index) == Some(app.cursor()) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the glyph in the 3-line cell.
    let inner = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_result(frame: &mut Frame, app: &App) {
    let snapshot = app.game().snapshot();
    let area = center_rect(frame.area(), 44, 7);

    let headline = match snapshot.state {
        RoundState::Won { winner, .. } => Line::from(vec![
            Span::styled(
                app.game().player(winner).name(),
                Style::default()
                    .fg(sign_color(winner))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" takes the round"),
        ]),
        _ => Line::from(Span::styled(
            "It's a Tie!",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
    };

    let text = vec![
        headline,
        Line::from(snapshot.score.to_string()),
        Line::from(""),
        Line::from("N: Next round | Q: Quit"),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Round over")),
        area,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
