//! Stateless rendering of a [`DisplayManager`].

use super::display::DisplayManager;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, GameStatus, Seat};

/// Width of one rendered cell, in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one rendered cell, in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Areas of the screen sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title bar.
    pub title: Rect,
    /// Region the board is centered in.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the terminal area into title, board, status and help.
///
/// The board takes whatever rows are left, so on short terminals it is
/// clipped before the status line is.
pub fn screen_layout(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    Screen {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Areas of the nine cells, centered in `board` and clipped to it, in index
/// order.
pub fn cell_areas(board: Rect) -> [Rect; 9] {
    let left = board.x + board.width.saturating_sub(BOARD_WIDTH) / 2;
    let top = board.y + board.height.saturating_sub(BOARD_HEIGHT) / 2;
    std::array::from_fn(|index| {
        let row = (index / 3) as u16;
        let col = (index % 3) as u16;
        Rect::new(
            left + col * (CELL_WIDTH + 1),
            top + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    })
}

/// Draws the whole UI.
pub fn draw(frame: &mut Frame, display: &DisplayManager) {
    let area = frame.area();
    let screen = screen_layout(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, screen.title);

    draw_board(frame, screen.board, display);

    let status = Paragraph::new(display.status_text())
        .style(status_style(display))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, screen.status);

    let help = Paragraph::new("1-9 / click: play | Arrows + Enter: cursor | R: restart | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, screen.help);
}

fn status_style(display: &DisplayManager) -> Style {
    match display.game().status() {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Tied => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, display: &DisplayManager) {
    let clip = area.intersection(frame.area());
    let cells = cell_areas(clip);
    let game = display.game();
    let winning = game.winning_line();

    for row in 0..3 {
        if row > 0 {
            let first = cells[row * 3];
            let line = Rect::new(first.x, first.y.saturating_sub(1), BOARD_WIDTH, 1);
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, line.intersection(clip));
        }
        for col in 1..3 {
            let cell = cells[row * 3 + col];
            let bar = Rect::new(cell.x.saturating_sub(1), cell.y, 1, CELL_HEIGHT);
            let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, bar.intersection(clip));
        }
    }

    for (index, cell_area) in cells.iter().enumerate() {
        let highlight_win = winning.is_some_and(|line| line.contains(&index));
        let cell = game.board().cells()[index];
        let (symbol, mut style) = match cell {
            Cell::Empty => (
                (index + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Cell::Marked(marker) => (marker.to_string(), marker_style(display, marker)),
        };
        if highlight_win {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        if index == display.cursor().to_index() && !game.is_game_over() {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!(" {} ", symbol), style)),
            Line::from(""),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, *cell_area);
    }
}

fn marker_style(display: &DisplayManager, marker: char) -> Style {
    let players = display.game().players();
    let color = if marker == players[Seat::First.index()].marker() {
        Color::Blue
    } else {
        Color::Red
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
