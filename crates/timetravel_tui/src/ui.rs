//! Stateless UI rendering.
//!
//! Every frame is drawn from [`App::view`]; nothing here mutates state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_core::{CellView, GameView, Player, Square, Status};

use crate::app::App;
use crate::input::Focus;
use crate::settings::Palette;

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(27), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, panels[0], app, &view, palette);
    draw_history(frame, panels[1], app, &view);

    let status_style = match view.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9/Enter: move  Tab: focus  o: order  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView, palette: &Palette) {
    let block = panel_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(5);
    for (row, cells) in view.cells().chunks(3).enumerate() {
        if row > 0 {
            lines.push(Line::styled(
                "─────┼─────┼─────",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(5);
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let selected = app.focus() == Focus::Board && *cell.position() == app.cursor();
            spans.push(cell_span(cell, selected, palette));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, inner);
}

fn cell_span(cell: &CellView, selected: bool, palette: &Palette) -> Span<'static> {
    let (text, mut style) = match cell.square() {
        Square::Empty => (
            format!("  {}  ", cell.position().to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "  X  ".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "  O  ".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };
    if *cell.winning() {
        style = style.bg(palette.highlight);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;
    let block = panel_block("History", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Move list
            Constraint::Length(1), // Current move
            Constraint::Length(1), // Order toggle
        ])
        .split(inner);

    let entries: Vec<Line> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let text = format!("{}. {}", row + 1, entry.description());
            if focused && row == app.selected() {
                Line::styled(text, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Line::raw(text)
            }
        })
        .collect();

    let scroll = scroll_offset(app.selected(), rows[0].height);
    let list = Paragraph::new(entries).scroll((scroll, 0));
    frame.render_widget(list, rows[0]);

    let current = Paragraph::new(view.current_move_label())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(current, rows[1]);

    let toggle = Paragraph::new(format!("[o] {}", view.order_label()))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(toggle, rows[2]);
}

/// First list row to draw so that row `selected` stays inside a panel of
/// `height` rows.
fn scroll_offset(selected: usize, height: u16) -> u16 {
    let visible = usize::from(height).saturating_sub(1);
    u16::try_from(selected.saturating_sub(visible)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 3);
    }

    #[test]
    fn test_scroll_offset_saturates_instead_of_wrapping() {
        let selected = usize::from(u16::MAX) + 10;
        assert_eq!(scroll_offset(selected, 1), u16::MAX);
    }
}
