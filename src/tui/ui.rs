//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::{Mark, Position, Square, Status, step_label};

use super::app::App;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const HISTORY_WIDTH: u16 = 40;

/// Screen regions for one frame.
struct Screen {
    title: Rect,
    board: Rect,
    history: Option<Rect>,
    status: Rect,
}

fn split_screen(area: Rect, show_history: bool) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT), // Board and history
            Constraint::Length(3), // Status
        ])
        .split(area);

    let (board, history) = if show_history {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH), Constraint::Length(HISTORY_WIDTH)])
            .split(chunks[1]);
        (cols[0], Some(cols[1]))
    } else {
        (chunks[1], None)
    };

    Screen {
        title: chunks[0],
        board: center_rect(board, BOARD_WIDTH, BOARD_HEIGHT),
        history,
        status: chunks[2],
    }
}

/// Rectangles of the nine cells, in index order.
fn cell_rects(board_area: Rect) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = board_area.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = board_area.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board_area);
    }
    cells
}

/// Maps a terminal coordinate to the cell drawn there.
pub fn cell_at(area: Rect, show_history: bool, column: u16, row: u16) -> Option<Position> {
    let screen = split_screen(area, show_history);
    Position::ALL.into_iter().find(|pos| {
        let cell = cell_rects(screen.board)[pos.to_index()];
        column >= cell.x && column < cell.x + cell.width && row >= cell.y && row < cell.y + cell.height
    })
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = split_screen(frame.area(), app.show_history());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_board(frame, screen.board, app);

    if let Some(area) = screen.history {
        draw_history(frame, area, app);
    }

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(app.message().to_string()));
    frame.render_widget(status, screen.status);
}

fn status_line(app: &App) -> String {
    let game = app.game();
    if app.is_browsing() {
        return format!("Viewing move #{} of {}", app.displayed_step(), game.move_count());
    }
    match game.status() {
        Status::Next(_) if game.is_draw() => "Draw".to_string(),
        status => status.to_string(),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let cells = cell_rects(area);
    let separator = Style::default().fg(Color::DarkGray);

    for row in 1..3u16 {
        let y = area.y + row * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(area.x, y, area.width, 1).intersection(area);
        frame.render_widget(
            Paragraph::new("─".repeat(area.width as usize)).style(separator),
            line,
        );
    }
    for col in 1..3u16 {
        let x = area.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = area.y + row * (CELL_HEIGHT + 1);
            let bar = Rect::new(x, y, 1, CELL_HEIGHT).intersection(area);
            frame.render_widget(Paragraph::new("│\n│\n│").style(separator), bar);
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.to_index()], app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let palette = app.palette();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let (symbol, base_style) = match app.displayed_board().get(pos) {
        Square::Empty => (format!("{}", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => ("X".to_string(), bold.fg(palette.x)),
        Square::Occupied(Mark::O) => ("O".to_string(), bold.fg(palette.o)),
    };

    let style = if pos == app.cursor() && !app.is_browsing() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(symbol, style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let moves = app.game().moves();
    let items: Vec<ListItem> = (0..=moves.len())
        .map(|step| {
            let mv = step.checked_sub(1).and_then(|i| moves.get(i));
            ListItem::new(format!("{}. {}", step, step_label(step, mv)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut state = ListState::default().with_selected(Some(app.displayed_step()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
