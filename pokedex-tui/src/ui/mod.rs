//! Top-level UI layout — summary frame, status bar, overlays on top.

pub mod overlays;
pub mod status_bar;
pub mod summary;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" Pokedex #{} ", app.index))
        .title_style(theme::panel_title());

    let inner = block.inner(main_area);
    f.render_widget(block, main_area);
    summary::render(f, inner, app);

    status_bar::render(f, status_area, app);

    // Overlays render only while open; a closed overlay leaves nothing
    // behind, not even a backdrop.
    match app.overlay {
        Overlay::Detail => overlays::render_detail(f, main_area, app),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
