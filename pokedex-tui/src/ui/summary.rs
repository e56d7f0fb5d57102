//! Summary view — loading/error indicators, the loaded entry, pager hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, RequestState};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let body = Paragraph::new(body_lines(app)).wrap(Wrap { trim: true });
    f.render_widget(body, chunks[0]);

    let pager = Paragraph::new(pager_line(app));
    f.render_widget(pager, chunks[1]);
}

/// Content lines for the current request state.
fn body_lines(app: &AppState) -> Vec<Line<'_>> {
    match &app.request {
        RequestState::Idle => vec![Line::from(Span::styled("Starting...", theme::muted()))],
        RequestState::Loading => vec![Line::from(Span::styled("Loading...", theme::muted()))],
        RequestState::Failed(message) => {
            vec![Line::from(Span::styled(message.as_str(), theme::negative()))]
        }
        RequestState::Loaded(pokemon) => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(pokemon.display_name(), theme::accent_bold())),
            ];
            match &pokemon.sprite_url {
                Some(url) => lines.push(Line::from(vec![
                    Span::styled("sprite: ", theme::muted()),
                    Span::styled(url.as_str(), theme::neutral()),
                ])),
                None => lines.push(Line::from(Span::styled("(no sprite)", theme::muted()))),
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter to view abilities and stats",
                theme::muted(),
            )));
            lines
        }
    }
}

/// Pager hint line; inoperative actions render dimmed.
fn pager_line(app: &AppState) -> Line<'static> {
    let style_for = |enabled: bool| {
        if enabled {
            theme::accent()
        } else {
            theme::disabled()
        }
    };

    Line::from(vec![
        Span::styled("[h/← Previous]", style_for(app.prev_enabled())),
        Span::raw("  "),
        Span::styled("[Enter View]", style_for(app.view_enabled())),
        Span::raw("  "),
        Span::styled("[l/→ Next]", style_for(app.next_enabled())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use pokedex_core::{Pokemon, StatValue};

    fn flatten(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn app_with(request: RequestState) -> AppState {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        let mut app = AppState::new(cmd_tx, resp_rx);
        app.request = request;
        app
    }

    #[test]
    fn loading_shows_indicator_only() {
        let app = app_with(RequestState::Loading);
        let lines = body_lines(&app);
        assert_eq!(lines.len(), 1);
        assert_eq!(flatten(&lines[0]), "Loading...");
    }

    #[test]
    fn failure_shows_message_verbatim() {
        let app = app_with(RequestState::Failed("Network Error".into()));
        let lines = body_lines(&app);
        // Only the error shows: no loading indicator, no summary.
        assert_eq!(lines.len(), 1);
        assert_eq!(flatten(&lines[0]), "Network Error");
    }

    #[test]
    fn loaded_shows_name_and_sprite() {
        let app = app_with(RequestState::Loaded(Pokemon {
            index: 1,
            name: "bulbasaur".into(),
            sprite_url: Some("u1".into()),
            abilities: vec!["overgrow".into()],
            stats: vec![StatValue {
                name: "hp".into(),
                value: 45,
            }],
        }));
        let text: Vec<String> = body_lines(&app).iter().map(flatten).collect();
        assert!(text.iter().any(|l| l == "Bulbasaur"));
        assert!(text.iter().any(|l| l.contains("u1")));
    }

    #[test]
    fn pager_dims_prev_at_index_one() {
        let app = app_with(RequestState::Idle);
        let line = pager_line(&app);
        assert_eq!(line.spans[0].style, theme::disabled());
        assert_eq!(line.spans[4].style, theme::accent());
    }
}
