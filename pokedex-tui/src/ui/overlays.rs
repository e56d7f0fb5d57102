//! Overlay widgets — entry detail, error history, help.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use pokedex_core::Pokemon;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// Detail overlay for the loaded entry — full ability and stat lists.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Detail [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(pokemon) = app.request.pokemon() else {
        let text = Paragraph::new(Span::styled("Nothing loaded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let para = Paragraph::new(detail_body(pokemon)).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

fn detail_body(pokemon: &Pokemon) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(Span::styled(
        pokemon.display_name(),
        theme::accent_bold(),
    ))];

    if let Some(url) = &pokemon.sprite_url {
        lines.push(Line::from(vec![
            Span::styled("sprite: ", theme::muted()),
            Span::styled(url.as_str(), theme::neutral()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Abilities", theme::accent_bold())));
    if pokemon.abilities.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", theme::muted())));
    }
    for ability in &pokemon.abilities {
        lines.push(Line::from(vec![
            Span::styled("  - ", theme::muted()),
            Span::styled(ability.as_str(), theme::positive()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Stats", theme::accent_bold())));
    for stat in &pokemon.stats {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>16}: ", stat.name), theme::muted()),
            Span::styled(stat.value.to_string(), theme::accent()),
        ]));
    }

    lines
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let style = if i == app.error_scroll {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(&err.message, style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(&err.context, theme::muted()),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

/// Help overlay — key bindings.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        key_line("h / Left", "previous entry"),
        key_line("l / Right", "next entry"),
        key_line("Enter / v", "view detail"),
        key_line("Esc", "close overlay"),
        key_line("e", "error history"),
        key_line("?", "this help"),
        key_line("q", "quit"),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn key_line<'a>(key: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:>10}  "), theme::accent()),
        Span::styled(action, theme::muted()),
    ])
}
