//! Style tokens — neon accents on the terminal's dark background.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);

/// Electric cyan — focus, highlights.
pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Neon green — success.
pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

/// Hot pink — failures.
pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

/// Neon orange — alerts.
pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

/// Cool purple — secondary info.
pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

/// Steel blue — hints, secondary text.
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Dimmed — controls that are currently inoperative.
pub fn disabled() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

pub fn panel_border() -> Style {
    accent()
}

pub fn panel_title() -> Style {
    accent_bold()
}
