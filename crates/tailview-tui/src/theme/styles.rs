//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tailview_core::ConnectionState;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Connection indicator ---

/// Icon, label and style for a connection state
pub fn connection_indicator(state: &ConnectionState) -> (&'static str, &'static str, Style) {
    let label = state.label();
    match state {
        ConnectionState::Connecting => ("○", label, Style::default().fg(palette::STATUS_YELLOW)),
        ConnectionState::Open => ("●", label, Style::default().fg(palette::STATUS_BLUE)),
        ConnectionState::Receiving => ("●", label, Style::default().fg(palette::STATUS_GREEN)),
        ConnectionState::Closed { reason: None } => ("○", label, text_muted()),
        ConnectionState::Closed { reason: Some(_) } => (
            "✗",
            label,
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

// --- Block builders ---

/// Rounded bordered container
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
