//! Semantic style builders

use ppf_core::{PackageStatus, Severity};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

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
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" for the focused control
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
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

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

/// Badge style for a package status
pub fn package_status(status: PackageStatus) -> Style {
    let color = match status {
        PackageStatus::Available => palette::STATUS_GREEN,
        PackageStatus::Reserved => palette::STATUS_YELLOW,
        PackageStatus::Sent => palette::STATUS_BLUE,
        PackageStatus::Unknown => palette::TEXT_MUTED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Toast border and icon style
pub fn severity(severity: Severity) -> Style {
    let color = match severity {
        Severity::Info => palette::STATUS_BLUE,
        Severity::Success => palette::STATUS_GREEN,
        Severity::Warning => palette::STATUS_YELLOW,
        Severity::Error => palette::STATUS_RED,
    };
    Style::default().fg(color)
}
