//! Theme - design-system palette and reusable styles

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Rgb(79, 70, 229); // Indigo 600
pub const PRIMARY_DARK: Color = Color::Rgb(67, 56, 202); // Indigo 700
pub const SECONDARY: Color = Color::Rgb(243, 244, 246); // Gray 100
pub const TEXT: Color = Color::Rgb(31, 41, 55); // Gray 800
pub const TEXT_LIGHT: Color = Color::Rgb(107, 114, 128); // Gray 500
pub const SURFACE: Color = Color::Rgb(255, 255, 255);
pub const BORDER: Color = Color::Rgb(229, 231, 235);
pub const BG: Color = Color::Rgb(250, 250, 251);
pub const SUCCESS: Color = Color::Rgb(16, 185, 129);
pub const ERROR: Color = Color::Rgb(239, 68, 68);
pub const ACCENT: Color = Color::Rgb(238, 242, 255); // Indigo 50

pub const ERROR_BG: Color = Color::Rgb(254, 242, 242);
pub const REFLECTION_BG: Color = Color::Rgb(17, 24, 39);
pub const OUTPUT_BG: Color = Color::Rgb(240, 253, 244);
pub const OUTPUT_TEXT: Color = Color::Rgb(6, 78, 59);

pub fn page() -> Style {
    Style::default().bg(BG).fg(TEXT)
}

pub fn card() -> Style {
    Style::default().bg(SURFACE).fg(TEXT)
}

pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(TEXT_LIGHT)
}

pub fn section_title() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(TEXT_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn chip() -> Style {
    Style::default().bg(ACCENT).fg(PRIMARY)
}

pub fn badge() -> Style {
    Style::default()
        .bg(SUCCESS)
        .fg(SURFACE)
        .add_modifier(Modifier::BOLD)
}

/// Input box border, highlighted while focused
pub fn input_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Primary action button, dimmed when disabled
pub fn button(enabled: bool) -> Style {
    let style = Style::default()
        .bg(PRIMARY)
        .fg(SURFACE)
        .add_modifier(Modifier::BOLD);
    if enabled {
        style
    } else {
        style.bg(PRIMARY_DARK).add_modifier(Modifier::DIM)
    }
}

pub fn secondary_button() -> Style {
    Style::default()
        .bg(SECONDARY)
        .fg(TEXT)
        .add_modifier(Modifier::BOLD)
}

/// Navbar tab, active tab on the accent background
pub fn nav_tab(active: bool) -> Style {
    if active {
        Style::default()
            .bg(ACCENT)
            .fg(PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_LIGHT)
    }
}

pub fn error_box() -> Style {
    Style::default().bg(ERROR_BG).fg(ERROR)
}

pub fn reflection_box() -> Style {
    Style::default().bg(REFLECTION_BG).fg(SUCCESS)
}

pub fn output_box() -> Style {
    Style::default().bg(OUTPUT_BG).fg(OUTPUT_TEXT)
}

pub fn status_bar() -> Style {
    Style::default().bg(TEXT).fg(BORDER)
}
