//! Utilities - text wrapping, glyphs and the help overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme;

/// Braille spinner frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII fallback spinner
const ASCII_FRAMES: &[&str] = &["|", "/", "-", "\\"];

pub fn spinner_frame(frame: usize, ascii: bool) -> &'static str {
    let frames = if ascii { ASCII_FRAMES } else { SPINNER_FRAMES };
    frames[frame % frames.len()]
}

/// Pick the emoji or its ASCII stand-in
pub fn glyph(ascii: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if ascii {
        plain
    } else {
        fancy
    }
}

/// Wrap text to width, keeping explicit line breaks and blank lines
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut wrapped = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            wrapped.push(String::new());
            continue;
        }
        wrapped.extend(
            textwrap::wrap(paragraph, width)
                .into_iter()
                .map(|line| line.into_owned()),
        );
    }

    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}

/// Lay tags out as chips, flowing onto new lines at `width`
pub fn chip_lines(items: &[String], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for item in items {
        let chip = format!(" {} ", item);
        let chip_width = chip.chars().count();
        if used > 0 && used + 1 + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(Span::styled(chip, theme::chip()));
        used += chip_width;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Draw help overlay
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(theme::PRIMARY).add_modifier(Modifier::BOLD);
    let bindings: &[(&str, &str)] = &[
        ("Tab", "Switch between Analyzer and Rewriter"),
        ("F2 / F3", "Go to Analyzer / Rewriter"),
        ("Enter", "Run (or start over from a result)"),
        ("Ctrl+J", "New line in the input"),
        ("Ctrl+T", "Toggle text / article link"),
        ("Ctrl+R", "Reset the current view"),
        ("Ctrl+U", "Clear input"),
        ("Esc", "Focus / unfocus the input"),
        ("Left/Right", "Move the cursor"),
        ("Home/End", "Start / end of the input"),
        ("Bksp/Del", "Delete before / after the cursor"),
        ("PgUp/PgDn", "Scroll results"),
        ("Up/Down", "Scroll one line"),
        ("F1", "Toggle help"),
        ("Ctrl+C", "Exit"),
    ];

    let mut help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme::section_title())),
        Line::from(""),
    ];
    for (binding, action) in bindings {
        help_text.push(Line::from(vec![
            Span::styled(format!("{:<10}", binding), key),
            Span::raw(" "),
            Span::raw(*action),
        ]));
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "Press F1 to close",
        Style::default().fg(theme::TEXT_LIGHT),
    )));

    let help_area = centered_rect(60, 60, area);

    let help_block = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::PRIMARY)),
        )
        .style(theme::card());

    f.render_widget(Clear, help_area);
    f.render_widget(help_block, help_area);
}

/// Create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
