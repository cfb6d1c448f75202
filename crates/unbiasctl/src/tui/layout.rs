//! Layout - TUI grid computation
//!
//! Navbar on top, status bar at the bottom, a centered card in between.
//! Each view splits the card into its own panels; panels that do not fit on a
//! small terminal collapse to zero height instead of overlapping.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const NAVBAR_HEIGHT: u16 = 1;
const STATUS_BAR_HEIGHT: u16 = 1;

/// Card never grows wider than this many columns
pub const MAX_CARD_WIDTH: u16 = 100;

const VIEW_HEADER_HEIGHT: u16 = 3;
const MODE_SWITCH_HEIGHT: u16 = 2;
const BUTTON_HEIGHT: u16 = 1;
const ERROR_HEIGHT: u16 = 3;
const MIN_INPUT_HEIGHT: u16 = 3;
const REWRITE_INPUT_HEIGHT: u16 = 9;

/// Outer frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub navbar: Rect,
    pub card: Rect,
    pub status_bar: Rect,
}

/// Analyzer form (no result yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerFormLayout {
    pub header: Rect,
    pub mode_switch: Rect,
    pub input: Rect,
    pub button: Rect,
    pub error: Rect,
}

/// Analyzer result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerResultLayout {
    pub header: Rect,
    pub body: Rect,
}

/// Rewriter screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriterLayout {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub error: Rect,
    pub output: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    AppLayout {
        navbar: chunks[0],
        card: card_area(chunks[1]),
        status_bar: chunks[2],
    }
}

/// Center the card horizontally with a one-line top margin
fn card_area(body: Rect) -> Rect {
    let width = body.width.saturating_sub(4).min(MAX_CARD_WIDTH);
    let x = body.x + (body.width.saturating_sub(width)) / 2;
    let top_margin = if body.height > 12 { 1 } else { 0 };
    Rect::new(
        x,
        body.y + top_margin,
        width,
        body.height.saturating_sub(top_margin),
    )
}

/// Inner area of the card after padding
pub fn card_inner(card: Rect) -> Rect {
    let pad_x = if card.width > 40 { 3 } else { 1 };
    Rect::new(
        card.x + pad_x,
        card.y + 1u16.min(card.height),
        card.width.saturating_sub(pad_x * 2),
        card.height.saturating_sub(2),
    )
}

pub fn analyzer_form(area: Rect, has_error: bool) -> AnalyzerFormLayout {
    let error_height = if has_error { ERROR_HEIGHT } else { 0 };
    let fixed = VIEW_HEADER_HEIGHT + MODE_SWITCH_HEIGHT + BUTTON_HEIGHT + error_height;
    let input_height = area.height.saturating_sub(fixed).max(MIN_INPUT_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(VIEW_HEADER_HEIGHT),
            Constraint::Length(MODE_SWITCH_HEIGHT),
            Constraint::Length(input_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(error_height),
        ])
        .split(area);

    AnalyzerFormLayout {
        header: chunks[0],
        mode_switch: chunks[1],
        input: chunks[2],
        button: chunks[3],
        error: chunks[4],
    }
}

pub fn analyzer_result(area: Rect) -> AnalyzerResultLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(VIEW_HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    AnalyzerResultLayout {
        header: chunks[0],
        body: chunks[1],
    }
}

pub fn rewriter(area: Rect, has_error: bool) -> RewriterLayout {
    let error_height = if has_error { ERROR_HEIGHT } else { 0 };
    let fixed = VIEW_HEADER_HEIGHT + BUTTON_HEIGHT + error_height;
    // Input keeps its preferred height while the output still gets room
    let input_height = REWRITE_INPUT_HEIGHT
        .min(area.height.saturating_sub(fixed) / 2)
        .max(MIN_INPUT_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(VIEW_HEADER_HEIGHT),
            Constraint::Length(input_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(error_height),
            Constraint::Min(0),
        ])
        .split(area);

    RewriterLayout {
        header: chunks[0],
        input: chunks[1],
        button: chunks[2],
        error: chunks[3],
        output: chunks[4],
    }
}

/// Fit the status bar text into `width` columns
///
/// Segments are dropped from the right until the line fits; the first segment
/// is always kept (truncated if needed).
pub fn compose_status_text(width: u16, segments: &[String]) -> String {
    let width = width as usize;
    let mut text = String::new();

    for (i, segment) in segments.iter().enumerate() {
        let candidate = if i == 0 {
            segment.clone()
        } else {
            format!("{} | {}", text, segment)
        };
        if candidate.chars().count() > width {
            if i == 0 {
                return segment.chars().take(width).collect();
            }
            break;
        }
        text = candidate;
    }

    text
}
