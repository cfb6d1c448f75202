//! Rendering - navbar, the two views and the status bar

use crate::text_input::TextInput;
use crate::tui_state::{AppState, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};
use unbias_common::{AnalysisReport, InputMode};

use super::layout::{self, compose_status_text};
use super::theme;
use super::utils::{chip_lines, draw_help_overlay, glyph, spinner_frame, wrap_text};

const ANALYZER_TITLE: &str = "UnBias Analyzer";
const ANALYZER_SUBTITLE: &str =
    "Detect nuance, framing, and political leanings in any text or article.";
const REWRITER_TITLE: &str = "Neutralize Bias";
const REWRITER_SUBTITLE: &str =
    "Transform persuasive or subjective text into neutral, objective language.";
const REWRITER_PLACEHOLDER: &str = "Paste biased / persuasive text here...";

/// Draw the whole UI from state; records the scroll bound of the visible pane
pub fn draw_ui(f: &mut Frame, state: &mut AppState) {
    let size = f.size();
    f.render_widget(Block::default().style(theme::page()), size);

    let grid = layout::compute_layout(size);

    draw_navbar(f, grid.navbar, state);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::card());
    f.render_widget(card, grid.card);
    let inner = layout::card_inner(grid.card);

    let scroll_max = match state.active_tab {
        Tab::Analyze => match state.analyzer.phase.result() {
            Some(report) => draw_analyzer_result(f, inner, state, report),
            None => {
                draw_analyzer_form(f, inner, state);
                0
            }
        },
        Tab::Rewrite => draw_rewriter(f, inner, state),
    };
    state.scroll_max = scroll_max;
    state.scroll = state.scroll.min(scroll_max);

    draw_status_bar(f, grid.status_bar, state);

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

/// Brand on the left, tab switcher on the right
fn draw_navbar(f: &mut Frame, area: Rect, state: &AppState) {
    let brand = format!(" {} UnBias Platform", glyph(state.ascii, "✨", "*"));

    let mut tab_spans = Vec::new();
    for tab in Tab::ALL {
        tab_spans.push(Span::styled(
            format!(" {} ", tab.label()),
            theme::nav_tab(tab == state.active_tab),
        ));
        tab_spans.push(Span::raw(" "));
    }
    let tabs_width: u16 = tab_spans.iter().map(|s| s.width() as u16).sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(tabs_width)])
        .split(area);

    let style = Style::default().bg(theme::SURFACE);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(brand, theme::title()))).style(style),
        chunks[0],
    );
    f.render_widget(Paragraph::new(Line::from(tab_spans)).style(style), chunks[1]);
}

fn draw_view_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str, title_style: Style) {
    let lines = vec![
        Line::from(Span::styled(title.to_string(), title_style)),
        Line::from(Span::styled(subtitle.to_string(), theme::subtitle())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_analyzer_form(f: &mut Frame, area: Rect, state: &AppState) {
    let analyzer = &state.analyzer;
    let error = analyzer.phase.error();
    let grid = layout::analyzer_form(area, error.is_some());

    draw_view_header(f, grid.header, ANALYZER_TITLE, ANALYZER_SUBTITLE, theme::title());

    // Mode switcher
    let mut modes = Vec::new();
    for mode in [InputMode::Text, InputMode::Url] {
        modes.push(Span::styled(
            format!(" {} ", mode.label()),
            theme::nav_tab(mode == analyzer.mode),
        ));
        modes.push(Span::raw(" "));
    }
    modes.push(Span::styled("(Ctrl+T)", theme::subtitle()));
    f.render_widget(
        Paragraph::new(Line::from(modes)).alignment(Alignment::Center),
        grid.mode_switch,
    );

    draw_input(
        f,
        grid.input,
        &analyzer.input,
        analyzer.mode.placeholder(),
        state.input_focused,
        state.ascii,
    );
    draw_button(
        f,
        grid.button,
        analyzer.button_label(),
        analyzer.can_submit(),
        analyzer.phase.is_loading(),
        state,
    );
    if let Some(message) = error {
        draw_error(f, grid.error, message);
    }
}

/// Returns the largest scroll offset for the result body
fn draw_analyzer_result(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    report: &AnalysisReport,
) -> u16 {
    let grid = layout::analyzer_result(area);
    draw_view_header(f, grid.header, ANALYZER_TITLE, ANALYZER_SUBTITLE, theme::title());

    let lines = analysis_lines(report, grid.body.width as usize);
    let max = max_scroll(lines.len(), grid.body.height);
    f.render_widget(
        Paragraph::new(lines).scroll((state.scroll.min(max), 0)),
        grid.body,
    );
    max
}

/// Result sections of a finished analysis, pre-wrapped to `width`
pub fn analysis_lines(report: &AnalysisReport, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let rule = || Line::from(Span::styled("─".repeat(width), Style::default().fg(theme::BORDER)));

    lines.push(Line::from(Span::styled("Overall Angle Summary", theme::section_title())));
    for line in wrap_text(&report.angle_summary, width) {
        lines.push(Line::from(line));
    }

    lines.push(Line::from(""));
    lines.push(rule());
    let heading = "Angle Breakdown";
    let badge = format!(" Confidence: {}% ", report.confidence_percent());
    let gap = width.saturating_sub(heading.len() + badge.chars().count()).max(1);
    lines.push(Line::from(vec![
        Span::styled(heading, theme::section_title()),
        Span::raw(" ".repeat(gap)),
        Span::styled(badge, theme::badge()),
    ]));
    for group in report.tag_groups() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(group.title.to_uppercase(), theme::label())));
        lines.extend(chip_lines(group.items, width));
    }

    lines.push(Line::from(""));
    lines.push(rule());
    lines.push(Line::from(Span::styled("Political Spectrum", theme::section_title())));
    lines.push(Line::from(Span::styled(
        report.political_score_label(),
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    )));
    for line in wrap_text(&report.political_summary, width) {
        lines.push(Line::from(Span::styled(line, theme::subtitle())));
    }

    if report.has_reflection() {
        lines.push(Line::from(""));
        lines.push(rule());
        lines.push(Line::from(Span::styled("LLM Reflection", theme::section_title())));
        let inner = width.saturating_sub(2);
        for line in wrap_text(&report.reflection, inner) {
            let padded = format!(" {:<inner$} ", line, inner = inner);
            lines.push(Line::from(Span::styled(padded, theme::reflection_box())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Run Another Analysis ", theme::secondary_button()),
        Span::styled("  (Enter / Ctrl+R)", theme::subtitle()),
    ]));

    lines
}

/// Returns the largest scroll offset for the output box
fn draw_rewriter(f: &mut Frame, area: Rect, state: &AppState) -> u16 {
    let rewriter = &state.rewriter;
    let error = rewriter.phase.error();
    let grid = layout::rewriter(area, error.is_some());

    draw_view_header(
        f,
        grid.header,
        REWRITER_TITLE,
        REWRITER_SUBTITLE,
        theme::section_title(),
    );
    draw_input(
        f,
        grid.input,
        &rewriter.input,
        REWRITER_PLACEHOLDER,
        state.input_focused,
        state.ascii,
    );
    draw_button(
        f,
        grid.button,
        rewriter.button_label(),
        rewriter.can_submit(),
        rewriter.phase.is_loading(),
        state,
    );
    if let Some(message) = error {
        draw_error(f, grid.error, message);
    }

    if let Some(output) = rewriter.output() {
        let output_area = Rect {
            y: grid.output.y + 1u16.min(grid.output.height),
            height: grid.output.height.saturating_sub(1),
            ..grid.output
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::SUCCESS))
            .title(Span::styled(
                format!(" {} Unbiased Result ", glyph(state.ascii, "✨", "*")),
                Style::default()
                    .fg(theme::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ))
            .title(
                Title::from(format!(" {} ", glyph(state.ascii, "⚖", "=")))
                    .alignment(Alignment::Right)
                    .position(Position::Top),
            )
            .style(theme::output_box());

        let inner_width = output_area.width.saturating_sub(4) as usize;
        let lines: Vec<Line<'static>> = wrap_text(output, inner_width)
            .into_iter()
            .map(|l| Line::from(format!(" {}", l)))
            .collect();
        let max = max_scroll(lines.len(), output_area.height.saturating_sub(2));
        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .scroll((state.scroll.min(max), 0)),
            output_area,
        );
        return max;
    }
    0
}

fn draw_input(
    f: &mut Frame,
    area: Rect,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
    ascii: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::input_border(focused))
        .style(Style::default().bg(if focused { theme::SURFACE } else { theme::BG }));

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let cursor = glyph(ascii, "▏", "_").chars().next().unwrap_or('_');

    let lines: Vec<Line<'static>> = if input.is_empty() {
        let shown = if focused {
            format!("{}{}", cursor, placeholder)
        } else {
            placeholder.to_string()
        };
        vec![Line::from(Span::styled(shown, theme::subtitle()))]
    } else {
        let shown = if focused {
            input.with_cursor(cursor)
        } else {
            input.as_str().to_string()
        };
        let wrapped = wrap_text(&shown, inner_width);
        // Keep the tail visible while typing
        let skip = wrapped.len().saturating_sub(inner_height);
        wrapped.into_iter().skip(skip).map(Line::from).collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_button(
    f: &mut Frame,
    area: Rect,
    label: &str,
    enabled: bool,
    loading: bool,
    state: &AppState,
) {
    let text = if loading {
        format!("{} {}", spinner_frame(state.spinner_frame, state.ascii), label)
    } else {
        label.to_string()
    };
    f.render_widget(
        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(theme::button(enabled)),
        area,
    );
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ERROR))
        .style(theme::error_box());
    f.render_widget(
        Paragraph::new(Line::from(message.to_string()))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Version | tab | mode | activity | clock | hints
fn draw_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let time_str = chrono::Local::now().format("%H:%M:%S").to_string();

    let mut segments = vec![format!(" unbiasctl v{}", crate::VERSION), state.active_tab.label().to_string()];
    if state.active_tab == Tab::Analyze {
        segments.push(format!("{} mode", state.analyzer.mode));
    }
    segments.push(activity_label(state));
    segments.push(time_str);
    segments.push("F1 help · Ctrl+C quit".to_string());

    let text = compose_status_text(area.width, &segments);
    f.render_widget(Paragraph::new(Line::from(text)).style(theme::status_bar()), area);
}

fn activity_label(state: &AppState) -> String {
    let spinner = spinner_frame(state.spinner_frame, state.ascii);
    match state.active_tab {
        Tab::Analyze if state.analyzer.phase.is_loading() => format!("Analyzing {}", spinner),
        Tab::Rewrite if state.rewriter.phase.is_loading() => format!("Rewriting {}", spinner),
        Tab::Analyze if state.analyzer.phase.error().is_some() => "Error".to_string(),
        Tab::Rewrite if state.rewriter.phase.error().is_some() => "Error".to_string(),
        _ => "Ready".to_string(),
    }
}

fn max_scroll(total_lines: usize, height: u16) -> u16 {
    let max = total_lines.saturating_sub(height as usize);
    u16::try_from(max).unwrap_or(u16::MAX)
}
