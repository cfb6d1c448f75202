//! TUI State Management - central state for the UnBias terminal interface
//!
//! All TUI rendering comes from this state. Each view runs the
//! idle -> loading -> succeeded | failed machine on its own; requests are
//! tagged with a generation so a completion that arrives after a reset or tab
//! switch is dropped.

use crate::text_input::TextInput;
use unbias_common::{AnalysisReport, ApiError, InputMode, UiConfig};

pub const ANALYZER_ERROR: &str = "Something went wrong — try again.";
pub const REWRITER_ERROR: &str = "Failed to rewrite text — try again.";

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Analyze,
    Rewrite,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Analyze, Tab::Rewrite];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Analyze => "Analyzer",
            Tab::Rewrite => "Rewriter",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Analyze => Tab::Rewrite,
            Tab::Rewrite => Tab::Analyze,
        }
    }
}

/// Where a view is in its request lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> Phase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Phase::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A request a view has committed to; handed to the runner and back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub view: Tab,
    pub generation: u64,
    pub mode: InputMode,
    pub input: String,
}

/// Completed request chain
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Analysis(Result<AnalysisReport, ApiError>),
    Rewrite(Result<String, ApiError>),
}

/// Analyzer view state
#[derive(Debug, Clone)]
pub struct AnalyzerState {
    pub mode: InputMode,
    pub input: TextInput,
    pub phase: Phase<AnalysisReport>,
    generation: u64,
}

impl AnalyzerState {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            input: TextInput::new(),
            phase: Phase::Idle,
            generation: 0,
        }
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        !self.phase.is_loading() && !self.input.is_empty()
    }

    /// The result replaces the form once an analysis succeeded
    pub fn showing_result(&self) -> bool {
        self.phase.result().is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.phase.is_loading() {
            "Analyzing..."
        } else {
            "Analyze"
        }
    }

    pub fn toggle_mode(&mut self) {
        if !self.showing_result() {
            self.mode = self.mode.toggled();
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if !self.showing_result() {
            self.mode = mode;
        }
    }

    /// Start a run; `None` means no request must be made
    pub fn begin_run(&mut self) -> Option<RunTicket> {
        if self.phase.is_loading() || self.input.is_blank() {
            return None;
        }
        self.phase = Phase::Loading;
        Some(RunTicket {
            view: Tab::Analyze,
            generation: self.generation,
            mode: self.mode,
            input: self.input.as_str().to_string(),
        })
    }

    /// Apply a completion; returns false when the ticket is stale
    pub fn finish(&mut self, ticket: &RunTicket, result: Result<AnalysisReport, ApiError>) -> bool {
        if ticket.view != Tab::Analyze || ticket.generation != self.generation {
            return false;
        }
        self.phase = match result {
            Ok(report) => Phase::Succeeded(report),
            Err(e) => {
                tracing::warn!(error = %e, mode = %ticket.mode, "analysis failed");
                Phase::Failed(ANALYZER_ERROR.to_string())
            }
        };
        true
    }

    /// "Run Another Analysis": clear input, result and error
    pub fn reset(&mut self) {
        self.input.clear();
        self.phase = Phase::Idle;
        self.generation += 1;
    }
}

/// Rewriter view state
#[derive(Debug, Clone, Default)]
pub struct RewriterState {
    pub input: TextInput,
    pub phase: Phase<String>,
    generation: u64,
}

impl RewriterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.phase.is_loading() && !self.input.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.phase.is_loading() {
            "Rewriting..."
        } else {
            "Rewrite Without Bias"
        }
    }

    /// Rewritten text, hidden when empty
    pub fn output(&self) -> Option<&str> {
        self.phase
            .result()
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn begin_run(&mut self) -> Option<RunTicket> {
        if self.phase.is_loading() || self.input.is_blank() {
            return None;
        }
        self.phase = Phase::Loading;
        Some(RunTicket {
            view: Tab::Rewrite,
            generation: self.generation,
            mode: InputMode::Text,
            input: self.input.as_str().to_string(),
        })
    }

    pub fn finish(&mut self, ticket: &RunTicket, result: Result<String, ApiError>) -> bool {
        if ticket.view != Tab::Rewrite || ticket.generation != self.generation {
            return false;
        }
        self.phase = match result {
            Ok(text) => Phase::Succeeded(text),
            Err(e) => {
                tracing::warn!(error = %e, "rewrite failed");
                Phase::Failed(REWRITER_ERROR.to_string())
            }
        };
        true
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.phase = Phase::Idle;
        self.generation += 1;
    }
}

/// Central TUI state - everything rendered on screen comes from this
#[derive(Debug, Clone)]
pub struct AppState {
    pub active_tab: Tab,
    pub analyzer: AnalyzerState,
    pub rewriter: RewriterState,

    /// Analyzer mode restored on reset
    pub default_mode: InputMode,

    /// Whether keystrokes go to the input box
    pub input_focused: bool,

    /// Whether help overlay is shown
    pub show_help: bool,

    /// Scroll offset of the result / output pane
    pub scroll: u16,

    /// Largest useful offset, recorded on every draw
    pub scroll_max: u16,

    /// Animation frame for the loading indicator
    pub spinner_frame: usize,

    /// Plain ASCII glyphs
    pub ascii: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl AppState {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            active_tab: Tab::default(),
            analyzer: AnalyzerState::new(ui.default_mode),
            rewriter: RewriterState::new(),
            default_mode: ui.default_mode,
            input_focused: true,
            show_help: false,
            scroll: 0,
            scroll_max: u16::MAX,
            spinner_frame: 0,
            ascii: ui.ascii,
        }
    }

    /// Switch screens; view-local state does not survive a switch
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active_tab {
            return false;
        }
        self.active_tab = tab;
        self.analyzer.reset();
        self.analyzer.mode = self.default_mode;
        self.rewriter.reset();
        self.scroll = 0;
        self.input_focused = true;
        true
    }

    pub fn next_tab(&mut self) -> bool {
        self.switch_tab(self.active_tab.next())
    }

    /// Start a run on the active view
    pub fn begin_run(&mut self) -> Option<RunTicket> {
        let ticket = match self.active_tab {
            Tab::Analyze => self.analyzer.begin_run(),
            Tab::Rewrite => self.rewriter.begin_run(),
        };
        if ticket.is_some() {
            self.scroll = 0;
        }
        ticket
    }

    /// Route a completion to the view that issued it
    pub fn apply_outcome(&mut self, ticket: &RunTicket, outcome: RunOutcome) -> bool {
        match outcome {
            RunOutcome::Analysis(result) => self.analyzer.finish(ticket, result),
            RunOutcome::Rewrite(result) => self.rewriter.finish(ticket, result),
        }
    }

    /// Reset the active view
    pub fn reset_active(&mut self) {
        match self.active_tab {
            Tab::Analyze => self.analyzer.reset(),
            Tab::Rewrite => self.rewriter.reset(),
        }
        self.scroll = 0;
        self.input_focused = true;
    }

    /// Input box of the active view, if it is currently shown
    pub fn active_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.active_tab {
            Tab::Analyze if self.analyzer.showing_result() => None,
            Tab::Analyze => Some(&mut self.analyzer.input),
            Tab::Rewrite => Some(&mut self.rewriter.input),
        }
    }

    /// Whether the active view accepts line breaks
    pub fn accepts_newlines(&self) -> bool {
        match self.active_tab {
            Tab::Analyze => self.analyzer.mode == InputMode::Text,
            Tab::Rewrite => true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.analyzer.phase.is_loading() || self.rewriter.phase.is_loading()
    }

    /// Advance animations; called once per frame
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.scroll_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbias_common::api::RawAnalysis;

    fn report() -> AnalysisReport {
        AnalysisReport::from_raw(RawAnalysis::default())
    }

    fn failure() -> ApiError {
        ApiError::Http {
            endpoint: "http://localhost:8000/api/analyze".to_string(),
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_blank_input_does_not_start_a_run() {
        let mut analyzer = AnalyzerState::new(InputMode::Text);
        assert!(analyzer.begin_run().is_none());

        analyzer.input.set("   ");
        assert!(analyzer.begin_run().is_none());
        assert_eq!(analyzer.phase, Phase::Idle);
    }

    #[test]
    fn test_whitespace_input_enables_button_but_not_run() {
        let mut rewriter = RewriterState::new();
        rewriter.input.set(" ");
        assert!(rewriter.can_submit());
        assert!(rewriter.begin_run().is_none());
    }

    #[test]
    fn test_second_run_refused_while_loading() {
        let mut analyzer = AnalyzerState::new(InputMode::Text);
        analyzer.input.set("text");
        assert!(analyzer.begin_run().is_some());
        assert!(analyzer.phase.is_loading());
        assert!(!analyzer.can_submit());
        assert_eq!(analyzer.button_label(), "Analyzing...");
        assert!(analyzer.begin_run().is_none());
    }

    #[test]
    fn test_ticket_carries_mode_and_input() {
        let mut analyzer = AnalyzerState::new(InputMode::Url);
        analyzer.input.set("https://news.example/x");
        let ticket = analyzer.begin_run().unwrap();
        assert_eq!(ticket.mode, InputMode::Url);
        assert_eq!(ticket.input, "https://news.example/x");
        assert_eq!(ticket.view, Tab::Analyze);
    }

    #[test]
    fn test_success_then_reset() {
        let mut analyzer = AnalyzerState::new(InputMode::Text);
        analyzer.input.set("text");
        let ticket = analyzer.begin_run().unwrap();

        assert!(analyzer.finish(&ticket, Ok(report())));
        assert!(analyzer.showing_result());
        assert!(!analyzer.phase.is_loading());

        analyzer.reset();
        assert!(analyzer.input.is_empty());
        assert_eq!(analyzer.phase, Phase::Idle);
    }

    #[test]
    fn test_failure_sets_generic_message() {
        let mut analyzer = AnalyzerState::new(InputMode::Text);
        analyzer.input.set("text");
        let ticket = analyzer.begin_run().unwrap();

        analyzer.finish(&ticket, Err(failure()));
        assert_eq!(analyzer.phase.error(), Some(ANALYZER_ERROR));
        assert!(!analyzer.phase.is_loading());
        // Input is kept so the user can retry
        assert_eq!(analyzer.input.as_str(), "text");
    }

    #[test]
    fn test_new_run_clears_previous_error() {
        let mut rewriter = RewriterState::new();
        rewriter.input.set("text");
        let ticket = rewriter.begin_run().unwrap();
        rewriter.finish(&ticket, Err(failure()));
        assert_eq!(rewriter.phase.error(), Some(REWRITER_ERROR));

        rewriter.begin_run().unwrap();
        assert!(rewriter.phase.error().is_none());
        assert!(rewriter.output().is_none());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut analyzer = AnalyzerState::new(InputMode::Text);
        analyzer.input.set("text");
        let ticket = analyzer.begin_run().unwrap();
        analyzer.reset();

        assert!(!analyzer.finish(&ticket, Ok(report())));
        assert_eq!(analyzer.phase, Phase::Idle);
    }

    #[test]
    fn test_mode_locked_while_result_shown() {
        let mut analyzer = AnalyzerState::new(InputMode::Text);
        analyzer.toggle_mode();
        assert_eq!(analyzer.mode, InputMode::Url);

        analyzer.input.set("https://x");
        let ticket = analyzer.begin_run().unwrap();
        analyzer.finish(&ticket, Ok(report()));
        analyzer.toggle_mode();
        assert_eq!(analyzer.mode, InputMode::Url);
    }

    #[test]
    fn test_empty_rewrite_output_is_hidden() {
        let mut rewriter = RewriterState::new();
        rewriter.input.set("text");
        let ticket = rewriter.begin_run().unwrap();
        rewriter.finish(&ticket, Ok(String::new()));
        assert!(rewriter.output().is_none());
        assert!(!rewriter.phase.is_loading());
    }

    #[test]
    fn test_switch_tab_resets_both_views() {
        let mut state = AppState::default();
        state.analyzer.input.set("draft");
        state.analyzer.toggle_mode();
        let ticket = state.begin_run().unwrap();

        assert!(state.switch_tab(Tab::Rewrite));
        assert!(state.analyzer.input.is_empty());
        assert_eq!(state.analyzer.mode, InputMode::Text);
        assert!(!state.is_loading());

        // The in-flight analysis lands after the switch
        assert!(!state.apply_outcome(&ticket, RunOutcome::Analysis(Ok(report()))));
        assert!(!state.analyzer.showing_result());
    }

    #[test]
    fn test_switch_to_same_tab_is_noop() {
        let mut state = AppState::default();
        state.analyzer.input.set("draft");
        assert!(!state.switch_tab(Tab::Analyze));
        assert_eq!(state.analyzer.input.as_str(), "draft");
    }

    #[test]
    fn test_outcome_routed_to_issuing_view() {
        let mut state = AppState::default();
        state.switch_tab(Tab::Rewrite);
        state.rewriter.input.set("loud");
        let ticket = state.begin_run().unwrap();

        assert!(state.apply_outcome(&ticket, RunOutcome::Rewrite(Ok("quiet".to_string()))));
        assert_eq!(state.rewriter.output(), Some("quiet"));
    }

    #[test]
    fn test_input_hidden_behind_result() {
        let mut state = AppState::default();
        state.analyzer.input.set("text");
        let ticket = state.begin_run().unwrap();
        state.apply_outcome(&ticket, RunOutcome::Analysis(Ok(report())));
        assert!(state.active_input_mut().is_none());

        state.reset_active();
        assert!(state.active_input_mut().is_some());
    }

    #[test]
    fn test_newlines_only_for_free_text() {
        let mut state = AppState::default();
        assert!(state.accepts_newlines());
        state.analyzer.toggle_mode();
        assert!(!state.accepts_newlines());
        state.switch_tab(Tab::Rewrite);
        assert!(state.accepts_newlines());
    }

    #[test]
    fn test_spinner_only_advances_while_loading() {
        let mut state = AppState::default();
        state.tick();
        assert_eq!(state.spinner_frame, 0);

        state.analyzer.input.set("text");
        state.begin_run();
        state.tick();
        state.tick();
        assert_eq!(state.spinner_frame, 2);
    }

    #[test]
    fn test_config_defaults_applied() {
        let ui = UiConfig {
            default_mode: InputMode::Url,
            ascii: true,
        };
        let mut state = AppState::new(&ui);
        assert_eq!(state.analyzer.mode, InputMode::Url);
        assert!(state.ascii);

        state.analyzer.toggle_mode();
        state.next_tab();
        state.next_tab();
        assert_eq!(state.analyzer.mode, InputMode::Url);
    }

    #[test]
    fn test_scroll_down_stops_at_recorded_bound() {
        let mut state = AppState::default();
        state.scroll_max = 12;
        state.scroll_down(10);
        state.scroll_down(10);
        state.scroll_down(10);
        assert_eq!(state.scroll, 12);

        state.scroll_up(10);
        assert_eq!(state.scroll, 2);
    }
}
