//! Key handling - maps key events onto state changes
//!
//! Kept free of terminal and runtime concerns so every binding is testable.

use crate::tui_state::{AppState, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop must do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    /// Start a run on the active view
    Submit,
}

/// Page size for PgUp/PgDn
const PAGE_LINES: u16 = 10;

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if state.show_help {
        if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
            state.show_help = false;
        }
        return KeyAction::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match (key.code, ctrl) {
        (KeyCode::F(1), _) => {
            state.show_help = true;
        }
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
            state.next_tab();
        }
        (KeyCode::F(2), _) => {
            state.switch_tab(Tab::Analyze);
        }
        (KeyCode::F(3), _) => {
            state.switch_tab(Tab::Rewrite);
        }
        (KeyCode::Char('t'), true) => {
            if state.active_tab == Tab::Analyze {
                state.analyzer.toggle_mode();
            }
        }
        (KeyCode::Char('r'), true) => {
            state.reset_active();
        }
        (KeyCode::Char('u'), true) => {
            if let Some(input) = state.active_input_mut() {
                input.clear();
            }
        }
        (KeyCode::Char('j'), true) => {
            if state.input_focused && state.accepts_newlines() {
                if let Some(input) = state.active_input_mut() {
                    input.insert('\n');
                }
            }
        }
        (KeyCode::Enter, _) => {
            if state.active_tab == Tab::Analyze && state.analyzer.showing_result() {
                state.reset_active();
            } else {
                return KeyAction::Submit;
            }
        }
        (KeyCode::Esc, _) => {
            state.input_focused = !state.input_focused;
        }
        (KeyCode::PageUp, _) => state.scroll_up(PAGE_LINES),
        (KeyCode::PageDown, _) => state.scroll_down(PAGE_LINES),
        (KeyCode::Up, _) => state.scroll_up(1),
        (KeyCode::Down, _) => state.scroll_down(1),
        (code, false) if state.input_focused => edit_input(state, code),
        _ => {}
    }

    KeyAction::None
}

fn edit_input(state: &mut AppState, code: KeyCode) {
    let Some(input) = state.active_input_mut() else {
        return;
    };
    match code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Insert pasted text into the active input
pub fn handle_paste(state: &mut AppState, text: &str) {
    let keep_newlines = state.accepts_newlines();
    if let Some(input) = state.active_input_mut() {
        let text = text.replace("\r\n", "\n");
        if keep_newlines {
            input.insert_str(&text);
        } else {
            input.insert_str(text.trim());
        }
    }
}
