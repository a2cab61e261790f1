//! Key-to-action mapping for the dashboard
//!
//! Converts raw `(KeyCode, KeyModifiers)` pairs into `KeyAction` values for
//! the current input mode, so that each key press resolves to at most one
//! action. Printable keys in text fields are left to the focused `TextInput`.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::desk::FormField;

/// All possible actions the dashboard can dispatch from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    // Search
    FocusSearch,
    ExitSearch,
    ClearSearchAndExit,

    // Selected card
    NextStatus,
    PrevStatus,

    // Filters
    CycleCategory { forward: bool },
    CyclePriority { forward: bool },
    CycleStatusFilter { forward: bool },
    ClearFilters,
    Refresh,

    // Form
    OpenForm,
    CloseForm,
    NextField,
    PrevField,
    CycleFieldValue { forward: bool },
    SubmitForm,
    ResetForm,

    // App
    Quit,
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Search,
    Form(FormField),
}

/// Map a raw key event to an abstract `KeyAction`.
///
/// Returns `None` when the key has no mapping in the current mode (e.g.
/// typing into the search box or a form text field).
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, mode: Mode) -> Option<KeyAction> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && code == KeyCode::Char('q') {
        return Some(KeyAction::Quit);
    }

    match mode {
        Mode::List => list_key(code),
        Mode::Search => search_key(code),
        Mode::Form(field) => form_key(code, ctrl, field),
    }
}

fn list_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(KeyAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(KeyAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(KeyAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(KeyAction::GoToBottom),
        KeyCode::PageDown => Some(KeyAction::PageDown),
        KeyCode::PageUp => Some(KeyAction::PageUp),
        KeyCode::Char('/') => Some(KeyAction::FocusSearch),
        KeyCode::Char('s') | KeyCode::Right => Some(KeyAction::NextStatus),
        KeyCode::Char('S') | KeyCode::Left => Some(KeyAction::PrevStatus),
        KeyCode::Char('c') => Some(KeyAction::CycleCategory { forward: true }),
        KeyCode::Char('C') => Some(KeyAction::CycleCategory { forward: false }),
        KeyCode::Char('p') => Some(KeyAction::CyclePriority { forward: true }),
        KeyCode::Char('P') => Some(KeyAction::CyclePriority { forward: false }),
        KeyCode::Char('t') => Some(KeyAction::CycleStatusFilter { forward: true }),
        KeyCode::Char('T') => Some(KeyAction::CycleStatusFilter { forward: false }),
        KeyCode::Char('x') => Some(KeyAction::ClearFilters),
        KeyCode::Char('r') => Some(KeyAction::Refresh),
        KeyCode::Char('n') => Some(KeyAction::OpenForm),
        _ => None,
    }
}

fn search_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => Some(KeyAction::ExitSearch),
        KeyCode::Esc => Some(KeyAction::ClearSearchAndExit),
        _ => None,
    }
}

fn form_key(code: KeyCode, ctrl: bool, field: FormField) -> Option<KeyAction> {
    if ctrl {
        return match code {
            KeyCode::Char('s') => Some(KeyAction::SubmitForm),
            KeyCode::Char('r') => Some(KeyAction::ResetForm),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(KeyAction::CloseForm),
        KeyCode::Tab | KeyCode::Down => Some(KeyAction::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(KeyAction::PrevField),
        KeyCode::Enter if field.is_text() => Some(KeyAction::NextField),
        KeyCode::Enter => Some(KeyAction::SubmitForm),
        KeyCode::Right | KeyCode::Char('l') if !field.is_text() => {
            Some(KeyAction::CycleFieldValue { forward: true })
        }
        KeyCode::Left | KeyCode::Char('h') if !field.is_text() => {
            Some(KeyAction::CycleFieldValue { forward: false })
        }
        _ => None,
    }
}
