//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Counter triggers
    Increment,
    Decrement,
    Reset,
    Refresh,

    // History panel
    ToggleHistory,
    HistoryScrollUp,
    HistoryScrollDown,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
///
/// Counter triggers are suppressed while a call is in flight; this is the
/// only guard against overlapping mutations, matching disabled buttons in a
/// graphical front-end.
pub fn key_to_ui_event(key: KeyEvent, is_loading: bool, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    let trigger = match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(UiEvent::Increment),
        KeyCode::Char('-') | KeyCode::Down => Some(UiEvent::Decrement),
        KeyCode::Char('r') => Some(UiEvent::Reset),
        KeyCode::Char('g') => Some(UiEvent::Refresh),
        _ => None,
    };
    if let Some(event) = trigger {
        return if is_loading { None } else { Some(event) };
    }

    match key.code {
        KeyCode::Char('h') => Some(UiEvent::ToggleHistory),
        KeyCode::Char('k') => Some(UiEvent::HistoryScrollUp),
        KeyCode::Char('j') => Some(UiEvent::HistoryScrollDown),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('q') => Some(UiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_increment_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('+')), false, false), Some(UiEvent::Increment));
        assert_eq!(key_to_ui_event(press(KeyCode::Up), false, false), Some(UiEvent::Increment));
    }

    #[test]
    fn test_triggers_disabled_while_loading() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('+')), true, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('-')), true, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), true, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('g')), true, false), None);
    }

    #[test]
    fn test_history_toggle_allowed_while_loading() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('h')), true, false),
            Some(UiEvent::ToggleHistory)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false, false), Some(UiEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, true, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_any_key_closes_help() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x')), false, true), Some(UiEvent::CloseHelp));
    }
}
