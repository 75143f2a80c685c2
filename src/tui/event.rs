//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Message};

// ============================================================================
// Key Handling
// ============================================================================

/// Maps a key press to a [`Message`], if any.
///
/// When the help overlay is open, any bound key just closes it.
pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    if app.show_help {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(Message::ToggleHelp),
            _ => None,
        };
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Message::ToggleRunning),
        KeyCode::Char('r') => Some(Message::Reset),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    mod key_mapping_tests {
        use super::*;

        #[test]
        fn test_space_toggles_running() {
            let app = App::new();

            assert_eq!(
                handle_key(press(KeyCode::Char(' ')), &app),
                Some(Message::ToggleRunning)
            );
        }

        #[test]
        fn test_r_resets() {
            let app = App::new();

            assert_eq!(
                handle_key(press(KeyCode::Char('r')), &app),
                Some(Message::Reset)
            );
        }

        #[test]
        fn test_question_mark_toggles_help() {
            let app = App::new();

            assert_eq!(
                handle_key(press(KeyCode::Char('?')), &app),
                Some(Message::ToggleHelp)
            );
        }

        #[test]
        fn test_q_and_esc_quit() {
            let app = App::new();

            assert_eq!(handle_key(press(KeyCode::Char('q')), &app), Some(Message::Quit));
            assert_eq!(handle_key(press(KeyCode::Esc), &app), Some(Message::Quit));
        }

        #[test]
        fn test_ctrl_c_quits() {
            let app = App::new();
            let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

            assert_eq!(handle_key(key, &app), Some(Message::Quit));
        }

        #[test]
        fn test_unbound_keys_are_ignored() {
            let app = App::new();

            assert_eq!(handle_key(press(KeyCode::Char('x')), &app), None);
            assert_eq!(handle_key(press(KeyCode::Enter), &app), None);
            assert_eq!(handle_key(press(KeyCode::Up), &app), None);
        }
    }

    mod help_overlay_tests {
        use super::*;

        fn app_with_help_open() -> App {
            App {
                show_help: true,
                ..App::default()
            }
        }

        #[test]
        fn test_close_keys_dismiss_help() {
            let app = app_with_help_open();

            assert_eq!(
                handle_key(press(KeyCode::Char('?')), &app),
                Some(Message::ToggleHelp)
            );
            assert_eq!(
                handle_key(press(KeyCode::Char('q')), &app),
                Some(Message::ToggleHelp)
            );
            assert_eq!(
                handle_key(press(KeyCode::Esc), &app),
                Some(Message::ToggleHelp)
            );
        }

        #[test]
        fn test_timer_keys_do_not_leak_through_help() {
            let app = app_with_help_open();

            assert_eq!(handle_key(press(KeyCode::Char(' ')), &app), None);
            assert_eq!(handle_key(press(KeyCode::Char('r')), &app), None);
        }
    }
}
