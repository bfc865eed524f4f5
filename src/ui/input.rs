use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::page::PendingSubmission;
use crate::ui::app::App;

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// Send this request to the analysis endpoint.
    Submit(PendingSubmission),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 's') || is_submit_enter(key) {
        return match app.submit() {
            Some(pending) => InputAction::Submit(pending),
            None => InputAction::None,
        };
    }

    if is_ctrl_char(key, 'u') {
        app.clear_text();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc => app.dismiss_toasts(),
        KeyCode::Enter => app.on_newline(),
        KeyCode::Tab => app.on_char('\t'),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.on_char(ch)
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Ctrl+Enter or Alt+Enter. Plain Enter inserts a newline.
fn is_submit_enter(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::page::RequestController;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        App::new(RequestController::default(), "http://localhost/analyze")
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, key(KeyCode::Char(ch), KeyModifiers::empty()));
        }
    }

    #[test]
    fn characters_are_inserted() {
        let mut app = make_app();
        type_text(&mut app, "Hi");
        handle_key(&mut app, key(KeyCode::Enter, KeyModifiers::empty()));
        type_text(&mut app, "x");
        handle_key(&mut app, key(KeyCode::Backspace, KeyModifiers::empty()));
        assert_eq!(app.controller().state().text, "Hi\n");
    }

    #[test]
    fn ctrl_s_submits_current_text() {
        let mut app = make_app();
        type_text(&mut app, "I love this product");
        let action = handle_key(&mut app, key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        match action {
            InputAction::Submit(pending) => {
                assert_eq!(pending.request.text, "I love this product");
                assert_eq!(pending.generation, 1);
            }
            other => panic!("Expected Submit, got {:?}", other),
        }
        assert!(app.controller().state().is_loading());
    }

    #[test]
    fn alt_enter_submits() {
        let mut app = make_app();
        type_text(&mut app, "ok");
        let action = handle_key(&mut app, key(KeyCode::Enter, KeyModifiers::ALT));
        assert!(matches!(action, InputAction::Submit(_)));
    }

    #[test]
    fn blank_submit_yields_no_action() {
        let mut app = make_app();
        let action = handle_key(&mut app, key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(action, InputAction::None);
        assert!(app.controller().state().validation_error.is_some());
    }

    #[test]
    fn submit_allowed_while_loading() {
        let mut app = make_app();
        type_text(&mut app, "first");
        handle_key(&mut app, key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let action = handle_key(&mut app, key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(matches!(action, InputAction::Submit(PendingSubmission { generation: 2, .. })));
    }

    #[test]
    fn ctrl_u_clears_and_ctrl_q_quits() {
        let mut app = make_app();
        type_text(&mut app, "abc");
        handle_key(&mut app, key(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.controller().state().text, "");
        handle_key(&mut app, key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut release = key(KeyCode::Char('a'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.controller().state().text, "");
    }
}
