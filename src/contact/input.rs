//! Keyboard input routing for the contact form.
//!
//! Translates crossterm key events into form edits while the app is in
//! edit mode. Mode switching (Esc) and submission are the app's concern.

use crossterm::event::{KeyCode, KeyModifiers};

use super::form::{ContactForm, FormField};

/// Apply one edit-mode key to the form.
///
/// Returns true if the key was consumed, false if it is not an editing key.
pub fn apply_edit_key(form: &mut ContactForm, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char(c) => {
            if modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            form.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            form.backspace();
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            true
        }
        // Enter inserts a newline in the message body and otherwise
        // advances to the next field, like tabbing through inputs
        KeyCode::Enter => {
            if form.focus == FormField::Message {
                form.insert_char('\n');
            } else {
                form.focus_next();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_go_to_focused_field() {
        let mut form = ContactForm::new();
        for c in "Jo".chars() {
            assert!(apply_edit_key(&mut form, KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(form.name, "Jo");

        apply_edit_key(&mut form, KeyCode::Tab, KeyModifiers::NONE);
        apply_edit_key(&mut form, KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(form.email, "a");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut form = ContactForm::new();
        form.name = "Jon".to_string();
        apply_edit_key(&mut form, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(form.name, "Jo");
    }

    #[test]
    fn test_enter_advances_except_in_message() {
        let mut form = ContactForm::new();
        apply_edit_key(&mut form, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(form.focus, FormField::Email);

        form.focus = FormField::Message;
        apply_edit_key(&mut form, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(form.message, "\n");
        assert_eq!(form.focus, FormField::Message);
    }

    #[test]
    fn test_control_chords_are_not_consumed() {
        let mut form = ContactForm::new();
        assert!(!apply_edit_key(
            &mut form,
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ));
        assert_eq!(form.name, "");
    }
}
