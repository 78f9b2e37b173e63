//! Contact form state.
//!
//! Four free-text fields, a focus cursor, and a tri-state submission
//! status. Field-shape validation is delegated to the submit gate (all
//! fields must be non-empty); the email's address shape is a precondition,
//! not logic reimplemented here.

use super::relay::{OutboundMessage, SubmitResult, TRANSPORT_FAILED_MESSAGE};

/// Outcome banner state for the last submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Which field the edit cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Email Address",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn all() -> [FormField; 4] {
        [
            FormField::Name,
            FormField::Email,
            FormField::Subject,
            FormField::Message,
        ]
    }
}

/// Contact form state machine
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: FormField,
    status: SubmitStatus,
    error_message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Append a character to the focused field.
    /// Any edit after a terminal status clears the banner back to idle.
    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
        self.reset_status_on_edit();
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
        self.reset_status_on_edit();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// All four fields filled (the native `required` precondition)
    pub fn is_complete(&self) -> bool {
        FormField::all().iter().all(|f| !self.field(*f).is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    /// Enter the submitting state and snapshot the outbound message.
    /// Returns None unless the form is complete and not already in flight.
    pub fn begin_submit(&mut self) -> Option<OutboundMessage> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        self.error_message.clear();
        Some(OutboundMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the delivery outcome of the in-flight submission
    pub fn apply_result(&mut self, result: SubmitResult) {
        self.submitting = false;
        match result {
            SubmitResult::Delivered => {
                self.status = SubmitStatus::Success;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
            }
            SubmitResult::Rejected(message) => {
                self.status = SubmitStatus::Error;
                self.error_message = message;
            }
            SubmitResult::TransportFailed => {
                self.status = SubmitStatus::Error;
                self.error_message = TRANSPORT_FAILED_MESSAGE.to_string();
            }
        }
    }

    fn reset_status_on_edit(&mut self) {
        if self.status != SubmitStatus::Idle {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "John Doe".to_string();
        form.email = "john@example.com".to_string();
        form.subject = "Project Inquiry".to_string();
        form.message = "Hello!".to_string();
        form
    }

    #[test]
    fn test_incomplete_form_cannot_submit() {
        let mut form = filled_form();
        form.message.clear();
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_begin_submit_snapshots_and_blocks_resubmission() {
        let mut form = filled_form();
        let msg = form.begin_submit().expect("complete form submits");
        assert_eq!(msg.name, "John Doe");
        assert!(form.is_submitting());
        // In flight: a second submit is refused
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_success_clears_all_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.apply_result(SubmitResult::Delivered);

        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(!form.is_submitting());
        for field in FormField::all() {
            assert_eq!(form.field(field), "");
        }
    }

    #[test]
    fn test_rejection_surfaces_server_message() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.apply_result(SubmitResult::Rejected("Invalid key".to_string()));

        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.error_message(), "Invalid key");
        // Fields are kept so the user can retry
        assert_eq!(form.name, "John Doe");
    }

    #[test]
    fn test_transport_failure_uses_fixed_message() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.apply_result(SubmitResult::TransportFailed);

        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.error_message(), TRANSPORT_FAILED_MESSAGE);
    }

    #[test]
    fn test_editing_resets_terminal_status() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.apply_result(SubmitResult::Rejected("Invalid key".to_string()));
        assert_eq!(form.status(), SubmitStatus::Error);

        form.insert_char('!');
        assert_eq!(form.status(), SubmitStatus::Idle);

        // Same rule after success, via backspace
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.apply_result(SubmitResult::Delivered);
        assert_eq!(form.status(), SubmitStatus::Success);
        form.focus = FormField::Name;
        form.insert_char('J');
        form.backspace();
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.focus, FormField::Name);
        for _ in 0..4 {
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Name);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Message);
    }
}
