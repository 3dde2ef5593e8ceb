//! Contact form state.
//!
//! The form never transmits anything: a valid submit only latches `sent`.
//! Field validation follows the browser rules for `required` and
//! `type="email"` inputs.

use std::sync::OnceLock;

use regex::Regex;

/// WHATWG "valid e-mail address" production.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

pub const SUBMIT_LABEL: &str = "Send message";
pub const SENT_LABEL: &str = "Message sent \u{2713}";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing(Field),
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(f) => *f,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidEmail => write!(f, "Enter a valid email address"),
        }
    }
}

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First valid submit: `sent` went from false to true
    Sent,
    /// Valid submit while already sent; nothing changed
    AlreadySent,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    sent: bool,
    /// Errors from the last rejected submit, shown inline
    errors: Vec<FieldError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> bool {
        self.sent
    }

    pub fn button_label(&self) -> &'static str {
        if self.sent {
            SENT_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Check every field; returns all failures in field order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::Missing(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Missing(Field::Email));
        } else if !is_valid_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::Missing(Field::Message));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Handle a submit action. Invalid input leaves `sent` untouched.
    pub fn submit(&mut self) -> Result<SubmitOutcome, Vec<FieldError>> {
        if let Err(errors) = self.validate() {
            log::debug!("contact form rejected: {} field error(s)", errors.len());
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        if self.sent {
            return Ok(SubmitOutcome::AlreadySent);
        }
        self.sent = true;
        log::info!("contact form marked as sent (no transmission)");
        Ok(SubmitOutcome::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Hello there".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_submit_flips_sent_once() {
        let mut form = filled();
        assert!(!form.sent());
        assert_eq!(form.button_label(), SUBMIT_LABEL);

        assert_eq!(form.submit(), Ok(SubmitOutcome::Sent));
        assert!(form.sent());
        assert_eq!(form.button_label(), SENT_LABEL);

        assert_eq!(form.submit(), Ok(SubmitOutcome::AlreadySent));
        assert!(form.sent());
    }

    #[test]
    fn malformed_email_blocks_submit() {
        let mut form = filled();
        form.email = "not-an-email".into();
        let errors = form.submit().unwrap_err();
        assert_eq!(errors, vec![FieldError::InvalidEmail]);
        assert!(!form.sent());
        assert_eq!(form.error_for(Field::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let mut form = ContactForm::new();
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::Missing(Field::Name),
                FieldError::Missing(Field::Email),
                FieldError::Missing(Field::Message),
            ]
        );
        assert!(!form.sent());
    }

    #[test]
    fn subject_is_optional() {
        let mut form = filled();
        form.subject.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn errors_clear_after_valid_submit() {
        let mut form = filled();
        form.message.clear();
        assert!(form.submit().is_err());
        assert_eq!(form.errors().len(), 1);
        form.message = "back again".into();
        assert!(form.submit().is_ok());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn invalid_resubmit_after_sent_keeps_sent() {
        let mut form = filled();
        form.submit().unwrap();
        form.email = "nope".into();
        assert!(form.submit().is_err());
        assert!(form.sent());
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("space in@example.com"));
        assert!(!is_valid_email("trailing@dash-.com"));
    }
}
