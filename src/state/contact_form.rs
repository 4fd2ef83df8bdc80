//! Contact form state and validation
//!
//! Validation is pure: `validate` maps the three raw field values to a
//! `ValidationReport` without touching any UI state. Applying the report
//! to the form (and opening the mail client on accept) happens in the
//! boundary layer, not here.

/// Visible valid/invalid marker attached to one input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// No marker yet (initial state, and after a reset)
    #[default]
    Pristine,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    /// Error message, present iff the field is invalid
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(msg) => Some(msg),
            _ => None,
        }
    }

    fn invalid(msg: &str) -> Self {
        FieldStatus::Invalid(msg.to_string())
    }
}

/// One input control of the contact form
#[derive(Debug, Clone)]
pub struct ContactField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub status: FieldStatus,
    pub is_multiline: bool,
}

impl ContactField {
    fn new(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            status: FieldStatus::Pristine,
            is_multiline,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Value with leading/trailing whitespace removed, as validated
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    fn reset(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Pristine;
    }
}

/// Accept/reject verdict for one full validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

/// Per-field results of one validation pass. Every field is always
/// evaluated; there is no cross-field short-circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub name: FieldStatus,
    pub email: FieldStatus,
    pub message: FieldStatus,
}

impl ValidationReport {
    pub fn outcome(&self) -> SubmissionOutcome {
        let all_valid = [&self.name, &self.email, &self.message]
            .iter()
            .all(|s| **s == FieldStatus::Valid);
        if all_valid {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome() == SubmissionOutcome::Accepted
    }
}

/// Validate the three raw field values. Inputs are trimmed before any
/// rule runs; the outcome is all-or-nothing.
pub fn validate(name: &str, email: &str, message: &str) -> ValidationReport {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    let name_status = if name.is_empty() {
        FieldStatus::invalid("Name is required")
    } else {
        FieldStatus::Valid
    };

    let email_status = if email.is_empty() {
        FieldStatus::invalid("Email is required")
    } else if !is_valid_email(email) {
        FieldStatus::invalid("Please enter a valid email")
    } else {
        FieldStatus::Valid
    };

    let message_status = if message.is_empty() {
        FieldStatus::invalid("Message is required")
    } else if message.chars().count() < 10 {
        FieldStatus::invalid("Message must be at least 10 characters")
    } else {
        FieldStatus::Valid
    };

    ValidationReport {
        name: name_status,
        email: email_status,
        message: message_status,
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, non-empty
/// local part, and at least one `.` inside the domain with text on both
/// sides.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Index of the Send button row in the form's focus cycle
pub const SEND_ROW: usize = 3;

/// Fields plus the Send button row
pub const FOCUS_STOPS: usize = 4;

/// The contact form: three fields plus a focus cycle ending on Send
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: ContactField,
    pub email: ContactField,
    pub message: ContactField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: ContactField::new("name", "Name", false),
            email: ContactField::new("email", "Email", false),
            message: ContactField::new("message", "Message", true),
            active_field_index: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FOCUS_STOPS;
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FOCUS_STOPS - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn is_send_row_active(&self) -> bool {
        self.active_field_index == SEND_ROW
    }

    pub fn field(&self, index: usize) -> Option<&ContactField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            _ => None,
        }
    }

    /// Active field, None when the Send row is focused
    pub fn active_field_mut(&mut self) -> Option<&mut ContactField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.message),
            _ => None,
        }
    }

    /// Run a full validation pass over the current values
    pub fn validate(&self) -> ValidationReport {
        validate(&self.name.value, &self.email.value, &self.message.value)
    }

    /// Attach the report's annotations to the fields. Valid fields are
    /// explicitly marked valid so a stale invalid marker never survives a
    /// corrected value.
    pub fn apply_report(&mut self, report: &ValidationReport) {
        self.name.status = report.name.clone();
        self.email.status = report.email.clone();
        self.message.status = report.message.clone();
    }

    /// True if any field currently carries an invalid annotation
    pub fn has_invalid_annotation(&self) -> bool {
        self.name.status.is_invalid()
            || self.email.status.is_invalid()
            || self.message.status.is_invalid()
    }

    /// Clear values and annotations back to the initial clean state
    pub fn reset(&mut self) {
        self.name.reset();
        self.email.reset();
        self.message.reset();
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod email_rule {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_plain_address_is_valid() {
            assert!(is_valid_email("jane@example.com"));
        }

        #[test]
        fn test_subdomains_are_valid() {
            assert!(is_valid_email("jane.doe@mail.example.co.uk"));
        }

        #[test]
        fn test_whitespace_is_invalid() {
            assert!(!is_valid_email("jane doe@example.com"));
            assert!(!is_valid_email("jane@exa mple.com"));
        }

        #[test]
        fn test_missing_at_is_invalid() {
            assert!(!is_valid_email("janeexample.com"));
        }

        #[test]
        fn test_multiple_ats_are_invalid() {
            assert!(!is_valid_email("jane@doe@example.com"));
        }

        #[test]
        fn test_missing_dot_after_at_is_invalid() {
            assert!(!is_valid_email("jane@example"));
        }

        #[test]
        fn test_dot_at_domain_edges_is_invalid() {
            assert!(!is_valid_email("jane@.com"));
            assert!(!is_valid_email("jane@example."));
        }

        #[test]
        fn test_empty_local_part_is_invalid() {
            assert!(!is_valid_email("@example.com"));
        }

        #[test]
        fn test_dot_before_at_alone_is_not_enough() {
            assert!(!is_valid_email("jane.doe@example"));
        }
    }

    mod validate_pass {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_is_rejected_with_message() {
            let report = validate("", "jane@example.com", "A sufficiently long message");
            assert_eq!(report.outcome(), SubmissionOutcome::Rejected);
            assert_eq!(report.name.message(), Some("Name is required"));
            assert_eq!(report.email, FieldStatus::Valid);
            assert_eq!(report.message, FieldStatus::Valid);
        }

        #[test]
        fn test_empty_email_is_rejected_with_message() {
            let report = validate("Jane Doe", "", "A sufficiently long message");
            assert_eq!(report.outcome(), SubmissionOutcome::Rejected);
            assert_eq!(report.email.message(), Some("Email is required"));
        }

        #[test]
        fn test_empty_message_is_rejected_with_message() {
            let report = validate("Jane Doe", "jane@example.com", "");
            assert_eq!(report.outcome(), SubmissionOutcome::Rejected);
            assert_eq!(report.message.message(), Some("Message is required"));
        }

        #[test]
        fn test_malformed_email_annotates_only_email() {
            let report = validate("Jane Doe", "not-an-email", "A valid ten+ char message");
            assert_eq!(report.outcome(), SubmissionOutcome::Rejected);
            assert_eq!(report.email.message(), Some("Please enter a valid email"));
            assert_eq!(report.name, FieldStatus::Valid);
            assert_eq!(report.message, FieldStatus::Valid);
        }

        #[test]
        fn test_short_message_annotates_message() {
            let report = validate("Jane Doe", "jane@example.com", "short");
            assert_eq!(report.outcome(), SubmissionOutcome::Rejected);
            assert_eq!(
                report.message.message(),
                Some("Message must be at least 10 characters")
            );
        }

        #[test]
        fn test_all_valid_is_accepted() {
            let report = validate(
                "Jane Doe",
                "jane@example.com",
                "This is a sufficiently long message.",
            );
            assert_eq!(report.outcome(), SubmissionOutcome::Accepted);
            assert!(report.is_accepted());
        }

        #[test]
        fn test_all_fields_evaluated_even_when_first_fails() {
            let report = validate("", "bad", "short");
            assert!(report.name.is_invalid());
            assert!(report.email.is_invalid());
            assert!(report.message.is_invalid());
        }

        #[test]
        fn test_values_are_trimmed_before_rules() {
            let report = validate("  Jane  ", "  jane@example.com  ", "  padded but long enough  ");
            assert_eq!(report.outcome(), SubmissionOutcome::Accepted);

            // Whitespace-only counts as empty, not malformed
            let report = validate("   ", "jane@example.com", "long enough message");
            assert_eq!(report.name.message(), Some("Name is required"));
        }

        #[test]
        fn test_exactly_ten_chars_passes_length_rule() {
            let report = validate("Jane", "jane@example.com", "1234567890");
            assert_eq!(report.message, FieldStatus::Valid);

            let report = validate("Jane", "jane@example.com", "123456789");
            assert!(report.message.is_invalid());
        }
    }

    mod form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_pristine() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.status, FieldStatus::Pristine);
            assert_eq!(form.email.status, FieldStatus::Pristine);
            assert_eq!(form.message.status, FieldStatus::Pristine);
            assert!(!form.has_invalid_annotation());
        }

        #[test]
        fn test_focus_cycles_through_send_row() {
            let mut form = ContactForm::new();
            for _ in 0..FOCUS_STOPS {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);

            form.prev_field();
            assert_eq!(form.active_field_index, SEND_ROW);
            assert!(form.is_send_row_active());
        }

        #[test]
        fn test_send_row_has_no_field() {
            let mut form = ContactForm::new();
            form.active_field_index = SEND_ROW;
            assert!(form.active_field_mut().is_none());
            assert!(form.field(SEND_ROW).is_none());
        }

        #[test]
        fn test_apply_report_clears_stale_invalid_marker() {
            let mut form = ContactForm::new();
            form.name.status = FieldStatus::Invalid("Name is required".to_string());
            form.name.value = "Jane".to_string();
            form.email.value = "jane@example.com".to_string();
            form.message.value = "A long enough message".to_string();

            let report = form.validate();
            form.apply_report(&report);

            assert_eq!(form.name.status, FieldStatus::Valid);
            assert!(!form.has_invalid_annotation());
        }

        #[test]
        fn test_reset_returns_to_initial_state() {
            let mut form = ContactForm::new();
            form.name.value = "Jane".to_string();
            form.email.status = FieldStatus::Invalid("Email is required".to_string());
            form.active_field_index = 2;

            form.reset();

            assert_eq!(form.name.value, "");
            assert_eq!(form.email.status, FieldStatus::Pristine);
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_resubmitting_after_reset_is_rejected() {
            // Accepted pass, then reset, then an immediate pass over the
            // now-empty fields must reject again.
            let mut form = ContactForm::new();
            form.name.value = "Jane Doe".to_string();
            form.email.value = "jane@example.com".to_string();
            form.message.value = "This is a sufficiently long message.".to_string();
            assert!(form.validate().is_accepted());

            form.reset();
            let report = form.validate();
            assert_eq!(report.outcome(), SubmissionOutcome::Rejected);
            assert_eq!(report.name.message(), Some("Name is required"));
        }

        #[test]
        fn test_push_and_pop_char_edit_active_field() {
            let mut form = ContactForm::new();
            let field = form.active_field_mut().unwrap();
            field.push_char('J');
            field.push_char('o');
            field.pop_char();
            assert_eq!(form.name.value, "J");
        }

        #[test]
        fn test_trimmed_strips_padding() {
            let mut form = ContactForm::new();
            form.name.value = "  Jane  ".to_string();
            assert_eq!(form.name.trimmed(), "Jane");
        }
    }
}
