//! Form values and UI status.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Success | Error
//!   └──invalid──▶ Error ──submit──▶ Submitting
//! ```

use crate::error::RegistrationError;
use crate::validator::validate;
use cp3_domain::constants::SUCCESS_MESSAGE;
use cp3_domain::submission::{FieldKey, FieldUpdate, Submission};

/// Which banner is shown and whether the submit button is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Success(String),
}

/// Result of asking the form to start a submission.
#[derive(Debug)]
pub enum Admission {
    /// Validation passed; the snapshot is what gets persisted.
    Accepted(Submission),
    /// A submission is already in flight.
    Busy,
    /// Validation failed; the status already shows the error.
    Rejected(RegistrationError),
}

/// State of one registration form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    submission: Submission,
    status: FormStatus,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field. Never validates and never touches the status.
    pub fn apply(&mut self, update: FieldUpdate) {
        self.submission.apply(update);
    }

    #[must_use]
    pub fn value(&self, key: FieldKey) -> &str {
        self.submission.value(key)
    }

    #[must_use]
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }

    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Success(message) => Some(message),
            _ => None,
        }
    }

    /// Starts a submission: clears banners, validates, and marks the form as submitting.
    pub fn begin_submit(&mut self) -> Admission {
        if self.is_submitting() {
            return Admission::Busy;
        }

        self.status = FormStatus::Idle;
        match validate(&self.submission) {
            Ok(()) => {
                self.status = FormStatus::Submitting;
                Admission::Accepted(self.submission.clone())
            },
            Err(err) => {
                self.status = FormStatus::Error(err.user_message().into_owned());
                Admission::Rejected(err)
            },
        }
    }

    /// Records the outcome of the insert. Success clears every field; failure keeps
    /// them so the user can retry without retyping.
    pub fn complete(&mut self, result: &Result<(), RegistrationError>) {
        match result {
            Ok(()) => {
                self.submission.clear();
                self.status = FormStatus::Success(SUCCESS_MESSAGE.to_owned());
            },
            Err(err) => self.status = FormStatus::Error(err.user_message().into_owned()),
        }
    }

    /// Leaves the submitting state if [`FormState::complete`] never ran.
    pub fn finish(&mut self) {
        if self.is_submitting() {
            self.status = FormStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cp3_domain::constants::{MISSING_FIELD_MESSAGE, PHONE_TOO_SHORT_MESSAGE};

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.apply(FieldUpdate::new(FieldKey::Name, "Ana Gomez"));
        form.apply(FieldUpdate::new(FieldKey::Phone, "3001234567"));
        form.apply(FieldUpdate::new(FieldKey::Address, "Calle 10 #5-20"));
        form.apply(FieldUpdate::new(FieldKey::CityAndNeighborhood, "Bogotá, Chapinero"));
        form
    }

    #[test]
    fn starts_empty_and_idle() {
        let form = FormState::new();
        assert_eq!(form.submission(), &Submission::default());
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(!form.is_submitting());
        assert!(form.error_message().is_none());
        assert!(form.success_message().is_none());
    }

    #[test]
    fn apply_does_not_validate_or_change_status() {
        let mut form = FormState::new();
        form.apply(FieldUpdate::new(FieldKey::Phone, "1"));
        assert_eq!(form.value(FieldKey::Phone), "1");
        assert_eq!(form.value(FieldKey::Name), "");
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn invalid_submission_goes_straight_to_error() {
        let mut form = FormState::new();
        assert!(matches!(form.begin_submit(), Admission::Rejected(_)));
        assert_eq!(form.error_message(), Some(MISSING_FIELD_MESSAGE));
        assert!(!form.is_submitting());

        let mut form = filled();
        form.apply(FieldUpdate::new(FieldKey::Phone, "300"));
        assert!(matches!(form.begin_submit(), Admission::Rejected(_)));
        assert_eq!(form.error_message(), Some(PHONE_TOO_SHORT_MESSAGE));
        assert_eq!(form.value(FieldKey::Name), "Ana Gomez");
    }

    #[test]
    fn accepted_submission_is_a_snapshot() {
        let mut form = filled();
        let Admission::Accepted(snapshot) = form.begin_submit() else {
            panic!("valid form must be accepted");
        };
        assert!(form.is_submitting());
        assert_eq!(&snapshot, form.submission());
        assert!(matches!(form.begin_submit(), Admission::Busy));
    }

    #[test]
    fn success_clears_fields_and_sets_message() {
        let mut form = filled();
        let _ = form.begin_submit();
        form.complete(&Ok(()));
        form.finish();

        assert_eq!(form.submission(), &Submission::default());
        assert_eq!(form.success_message(), Some(SUCCESS_MESSAGE));
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let mut form = filled();
        let _ = form.begin_submit();
        form.complete(&Err(RegistrationError::Unexpected { message: "boom".into(), context: None }));
        form.finish();

        assert_eq!(form.value(FieldKey::Address), "Calle 10 #5-20");
        assert!(form.error_message().is_some());

        assert!(matches!(form.begin_submit(), Admission::Accepted(_)));
        assert!(form.error_message().is_none(), "a retry clears the previous banner");
    }

    #[test]
    fn finish_only_resets_a_pending_submission() {
        let mut form = filled();
        let _ = form.begin_submit();
        form.finish();
        assert_eq!(form.status(), &FormStatus::Idle);

        form.status = FormStatus::Error("kept".to_owned());
        form.finish();
        assert_eq!(form.error_message(), Some("kept"));
    }
}
