//! Submit-time checks. Nothing here runs on keystrokes.

use crate::error::RegistrationError;
use cp3_domain::constants::MIN_PHONE_LENGTH;
use cp3_domain::submission::Submission;

/// Checks that every field is filled in and that the phone is long enough.
///
/// Blank fields are reported before the phone length. The phone rule counts characters
/// of the raw value and does not require digits.
///
/// # Errors
/// * [`RegistrationError::MissingField`] listing the blank fields in form order.
/// * [`RegistrationError::PhoneTooShort`] if the phone has fewer than
///   [`MIN_PHONE_LENGTH`] characters.
pub fn validate(submission: &Submission) -> Result<(), RegistrationError> {
    let blank = submission.blank_fields();
    if !blank.is_empty() {
        return Err(RegistrationError::MissingField { fields: blank, context: None });
    }

    let length = submission.phone.chars().count();
    if length < MIN_PHONE_LENGTH {
        return Err(RegistrationError::PhoneTooShort { length, context: None });
    }

    Ok(())
}
