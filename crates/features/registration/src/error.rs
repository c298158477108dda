use cp3_domain::constants::{
    MIN_PHONE_LENGTH, MISSING_FIELD_MESSAGE, PERSISTENCE_MESSAGE_PREFIX, PHONE_TOO_SHORT_MESSAGE,
    UNEXPECTED_MESSAGE,
};
use cp3_domain::submission::FieldKey;
use cp3_store::StoreError;
use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[cp3_derive::cp3_error]
pub enum RegistrationError {
    /// One or more fields are empty or whitespace.
    #[error("Required fields are blank{}: {fields:?}", format_context(.context))]
    MissingField { fields: Vec<FieldKey>, context: Option<Cow<'static, str>> },

    /// The phone has fewer than the minimum number of characters.
    #[error(
        "Phone has {length} characters, at least {min} required{}",
        format_context(.context),
        min = MIN_PHONE_LENGTH
    )]
    PhoneTooShort { length: usize, context: Option<Cow<'static, str>> },

    /// The store refused the row or could not be reached.
    #[error("Persisting registration failed{}: {source}", format_context(.context))]
    Persistence {
        #[source]
        source: StoreError,
        context: Option<Cow<'static, str>>,
    },

    /// Anything else that went wrong while submitting (a panicking store call).
    #[error("Unexpected submission failure{}: {message}", format_context(.context))]
    Unexpected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    /// Banner text shown to the user.
    #[must_use]
    pub fn user_message(&self) -> Cow<'static, str> {
        match self {
            Self::MissingField { .. } => Cow::Borrowed(MISSING_FIELD_MESSAGE),
            Self::PhoneTooShort { .. } => Cow::Borrowed(PHONE_TOO_SHORT_MESSAGE),
            Self::Persistence { source, .. } => {
                Cow::Owned(format!("{PERSISTENCE_MESSAGE_PREFIX}: {}", source.store_message()))
            },
            Self::Unexpected { .. } => Cow::Borrowed(UNEXPECTED_MESSAGE),
        }
    }

    /// Whether the error came from the validator (no external call was made).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::PhoneTooShort { .. })
    }
}
