use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[cp3_derive::cp3_error]
pub enum StoreError {
    /// Builder parameters missing or malformed.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The store answered with a non-success status.
    #[error("Store rejected the request with HTTP {status}{}: {message}", format_context(.context))]
    Rejected {
        message: Cow<'static, str>,
        status: u16,
        code: Option<String>,
        context: Option<Cow<'static, str>>,
    },

    /// Connection, TLS, timeout or body read failures.
    #[error("Store transport error{}: {source}", format_context(.context))]
    Transport {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Rows could not be encoded as JSON.
    #[error("Row encoding error{}: {source}", format_context(.context))]
    Encode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl StoreError {
    /// The message the store (or the transport) gave, without our own decoration.
    ///
    /// This is what end users see after the fixed "could not save" prefix.
    #[must_use]
    pub fn store_message(&self) -> Cow<'_, str> {
        match self {
            Self::Rejected { message, .. }
            | Self::Validation { message, .. }
            | Self::Internal { message, .. } => Cow::Borrowed(message.as_ref()),
            Self::Transport { source, .. } => Cow::Owned(source.to_string()),
            Self::Encode { source, .. } => Cow::Owned(source.to_string()),
        }
    }
}
