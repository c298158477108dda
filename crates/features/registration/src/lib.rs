//! Registration feature slice: the purchase form that records a buyer's contact
//! details in the hosted `cp3pro` table and then sends them to the login page.
//!
//! The flow is split so it can be driven without a UI:
//! - [`state`] holds the field values and the banner/busy status.
//! - [`validator`] runs the submit-time checks.
//! - [`submitter`] performs one insert through a [`cp3_store::TableStore`].
//! - [`redirect`] schedules the navigation after a success.
//!
//! With the `client` feature, [`RegisterForm`] renders it as a Dioxus component.

#[cfg(feature = "client")]
mod client;
mod error;
pub mod redirect;
pub mod state;
pub mod submitter;
pub mod validator;
pub mod view;

#[cfg(feature = "client")]
pub use crate::client::{RegisterForm, RegisterFormProps};
pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::state::{FormState, FormStatus};
pub use crate::submitter::{FormCell, SubmitOutcome, submit, submit_and_redirect};
