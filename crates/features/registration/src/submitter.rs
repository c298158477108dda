//! One submission: validate, insert one row, report back to the form.

use crate::error::{RegistrationError, RegistrationErrorExt};
use crate::redirect::{Navigator, redirect_to_login};
use crate::state::{Admission, FormState};
use cp3_domain::constants::REGISTRATION_TABLE;
use cp3_domain::submission::Submission;
use cp3_store::TableStore;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, error, info, warn};

/// Handle to the state of one mounted form.
///
/// `with_form` returns `None` once the view that owned the state is gone; every
/// step of [`submit`] then becomes a no-op.
pub trait FormCell {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormCell for Arc<Mutex<FormState>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.lock()))
    }
}

impl FormCell for Weak<Mutex<FormState>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.upgrade().map(|form| f(&mut form.lock()))
    }
}

/// What a call to [`submit`] ended up doing.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The row was stored; the caller should schedule the redirect.
    Registered,
    /// Validation failed; the store was not called.
    Invalid(RegistrationError),
    /// The store call failed or panicked.
    Failed(RegistrationError),
    /// Already submitting, or the form is gone.
    Ignored,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }
}

/// Takes the form out of the submitting state however the submission ends,
/// including a panic or the submit future being dropped mid-insert.
struct SubmittingGuard<'a, C: FormCell> {
    cell: &'a C,
}

impl<C: FormCell> Drop for SubmittingGuard<'_, C> {
    fn drop(&mut self) {
        let _ = self.cell.with_form(FormState::finish);
    }
}

/// Runs the submit action of the registration form.
///
/// At most one row is inserted, and only after validation passes. On success the
/// fields are cleared and the success banner is set; on failure the fields are kept
/// and the error banner shows the store's message.
pub async fn submit<C, S>(cell: &C, store: &S) -> SubmitOutcome
where
    C: FormCell,
    S: TableStore + Clone + 'static,
{
    let Some(admission) = cell.with_form(FormState::begin_submit) else {
        debug!("Form is gone, submission ignored");
        return SubmitOutcome::Ignored;
    };

    let submission = match admission {
        Admission::Accepted(submission) => submission,
        Admission::Busy => {
            debug!("Submission already in flight");
            return SubmitOutcome::Ignored;
        },
        Admission::Rejected(err) => {
            debug!(error = %err, "Submission rejected by validation");
            return SubmitOutcome::Invalid(err);
        },
    };

    let _guard = SubmittingGuard { cell };
    let result = persist(store.clone(), submission).await;
    let _ = cell.with_form(|form| form.complete(&result));

    match result {
        Ok(()) => {
            info!(table = REGISTRATION_TABLE, "Registration stored");
            SubmitOutcome::Registered
        },
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Submits the form and, once the row is stored, navigates to the login page after
/// the success banner has been visible for the redirect delay.
///
/// Validation failures, store failures and ignored submits never navigate. Dropping
/// the returned future cancels a pending redirect.
pub async fn submit_and_redirect<C, S, N>(cell: &C, store: &S, navigator: &N) -> SubmitOutcome
where
    C: FormCell,
    S: TableStore + Clone + 'static,
    N: Navigator + ?Sized,
{
    let outcome = submit(cell, store).await;
    if outcome.is_registered() {
        redirect_to_login(navigator).await;
    }
    outcome
}

/// Inserts the row on its own task so a panicking store surfaces as an error.
async fn persist<S>(store: S, submission: Submission) -> Result<(), RegistrationError>
where
    S: TableStore + Clone + 'static,
{
    let task = tokio::spawn(async move {
        store.insert(REGISTRATION_TABLE, std::slice::from_ref(&submission)).await
    });

    let inserted = match task.await {
        Ok(inserted) => inserted,
        Err(join) if join.is_panic() => {
            warn!("Store call panicked");
            return Err(RegistrationError::Unexpected {
                message: "store call panicked".into(),
                context: None,
            });
        },
        Err(join) => {
            warn!(error = %join, "Store call cancelled");
            return Err(RegistrationError::Unexpected { message: join.to_string().into(), context: None });
        },
    };

    inserted
        .inspect_err(|err| error!(error = %err, "Storing registration failed"))
        .context(format!("Inserting into '{REGISTRATION_TABLE}'"))
}
