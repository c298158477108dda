//! Deferred navigation after a successful registration.

use cp3_domain::constants::{LOGIN_ROUTE, REDIRECT_DELAY};
use std::time::Duration;
use tracing::debug;

/// Something that can switch the app to another route.
pub trait Navigator {
    fn navigate(&self, route: &'static str);
}

/// Waits `delay`, then navigates to `route`.
///
/// Dropping the future before the delay elapses cancels the navigation, which is
/// what happens when the form is unmounted.
pub async fn redirect_after<N>(navigator: &N, delay: Duration, route: &'static str)
where
    N: Navigator + ?Sized,
{
    tokio::time::sleep(delay).await;
    debug!(route, "Redirecting");
    navigator.navigate(route);
}

/// Navigates to the login page after the success banner has been visible for a while.
pub async fn redirect_to_login<N>(navigator: &N)
where
    N: Navigator + ?Sized,
{
    redirect_after(navigator, REDIRECT_DELAY, LOGIN_ROUTE).await;
}
