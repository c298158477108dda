use cp3::domain::constants::{LOGIN_ROUTE, REGISTER_ROUTE};
use cp3::features::registration::RegisterForm;
use dioxus::prelude::*;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[route("/")]
    Register {},
    #[route("/login")]
    Login {},
}

/// Root component: the router over [`Route`].
#[component]
pub fn App() -> Element {
    rsx! { Router::<Route> {} }
}

#[component]
fn Register() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "container",
            RegisterForm {
                on_redirect: move |path: &'static str| match path.parse::<Route>() {
                    Ok(route) => {
                        navigator.push(route);
                    },
                    Err(err) => warn!(path, %err, "Redirect to unknown route"),
                },
            }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        main { class: "container",
            h1 { "Iniciar sesión" }
            p { class: "lead", "Tu compra fue registrada." }
            Link { to: Route::Register {}, "Volver al registro" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_flow_constants() {
        assert_eq!(LOGIN_ROUTE.parse::<Route>().ok(), Some(Route::Login {}));
        assert_eq!(REGISTER_ROUTE.parse::<Route>().ok(), Some(Route::Register {}));
        assert_eq!(Route::Login {}.to_string(), LOGIN_ROUTE);
    }
}
