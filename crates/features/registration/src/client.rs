use crate::redirect::Navigator;
use crate::state::FormState;
use crate::submitter::{FormCell, submit_and_redirect};
use crate::view::{FIELD_VIEWS, HEADING, LEAD, submit_label};
use cp3_domain::submission::FieldUpdate;
use cp3_store::Store;
use dioxus::prelude::*;

impl FormCell for Signal<FormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        let mut signal = *self;
        // Fails once the owning scope is dropped.
        signal.try_write().ok().map(|mut form| f(&mut form))
    }
}

impl Navigator for EventHandler<&'static str> {
    fn navigate(&self, route: &'static str) {
        self.call(route);
    }
}

/// Registration form. Expects a [`Store`] in context.
///
/// After a successful insert `on_redirect` receives the login route once the
/// success banner has been shown long enough. The pending redirect is cancelled if
/// the component unmounts first.
#[component]
pub fn RegisterForm(on_redirect: EventHandler<&'static str>) -> Element {
    let store = use_context::<Store>();
    let mut form = use_signal(FormState::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            submit_and_redirect(&form, &store, &on_redirect).await;
        });
    };

    let state = form.read();
    let submitting = state.is_submitting();

    rsx! {
        div { class: "register",
            h1 { "{HEADING}" }
            p { class: "lead", "{LEAD}" }

            if let Some(message) = state.error_message() {
                div { class: "alert alert-danger", role: "alert", "{message}" }
            }
            if let Some(message) = state.success_message() {
                div { class: "alert alert-success", role: "alert", "{message}" }
            }

            form { onsubmit,
                for view in FIELD_VIEWS {
                    div { key: "{view.key}", class: "field",
                        label { r#for: view.key.id(), "{view.label}" }
                        input {
                            id: view.key.id(),
                            name: view.key.id(),
                            r#type: view.input_type,
                            placeholder: view.placeholder,
                            required: true,
                            value: state.value(view.key).to_owned(),
                            oninput: move |evt: FormEvent| {
                                form.write().apply(FieldUpdate::new(view.key, evt.value()));
                            },
                        }
                    }
                }
                button { r#type: "submit", class: "btn btn-primary", disabled: submitting,
                    "{submit_label(submitting)}"
                }
            }
        }
    }
}
