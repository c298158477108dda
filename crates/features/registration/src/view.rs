//! Texts and field layout of the form, shared by every front end.

use cp3_domain::submission::FieldKey;

pub const HEADING: &str = "Registrarse";
pub const LEAD: &str = "Completa el formulario para crear una cuenta.";
pub const SUBMIT_LABEL: &str = "comprar";
pub const SUBMITTING_LABEL: &str = "Registrando...";

/// How one input is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView {
    pub key: FieldKey,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
}

/// Inputs in display order.
pub const FIELD_VIEWS: [FieldView; 4] = [
    FieldView {
        key: FieldKey::Name,
        label: "Nombre",
        placeholder: "Ingresa tu nombre",
        input_type: "text",
    },
    FieldView {
        key: FieldKey::Phone,
        label: "Teléfono",
        placeholder: "Ingresa tu número de teléfono",
        input_type: "tel",
    },
    FieldView {
        key: FieldKey::Address,
        label: "Dirección",
        placeholder: "Ingresa tu dirección",
        input_type: "text",
    },
    FieldView {
        key: FieldKey::CityAndNeighborhood,
        label: "Ciudad y Barrio",
        placeholder: "Ingresa tu ciudad y barrio",
        input_type: "text",
    },
];

#[must_use]
pub const fn submit_label(submitting: bool) -> &'static str {
    if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn views_follow_form_order() {
        let keys: Vec<_> = FIELD_VIEWS.iter().map(|v| v.key).collect();
        let expected: Vec<_> = FieldKey::iter().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn only_phone_is_a_tel_input() {
        for view in FIELD_VIEWS {
            let expected = if view.key == FieldKey::Phone { "tel" } else { "text" };
            assert_eq!(view.input_type, expected, "{}", view.key);
        }
    }

    #[test]
    fn button_label_tracks_submitting() {
        assert_eq!(submit_label(false), "comprar");
        assert_eq!(submit_label(true), "Registrando...");
    }
}
