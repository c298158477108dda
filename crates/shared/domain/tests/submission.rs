use cp3_domain::constants::{LOGIN_ROUTE, REDIRECT_DELAY, REGISTRATION_TABLE, SUCCESS_MESSAGE};
use cp3_domain::submission::{COLUMN_MAP, FieldKey, FieldUpdate, Submission};
use serde_json::json;
use strum::IntoEnumIterator;

fn filled() -> Submission {
    Submission {
        name: "Ana Gomez".to_owned(),
        phone: "3001234567".to_owned(),
        address: "Calle 10 #5-20".to_owned(),
        city_and_neighborhood: "Bogotá, Chapinero".to_owned(),
    }
}

#[test]
fn column_map_follows_key_order() {
    for (index, key) in FieldKey::iter().enumerate() {
        assert_eq!(COLUMN_MAP[index].0, key);
    }
    assert_eq!(FieldKey::CityAndNeighborhood.column(), "ciudad y barrio");
    assert_eq!(FieldKey::Phone.column(), "telefono");
}

#[test]
fn internal_ids_do_not_leak_column_names() {
    assert_eq!(FieldKey::CityAndNeighborhood.id(), "city_and_neighborhood");
    assert_eq!(FieldKey::Name.to_string(), "name");
}

#[test]
fn apply_replaces_only_the_target_field() {
    let mut submission = filled();
    submission.apply(FieldUpdate::new(FieldKey::Address, "Carrera 7"));

    assert_eq!(submission.address, "Carrera 7");
    assert_eq!(submission.name, "Ana Gomez");
    assert_eq!(submission.phone, "3001234567");
    assert_eq!(submission.city_and_neighborhood, "Bogotá, Chapinero");
}

#[test]
fn blank_fields_counts_whitespace_as_blank() {
    let mut submission = filled();
    submission.apply(FieldUpdate::new(FieldKey::Name, "   "));
    submission.apply(FieldUpdate::new(FieldKey::CityAndNeighborhood, ""));

    assert_eq!(submission.blank_fields(), vec![FieldKey::Name, FieldKey::CityAndNeighborhood]);
    assert!(filled().blank_fields().is_empty());
}

#[test]
fn serializes_with_persisted_column_names() {
    let value = serde_json::to_value(filled()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "nombre": "Ana Gomez",
            "telefono": "3001234567",
            "direccion": "Calle 10 #5-20",
            "ciudad y barrio": "Bogotá, Chapinero",
        })
    );
}

#[test]
fn clear_empties_every_field() {
    let mut submission = filled();
    submission.clear();
    assert_eq!(submission, Submission::default());
}

#[test]
fn flow_constants() {
    assert_eq!(REGISTRATION_TABLE, "cp3pro");
    assert_eq!(LOGIN_ROUTE, "/login");
    assert_eq!(REDIRECT_DELAY.as_millis(), 2000);
    assert_eq!(SUCCESS_MESSAGE, "¡Compra exitosa! Haremos llegar la cámara a la puerta de tu casa.");
}
