//! The four-field registration submission and its mapping onto the hosted table.
//!
//! Form fields are identified by [`FieldKey`]. Persisted column names (one of which
//! contains spaces) are only known to [`COLUMN_MAP`], so renaming a column never
//! touches the form.

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Identifies one input of the registration form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FieldKey {
    Name,
    Phone,
    Address,
    CityAndNeighborhood,
}

/// Field key to persisted column, in form order (indexed by discriminant).
pub const COLUMN_MAP: [(FieldKey, &str); FieldKey::COUNT] = [
    (FieldKey::Name, "nombre"),
    (FieldKey::Phone, "telefono"),
    (FieldKey::Address, "direccion"),
    (FieldKey::CityAndNeighborhood, "ciudad y barrio"),
];

impl FieldKey {
    /// Column receiving this field in the hosted table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        COLUMN_MAP[self as usize].1
    }

    /// Internal identifier (`snake_case`), stable across UI and logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Replaces a single field; the only way form values change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub key: FieldKey,
    pub value: String,
}

impl FieldUpdate {
    #[must_use]
    pub fn new(key: FieldKey, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }
}

/// One purchase registration as typed by the user.
///
/// Serializes as a JSON object keyed by the persisted column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city_and_neighborhood: String,
}

impl Submission {
    #[must_use]
    pub fn value(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Phone => &self.phone,
            FieldKey::Address => &self.address,
            FieldKey::CityAndNeighborhood => &self.city_and_neighborhood,
        }
    }

    fn slot(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Phone => &mut self.phone,
            FieldKey::Address => &mut self.address,
            FieldKey::CityAndNeighborhood => &mut self.city_and_neighborhood,
        }
    }

    /// Replaces the targeted field and leaves the others untouched.
    pub fn apply(&mut self, update: FieldUpdate) {
        *self.slot(update.key) = update.value;
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Keys whose value is empty or whitespace only, in form order.
    #[must_use]
    pub fn blank_fields(&self) -> Vec<FieldKey> {
        FieldKey::iter().filter(|key| self.value(*key).trim().is_empty()).collect()
    }

    /// `(column, value)` pairs in form order, as they are persisted.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, &str)> {
        COLUMN_MAP.iter().map(|(key, column)| (*column, self.value(*key)))
    }
}

impl Serialize for Submission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(COLUMN_MAP.len()))?;
        for (column, value) in self.columns() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
