// src/domain/field_errors.rs
//
// Field-level error model for the application form.
//
// The error map is a closed set: every known form field has a slot, and
// anything the server reports against an unknown field lands in the
// general slot instead of growing the map dynamically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldViolation;

/// The closed set of form fields an error can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    LastName,
    FirstName,
    MiddleName,
    DriverLicenseNumber,
    BirthDate,
    Sex,
    Height,
    UnitNumber,
    StreetNumber,
    StreetName,
    PoBox,
    City,
    Province,
    PostalCode,
}

impl Field {
    /// Wire/form name of the field, as the backend reports it.
    pub fn name(&self) -> &'static str {
        match self {
            Field::LastName => "last_name",
            Field::FirstName => "first_name",
            Field::MiddleName => "middle_name",
            Field::DriverLicenseNumber => "driver_license_number",
            Field::BirthDate => "birth_date",
            Field::Sex => "sex",
            Field::Height => "height",
            Field::UnitNumber => "unit_number",
            Field::StreetNumber => "street_number",
            Field::StreetName => "street_name",
            Field::PoBox => "po_box",
            Field::City => "city",
            Field::Province => "province",
            Field::PostalCode => "postal_code",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "last_name" => Some(Field::LastName),
            "first_name" => Some(Field::FirstName),
            "middle_name" => Some(Field::MiddleName),
            "driver_license_number" => Some(Field::DriverLicenseNumber),
            "birth_date" => Some(Field::BirthDate),
            "sex" => Some(Field::Sex),
            "height" => Some(Field::Height),
            "unit_number" => Some(Field::UnitNumber),
            "street_number" => Some(Field::StreetNumber),
            "street_name" => Some(Field::StreetName),
            "po_box" => Some(Field::PoBox),
            "city" => Some(Field::City),
            "province" => Some(Field::Province),
            "postal_code" => Some(Field::PostalCode),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transient per-field messages plus one general slot for errors that do
/// not map to a known field. Cleared at the start of each submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    fields: BTreeMap<Field, String>,
    general: Option<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.general = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Fold server-reported violations into the map. Known fields overwrite
    /// any existing (e.g. locally produced) message; unknown fields fall
    /// through to the general slot.
    pub fn apply_violations(&mut self, violations: &[FieldViolation]) {
        for violation in violations {
            match violation.field_name().and_then(Field::from_name) {
                Some(field) => self.set(field, violation.msg.clone()),
                None => self.set_general(violation.msg.clone()),
            }
        }
    }
}
