// src/domain/application/entity.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::field_errors::Field;

/// Lifecycle status of a driver licence application.
/// Once submitted, the record is immutable from the client's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    InProgress,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// A driver licence application as the portal stores it.
///
/// `id` and `user_id` are server-assigned; both are absent on records that
/// have never been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub driver_license_number: Option<String>,
    #[serde(with = "birth_date_format")]
    pub birth_date: NaiveDate,
    pub sex: Sex,
    /// Height in centimeters.
    pub height: f64,
    pub unit_number: Option<String>,
    pub street_number: String,
    pub street_name: String,
    pub po_box: Option<String>,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// In-memory form state: every field as the user typed it, plus the status
/// the next save will carry. Owned exclusively by the editing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub driver_license_number: String,
    pub birth_date: String,
    pub sex: String,
    pub height: String,
    pub unit_number: String,
    pub street_number: String,
    pub street_name: String,
    pub po_box: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub status: ApplicationStatus,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            driver_license_number: String::new(),
            birth_date: String::new(),
            sex: String::new(),
            height: String::new(),
            unit_number: String::new(),
            street_number: String::new(),
            street_name: String::new(),
            po_box: String::new(),
            city: String::new(),
            province: String::new(),
            postal_code: String::new(),
            status: ApplicationStatus::InProgress,
        }
    }
}

impl ApplicationDraft {
    /// Populate a draft from a fetched record, for the edit screen.
    pub fn from_record(record: &ApplicationRecord) -> Self {
        Self {
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
            middle_name: record.middle_name.clone().unwrap_or_default(),
            driver_license_number: record.driver_license_number.clone().unwrap_or_default(),
            birth_date: record.birth_date.format("%Y-%m-%d").to_string(),
            sex: record.sex.to_string(),
            height: record.height.to_string(),
            unit_number: record.unit_number.clone().unwrap_or_default(),
            street_number: record.street_number.clone(),
            street_name: record.street_name.clone(),
            po_box: record.po_box.clone().unwrap_or_default(),
            city: record.city.clone(),
            province: record.province.clone(),
            postal_code: record.postal_code.clone(),
            status: record.status,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::LastName => &mut self.last_name,
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::DriverLicenseNumber => &mut self.driver_license_number,
            Field::BirthDate => &mut self.birth_date,
            Field::Sex => &mut self.sex,
            Field::Height => &mut self.height,
            Field::UnitNumber => &mut self.unit_number,
            Field::StreetNumber => &mut self.street_number,
            Field::StreetName => &mut self.street_name,
            Field::PoBox => &mut self.po_box,
            Field::City => &mut self.city,
            Field::Province => &mut self.province,
            Field::PostalCode => &mut self.postal_code,
        };
        *slot = value.to_string();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::DriverLicenseNumber => &self.driver_license_number,
            Field::BirthDate => &self.birth_date,
            Field::Sex => &self.sex,
            Field::Height => &self.height,
            Field::UnitNumber => &self.unit_number,
            Field::StreetNumber => &self.street_number,
            Field::StreetName => &self.street_name,
            Field::PoBox => &self.po_box,
            Field::City => &self.city,
            Field::Province => &self.province,
            Field::PostalCode => &self.postal_code,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::InProgress => write!(f, "in_progress"),
            ApplicationStatus::Submitted => write!(f, "submitted"),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
            Sex::Other => write!(f, "other"),
        }
    }
}

/// The portal stores birth dates as strings and sometimes returns a full
/// datetime; the date component is all that matters here.
mod birth_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.split('T').next().unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, FORMAT).map_err(serde::de::Error::custom)
    }
}
