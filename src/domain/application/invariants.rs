// src/domain/application/invariants.rs

use super::entity::ApplicationDraft;
use crate::domain::field_errors::{Field, FieldErrors};

/// Local validation, run before any network call.
///
/// Every field is required except `po_box`. Middle name is required by the
/// current business rules even though the portal stores it as nullable;
/// that contradiction is deliberate and documented, not fixed here.
/// Height must parse as a number greater than zero.
pub fn validate_draft(draft: &ApplicationDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, Field::FirstName, &draft.first_name, "First name is required");
    require(&mut errors, Field::MiddleName, &draft.middle_name, "Middle name is required");
    require(&mut errors, Field::LastName, &draft.last_name, "Last name is required");
    require(&mut errors, Field::BirthDate, &draft.birth_date, "Birth date is required");
    require(&mut errors, Field::Sex, &draft.sex, "Sex is required");
    require(
        &mut errors,
        Field::DriverLicenseNumber,
        &draft.driver_license_number,
        "License number is required",
    );
    require(&mut errors, Field::UnitNumber, &draft.unit_number, "Unit number is required");
    require(&mut errors, Field::StreetNumber, &draft.street_number, "Street number is required");
    require(&mut errors, Field::StreetName, &draft.street_name, "Street name is required");
    require(&mut errors, Field::City, &draft.city, "City is required");
    require(&mut errors, Field::Province, &draft.province, "Province is required");
    require(&mut errors, Field::PostalCode, &draft.postal_code, "Postal code is required");

    match draft.height.trim().parse::<f64>() {
        Ok(height) if height > 0.0 => {}
        _ => errors.set(Field::Height, "Height must be a positive number"),
    }

    errors
}

fn require(errors: &mut FieldErrors, field: Field, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.set(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.last_name = "Silva".to_string();
        draft.first_name = "Ana".to_string();
        draft.middle_name = "Maria".to_string();
        draft.driver_license_number = "D1234-56789".to_string();
        draft.birth_date = "1990-04-12".to_string();
        draft.sex = "female".to_string();
        draft.height = "168".to_string();
        draft.unit_number = "12".to_string();
        draft.street_number = "100".to_string();
        draft.street_name = "Main St".to_string();
        draft.city = "Toronto".to_string();
        draft.province = "ON".to_string();
        draft.postal_code = "M5V 2T6".to_string();
        draft
    }

    #[test]
    fn test_valid_draft_produces_no_errors() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_po_box_is_optional() {
        let mut draft = valid_draft();
        draft.po_box = String::new();
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_missing_first_name_is_the_only_error() {
        let mut draft = valid_draft();
        draft.first_name = String::new();

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert!(errors.general().is_none());
    }

    #[test]
    fn test_whitespace_only_field_counts_as_missing() {
        let mut draft = valid_draft();
        draft.city = "   ".to_string();

        let errors = validate_draft(&draft);
        assert!(errors.get(Field::City).is_some());
    }

    #[test]
    fn test_middle_name_is_required_by_current_rules() {
        let mut draft = valid_draft();
        draft.middle_name = String::new();

        let errors = validate_draft(&draft);
        assert_eq!(errors.get(Field::MiddleName), Some("Middle name is required"));
    }

    #[test]
    fn test_non_numeric_height_is_rejected() {
        let mut draft = valid_draft();
        draft.height = "tall".to_string();
        assert!(validate_draft(&draft).get(Field::Height).is_some());
    }

    #[test]
    fn test_zero_and_negative_height_are_rejected() {
        for bad in ["0", "-168"] {
            let mut draft = valid_draft();
            draft.height = bad.to_string();
            assert!(
                validate_draft(&draft).get(Field::Height).is_some(),
                "height {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_every_required_field_is_reported_when_blank() {
        let errors = validate_draft(&ApplicationDraft::default());
        // All fields except po_box, which is never required.
        assert_eq!(errors.len(), 13);
        assert!(errors.get(Field::PoBox).is_none());
    }
}
