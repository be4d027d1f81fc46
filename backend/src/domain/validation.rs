//! Field-level checks shared by the services and the REST layer.
use chrono::{DateTime, Utc};
use uuid::{Uuid, Variant};

use super::errors::ValidationError;
use super::timestamps::parse_iso8601;

/// Rejects missing or whitespace-only text. Returns the value unchanged.
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

pub fn validate_amount(amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}

pub fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    parse_iso8601(value).ok_or_else(|| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Same as [`parse_date`] for query parameters that may be absent.
pub fn require_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => parse_date(field, value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Requires a version 4, RFC 4122 variant UUID in the hyphenated
/// 8-4-4-4-12 form. The original string is returned as-is so it compares
/// equal to ids stored by clients.
pub fn require_uuid_v4(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ValidationError::MissingField(field)),
    };

    // parse_str also takes the simple, braced and urn forms
    let hyphenated = value.len() == 36
        && value
            .char_indices()
            .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'));

    match Uuid::parse_str(value) {
        Ok(uuid)
            if hyphenated
                && uuid.get_version_num() == 4
                && uuid.get_variant() == Variant::RFC4122 =>
        {
            Ok(value.to_string())
        }
        _ => Err(ValidationError::InvalidUuid {
            field,
            value: value.to_string(),
        }),
    }
}

pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("title", "Rent").unwrap(), "Rent");
        assert_eq!(
            require_text("title", "   "),
            Err(ValidationError::EmptyField("title"))
        );
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(0.0).unwrap(), 0.0);
        assert_eq!(validate_amount(12.5).unwrap(), 12.5);
        assert_eq!(validate_amount(-0.01), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount(f64::NAN), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount(f64::INFINITY), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_require_uuid_v4() {
        let id = "8a4f3c2e-6b1d-4f7a-9c3e-2d5b7a1e9f04";
        assert_eq!(require_uuid_v4("userId", Some(id)).unwrap(), id);

        assert_eq!(
            require_uuid_v4("userId", None),
            Err(ValidationError::MissingField("userId"))
        );
        assert!(matches!(
            require_uuid_v4("userId", Some("not-a-uuid")),
            Err(ValidationError::InvalidUuid { .. })
        ));
        // Version 1 UUID
        assert!(matches!(
            require_uuid_v4("userId", Some("c232ab00-9414-11ec-b3c8-9f6bdeced846")),
            Err(ValidationError::InvalidUuid { .. })
        ));

        // Only the hyphenated form with the RFC 4122 variant is accepted
        for other_form in [
            "8a4f3c2e6b1d4f7a9c3e2d5b7a1e9f04",
            "urn:uuid:8a4f3c2e-6b1d-4f7a-9c3e-2d5b7a1e9f04",
            "{8a4f3c2e-6b1d-4f7a-9c3e-2d5b7a1e9f04}",
            "8a4f3c2e-6b1d-4f7a-1c3e-2d5b7a1e9f04",
        ] {
            assert!(
                matches!(
                    require_uuid_v4("userId", Some(other_form)),
                    Err(ValidationError::InvalidUuid { .. })
                ),
                "{} should be rejected",
                other_form
            );
        }
        assert!(require_uuid_v4("userId", Some("8A4F3C2E-6B1D-4F7A-BC3E-2D5B7A1E9F04")).is_ok());
    }

    #[test]
    fn test_require_date() {
        assert!(require_date("startDate", Some("2024-01-01")).is_ok());
        assert_eq!(
            require_date("startDate", Some("")),
            Err(ValidationError::MissingField("startDate"))
        );
        assert!(matches!(
            require_date("endDate", Some("01/31/2024")),
            Err(ValidationError::InvalidDate { field: "endDate", .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" ana@example.com ").unwrap(), "ana@example.com");
        assert!(validate_email("ana@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@@example.com").is_err());
        assert!(validate_email("ana example@example.com").is_err());
        assert!(validate_email("ana").is_err());
    }
}
