//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::dto::parse_timestamp;

/// Rejects names that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("value must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Requires an RFC 3339 timestamp with an explicit offset.
///
/// # Examples
///
/// ```ignore
/// validate_rfc3339("2024-08-17T14:00:00Z")      // Ok
/// validate_rfc3339("2024-08-17T16:00:00+02:00") // Ok
/// validate_rfc3339("2024-08-17 14:00")          // Err - not RFC 3339
/// ```
pub fn validate_rfc3339(value: &str) -> Result<(), ValidationError> {
    parse_timestamp(value).map(|_| ()).map_err(|parse_err| {
        let mut err = ValidationError::new("rfc3339");
        err.message = Some(format!("expected an RFC 3339 timestamp ({parse_err})").into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(validate_not_blank("Arsenal").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }

    #[test]
    fn kickoff_must_be_rfc3339() {
        assert!(validate_rfc3339("2024-08-17T14:00:00Z").is_ok());
        assert!(validate_rfc3339("2024-08-17T16:00:00+02:00").is_ok());
        assert!(validate_rfc3339("2024-08-17 14:00").is_err());
        assert!(validate_rfc3339("").is_err());
    }
}
