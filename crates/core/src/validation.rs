//! Registration input validation.
//!
//! The checks here are the pure part of registration: name, age, and
//! mobile-number shape. Mobile-number uniqueness needs store access and is
//! checked by the registration flow (with the database unique constraint as
//! the authoritative backstop).

use crate::error::ValidationError;

/// Minimum trimmed name length.
pub const MIN_NAME_LEN: usize = 2;
/// Inclusive age bounds.
pub const MIN_AGE: i32 = 10;
pub const MAX_AGE: i32 = 120;
/// Minimum trimmed mobile-number length.
pub const MIN_MOBILE_LEN: usize = 10;

/// A registration request with whitespace trimmed and all shape checks
/// passed. Uniqueness is still unverified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
}

/// Validate registration input. First failing rule wins.
///
/// Rule order: name, then age, then mobile number.
pub fn validate_registration(
    name: &str,
    age: i32,
    mobile_number: &str,
) -> Result<ValidRegistration, ValidationError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::InvalidName);
    }

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::InvalidAge);
    }

    let mobile_number = mobile_number.trim();
    if mobile_number.chars().count() < MIN_MOBILE_LEN {
        return Err(ValidationError::InvalidMobile);
    }

    Ok(ValidRegistration {
        name: name.to_string(),
        age,
        mobile_number: mobile_number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn accepts_valid_input() {
        let valid = validate_registration("Asha", 29, "9998887770").unwrap();
        assert_eq!(valid.name, "Asha");
        assert_eq!(valid.age, 29);
        assert_eq!(valid.mobile_number, "9998887770");
    }

    #[test]
    fn trims_whitespace() {
        let valid = validate_registration("  Asha  ", 29, " 9998887770 ").unwrap();
        assert_eq!(valid.name, "Asha");
        assert_eq!(valid.mobile_number, "9998887770");
    }

    #[test]
    fn name_boundaries() {
        assert_matches!(
            validate_registration("A", 29, "9998887770"),
            Err(ValidationError::InvalidName)
        );
        // Whitespace-only names trim to empty.
        assert_matches!(
            validate_registration("   ", 29, "9998887770"),
            Err(ValidationError::InvalidName)
        );
        assert!(validate_registration("Al", 29, "9998887770").is_ok());
    }

    #[test]
    fn age_boundaries() {
        assert_matches!(
            validate_registration("Asha", 9, "9998887770"),
            Err(ValidationError::InvalidAge)
        );
        assert!(validate_registration("Asha", 10, "9998887770").is_ok());
        assert!(validate_registration("Asha", 120, "9998887770").is_ok());
        assert_matches!(
            validate_registration("Asha", 121, "9998887770"),
            Err(ValidationError::InvalidAge)
        );
    }

    #[test]
    fn mobile_boundaries() {
        assert_matches!(
            validate_registration("Asha", 29, "999888777"),
            Err(ValidationError::InvalidMobile)
        );
        assert!(validate_registration("Asha", 29, "9998887770").is_ok());
    }

    #[test]
    fn first_failure_wins() {
        // Bad name and bad age: name is reported.
        assert_matches!(
            validate_registration("A", 9, "123"),
            Err(ValidationError::InvalidName)
        );
        // Bad age and bad mobile: age is reported.
        assert_matches!(
            validate_registration("Asha", 9, "123"),
            Err(ValidationError::InvalidAge)
        );
    }
}
