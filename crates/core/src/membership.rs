//! Membership identifier format: `MEM-NNNNN`.
//!
//! The five-digit suffix is drawn from a cryptographically sound random
//! source at registration time (not a counter, so valid IDs cannot be
//! guessed from one another). This module owns only the format; the
//! collision-retry loop lives with the registration flow, since it needs
//! store access.

/// Number of distinct membership identifiers (`00000`..`99999`).
pub const MEMBERSHIP_ID_SPACE: u32 = 100_000;

const PREFIX: &str = "MEM-";
const SUFFIX_LEN: usize = 5;

/// Format a raw suffix as a membership identifier.
///
/// The suffix is reduced modulo [`MEMBERSHIP_ID_SPACE`], so any `u32` from
/// an RNG is acceptable.
///
/// # Examples
///
/// ```
/// use turnstile_core::membership::format_membership_id;
///
/// assert_eq!(format_membership_id(7), "MEM-00007");
/// assert_eq!(format_membership_id(99_999), "MEM-99999");
/// ```
pub fn format_membership_id(suffix: u32) -> String {
    format!("{PREFIX}{:05}", suffix % MEMBERSHIP_ID_SPACE)
}

/// Whether a string is a well-formed membership identifier.
///
/// Well-formed means exactly `MEM-` followed by five ASCII decimal digits.
/// Used to decide which column a check-in identifier should match against.
pub fn is_membership_id(s: &str) -> bool {
    let Some(suffix) = s.strip_prefix(PREFIX) else {
        return false;
    };
    suffix.len() == SUFFIX_LEN && suffix.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_membership_id(0), "MEM-00000");
        assert_eq!(format_membership_id(42), "MEM-00042");
        assert_eq!(format_membership_id(99_999), "MEM-99999");
    }

    #[test]
    fn wraps_large_suffixes_into_space() {
        assert_eq!(format_membership_id(100_000), "MEM-00000");
        assert_eq!(format_membership_id(u32::MAX), format_membership_id(u32::MAX % 100_000));
    }

    #[test]
    fn recognizes_well_formed_ids() {
        assert!(is_membership_id("MEM-00000"));
        assert!(is_membership_id("MEM-12345"));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_membership_id("MEM-1234"));
        assert!(!is_membership_id("MEM-123456"));
        assert!(!is_membership_id("MEM-1234a"));
        assert!(!is_membership_id("mem-12345"));
        assert!(!is_membership_id("12345"));
        assert!(!is_membership_id(""));
    }

    #[test]
    fn formatted_ids_are_well_formed() {
        for suffix in [0, 1, 9_999, 54_321, 99_999] {
            assert!(is_membership_id(&format_membership_id(suffix)));
        }
    }
}
