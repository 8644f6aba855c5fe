use crate::types::{DbId, Timestamp};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Membership identifier space exhausted after {attempts} attempts")]
    IdentifierSpaceExhausted { attempts: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Rejections produced by registration input validation.
///
/// Ordered: the first failing rule wins, so a request with a bad name and a
/// bad age reports `InvalidName`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    InvalidName,

    #[error("Age must be between 10 and 120")]
    InvalidAge,

    #[error("Mobile number must be at least 10 digits")]
    InvalidMobile,

    #[error("This mobile number is already registered")]
    DuplicateMobile,
}

/// Rejections produced by the check-in admission rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckInError {
    #[error("Member not found. Please register first.")]
    MemberNotFound,

    /// The member already has an entry for today. Carries the existing
    /// entry's timestamp so the caller can display it; the store is
    /// unchanged.
    #[error("Already checked in today at {at}")]
    AlreadyCheckedIn { at: Timestamp },
}
