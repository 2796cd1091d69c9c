//! Input validation utilities.
//!
//! Checks applied at the boundary, before values reach the stores. The query
//! engine itself never validates; anything invalid is rejected while
//! building the filter state or the submission.

/// Canonical form of an email address: trimmed and lowercased.
///
/// This is the uniqueness key of the interest table; two addresses differing
/// only in case or surrounding whitespace are the same address.
pub fn canonical_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Syntactic plausibility check for an email address.
///
/// Deliberately shallow, matching the waitlist form: exactly one `@`, a
/// non-empty local part, a domain with a non-empty label after its last dot,
/// and no whitespace anywhere. Deliverability is not checked.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rfind('.') {
        Some(index) => index > 0 && index + 1 < domain.len(),
        None => false,
    }
}
