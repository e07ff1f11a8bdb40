//! Email checks mirroring backend constraints.
//!
//! The backend's `EmployeeEmail` type in `backend/src/domain/employee.rs`
//! applies the same rule. Keeping both in sync means a roster accepted here is
//! never rejected later for its emails.

/// Returns `true` if the value looks like a single mailbox address.
///
/// The rule is deliberately shallow: exactly one `@`, non-empty local and
/// domain parts, a dot inside the domain, and no whitespace.
///
/// # Examples
///
/// ```
/// use support_roster::is_plausible_email;
///
/// assert!(is_plausible_email("sarah.johnson@travelplanner.com"));
/// assert!(!is_plausible_email("sarah.johnson"));
/// assert!(!is_plausible_email("a@b@c.com"));
/// ```
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty() && !domain.ends_with('.'),
        None => false,
    }
}

/// Normalises an email for uniqueness comparisons.
#[must_use]
pub(crate) fn normalise_email(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    //! Covers email plausibility and normalisation.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a@b.co")]
    #[case("first.last@travelplanner.com")]
    #[case("support+eu@mail.example.org")]
    fn accepts_plausible_emails(#[case] value: &str) {
        assert!(is_plausible_email(value));
    }

    #[rstest]
    #[case("")]
    #[case("no-at-sign.com")]
    #[case("@travelplanner.com")]
    #[case("sarah@")]
    #[case("sarah@localhost")]
    #[case("sarah@travelplanner.")]
    #[case("sa rah@travelplanner.com")]
    #[case("a@b@c.com")]
    fn rejects_implausible_emails(#[case] value: &str) {
        assert!(!is_plausible_email(value));
    }

    #[test]
    fn normalise_lowercases_and_trims() {
        assert_eq!(normalise_email("  Ada@Example.COM "), "ada@example.com");
    }
}
