//! Field rules shared by the edit form and the API server.

use regex::Regex;
use std::sync::LazyLock;

/// `local-part@domain.tld`: non-whitespace segments, exactly one `@`, and at
/// least one `.` inside the domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Message shown when [`is_valid_email`] rejects the draft address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

pub fn is_valid_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for ok in ["a@b.com", "tony.stark@marvel.com", "x@sub.domain.org", "a+tag@b.co"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "not-an-email",
            "",
            "a@b",
            "@b.com",
            "a@.com",
            "a@b.",
            "a@@b.com",
            "a@b@c.com",
            "a b@c.com",
            "a@b .com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }
}
