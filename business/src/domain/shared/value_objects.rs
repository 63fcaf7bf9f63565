use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A syntactically valid, lower-cased e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Returns `None` when the address is not of the `local@domain.tld` form.
    pub fn parse(raw: impl AsRef<str>) -> Option<Self> {
        let candidate = raw.as_ref().trim().to_lowercase();
        let valid = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(&candidate));
        valid.then_some(Self(candidate))
    }

    /// Wraps an address read back from storage without validating it again.
    pub fn from_repository(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_valid_email() {
        let email = Email::parse("priya.sharma@example.com").unwrap();
        assert_eq!(email.as_str(), "priya.sharma@example.com");
    }

    #[test]
    fn should_normalize_case_and_whitespace() {
        let email = Email::parse("  Ravi@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ravi@example.com");
    }

    #[test]
    fn should_reject_missing_at_sign() {
        assert!(Email::parse("ravi.example.com").is_none());
    }

    #[test]
    fn should_reject_missing_domain_dot() {
        assert!(Email::parse("ravi@localhost").is_none());
    }

    #[test]
    fn should_reject_inner_whitespace() {
        assert!(Email::parse("ravi kumar@example.com").is_none());
    }

    #[test]
    fn should_display_email() {
        let email = Email::from_repository("test@example.com");
        assert_eq!(format!("{}", email), "test@example.com");
    }
}
