//! Helpers shared by step definitions: random test data, URL inspection,
//! format validation and comparison assertions.

use crate::config::TestUser;
use crate::error::{CheckError, CheckResult};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::distributions::Alphanumeric;
use rand::Rng;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Display;
use url::Url;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$|^\d{10}$").expect("valid phone regex"));

/// Random alphanumeric string of `len` characters.
#[must_use]
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random address under `example.com`.
#[must_use]
pub fn random_email() -> String {
    format!("test-{}@example.com", random_string(8))
}

/// Calendar date of `date` as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Query parameters of `url`. A repeated key keeps its last value.
///
/// # Errors
///
/// Returns the parse error when `url` is not absolute.
pub fn query_params(url: &str) -> Result<BTreeMap<String, String>, url::ParseError> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect())
}

/// What a URL is matched against.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// The URL contains this text.
    Substring(String),
    /// The regex matches somewhere in the URL.
    Regex(Regex),
}

impl From<&str> for UrlPattern {
    fn from(s: &str) -> Self {
        UrlPattern::Substring(s.to_string())
    }
}

impl From<Regex> for UrlPattern {
    fn from(re: Regex) -> Self {
        UrlPattern::Regex(re)
    }
}

/// Whether `url` matches `pattern`.
#[must_use]
pub fn url_matches(url: &str, pattern: &UrlPattern) -> bool {
    match pattern {
        UrlPattern::Substring(s) => url.contains(s.as_str()),
        UrlPattern::Regex(re) => re.is_match(url),
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// `123-456-7890` or ten bare digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Fails unless `value > threshold`.
pub fn assert_greater_than<T: PartialOrd + Display>(value: T, threshold: T) -> CheckResult {
    if value > threshold {
        Ok(())
    } else {
        Err(CheckError::assertion(format!(
            "expected {value} to be greater than {threshold}"
        )))
    }
}

/// Fails unless `value < threshold`.
pub fn assert_less_than<T: PartialOrd + Display>(value: T, threshold: T) -> CheckResult {
    if value < threshold {
        Ok(())
    } else {
        Err(CheckError::assertion(format!(
            "expected {value} to be less than {threshold}"
        )))
    }
}

/// Fails unless `value >= threshold`.
pub fn assert_at_least<T: PartialOrd + Display>(value: T, threshold: T) -> CheckResult {
    if value >= threshold {
        Ok(())
    } else {
        Err(CheckError::assertion(format!(
            "expected {value} to be greater than or equal to {threshold}"
        )))
    }
}

/// Fails unless `value <= threshold`.
pub fn assert_at_most<T: PartialOrd + Display>(value: T, threshold: T) -> CheckResult {
    if value <= threshold {
        Ok(())
    } else {
        Err(CheckError::assertion(format!(
            "expected {value} to be less than or equal to {threshold}"
        )))
    }
}

/// Fails unless `pattern` matches somewhere in `value`.
pub fn assert_matches(value: &str, pattern: &Regex) -> CheckResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(CheckError::assertion(format!(
            "expected '{value}' to match pattern {pattern}"
        )))
    }
}

/// Fails unless `value` contains `needle`.
pub fn assert_contains(value: &str, needle: &str) -> CheckResult {
    if value.contains(needle) {
        Ok(())
    } else {
        Err(CheckError::assertion(format!(
            "expected '{value}' to contain '{needle}'"
        )))
    }
}

/// Form data for a site visitor.
///
/// Override fields with struct update syntax:
/// `UserData { name: "Ada".into(), ..UserData::random() }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserData {
    /// Default visitor with a fresh email address.
    #[must_use]
    pub fn random() -> Self {
        Self {
            name: "Test User".to_string(),
            email: random_email(),
            phone: "123-456-7890".to_string(),
        }
    }
}

impl From<&TestUser> for UserData {
    fn from(user: &TestUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactData {
    #[must_use]
    pub fn random() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: random_email(),
            message: "Test message".to_string(),
        }
    }
}

/// Newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberData {
    pub email: String,
}

impl SubscriberData {
    #[must_use]
    pub fn random() -> Self {
        Self {
            email: random_email(),
        }
    }
}
