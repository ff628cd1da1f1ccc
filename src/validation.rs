use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

pub fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), AppError> {
    required("email", value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(AppError::BadRequest("email must be a valid email address".to_string()));
    }
    Ok(())
}

pub fn positive_amount(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::BadRequest(format!("{field} must be greater than zero")));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AppError::BadRequest(format!(
            "{field} must not be negative"
        ))),
        _ => Ok(()),
    }
}

pub fn currency(value: &str) -> Result<(), AppError> {
    if !CURRENCY_RE.is_match(value) {
        return Err(AppError::BadRequest(
            "currency must be a three-letter uppercase code".to_string(),
        ));
    }
    Ok(())
}

pub fn percentage(field: &str, value: i32) -> Result<(), AppError> {
    if !(0..=100).contains(&value) {
        return Err(AppError::BadRequest(format!("{field} must be between 0 and 100")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(email("ada@example.com").is_ok());
        assert!(email("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            assert!(email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn required_rejects_whitespace() {
        assert!(required("name", "  ").is_err());
        assert!(required("name", "Ada").is_ok());
    }

    #[test]
    fn amounts_must_be_positive_and_finite() {
        assert!(positive_amount("amount", 10.5).is_ok());
        assert!(positive_amount("amount", 0.0).is_err());
        assert!(positive_amount("amount", -1.0).is_err());
        assert!(positive_amount("amount", f64::NAN).is_err());
        assert!(non_negative("hourly_rate", None).is_ok());
        assert!(non_negative("hourly_rate", Some(0.0)).is_ok());
        assert!(non_negative("hourly_rate", Some(-5.0)).is_err());
    }

    #[test]
    fn currency_codes() {
        assert!(currency("USD").is_ok());
        assert!(currency("usd").is_err());
        assert!(currency("EURO").is_err());
    }

    #[test]
    fn percentage_bounds() {
        assert!(percentage("progress", 0).is_ok());
        assert!(percentage("progress", 100).is_ok());
        assert!(percentage("progress", 101).is_err());
        assert!(percentage("progress", -1).is_err());
    }
}
