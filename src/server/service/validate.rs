//! Input validation shared by the services.
//!
//! Every helper returns [`Error::validation`] so violations surface as 400 Bad Request.

use chrono::NaiveDate;

use crate::server::error::Error;

/// Trim a required string, rejecting blank values.
pub fn required(field: &str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{} is required", field)));
    }

    Ok(trimmed.to_string())
}

/// Trim an optional string, treating blank values as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Amounts in minor units may be zero but never negative.
pub fn non_negative(field: &str, amount: Option<i64>) -> Result<(), Error> {
    match amount {
        Some(amount) if amount < 0 => Err(Error::validation(format!(
            "{} must not be negative",
            field
        ))),
        _ => Ok(()),
    }
}

/// A maintenance interval, when given, must be at least one day.
pub fn interval(days: Option<i32>) -> Result<(), Error> {
    match days {
        Some(days) if days <= 0 => Err(Error::validation(
            "Maintenance interval must be at least one day",
        )),
        _ => Ok(()),
    }
}

/// An end date, when both are given, must not precede the start date.
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), Error> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => {
            Err(Error::validation("End date must not be before start date"))
        }
        _ => Ok(()),
    }
}

/// Three-letter currency code, upper-cased.
pub fn currency(value: &str) -> Result<String, Error> {
    let code = required("Currency", value)?.to_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::validation(format!(
            "{:?} is not a three-letter currency code",
            code
        )));
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::domain::DomainError;

    fn is_validation(result: Result<impl std::fmt::Debug, Error>) -> bool {
        matches!(result, Err(Error::DomainError(DomainError::Validation(_))))
    }

    /// Expect surrounding whitespace to be trimmed and blank input rejected
    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("Name", "  Tractor ").unwrap(), "Tractor");
        assert!(is_validation(required("Name", "   ")));
    }

    /// Expect blank optional strings to become None
    #[test]
    fn optional_drops_blank() {
        assert_eq!(optional(Some(" ".to_string())), None);
        assert_eq!(optional(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(optional(None), None);
    }

    /// Expect zero to be accepted and negatives rejected
    #[test]
    fn non_negative_amounts() {
        assert!(non_negative("Amount", Some(0)).is_ok());
        assert!(non_negative("Amount", None).is_ok());
        assert!(is_validation(non_negative("Amount", Some(-1))));
    }

    /// Expect intervals below one day to be rejected
    #[test]
    fn interval_must_be_positive() {
        assert!(interval(Some(1)).is_ok());
        assert!(interval(None).is_ok());
        assert!(is_validation(interval(Some(0))));
        assert!(is_validation(interval(Some(-30))));
    }

    /// Expect an end date before the start date to be rejected
    #[test]
    fn date_range_ordering() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1);
        let end = NaiveDate::from_ymd_opt(2025, 4, 30);

        assert!(date_range(start, start).is_ok());
        assert!(date_range(start, None).is_ok());
        assert!(is_validation(date_range(start, end)));
    }

    /// Expect currency codes to be normalised to upper case
    #[test]
    fn currency_codes() {
        assert_eq!(currency(" nok ").unwrap(), "NOK");
        assert!(is_validation(currency("kroner")));
        assert!(is_validation(currency("")));
    }
}
