//! Conversions between form inputs (always strings) and request fields.

use chrono::NaiveDate;

/// Blank input means no value
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Value for a text input bound to an optional field
pub fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Parses a `<input type="date">` value, blank meaning no date
pub fn date(field: &str, value: &str) -> Result<Option<NaiveDate>, String> {
    optional(value)
        .map(|value| {
            NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|_| format!("{} is not a valid date", field))
        })
        .transpose()
}

pub fn date_input(value: Option<NaiveDate>) -> String {
    value.map(|date| date.to_string()).unwrap_or_default()
}

/// Parses a select holding a record ID, blank meaning none selected
pub fn id(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Like [`id`] for selects that must have a value
pub fn required_id(field: &str, value: &str) -> Result<i32, String> {
    id(value).ok_or_else(|| format!("{} is required", field))
}

pub fn whole_number(field: &str, value: &str) -> Result<Option<i32>, String> {
    optional(value)
        .map(|value| {
            value
                .parse::<i32>()
                .map_err(|_| format!("{} must be a whole number", field))
        })
        .transpose()
}

/// Parses a decimal amount like `1 234.50` or `1234,5` into minor units
pub fn amount(field: &str, value: &str) -> Result<Option<i64>, String> {
    let Some(value) = optional(value) else {
        return Ok(None);
    };
    let invalid = || format!("{} must be an amount like 1234.50", field);

    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let (negative, digits) = match compact.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, compact.as_str()),
    };
    let (major, minor) = match digits.split_once(['.', ',']) {
        Some((major, minor)) => (major, minor),
        None => (digits, ""),
    };

    let all_digits = major.chars().chain(minor.chars()).all(|c| c.is_ascii_digit());
    if major.is_empty() || minor.len() > 2 || !all_digits {
        return Err(invalid());
    }

    let major: i64 = major.parse().map_err(|_| invalid())?;
    let minor: i64 = format!("{:0<2}", minor).parse().map_err(|_| invalid())?;
    let total = major
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(minor))
        .ok_or_else(invalid)?;

    Ok(Some(if negative { -total } else { total }))
}

/// Value for an amount input, e.g. `1234.50`
pub fn amount_input(amount_minor: Option<i64>) -> String {
    amount_minor
        .map(|amount| {
            let sign = if amount < 0 { "-" } else { "" };
            let abs = amount.unsigned_abs();
            format!("{}{}.{:02}", sign, abs / 100, abs % 100)
        })
        .unwrap_or_default()
}
