//! Parsing helpers for dates, amounts, and output format.

use chrono::NaiveDate;

use tally_core::Money;

use crate::errors::CliError;

/// Parse a calendar date (YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
    })
}

/// Parse a non-negative amount such as `12`, `12.50` or `12,50`.
pub fn parse_amount(value: &str) -> anyhow::Result<Money> {
    value.parse::<Money>().map_err(|e| {
        CliError::invalid_input_with_hint(
            format!("Invalid amount \"{}\": {}", value, e),
            "Hint: Use a positive number with up to two decimals, e.g. 12,50",
        )
        .into()
    })
}

/// Trim a description and reject blank ones.
pub fn parse_description(value: &str) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("Description must not be empty").into());
    }
    Ok(trimmed.to_string())
}

/// Human output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Validate a `--format` value.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn test_parse_amount_accepts_comma() {
        assert_eq!(parse_amount("12,50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_description_trims() {
        assert_eq!(parse_description("  Pizza ").unwrap(), "Pizza");
        assert!(parse_description("   ").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
