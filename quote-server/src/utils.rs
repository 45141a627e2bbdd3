use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid number '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a command-line number into a [`Decimal`].
///
/// Commas are read as thousands separators (`"1,250.50"`). Unlike a form
/// field, an empty argument is an error rather than zero.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = s.trim().replace(',', "");
    normalized.parse().map_err(|source| ParseDecimalError {
        input: s.to_string(),
        source,
    })
}
