use chrono::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date format must not be empty.")]
    EmptyFormat,
    #[error("Could not parse '{value}' with pattern '{pattern}'. {source}")]
    Parse {
        value: String,
        pattern: String,
        #[source]
        source: ParseError,
    },
    #[error("'{value}' does not describe a date or a time under pattern '{pattern}'.")]
    Incomplete { value: String, pattern: String },
    #[error("'{value}' does not hold a valid value for token '{symbol}'.")]
    TokenMismatch { value: String, symbol: char },
    #[error("'{value}' has unexpected trailing text '{remainder}'.")]
    TrailingInput { value: String, remainder: String },
    #[error("'{value}' lies outside the supported date range.")]
    OutOfRange { value: String },
    #[error("Could not render a date with pattern '{pattern}'.")]
    Render { pattern: String },
}
