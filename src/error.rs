//! Error types for fetching the quote page and reading prices out of it.
//!
//! - `FetchError` ends the whole run: nothing can be priced without the page.
//! - `PriceError` belongs to one currency and is shown in that currency's row.

use thiserror::Error;

/// Errors raised while downloading and parsing the quote page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, client setup failure, or the deadline elapsed.
    #[error("{0}")]
    Network(String),

    /// The server answered with anything other than 200 OK.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(String),

    /// The body was empty, so there is no document to read prices from.
    #[error("failed to parse document: {0}")]
    Parse(String),
}

/// Errors raised while pricing a single currency.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("row not found")]
    RowNotFound,

    #[error("data-price attribute missing")]
    AttributeMissing,

    /// Carries the raw attribute text as it appeared on the page.
    #[error("invalid number format: {0}")]
    InvalidNumberFormat(String),
}
