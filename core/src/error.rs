//! Errors

use thiserror::Error;

/// Errors raised while building distributions, parsing photometric data or
/// configuring light sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// Construction input that can never describe a valid distribution.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value (strategy or task name) that is not supported.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Malformed or unsupported IES photometric data.
    #[error("invalid photometric data: {0}")]
    InvalidPhotometricData(String),

    /// A file could not be read.
    #[error("error reading file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Returns an `InvalidArgument` error unless every value is finite and
/// non-negative.
///
/// * `what`   - Name of the checked table, used in the error message.
/// * `values` - The values to check.
pub(crate) fn check_non_negative(what: &str, values: &[f32]) -> Result<()> {
    match values.iter().position(|v| !(v.is_finite() && *v >= 0.0)) {
        Some(i) => Err(SamplingError::InvalidArgument(format!(
            "{what}[{i}] = {} is not a finite non-negative value",
            values[i]
        ))),
        None => Ok(()),
    }
}
