use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that may occur when reading a configuration record.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key is absent.
    #[error("missing key `{key}` in `{scope}`")]
    MissingKey { key: String, scope: String },

    /// The value is present but cannot be read as a number.
    #[error("key `{key}` in `{scope}` is not a scalar: {found}")]
    NotAScalar {
        key: String,
        scope: String,
        found: String,
    },

    /// The value is present but is not a string.
    #[error("key `{key}` in `{scope}` is not a word: {found}")]
    NotAWord {
        key: String,
        scope: String,
        found: String,
    },

    /// The value is present but is not a nested record.
    #[error("key `{key}` in `{scope}` is not a dictionary")]
    NotADictionary { key: String, scope: String },

    /// The value was read but violates a model constraint.
    #[error("invalid value for `{key}` in `{scope}`: {reason}")]
    Invalid {
        key: String,
        scope: String,
        reason: ConstraintError,
    },

    /// The configuration text could not be parsed.
    #[error("malformed configuration text: {0}")]
    Syntax(#[from] serde_json::Error),
}
