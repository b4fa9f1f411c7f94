//! Configuration records for constructing models.
//!
//! A [`Dictionary`] is a hierarchical key/value record backed by a JSON object.
//! Models read their coefficients from it through [`FromDict`] and write them
//! back through [`WriteDict`], so anything written can be read again.
//!
//! A species record has the following shape:
//!
//! ```json
//! {
//!   "name": "air",
//!   "specie": { "massFraction": 1.0, "molWeight": 28.96 },
//!   "thermodynamics": { "Cp": 1005.0 },
//!   "transport": { "As": 1.458e-6, "Ts": 110.4, "Pr": 0.7 }
//! }
//! ```

mod dictionary;
mod error;

pub use dictionary::Dictionary;
pub use error::ConfigError;

/// Types that can be constructed from a configuration record.
///
/// This is the factory entry point used for runtime model selection.
pub trait FromDict: Sized {
    /// Builds a value from `dict`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required entry is missing or malformed.
    fn from_dict(dict: &Dictionary) -> Result<Self, ConfigError>;
}

/// Types that can write themselves into a configuration record.
pub trait WriteDict {
    /// Writes this value's entries into `dict`.
    fn write(&self, dict: &mut Dictionary);

    /// Returns a new record containing this value's entries.
    #[must_use]
    fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        self.write(&mut dict);
        dict
    }
}
