use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::support::constraint::Constraint;

use super::ConfigError;

const ROOT_SCOPE: &str = "<root>";

/// A hierarchical key/value configuration record.
///
/// Entries are scalars, words (strings), or nested dictionaries. Each
/// dictionary remembers the path it was reached through so that lookup
/// errors can name the offending entry.
///
/// `Dictionary` serializes transparently as a JSON object, which lets a host
/// application embed species records in its own configuration structures.
///
/// # Example
///
/// ```
/// use twine_transport::support::config::Dictionary;
///
/// let dict = Dictionary::parse(r#"{ "transport": { "As": 1.458e-6, "Pr": "0.7" } }"#).unwrap();
/// let transport = dict.sub_dict("transport").unwrap();
///
/// assert_eq!(transport.lookup_scalar("As").unwrap(), 1.458e-6);
/// assert_eq!(transport.lookup_scalar("Pr").unwrap(), 0.7);
/// assert!(transport.lookup_scalar("Ts").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: Map<String, Value>,
    #[serde(skip)]
    scope: String,
}

impl Dictionary {
    /// Creates an empty root dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dictionary from its JSON text form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Syntax`] if the text is not a JSON object.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let entries = serde_json::from_str(text)?;
        Ok(Self {
            entries,
            scope: String::new(),
        })
    }

    /// Returns the path of this dictionary within its root.
    #[must_use]
    pub fn scope(&self) -> &str {
        if self.scope.is_empty() {
            ROOT_SCOPE
        } else {
            &self.scope
        }
    }

    /// Returns `true` if an entry named `key` exists.
    #[must_use]
    pub fn found(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up a scalar entry.
    ///
    /// Both JSON numbers and strings holding a number are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the entry is absent, or
    /// [`ConfigError::NotAScalar`] if it cannot be read as a number.
    pub fn lookup_scalar(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self.lookup(key)?;

        let scalar = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };

        scalar.ok_or_else(|| ConfigError::NotAScalar {
            key: key.to_owned(),
            scope: self.scope().to_owned(),
            found: value.to_string(),
        })
    }

    /// Looks up a scalar entry, falling back to `default` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAScalar`] if the entry exists but is not a number.
    pub fn lookup_scalar_or(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        if self.found(key) {
            self.lookup_scalar(key)
        } else {
            Ok(default)
        }
    }

    /// Looks up a scalar entry and checks it against the constraint `C`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Dictionary::lookup_scalar`], or
    /// [`ConfigError::Invalid`] if the value violates the constraint.
    pub fn lookup_checked<C: Constraint<f64>>(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self.lookup_scalar(key)?;
        self.check::<C>(key, value)
    }

    /// Checks `value`, read from `key`, against the constraint `C`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the value violates the constraint.
    pub fn check<C: Constraint<f64>>(&self, key: &str, value: f64) -> Result<f64, ConfigError> {
        C::check(&value).map_err(|reason| ConfigError::Invalid {
            key: key.to_owned(),
            scope: self.scope().to_owned(),
            reason,
        })?;
        Ok(value)
    }

    /// Looks up a word (string) entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the entry is absent, or
    /// [`ConfigError::NotAWord`] if it is not a string.
    pub fn lookup_word(&self, key: &str) -> Result<&str, ConfigError> {
        match self.lookup(key)? {
            Value::String(word) => Ok(word.as_str()),
            other => Err(ConfigError::NotAWord {
                key: key.to_owned(),
                scope: self.scope().to_owned(),
                found: other.to_string(),
            }),
        }
    }

    /// Returns the nested dictionary stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the entry is absent, or
    /// [`ConfigError::NotADictionary`] if it is not an object.
    pub fn sub_dict(&self, key: &str) -> Result<Dictionary, ConfigError> {
        match self.lookup(key)? {
            Value::Object(entries) => Ok(Self {
                entries: entries.clone(),
                scope: self.child_scope(key),
            }),
            _ => Err(ConfigError::NotADictionary {
                key: key.to_owned(),
                scope: self.scope().to_owned(),
            }),
        }
    }

    /// Sets a scalar entry, replacing any existing value.
    ///
    /// Non-finite values have no JSON representation and are stored as `null`.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f64) {
        self.entries.insert(key.into(), Value::from(value));
    }

    /// Sets a word entry, replacing any existing value.
    pub fn set_word(&mut self, key: impl Into<String>, word: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(word.into()));
    }

    /// Sets a nested dictionary, replacing any existing value.
    pub fn set_sub_dict(&mut self, key: impl Into<String>, dict: Dictionary) {
        self.entries.insert(key.into(), Value::Object(dict.entries));
    }

    fn lookup(&self, key: &str) -> Result<&Value, ConfigError> {
        self.entries.get(key).ok_or_else(|| ConfigError::MissingKey {
            key: key.to_owned(),
            scope: self.scope().to_owned(),
        })
    }

    fn child_scope(&self, key: &str) -> String {
        if self.scope.is_empty() {
            key.to_owned()
        } else {
            format!("{}/{key}", self.scope)
        }
    }
}

/// Writes the dictionary as pretty-printed JSON.
impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.entries).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::{ConstraintError, StrictlyPositive};

    fn species() -> Dictionary {
        Dictionary::parse(
            r#"{
                "name": "air",
                "specie": { "molWeight": 28.96 },
                "transport": { "As": 1.458e-6, "Ts": "110.4", "Pr": [0.7] }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn scalar_lookup() {
        let transport = species().sub_dict("transport").unwrap();

        assert_eq!(transport.lookup_scalar("As").unwrap(), 1.458e-6);
        assert_eq!(transport.lookup_scalar("Ts").unwrap(), 110.4);
    }

    #[test]
    fn missing_key_names_its_scope() {
        let transport = species().sub_dict("transport").unwrap();

        let error = transport.lookup_scalar("mu").unwrap_err();
        assert!(matches!(
            &error,
            ConfigError::MissingKey { key, scope } if key == "mu" && scope == "transport"
        ));
        assert_eq!(error.to_string(), "missing key `mu` in `transport`");
    }

    #[test]
    fn malformed_scalar() {
        let dict = species();

        assert!(matches!(
            dict.sub_dict("transport").unwrap().lookup_scalar("Pr"),
            Err(ConfigError::NotAScalar { .. })
        ));
        assert!(matches!(
            dict.lookup_scalar("name"),
            Err(ConfigError::NotAScalar { .. })
        ));
    }

    #[test]
    fn words_and_sub_dicts() {
        let dict = species();

        assert_eq!(dict.lookup_word("name").unwrap(), "air");
        assert!(matches!(
            dict.lookup_word("specie"),
            Err(ConfigError::NotAWord { .. })
        ));
        assert!(matches!(
            dict.sub_dict("name"),
            Err(ConfigError::NotADictionary { .. })
        ));
        assert_eq!(dict.scope(), "<root>");
    }

    #[test]
    fn nested_scope() {
        let dict = Dictionary::parse(r#"{ "a": { "b": { } } }"#).unwrap();
        let b = dict.sub_dict("a").unwrap().sub_dict("b").unwrap();

        assert_eq!(b.scope(), "a/b");
        assert!(!b.found("b"));
    }

    #[test]
    fn defaults_and_constraints() {
        let specie = species().sub_dict("specie").unwrap();

        assert_eq!(specie.lookup_scalar_or("massFraction", 1.0).unwrap(), 1.0);
        assert_eq!(
            specie.lookup_checked::<StrictlyPositive>("molWeight").unwrap(),
            28.96
        );

        let mut bad = Dictionary::new();
        bad.set_scalar("molWeight", -2.0);
        assert!(matches!(
            bad.lookup_checked::<StrictlyPositive>("molWeight"),
            Err(ConfigError::Invalid {
                reason: ConstraintError::Negative,
                ..
            })
        ));
    }

    #[test]
    fn written_text_parses_back() {
        let mut transport = Dictionary::new();
        transport.set_scalar("As", 1.458e-6);
        transport.set_scalar("Pr", 0.7);

        let mut dict = Dictionary::new();
        dict.set_word("name", "air");
        dict.set_sub_dict("transport", transport);

        let reread = Dictionary::parse(&dict.to_string()).unwrap();
        assert_eq!(reread, dict);
    }

    #[test]
    fn syntax_error() {
        assert!(matches!(
            Dictionary::parse("As 1.458e-6;"),
            Err(ConfigError::Syntax(_))
        ));
        assert!(matches!(
            Dictionary::parse("[1, 2]"),
            Err(ConfigError::Syntax(_))
        ));
    }
}
