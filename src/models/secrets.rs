use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{SecretsError, SecretsResult};

/// The outcome of one resolution call: identifier to secret value.
///
/// Only identifiers that resolved are present. The mapping is built once by
/// the resolver and never mutated afterwards. Values are kept in
/// [`SecretString`] so `Debug` output stays redacted.
#[derive(Debug, Default)]
pub struct ResolvedSecrets {
    secrets: IndexMap<String, SecretString>,
}

impl ResolvedSecrets {
    /// Returns the value resolved for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::NotFound`] when the identifier was never
    /// requested or could not be resolved. The two cases are not
    /// distinguished.
    pub fn get(&self, identifier: &str) -> SecretsResult<&str> {
        self.secrets
            .get(identifier)
            .map(|secret| secret.expose_secret())
            .ok_or_else(|| SecretsError::NotFound(identifier.to_string()))
    }

    /// Lists the resolved identifiers in insertion order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.secrets.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.secrets.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Iterates over `(identifier, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.secrets
            .iter()
            .map(|(id, secret)| (id.as_str(), secret.expose_secret()))
    }
}

impl FromIterator<(String, String)> for ResolvedSecrets {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            secrets: iter
                .into_iter()
                .map(|(id, value)| (id, SecretString::from(value)))
                .collect(),
        }
    }
}
