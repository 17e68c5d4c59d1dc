use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};

use crate::error::{SecretsError, SecretsResult};

/// The identifiers a caller asks the resolver for.
///
/// Every accepted input shape converts into one of these variants through
/// `From`, so callers can pass a slice of names, a map of aliases, or a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretKeys {
    /// Each name is both the identifier and the lookup key.
    List(Vec<String>),
    /// `(identifier, lookup key)` pairs. Later pairs override earlier ones.
    Pairs(Vec<(String, String)>),
    /// Like [`SecretKeys::List`], with uniqueness already guaranteed.
    Set(IndexSet<String>),
}

impl SecretKeys {
    /// Normalizes the input into a single identifier to lookup key mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SecretsError::InvalidInput`] if the collection is empty.
    pub fn normalize(self) -> SecretsResult<KeyMap> {
        let entries: IndexMap<String, String> = match self {
            SecretKeys::List(names) => names
                .into_iter()
                .map(|name| (name.clone(), name))
                .collect(),
            SecretKeys::Pairs(pairs) => pairs.into_iter().collect(),
            SecretKeys::Set(names) => names
                .into_iter()
                .map(|name| (name.clone(), name))
                .collect(),
        };

        if entries.is_empty() {
            return Err(SecretsError::InvalidInput(
                "please provide a non-empty list, map or set of secret names",
            ));
        }

        Ok(KeyMap(entries))
    }
}

/// Normalized, non-empty mapping from secret identifier to the environment
/// variable holding its file path. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap(IndexMap<String, String>);

impl KeyMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a map produced by [`SecretKeys::normalize`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the lookup key configured for `identifier`.
    pub fn lookup_key(&self, identifier: &str) -> Option<&str> {
        self.0.get(identifier).map(String::as_str)
    }

    /// Iterates over `(identifier, lookup key)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, key)| (id.as_str(), key.as_str()))
    }
}

impl From<Vec<String>> for SecretKeys {
    fn from(names: Vec<String>) -> Self {
        SecretKeys::List(names)
    }
}

impl From<Vec<&str>> for SecretKeys {
    fn from(names: Vec<&str>) -> Self {
        SecretKeys::List(names.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for SecretKeys {
    fn from(names: &[&str]) -> Self {
        SecretKeys::List(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SecretKeys {
    fn from(names: [&str; N]) -> Self {
        SecretKeys::List(names.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<(String, String)>> for SecretKeys {
    fn from(pairs: Vec<(String, String)>) -> Self {
        SecretKeys::Pairs(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for SecretKeys {
    fn from(pairs: [(&str, &str); N]) -> Self {
        SecretKeys::Pairs(
            pairs
                .into_iter()
                .map(|(id, key)| (id.to_owned(), key.to_owned()))
                .collect(),
        )
    }
}

impl From<IndexMap<String, String>> for SecretKeys {
    fn from(map: IndexMap<String, String>) -> Self {
        SecretKeys::Pairs(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for SecretKeys {
    fn from(map: BTreeMap<String, String>) -> Self {
        SecretKeys::Pairs(map.into_iter().collect())
    }
}

/// Iteration order of the result follows the `HashMap`'s own order.
impl<S> From<HashMap<String, String, S>> for SecretKeys {
    fn from(map: HashMap<String, String, S>) -> Self {
        SecretKeys::Pairs(map.into_iter().collect())
    }
}

impl From<IndexSet<String>> for SecretKeys {
    fn from(set: IndexSet<String>) -> Self {
        SecretKeys::Set(set)
    }
}

impl From<BTreeSet<String>> for SecretKeys {
    fn from(set: BTreeSet<String>) -> Self {
        SecretKeys::Set(set.into_iter().collect())
    }
}

impl<S> From<HashSet<String, S>> for SecretKeys {
    fn from(set: HashSet<String, S>) -> Self {
        SecretKeys::Set(set.into_iter().collect())
    }
}
