//! # Secret Resolver
//!
//! Resolves a batch of secrets in two stages per entry:
//!
//! 1. **File-backed lookup** - the lookup key names an environment variable
//!    holding a file path; the file's trimmed content is the secret.
//! 2. **Environment fallback** - only when enabled and stage 1 failed, the
//!    environment variable named after the identifier is used verbatim.
//!
//! Entries that fail both stages are dropped from the result. The async and
//! blocking entry points give the same answer for the same environment and
//! file contents; the async one runs every entry concurrently on the
//! caller's task and returns only once all of them have finished.

use futures::future::join_all;
use tracing::{debug, info, instrument};

use crate::error::SecretsResult;
use crate::models::{ResolvedSecrets, SecretKeys};
use crate::utils::constant::ResolverConfig;
use crate::utils::env::{Environment, ProcessEnv};
use crate::utils::file::{FileSystem, LocalFs};
use crate::utils::secret::{read_file_from_env, read_file_from_env_blocking, read_from_env};

/// Resolves secrets against an [`Environment`] and a [`FileSystem`].
///
/// Holds no state between calls; every call builds a fresh
/// [`ResolvedSecrets`].
#[derive(Debug, Default, Clone)]
pub struct SecretResolver<E = ProcessEnv, F = LocalFs> {
    env: E,
    fs: F,
    allow_env_fallback: bool,
}

impl SecretResolver {
    /// Creates a resolver over the process environment and local file system
    /// with the environment fallback disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver over the process environment and local file
    /// system, configured from [`ResolverConfig::from_env`].
    pub fn from_env() -> Self {
        let config = ResolverConfig::from_env(&ProcessEnv);
        Self::new().with_config(config)
    }
}

impl<E, F> SecretResolver<E, F>
where
    E: Environment,
    F: FileSystem,
{
    /// Creates a resolver over the given collaborators, fallback disabled.
    pub fn with_sources(env: E, fs: F) -> Self {
        Self {
            env,
            fs,
            allow_env_fallback: false,
        }
    }

    /// Enables or disables the plain environment variable fallback.
    pub fn allow_env_fallback(mut self, allow: bool) -> Self {
        self.allow_env_fallback = allow;
        self
    }

    pub fn with_config(self, config: ResolverConfig) -> Self {
        self.allow_env_fallback(config.allow_env_fallback)
    }

    /// Resolves every requested secret concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SecretsError::InvalidInput`] if `keys` is empty.
    /// Missing or unreadable secrets are never errors; they are simply
    /// absent from the result.
    ///
    /// # Panics
    ///
    /// With [`LocalFs`], file reads go through `tokio::fs` and panic when not
    /// polled inside a Tokio runtime. Use [`SecretResolver::resolve_blocking`]
    /// on other executors.
    #[instrument(skip_all, fields(allow_env_fallback = self.allow_env_fallback))]
    pub async fn resolve(&self, keys: impl Into<SecretKeys>) -> SecretsResult<ResolvedSecrets> {
        let key_map = keys.into().normalize()?;

        let lookups = key_map
            .iter()
            .map(|(identifier, lookup_key)| self.resolve_one(identifier, lookup_key));
        let values = join_all(lookups).await;

        let secrets: ResolvedSecrets = key_map
            .iter()
            .zip(values)
            .filter_map(|((identifier, _), value)| value.map(|v| (identifier.to_owned(), v)))
            .collect();

        info!(
            requested = key_map.len(),
            resolved = secrets.len(),
            "Resolved secrets"
        );
        Ok(secrets)
    }

    /// Resolves every requested secret one after another on the calling
    /// thread, in the order the identifiers were given.
    ///
    /// # Errors
    ///
    /// Same as [`SecretResolver::resolve`].
    #[instrument(skip_all, fields(allow_env_fallback = self.allow_env_fallback))]
    pub fn resolve_blocking(&self, keys: impl Into<SecretKeys>) -> SecretsResult<ResolvedSecrets> {
        let key_map = keys.into().normalize()?;

        let secrets: ResolvedSecrets = key_map
            .iter()
            .filter_map(|(identifier, lookup_key)| {
                self.resolve_one_blocking(identifier, lookup_key)
                    .map(|v| (identifier.to_owned(), v))
            })
            .collect();

        info!(
            requested = key_map.len(),
            resolved = secrets.len(),
            "Resolved secrets"
        );
        Ok(secrets)
    }

    async fn resolve_one(&self, identifier: &str, lookup_key: &str) -> Option<String> {
        if let Some(secret) = read_file_from_env(&self.env, &self.fs, lookup_key).await {
            return Some(secret);
        }
        self.fallback(identifier)
    }

    fn resolve_one_blocking(&self, identifier: &str, lookup_key: &str) -> Option<String> {
        if let Some(secret) = read_file_from_env_blocking(&self.env, &self.fs, lookup_key) {
            return Some(secret);
        }
        self.fallback(identifier)
    }

    fn fallback(&self, identifier: &str) -> Option<String> {
        if !self.allow_env_fallback {
            debug!(identifier, "Secret unresolved, env fallback disabled");
            return None;
        }
        read_from_env(&self.env, identifier)
    }
}
