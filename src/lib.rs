//! # Docker Secrets - File-Mounted Secret Resolution
//!
//! Resolves a named set of secrets from files whose paths are stored in
//! environment variables (the way Docker and Kubernetes mount secrets), with
//! an optional fallback to reading the value straight from an environment
//! variable.
//!
//! ```no_run
//! # async fn run() -> docker_secrets::SecretsResult<()> {
//! // DB_PASSWORD_FILE=/run/secrets/db_password
//! let secrets = docker_secrets::resolve([("db_password", "DB_PASSWORD_FILE")], true).await?;
//! let password = docker_secrets::get_secret(&secrets, "db_password")?;
//! # let _ = password;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`models`] - Requested keys and the resolved secrets mapping
//! - [`services`] - The secret resolver
//! - [`utils`] - Environment and file access, configuration

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{SecretsError, SecretsResult};
pub use models::{KeyMap, ResolvedSecrets, SecretKeys};
pub use services::resolver::SecretResolver;
pub use utils::constant::{ALLOW_ENV_FALLBACK_VAR, ResolverConfig};
pub use utils::env::{Environment, ProcessEnv};
pub use utils::file::{FileSystem, LocalFs};

/// Resolves `keys` concurrently against the process environment and the
/// local file system.
///
/// With `allow_env_fallback`, an identifier whose file cannot be found is
/// read directly from the environment variable of the same name.
///
/// # Errors
///
/// Returns [`SecretsError::InvalidInput`] if `keys` is empty.
///
/// # Panics
///
/// Secret files are read through `tokio::fs`, so this must be awaited inside
/// a Tokio runtime. Use [`resolve_blocking`] elsewhere.
pub async fn resolve(
    keys: impl Into<SecretKeys>,
    allow_env_fallback: bool,
) -> SecretsResult<ResolvedSecrets> {
    SecretResolver::new()
        .allow_env_fallback(allow_env_fallback)
        .resolve(keys)
        .await
}

/// Blocking counterpart of [`resolve`]. Entries are resolved sequentially.
///
/// # Errors
///
/// Returns [`SecretsError::InvalidInput`] if `keys` is empty.
pub fn resolve_blocking(
    keys: impl Into<SecretKeys>,
    allow_env_fallback: bool,
) -> SecretsResult<ResolvedSecrets> {
    SecretResolver::new()
        .allow_env_fallback(allow_env_fallback)
        .resolve_blocking(keys)
}

/// Returns the secret stored under `identifier`.
///
/// # Errors
///
/// Returns [`SecretsError::NotFound`] if the identifier did not resolve.
pub fn get_secret<'a>(secrets: &'a ResolvedSecrets, identifier: &str) -> SecretsResult<&'a str> {
    secrets.get(identifier)
}

/// Lists every resolved identifier, in insertion order.
pub fn list_identifiers(secrets: &ResolvedSecrets) -> Vec<&str> {
    secrets.identifiers()
}
