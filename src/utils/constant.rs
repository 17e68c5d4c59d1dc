//! # Configuration
//!
//! Environment-driven settings for the resolver. Invalid values never abort;
//! they are logged and replaced with the default.

use tracing::error;

use super::env::Environment;

/// Enables the plain environment variable fallback when set to a truthy
/// value (`true`, `1`, `yes`, `on`; case insensitive).
pub const ALLOW_ENV_FALLBACK_VAR: &str = "DOCKER_SECRETS_ALLOW_ENV_FALLBACK";

/// Resolver settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Read a secret straight from the environment variable named after its
    /// identifier when the file-backed lookup fails. Off by default.
    pub allow_env_fallback: bool,
}

impl ResolverConfig {
    /// Builds the config from [`ALLOW_ENV_FALLBACK_VAR`].
    ///
    /// A missing variable means `false`. An unparsable one also means
    /// `false`, with an error logged.
    pub fn from_env<E: Environment + ?Sized>(env: &E) -> Self {
        let allow_env_fallback = match env.non_empty_var(ALLOW_ENV_FALLBACK_VAR) {
            None => false,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                error!(
                    value = %raw,
                    "Invalid {ALLOW_ENV_FALLBACK_VAR} env var, using fallback false"
                );
                false
            }),
        };

        Self { allow_env_fallback }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
