//! Single-secret lookups. Each helper returns `None` on any miss and logs the
//! reason; none of them ever logs a secret value.

use std::path::Path;

use tracing::{debug, warn};

use super::env::Environment;
use super::file::FileSystem;

/// Reads the file whose path is stored in `file_env_var_name` and returns its
/// trimmed content.
pub async fn read_file_from_env<E, F>(env: &E, fs: &F, file_env_var_name: &str) -> Option<String>
where
    E: Environment + ?Sized,
    F: FileSystem + ?Sized,
{
    let secret_file_path = secret_file_path(env, file_env_var_name)?;
    match fs.read_to_string(Path::new(&secret_file_path)).await {
        Ok(content) => Some(trim_secret(&content).to_string()),
        Err(e) => {
            warn!(file_env_var_name, %secret_file_path, ?e, "Error reading secret file");
            None
        }
    }
}

/// Blocking counterpart of [`read_file_from_env`].
pub fn read_file_from_env_blocking<E, F>(
    env: &E,
    fs: &F,
    file_env_var_name: &str,
) -> Option<String>
where
    E: Environment + ?Sized,
    F: FileSystem + ?Sized,
{
    let secret_file_path = secret_file_path(env, file_env_var_name)?;
    match fs.read_to_string_blocking(Path::new(&secret_file_path)) {
        Ok(content) => Some(trim_secret(&content).to_string()),
        Err(e) => {
            warn!(file_env_var_name, %secret_file_path, ?e, "Error reading secret file");
            None
        }
    }
}

/// Returns the value of `env_var_name` verbatim, untrimmed.
pub fn read_from_env<E>(env: &E, env_var_name: &str) -> Option<String>
where
    E: Environment + ?Sized,
{
    let secret = env.non_empty_var(env_var_name);
    if secret.is_none() {
        debug!(env_var_name, "Secret not set in environment");
    }
    secret
}

/// Strips surrounding whitespace and byte order marks from file content.
fn trim_secret(content: &str) -> &str {
    content.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn secret_file_path<E>(env: &E, file_env_var_name: &str) -> Option<String>
where
    E: Environment + ?Sized,
{
    let path = env.non_empty_var(file_env_var_name);
    if path.is_none() {
        debug!(file_env_var_name, "No secret file path in environment");
    }
    path
}
