mod keys;
mod secrets;

pub use keys::{KeyMap, SecretKeys};
pub use secrets::ResolvedSecrets;
