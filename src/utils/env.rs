//! # Environment Access
//!
//! The resolver never calls `std::env` directly. It reads variables through
//! [`Environment`], so callers can hand it the process environment or any
//! in-memory map.

use std::collections::HashMap;
use std::env;

/// Read-only key/value lookup over environment variables.
pub trait Environment: Send + Sync {
    /// Returns the variable's value, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the variable's value only if it is set and non-empty.
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the current process.
///
/// Variables whose value is not valid unicode are reported as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl<S> Environment for HashMap<String, String, S>
where
    S: std::hash::BuildHasher + Send + Sync,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
