//! # Utility Modules
//!
//! Thin wrappers over the environment and the file system, plus the
//! single-secret lookups the resolver is built from.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Environment-driven resolver configuration
//! - **Environment** (`env`) - Environment variable access
//! - **File** (`file`) - Secret file reads
//! - **Secret** (`secret`) - File-backed and direct environment lookups

pub mod constant;
pub mod env;
pub mod file;
pub mod secret;
