//! # Services
//!
//! ## Available Services
//!
//! - **Resolver** (`resolver`) - Batch secret resolution, async and blocking

pub mod resolver;
