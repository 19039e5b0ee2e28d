//! lti-core: stable numeric foundation for the LTI simulation crates.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)

pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
