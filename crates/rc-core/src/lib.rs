//! rc-core: stable foundation for radconvert.
//!
//! Contains:
//! - units (dose quantity backed by uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RcError, RcResult};
pub use numeric::*;
pub use units::*;
