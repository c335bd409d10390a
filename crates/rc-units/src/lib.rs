//! rc-units: the radiation unit table for radconvert.
//!
//! Provides:
//! - Loading of the `unit,sievert_equivalent` CSV table (file or embedded)
//! - An ordered, immutable lookup from unit name to its factor in sieverts
//! - Search over unit names for selector widgets
//!
//! # Example
//!
//! ```
//! use rc_units::TableSource;
//!
//! let table = TableSource::Embedded.load().unwrap();
//! assert_eq!(table.first().name, "sievert");
//! assert_eq!(table.factor("rem").unwrap(), 0.01);
//! ```

pub mod embedded;
pub mod error;
pub mod source;
pub mod table;

// Re-exports for ergonomics
pub use error::{LoadError, LoadResult, TableError, TableResult};
pub use source::{TABLE_ENV_VAR, TableSource};
pub use table::{UnitEntry, UnitTable};
