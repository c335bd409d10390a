//! Default unit table compiled into the binary.
//!
//! Values follow XKCD's radiation dose chart (<https://xkcd.com/radiation/>),
//! expressed in sieverts.

/// Name reported in logs and errors for the embedded table.
pub const EMBEDDED_TABLE_NAME: &str = "embedded:radiation_examples.csv";

/// Raw CSV content of the embedded table.
pub const RADIATION_EXAMPLES_CSV: &str = include_str!("../data/radiation_examples.csv");
