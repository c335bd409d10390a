//! Where the unit table comes from.

use crate::embedded::{EMBEDDED_TABLE_NAME, RADIATION_EXAMPLES_CSV};
use crate::{LoadResult, UnitTable};
use std::path::PathBuf;

/// Environment variable naming a CSV file to use instead of the embedded table.
pub const TABLE_ENV_VAR: &str = "RADCONVERT_TABLE";

/// Backing resource for a [`UnitTable`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableSource {
    /// Table compiled into the binary.
    #[default]
    Embedded,
    /// User-supplied CSV file.
    File(PathBuf),
}

impl TableSource {
    /// `File` if `RADCONVERT_TABLE` is set to a non-empty value, else `Embedded`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(TABLE_ENV_VAR).map(PathBuf::from))
    }

    fn from_env_value(value: Option<PathBuf>) -> Self {
        match value {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path),
            _ => Self::Embedded,
        }
    }

    /// Read and validate the table. Calling this again is a reload.
    pub fn load(&self) -> LoadResult<UnitTable> {
        match self {
            Self::Embedded => UnitTable::from_str_named(RADIATION_EXAMPLES_CSV, EMBEDDED_TABLE_NAME),
            Self::File(path) => UnitTable::from_path(path),
        }
    }
}
