//! Ordered unit table: unit name -> equivalent dose in sieverts.

use crate::{LoadError, LoadResult, TableError, TableResult};
use rc_core::units::{Dose, in_sv, sv};
use rc_core::{RcError, Real, ensure_positive};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// One row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEntry {
    pub name: String,
    /// Sieverts per one of this unit. Always finite and > 0.
    pub factor: Real,
}

impl UnitEntry {
    /// Human-readable label (`dental_xray` -> `dental xray`).
    pub fn label(&self) -> String {
        self.name.replace('_', " ")
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase().replace('_', " ");
        if query.is_empty() {
            return true;
        }

        self.label().to_ascii_lowercase().contains(&query)
    }
}

/// Immutable, non-empty table of units in file order.
///
/// Built once from the backing CSV and never mutated; a reload produces a
/// fresh table.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    source: String,
    entries: Vec<UnitEntry>,
    index: HashMap<String, usize>,
}

impl UnitTable {
    /// Load from a CSV file on disk.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::from_reader(bytes.as_slice(), &path.display().to_string())
    }

    /// Load from in-memory CSV content. `source` names it in logs and errors.
    pub fn from_str_named(content: &str, source: &str) -> LoadResult<Self> {
        Self::from_reader(content.as_bytes(), source)
    }

    /// Load from any reader producing `unit,sievert_equivalent` CSV.
    ///
    /// The first row is a header and is ignored. Each following row must
    /// have exactly two columns: a non-empty unique name and a strictly
    /// positive factor.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> LoadResult<Self> {
        match parse_rows(reader) {
            Ok((entries, index)) => {
                tracing::info!(source = %source, units = entries.len(), "Loaded unit table");
                Ok(Self {
                    source: source.to_string(),
                    entries,
                    index,
                })
            }
            Err(err) => {
                tracing::warn!(source = %source, error = %err, "Failed to load unit table");
                Err(err)
            }
        }
    }

    /// Where this table was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Unit names in file order. Restartable: every call yields the same sequence.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&UnitEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Default selection for unit pickers.
    pub fn first(&self) -> &UnitEntry {
        // non-empty after a successful load
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sieverts per one `name`.
    pub fn factor(&self, name: &str) -> TableResult<Real> {
        self.entry(name)
            .map(|entry| entry.factor)
            .ok_or_else(|| TableError::UnknownUnit {
                name: name.to_string(),
            })
    }

    /// `value` of `unit` as a typed dose.
    pub fn to_dose(&self, value: Real, unit: &str) -> TableResult<Dose> {
        Ok(sv(value * self.factor(unit)?))
    }

    /// Express `dose` as a count of `unit`.
    pub fn from_dose(&self, dose: Dose, unit: &str) -> TableResult<Real> {
        Ok(in_sv(dose) / self.factor(unit)?)
    }

    /// Entries whose label contains `query`, in table order.
    pub fn filter(&self, query: &str) -> Vec<&UnitEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches_query(query))
            .collect()
    }
}

type ParsedRows = (Vec<UnitEntry>, HashMap<String, usize>);

fn parse_rows<R: Read>(reader: R) -> LoadResult<ParsedRows> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries: Vec<UnitEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut lines: Vec<u64> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| LoadError::Csv {
            line: e.position().map_or(0, |pos| pos.line()),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.len() != 2 {
            return Err(LoadError::MalformedRow {
                line,
                reason: format!("expected 2 columns, found {}", record.len()),
            });
        }

        let name = &record[0];
        let factor_text = &record[1];

        if name.is_empty() {
            return Err(LoadError::MalformedRow {
                line,
                reason: "unit name is empty".to_string(),
            });
        }

        let parsed: Real = factor_text.parse().map_err(|_| LoadError::MalformedRow {
            line,
            reason: format!("factor '{factor_text}' is not a number"),
        })?;

        let factor = ensure_positive(parsed, "unit factor").map_err(|err| match err {
            RcError::NonFinite { .. } => LoadError::MalformedRow {
                line,
                reason: format!("factor '{factor_text}' is not a finite number"),
            },
            RcError::InvalidArg { .. } => LoadError::NonPositiveFactor {
                name: name.to_string(),
                line,
                value: parsed,
            },
        })?;

        if let Some(&first) = index.get(name) {
            return Err(LoadError::DuplicateUnit {
                name: name.to_string(),
                line,
                first_line: lines[first],
            });
        }

        index.insert(name.to_string(), entries.len());
        lines.push(line);
        entries.push(UnitEntry {
            name: name.to_string(),
            factor,
        });
    }

    if entries.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok((entries, index))
}
