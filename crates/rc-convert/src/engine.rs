use crate::ConvertResult;
use rc_core::{Real, ensure_finite};
use rc_units::UnitTable;

/// Convert `value` of `unit_from` into `unit_to`.
///
/// `value * factor(unit_from) / factor(unit_to)`, evaluated through the base
/// unit. Converting a unit to itself returns `value` unchanged. Sign is not
/// checked; validating the number is the caller's job.
pub fn convert(value: Real, unit_from: &str, unit_to: &str, table: &UnitTable) -> ConvertResult<Real> {
    let dose = table.to_dose(value, unit_from)?;
    if unit_from == unit_to {
        return Ok(value);
    }

    let result = ensure_finite(table.from_dose(dose, unit_to)?, "converted value")?;
    tracing::trace!(value, unit_from, unit_to, result, "convert");
    Ok(result)
}

/// A single conversion, not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: Real,
    pub unit_from: String,
    pub unit_to: String,
}

impl ConversionRequest {
    pub fn new(value: Real, unit_from: impl Into<String>, unit_to: impl Into<String>) -> Self {
        Self {
            value,
            unit_from: unit_from.into(),
            unit_to: unit_to.into(),
        }
    }

    pub fn execute(&self, table: &UnitTable) -> ConvertResult<Real> {
        convert(self.value, &self.unit_from, &self.unit_to, table)
    }

    /// Same units, opposite direction, carrying `value`.
    pub fn reversed(&self, value: Real) -> Self {
        Self {
            value,
            unit_from: self.unit_to.clone(),
            unit_to: self.unit_from.clone(),
        }
    }
}
