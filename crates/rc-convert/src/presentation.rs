//! Calls exposed to the presentation layer.

use crate::{ConvertError, ConvertResult, FollowerValue, ParseError, convert};
use rc_core::Real;
use rc_units::UnitTable;

/// Unit names for both selectors, in table order. Default selection is the first.
pub fn get_unit_names(table: &UnitTable) -> Vec<&str> {
    table.names().collect()
}

/// Parse value-field text. Surrounding whitespace is ignored; `inf` and
/// `NaN` are rejected like any other non-number.
pub fn parse_driver_value(text: &str) -> Result<Real, ParseError> {
    match text.trim().parse::<Real>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError {
            text: text.to_string(),
        }),
    }
}

/// Compute the follower's value from the driver's text.
///
/// Unparseable driver text, or a number whose conversion overflows, yields
/// [`FollowerValue::Blank`] rather than an error, so a stale number is never
/// left on screen. Only an unknown unit escapes.
pub fn on_driver_changed(
    table: &UnitTable,
    driver_value: &str,
    driver_unit: &str,
    follower_unit: &str,
) -> ConvertResult<FollowerValue> {
    table.factor(driver_unit)?;
    table.factor(follower_unit)?;

    let v = match parse_driver_value(driver_value) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(error = %err, "Blanking follower");
            return Ok(FollowerValue::Blank);
        }
    };

    match convert(v, driver_unit, follower_unit, table) {
        Ok(result) => Ok(FollowerValue::Value(result)),
        Err(ConvertError::NonFinite(err)) => {
            tracing::debug!(error = %err, "Conversion overflowed; blanking follower");
            Ok(FollowerValue::Blank)
        }
        Err(err) => Err(err),
    }
}

/// Exchange the two selected units.
pub fn on_units_swapped<U>(unit_a: U, unit_b: U) -> (U, U) {
    (unit_b, unit_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UnitTable {
        UnitTable::from_str_named(
            "unit,sievert_equivalent\nsievert,1\nmillisievert,0.001\n",
            "test",
        )
        .unwrap()
    }

    #[test]
    fn unit_names_in_order() {
        assert_eq!(get_unit_names(&table()), ["sievert", "millisievert"]);
    }

    #[test]
    fn parse_accepts_plain_and_scientific() {
        assert_eq!(parse_driver_value("5"), Ok(5.0));
        assert_eq!(parse_driver_value("  2.5e-3 "), Ok(0.0025));
        assert_eq!(parse_driver_value("-1"), Ok(-1.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in ["", "   ", "abc", "1,5", "inf", "NaN", "5 Sv"] {
            assert!(parse_driver_value(text).is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn driver_change_converts() {
        let value = on_driver_changed(&table(), "5", "millisievert", "sievert").unwrap();
        let v = value.value().unwrap();
        assert!((v - 0.005).abs() < 1e-15);
    }

    #[test]
    fn driver_change_blanks_on_bad_input() {
        let value = on_driver_changed(&table(), "abc", "millisievert", "sievert").unwrap();
        assert_eq!(value, FollowerValue::Blank);
    }

    #[test]
    fn driver_change_blanks_on_overflow() {
        let value = on_driver_changed(&table(), "1e307", "sievert", "millisievert").unwrap();
        assert_eq!(value, FollowerValue::Blank);
    }

    #[test]
    fn driver_change_checks_units_even_when_blank() {
        let err = on_driver_changed(&table(), "abc", "gray", "sievert").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownUnit(_)));
    }

    #[test]
    fn swap_is_pure() {
        assert_eq!(
            on_units_swapped("sievert", "millisievert"),
            ("millisievert", "sievert")
        );
    }
}
