//! Two-stage tariff validation
//!
//! Untrusted input first goes through the structural check, is then decoded
//! into the typed model and finally checked for well-formedness.

pub mod structure;
pub mod well_formed;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::tariff::Tariff;
use crate::support::errors::{TariffError, WellFormednessError};

pub use structure::{is_tariff, is_tariff_shape};
pub use well_formed::{check_well_formed, is_well_formed};

/// Runs both stages and returns the decoded tariff.
///
/// Integral floats such as `25200.0` are integers to both stages. Numbers
/// outside the model's integer domains (fractional values, negative prices,
/// prices or thresholds above `u32::MAX`) are reported as
/// [`WellFormednessError::Unrepresentable`].
pub fn validate_tariff(value: &Value) -> Result<Tariff, TariffError> {
    if !is_tariff(value) {
        return Err(TariffError::Shape);
    }
    let tariff = Tariff::deserialize(with_integral_numbers(value))
        .map_err(|e| WellFormednessError::Unrepresentable(e.to_string()))?;
    check_well_formed(&tariff)?;
    debug!(
        seasons = tariff.seasons.len(),
        day_profiles = tariff.day_profiles.len(),
        special_days = tariff.special_days.len(),
        "Tariff validated"
    );
    Ok(tariff)
}

/// Copy of `value` with every integral float rewritten as an integer.
fn with_integral_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < I64_EXACT_LIMIT)
            .map_or_else(|| value.clone(), |f| Value::from(f as i64)),
        Value::Array(items) => items.iter().map(with_integral_numbers).collect(),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), with_integral_numbers(field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// 2^63; integral floats below it convert to `i64` exactly.
const I64_EXACT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

pub fn is_valid_tariff(value: &Value) -> bool {
    match validate_tariff(value) {
        Ok(_) => true,
        Err(e) => {
            debug!(reason = %e, "Tariff rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::fixtures;
    use serde_json::json;

    #[test]
    fn non_tariffs_are_shape_errors() {
        for v in [Value::Null, json!([]), json!(5), json!(""), json!({})] {
            assert_eq!(validate_tariff(&v), Err(TariffError::Shape));
            assert!(!is_valid_tariff(&v));
        }
    }

    #[test]
    fn nominal() {
        let value = fixtures::validation_tariff_json();
        let tariff = validate_tariff(&value).unwrap();
        assert_eq!(tariff.seasons.len(), 2);
        assert!(is_valid_tariff(&fixtures::block_tariff_json()));
    }

    #[test]
    fn shape_passes_semantic_fails() {
        let mut value = fixtures::validation_tariff_json();
        value["dayProfiles"][0][0]["startTime"] = json!(1);
        assert!(is_tariff(&value));
        assert!(matches!(
            validate_tariff(&value),
            Err(TariffError::Semantic(WellFormednessError::DayProfileStartNonZero { .. }))
        ));
    }

    #[test]
    fn fractional_start_time_is_semantic() {
        let mut value = fixtures::validation_tariff_json();
        value["dayProfiles"][0][1]["startTime"] = json!(3600.5);
        assert!(is_tariff(&value));
        assert!(matches!(
            validate_tariff(&value),
            Err(TariffError::Semantic(WellFormednessError::Unrepresentable(_)))
        ));
    }

    #[test]
    fn zero_and_negative_references_are_valid() {
        for reference in [json!(0), json!(-1)] {
            let mut value = fixtures::validation_tariff_json();
            value["seasons"][0]["weekProfile"] = reference.clone();
            value["specialDays"][0]["dayProfile"] = reference;
            assert!(is_valid_tariff(&value));
        }
    }

    #[test]
    fn reference_past_collection_end_is_semantic() {
        let mut value = fixtures::validation_tariff_json();
        value["specialDays"][0]["dayProfile"] = json!(4);
        assert!(is_tariff(&value));
        assert!(matches!(
            validate_tariff(&value),
            Err(TariffError::Semantic(WellFormednessError::UndefinedSpecialDayProfile {
                special_day: 1,
                reference: 4
            }))
        ));
    }

    #[test]
    fn integral_floats_decode_as_integers() {
        let expected = validate_tariff(&fixtures::validation_tariff_json()).unwrap();

        let mut value = fixtures::validation_tariff_json();
        value["dayProfiles"][0][1]["startTime"] = json!(25200.0);
        value["dayProfiles"][0][1]["action"] = json!(3.0);
        value["seasons"][0]["year"] = json!(2014.0);
        value["seasons"][0]["weekProfile"] = json!(1.0);
        value["weekProfiles"][0][0] = json!(1.0);
        value["tous"][0] = json!(2121.0);
        value["pricing"]["priceScale"] = json!(-5.0);
        assert!(is_tariff(&value));
        assert_eq!(validate_tariff(&value), Ok(expected));
    }

    #[test]
    fn integral_float_action_keeps_mode() {
        let mut value = fixtures::validation_tariff_json();
        value["dayProfiles"][0][1]["action"] = json!(2.0);
        let tariff = validate_tariff(&value).unwrap();
        assert_eq!(
            tariff.day_profiles[0].schedules()[1],
            crate::domain::tariff::ProfileSchedule::tou(25200, 2).unwrap()
        );
    }

    #[test]
    fn negative_price_is_unrepresentable() {
        let mut value = fixtures::validation_tariff_json();
        value["tous"][0] = json!(-5);
        assert!(is_tariff(&value));
        assert!(matches!(
            validate_tariff(&value),
            Err(TariffError::Semantic(WellFormednessError::Unrepresentable(_)))
        ));
    }

    #[test]
    fn wildcard_year_accepted() {
        let mut value = fixtures::validation_tariff_json();
        value["seasons"][0].as_object_mut().unwrap().remove("year");
        assert!(is_valid_tariff(&value));
    }
}
