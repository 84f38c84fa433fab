//! Structural validation
//!
//! Pure predicates over untrusted JSON confirming it has the shape of a
//! [`Tariff`]: field types, collection lengths and the mode/action pairing of
//! schedule entries. Nothing here looks across entities; references and
//! calendar ranges are the well-formedness stage's concern.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::tariff::model::{
    BlockSlot, DayProfileName, Tariff, TouAction, BLOCK_SLOTS, DAYS_PER_WEEK, MAX_DAY_PROFILES,
    MAX_SCHEDULES, MAX_SEASONS, MAX_SPECIAL_DAYS, MAX_THRESHOLDS, MAX_TOUS, MAX_WEEK_PROFILES,
    MIN_DAY_PROFILES, MIN_SCHEDULES, MIN_SEASONS, MIN_THRESHOLDS, MIN_WEEK_PROFILES,
};

const CALENDAR_FIELDS: [&str; 4] = ["year", "month", "dayOfMonth", "dayOfWeek"];

// ── Combinators ────────────────────────────────────────────────

/// Array of exactly `n` elements, each satisfying `is_t`.
pub fn is_tuple(value: &Value, n: usize, is_t: impl Fn(&Value) -> bool) -> bool {
    is_tuple_min_max(value, n, n, is_t)
}

/// Array of `min..=max` elements, each satisfying `is_t`.
pub fn is_tuple_min_max(
    value: &Value,
    min: usize,
    max: usize,
    is_t: impl Fn(&Value) -> bool,
) -> bool {
    match value.as_array() {
        Some(items) => (min..=max).contains(&items.len()) && items.iter().all(|item| is_t(item)),
        None => false,
    }
}

/// Integer in `1..=n`. Integral floats such as `3.0` count as integers.
pub fn is_number_range(value: &Value, n: u8) -> bool {
    integer(value).is_some_and(|i| i > 0 && i <= i64::from(n))
}

fn integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if value.is_u64() {
        return Some(i64::MAX);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

fn is_number_field(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_number)
}

/// Absent, or present as a number. `null` is not absence.
fn is_optional_number_field(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).map_or(true, Value::is_number)
}

fn has_calendar_fields(object: &Map<String, Value>) -> bool {
    CALENDAR_FIELDS
        .iter()
        .all(|key| is_optional_number_field(object, key))
}

// ── Entities ───────────────────────────────────────────────────

pub fn is_season(value: &Value) -> bool {
    value.as_object().is_some_and(|season| {
        season.get("name").is_some_and(Value::is_string)
            && is_number_field(season, "weekProfile")
            && has_calendar_fields(season)
    })
}

pub fn is_seasons(value: &Value) -> bool {
    is_tuple_min_max(value, MIN_SEASONS, MAX_SEASONS, is_season)
}

pub fn is_profile_schedule(value: &Value) -> bool {
    let Some(schedule) = value.as_object() else {
        return false;
    };
    if !is_number_field(schedule, "startTime") {
        return false;
    }
    let action = schedule.get("action").unwrap_or(&Value::Null);
    match schedule.get("mode").and_then(Value::as_str) {
        Some("tou") => is_number_range(action, TouAction::MAX),
        Some("block") => is_number_range(action, BlockSlot::MAX),
        _ => false,
    }
}

pub fn is_day_profile(value: &Value) -> bool {
    is_tuple_min_max(value, MIN_SCHEDULES, MAX_SCHEDULES, is_profile_schedule)
}

pub fn is_day_profiles(value: &Value) -> bool {
    is_tuple_min_max(value, MIN_DAY_PROFILES, MAX_DAY_PROFILES, is_day_profile)
}

pub fn is_day_profile_name(value: &Value) -> bool {
    is_number_range(value, DayProfileName::MAX)
}

pub fn is_week_profile(value: &Value) -> bool {
    is_tuple(value, DAYS_PER_WEEK, is_day_profile_name)
}

pub fn is_week_profiles(value: &Value) -> bool {
    is_tuple_min_max(value, MIN_WEEK_PROFILES, MAX_WEEK_PROFILES, is_week_profile)
}

/// One to three thresholds and exactly one more price than thresholds.
pub fn is_block_action(value: &Value) -> bool {
    let Some(block) = value.as_object() else {
        return false;
    };
    let numbers = |key: &str| {
        block
            .get(key)
            .and_then(Value::as_array)
            .filter(|items| items.iter().all(Value::is_number))
            .map(Vec::len)
    };
    match (numbers("thresholds"), numbers("prices")) {
        (Some(thresholds), Some(prices)) => {
            (MIN_THRESHOLDS..=MAX_THRESHOLDS).contains(&thresholds) && prices == thresholds + 1
        }
        _ => false,
    }
}

pub fn is_blocks(value: &Value) -> bool {
    is_tuple(value, BLOCK_SLOTS, is_block_action)
}

pub fn is_tous(value: &Value) -> bool {
    is_tuple_min_max(value, 0, MAX_TOUS, Value::is_number)
}

pub fn is_pricing(value: &Value) -> bool {
    value.as_object().is_some_and(|pricing| {
        ["priceScale", "standingCharge", "standingChargeScale"]
            .iter()
            .all(|key| is_number_field(pricing, key))
    })
}

pub fn is_special_day(value: &Value) -> bool {
    value.as_object().is_some_and(|special_day| {
        is_number_field(special_day, "dayProfile") && has_calendar_fields(special_day)
    })
}

pub fn is_special_days(value: &Value) -> bool {
    is_tuple_min_max(value, 0, MAX_SPECIAL_DAYS, is_special_day)
}

// ── Tariff ─────────────────────────────────────────────────────

/// Whether `value` has the shape of a tariff. Logs the first offending
/// section at debug level.
pub fn is_tariff(value: &Value) -> bool {
    let Some(tariff) = value.as_object() else {
        debug!("Tariff rejected: not an object");
        return false;
    };
    let sections: [(&str, fn(&Value) -> bool); 7] = [
        ("seasons", is_seasons),
        ("weekProfiles", is_week_profiles),
        ("dayProfiles", is_day_profiles),
        ("specialDays", is_special_days),
        ("blocks", is_blocks),
        ("tous", is_tous),
        ("pricing", is_pricing),
    ];
    for (section, check) in sections {
        if !check(tariff.get(section).unwrap_or(&Value::Null)) {
            debug!(section, "Tariff rejected by structural check");
            return false;
        }
    }
    true
}

/// Structural check over a typed tariff, e.g. one assembled in code rather
/// than decoded from input.
pub fn is_tariff_shape(tariff: &Tariff) -> bool {
    serde_json::to_value(tariff).is_ok_and(|value| is_tariff(&value))
}
