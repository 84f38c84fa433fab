//! Reference tariffs shared by the test suites.

use serde_json::{json, Value};

use super::model::Tariff;

fn unused_blocks(count: usize, threshold: u32) -> Vec<Value> {
    (0..count)
        .map(|_| json!({"thresholds": [threshold], "prices": [0, 0]}))
        .collect()
}

fn padded_tous(prices: &[u32]) -> Vec<u32> {
    let mut tous = prices.to_vec();
    tous.resize(48, 0);
    tous
}

fn decode(value: Value) -> Tariff {
    serde_json::from_value(value).expect("fixture must decode")
}

/// Two seasons, three tou day profiles, two special days.
pub fn tou_tariff_json() -> Value {
    let blocks = unused_blocks(8, u32::MAX);
    json!({
        "seasons": [
            {"name": "winter", "year": 2014, "month": 10, "dayOfMonth": 27, "weekProfile": 1},
            {"name": "summer", "year": 2015, "month": 3, "dayOfMonth": 29, "weekProfile": 2}
        ],
        "weekProfiles": [[1, 1, 1, 1, 1, 3, 3], [2, 2, 2, 2, 2, 3, 3]],
        "dayProfiles": [
            [
                {"mode": "tou", "startTime": 0, "action": 2},
                {"mode": "tou", "startTime": 25200, "action": 3}
            ],
            [
                {"mode": "tou", "startTime": 0, "action": 3},
                {"mode": "tou", "startTime": 82800, "action": 2}
            ],
            [
                {"mode": "tou", "startTime": 0, "action": 1}
            ]
        ],
        "specialDays": [
            {"year": 2015, "month": 5, "dayOfMonth": 1, "dayProfile": 2},
            {"month": 12, "dayOfMonth": 25, "dayProfile": 3}
        ],
        "tous": [2121, 3127, 4744],
        "blocks": blocks,
        "pricing": {"priceScale": -5, "standingCharge": 20000, "standingChargeScale": -5}
    })
}

pub fn tou_tariff() -> Tariff {
    decode(tou_tariff_json())
}

/// Single block day profile using slot 1 with three thresholds.
pub fn block_tariff_json() -> Value {
    let mut blocks = vec![json!({
        "thresholds": [10000, 20000, u32::MAX],
        "prices": [1361, 2289, 5566, 0]
    })];
    blocks.extend(unused_blocks(7, u32::MAX));
    json!({
        "seasons": [
            {"name": "all", "year": 2015, "month": 1, "dayOfMonth": 1, "weekProfile": 1}
        ],
        "weekProfiles": [[1, 1, 1, 1, 1, 1, 1]],
        "dayProfiles": [
            [{"mode": "block", "startTime": 0, "action": 1}]
        ],
        "specialDays": [],
        "tous": [],
        "blocks": blocks,
        "pricing": {"priceScale": -5, "standingCharge": 20000, "standingChargeScale": -5}
    })
}

pub fn block_tariff() -> Tariff {
    decode(block_tariff_json())
}

/// Tou on weekdays, block slot 1 on sundays via a special day. Slots 7 and 8
/// carry prices no schedule references.
pub fn hybrid_tariff_simple_json() -> Value {
    let mut blocks = vec![json!({"thresholds": [20], "prices": [50, 10]})];
    blocks.extend(unused_blocks(5, 0));
    blocks.push(json!({"thresholds": [0], "prices": [1, 2]}));
    blocks.push(json!({"thresholds": [0], "prices": [1, 2]}));
    json!({
        "seasons": [{"name": "ALL", "weekProfile": 1}],
        "weekProfiles": [[1, 1, 1, 1, 1, 1, 1]],
        "dayProfiles": [
            [
                {"startTime": 0, "mode": "tou", "action": 1},
                {"startTime": 18000, "mode": "tou", "action": 2},
                {"startTime": 28800, "mode": "tou", "action": 1},
                {"startTime": 59400, "mode": "tou", "action": 2},
                {"startTime": 73800, "mode": "tou", "action": 1}
            ],
            [{"startTime": 0, "mode": "block", "action": 1}]
        ],
        "specialDays": [{"dayProfile": 2, "dayOfWeek": 7}],
        "blocks": blocks,
        "tous": padded_tous(&[35, 100]),
        "pricing": {"priceScale": -2, "standingCharge": 10, "standingChargeScale": -2}
    })
}

pub fn hybrid_tariff_simple() -> Tariff {
    decode(hybrid_tariff_simple_json())
}

/// Block and tou entries interleaved within one day profile.
pub fn hybrid_tariff_complex_json() -> Value {
    let mut blocks = vec![json!({"thresholds": [2, 4, 8], "prices": [35, 200, 350, 450]})];
    blocks.extend(unused_blocks(7, 0));
    json!({
        "seasons": [
            {"name": "Spring", "weekProfile": 1, "dayOfWeek": 1, "month": 3},
            {"name": "Summer", "weekProfile": 2, "dayOfWeek": 1, "month": 5}
        ],
        "weekProfiles": [[1, 1, 1, 1, 1, 2, 2], [3, 3, 3, 3, 3, 2, 2]],
        "dayProfiles": [
            [
                {"startTime": 0, "mode": "tou", "action": 2},
                {"startTime": 18000, "mode": "block", "action": 1},
                {"startTime": 25200, "mode": "tou", "action": 2},
                {"startTime": 61200, "mode": "block", "action": 1},
                {"startTime": 68400, "mode": "tou", "action": 3}
            ],
            [{"startTime": 0, "mode": "tou", "action": 1}],
            [
                {"startTime": 0, "mode": "tou", "action": 5},
                {"startTime": 23400, "mode": "tou", "action": 4},
                {"startTime": 64800, "mode": "tou", "action": 5}
            ]
        ],
        "specialDays": [],
        "blocks": blocks,
        "tous": padded_tous(&[200, 35, 54, 20, 78]),
        "pricing": {"priceScale": -2, "standingCharge": 10, "standingChargeScale": -2}
    })
}

pub fn hybrid_tariff_complex() -> Tariff {
    decode(hybrid_tariff_complex_json())
}

/// Variant of the tou tariff whose calendar records mix day of week with
/// other fields, used to exercise the well-formedness rules.
pub fn validation_tariff_json() -> Value {
    let mut tariff = tou_tariff_json();
    tariff["seasons"][1] =
        json!({"name": "summer", "year": 2015, "month": 3, "dayOfWeek": 5, "weekProfile": 2});
    tariff["specialDays"][1] = json!({"month": 12, "dayOfMonth": 25, "dayOfWeek": 3, "dayProfile": 3});
    tariff
}
