//! Well-formedness validation
//!
//! Semantic rules over a structurally valid tariff: day profile ordering,
//! references between profiles and calendar field ranges. Checks run in a
//! fixed order and stop at the first violation.

use tracing::debug;

use crate::domain::tariff::model::{CalendarDate, Tariff, SECONDS_PER_DAY};
use crate::support::errors::{CalendarRecord, WellFormednessError};

/// Earliest year a calendar record may name.
pub const MIN_YEAR: u16 = 2014;

pub fn check_well_formed(tariff: &Tariff) -> Result<(), WellFormednessError> {
    check_day_profiles(tariff)?;
    check_week_profiles(tariff)?;
    check_seasons(tariff)?;
    check_special_days(tariff)
}

pub fn is_well_formed(tariff: &Tariff) -> bool {
    match check_well_formed(tariff) {
        Ok(()) => true,
        Err(e) => {
            debug!(reason = %e, "Tariff rejected by well-formedness check");
            false
        }
    }
}

// ── Day profiles ───────────────────────────────────────────────

fn check_day_profiles(tariff: &Tariff) -> Result<(), WellFormednessError> {
    for (i, day_profile) in tariff.day_profiles.iter().enumerate() {
        let n = i + 1;
        let schedules = day_profile.schedules();
        let (Some(first), Some(last)) = (schedules.first(), schedules.last()) else {
            return Err(WellFormednessError::EmptyDayProfile { day_profile: n });
        };
        if first.start_time != 0 {
            return Err(WellFormednessError::DayProfileStartNonZero {
                day_profile: n,
                start_time: first.start_time,
            });
        }
        schedules
            .iter()
            .enumerate()
            .try_fold(-1_i64, |previous, (j, schedule)| {
                let start = i64::from(schedule.start_time);
                if start > previous {
                    Ok(start)
                } else {
                    Err(WellFormednessError::DayProfileNotIncreasing {
                        day_profile: n,
                        schedule: j + 1,
                    })
                }
            })?;
        if last.start_time >= SECONDS_PER_DAY {
            return Err(WellFormednessError::DayProfilePastMidnight {
                day_profile: n,
                start_time: last.start_time,
            });
        }
    }
    Ok(())
}

// ── References ─────────────────────────────────────────────────

/// 1-based reference into a collection of `len` items: `reference - 1 < len`.
/// There is no lower bound.
fn is_defined(reference: i64, len: usize) -> bool {
    i64::try_from(len).map_or(true, |len| reference.saturating_sub(1) < len)
}

fn check_week_profiles(tariff: &Tariff) -> Result<(), WellFormednessError> {
    let defined = tariff.day_profiles.len();
    for (i, week_profile) in tariff.week_profiles.iter().enumerate() {
        if let Some(name) = week_profile
            .days()
            .iter()
            .find(|name| !is_defined(i64::from(name.get()), defined))
        {
            return Err(WellFormednessError::UndefinedDayProfile {
                week_profile: i + 1,
                reference: name.get(),
            });
        }
    }
    Ok(())
}

fn check_seasons(tariff: &Tariff) -> Result<(), WellFormednessError> {
    for (i, season) in tariff.seasons.iter().enumerate() {
        if !is_defined(season.week_profile, tariff.week_profiles.len()) {
            return Err(WellFormednessError::UndefinedWeekProfile {
                season: i + 1,
                reference: season.week_profile,
            });
        }
        check_calendar(CalendarRecord::Season(i + 1), &season.start)?;
    }
    Ok(())
}

fn check_special_days(tariff: &Tariff) -> Result<(), WellFormednessError> {
    for (i, special_day) in tariff.special_days.iter().enumerate() {
        if !is_defined(special_day.day_profile, tariff.day_profiles.len()) {
            return Err(WellFormednessError::UndefinedSpecialDayProfile {
                special_day: i + 1,
                reference: special_day.day_profile,
            });
        }
        check_calendar(CalendarRecord::SpecialDay(i + 1), &special_day.date)?;
    }
    Ok(())
}

// ── Calendar ───────────────────────────────────────────────────

fn check_calendar(record: CalendarRecord, date: &CalendarDate) -> Result<(), WellFormednessError> {
    let fields = [
        ("year", date.year, MIN_YEAR, u16::MAX),
        ("month", date.month.map(u16::from), 1, 12),
        ("dayOfMonth", date.day_of_month.map(u16::from), 1, 31),
        ("dayOfWeek", date.day_of_week.map(u16::from), 1, 7),
    ];
    for (field, value, min, max) in fields {
        if let Some(value) = value.filter(|v| !(min..=max).contains(v)) {
            return Err(WellFormednessError::CalendarFieldOutOfRange {
                record,
                field,
                value,
            });
        }
    }
    if date.specified_fields() == 4 {
        return Err(WellFormednessError::OverspecifiedDate { record });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::fixtures;
    use crate::domain::tariff::model::{DayProfileName, ProfileSchedule};
    use serde_json::Value;

    fn tariff_from(value: Value) -> Tariff {
        serde_json::from_value(value).unwrap()
    }

    fn nominal() -> Tariff {
        tariff_from(fixtures::validation_tariff_json())
    }

    #[test]
    fn reference_tariffs_are_well_formed() {
        assert!(is_well_formed(&nominal()));
        assert!(is_well_formed(&fixtures::tou_tariff()));
        assert!(is_well_formed(&fixtures::block_tariff()));
        assert!(is_well_formed(&fixtures::hybrid_tariff_simple()));
        assert!(is_well_formed(&fixtures::hybrid_tariff_complex()));
    }

    #[test]
    fn day_profile_start_non_zero() {
        let mut t = nominal();
        t.day_profiles[0].0[0].start_time = 1;
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::DayProfileStartNonZero {
                day_profile: 1,
                start_time: 1
            })
        );
    }

    #[test]
    fn day_profile_non_monotonic() {
        let mut t = nominal();
        t.day_profiles[0].0[1].start_time = 0;
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::DayProfileNotIncreasing {
                day_profile: 1,
                schedule: 2
            })
        );
    }

    #[test]
    fn day_profile_past_midnight() {
        let mut t = nominal();
        t.day_profiles[0].0[1].start_time = 25 * 60 * 60;
        assert!(matches!(
            check_well_formed(&t),
            Err(WellFormednessError::DayProfilePastMidnight { day_profile: 1, .. })
        ));

        t.day_profiles[0].0[1].start_time = SECONDS_PER_DAY - 1;
        assert!(is_well_formed(&t));
    }

    #[test]
    fn empty_day_profile() {
        let mut t = nominal();
        t.day_profiles[2].0.clear();
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::EmptyDayProfile { day_profile: 3 })
        );
    }

    #[test]
    fn week_profile_with_undefined_day_profile() {
        let mut t = nominal();
        t.week_profiles[0].0[5] = DayProfileName::new(5).unwrap();
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::UndefinedDayProfile {
                week_profile: 1,
                reference: 5
            })
        );
    }

    #[test]
    fn season_with_undefined_week_profile() {
        let mut t = nominal();
        t.seasons[0].week_profile = 3;
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::UndefinedWeekProfile {
                season: 1,
                reference: 3
            })
        );

        t.seasons[0].week_profile = 2;
        assert!(is_well_formed(&t));
    }

    #[test]
    fn references_have_no_lower_bound() {
        for reference in [0, -1, i64::MIN] {
            let mut t = nominal();
            t.seasons[0].week_profile = reference;
            assert!(is_well_formed(&t), "week profile {reference}");

            let mut t = nominal();
            t.special_days[0].day_profile = reference;
            assert!(is_well_formed(&t), "day profile {reference}");
        }
    }

    #[test]
    fn reference_bound_is_collection_length() {
        assert!(is_defined(4, 4));
        assert!(!is_defined(5, 4));
        assert!(is_defined(0, 0));
        assert!(!is_defined(1, 0));
        assert!(!is_defined(i64::MAX, 16));
    }

    #[test]
    fn season_wildcards() {
        let clears: [fn(&mut CalendarDate); 3] = [
            |d| d.year = None,
            |d| d.month = None,
            |d| d.day_of_month = None,
        ];
        for clear in clears {
            let mut t = nominal();
            clear(&mut t.seasons[0].start);
            assert!(is_well_formed(&t));
        }
    }

    #[test]
    fn season_field_ranges() {
        let cases: [(fn(&mut CalendarDate), &str); 4] = [
            (|d| d.year = Some(2000), "year"),
            (|d| d.month = Some(13), "month"),
            (|d| d.day_of_month = Some(32), "dayOfMonth"),
            (|d| d.day_of_week = Some(8), "dayOfWeek"),
        ];
        for (mutate, field) in cases {
            let mut t = nominal();
            mutate(&mut t.seasons[1].start);
            assert!(
                matches!(
                    check_well_formed(&t),
                    Err(WellFormednessError::CalendarFieldOutOfRange { field: f, .. }) if f == field
                ),
                "{field}"
            );
        }
    }

    #[test]
    fn month_sentinels_fail_validation() {
        let mut t = nominal();
        t.seasons[0].start.month = Some(crate::domain::tariff::LAST_DAY_OF_MONTH);
        assert!(!is_well_formed(&t));
    }

    #[test]
    fn season_overspecified_date() {
        let mut t = nominal();
        t.seasons[0].start.day_of_week = Some(6);
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::OverspecifiedDate {
                record: CalendarRecord::Season(1)
            })
        );
    }

    #[test]
    fn special_day_with_undefined_day_profile() {
        let mut t = nominal();
        t.special_days[0].day_profile = 4;
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::UndefinedSpecialDayProfile {
                special_day: 1,
                reference: 4
            })
        );
    }

    #[test]
    fn special_day_field_ranges() {
        let mut t = nominal();
        t.special_days[0].date.year = Some(2000);
        assert!(!is_well_formed(&t));

        let mut t = nominal();
        t.special_days[0].date.month = Some(13);
        assert!(!is_well_formed(&t));

        let mut t = nominal();
        t.special_days[0].date.day_of_month = Some(32);
        assert!(!is_well_formed(&t));

        let mut t = nominal();
        t.special_days[1].date.day_of_week = Some(8);
        assert!(!is_well_formed(&t));
    }

    #[test]
    fn special_day_wildcards() {
        let mut t = nominal();
        t.special_days[0].date.month = None;
        assert!(is_well_formed(&t));

        let mut t = nominal();
        t.special_days[0].date.day_of_month = None;
        assert!(is_well_formed(&t));

        let mut t = nominal();
        t.special_days[1].date.day_of_week = None;
        assert!(is_well_formed(&t));
    }

    #[test]
    fn special_day_overspecified_date() {
        let mut t = nominal();
        t.special_days[0].date.day_of_week = Some(6);
        assert_eq!(
            check_well_formed(&t),
            Err(WellFormednessError::OverspecifiedDate {
                record: CalendarRecord::SpecialDay(1)
            })
        );
    }

    #[test]
    fn day_profile_errors_take_precedence() {
        let mut t = nominal();
        t.seasons[0].week_profile = 9;
        t.day_profiles[1].0.push(ProfileSchedule::tou(0, 1).unwrap());
        assert!(matches!(
            check_well_formed(&t),
            Err(WellFormednessError::DayProfileNotIncreasing { day_profile: 2, schedule: 3 })
        ));
    }
}
