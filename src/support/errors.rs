use std::fmt;

use thiserror::Error;

/// A value rejected while building a range-restricted model type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{kind} {value} out of range 1..={max}")]
    OutOfRange {
        kind: &'static str,
        value: u64,
        max: u8,
    },
}

/// Calendar-bearing record that failed a check (1-based position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarRecord {
    Season(usize),
    SpecialDay(usize),
}

impl fmt::Display for CalendarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Season(i) => write!(f, "season {}", i),
            Self::SpecialDay(i) => write!(f, "special day {}", i),
        }
    }
}

/// The first semantic rule a structurally valid tariff breaks.
///
/// Day profile, week profile and schedule positions are 1-based so they line
/// up with the `DayName`/`WeekName` values emitted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WellFormednessError {
    #[error("day profile {day_profile} has no schedules")]
    EmptyDayProfile { day_profile: usize },

    #[error("day profile {day_profile} starts at {start_time}s, expected 0")]
    DayProfileStartNonZero { day_profile: usize, start_time: u32 },

    #[error("day profile {day_profile} schedule {schedule} does not start after its predecessor")]
    DayProfileNotIncreasing { day_profile: usize, schedule: usize },

    #[error("day profile {day_profile} last schedule starts at {start_time}s, beyond the end of day")]
    DayProfilePastMidnight { day_profile: usize, start_time: u32 },

    #[error("week profile {week_profile} references undefined day profile {reference}")]
    UndefinedDayProfile { week_profile: usize, reference: u8 },

    #[error("season {season} references undefined week profile {reference}")]
    UndefinedWeekProfile { season: usize, reference: i64 },

    #[error("special day {special_day} references undefined day profile {reference}")]
    UndefinedSpecialDayProfile { special_day: usize, reference: i64 },

    #[error("{record}: {field} {value} out of range")]
    CalendarFieldOutOfRange {
        record: CalendarRecord,
        field: &'static str,
        value: u16,
    },

    #[error("{record}: year, month, day of month and day of week are all specified")]
    OverspecifiedDate { record: CalendarRecord },

    #[error("value cannot be represented as a tariff: {0}")]
    Unrepresentable(String),
}

/// Outcome of running both validation stages over caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TariffError {
    /// Input is not a tariff at all.
    #[error("value does not have the shape of a tariff")]
    Shape,

    /// Input is shaped like a tariff but violates a domain rule.
    #[error("tariff is not well formed: {0}")]
    Semantic(#[from] WellFormednessError),
}

/// Broken build: the compiler could not resolve one of its own constants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("unable to lookup service reference variant {0}")]
    UnknownServiceReferenceVariant(&'static str),

    #[error("unable to lookup command variant {0}")]
    UnknownCommandVariant(u8),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Tariff(#[from] TariffError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid request id: {0}")]
    RequestId(#[from] validator::ValidationErrors),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
