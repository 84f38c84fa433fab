//! Tariff domain entity
//!
//! Shape of an import tariff as loaded into a meter's tariff table. The model
//! carries collection bounds as constants but does not enforce them; that is
//! the job of the structural validator. Index ranges that decide how a
//! schedule entry is encoded (tou action, block slot, day profile name) are
//! enforced by the types themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::support::errors::ModelError;

// ── Bounds ─────────────────────────────────────────────────────

pub const MIN_SEASONS: usize = 1;
pub const MAX_SEASONS: usize = 4;
pub const MIN_WEEK_PROFILES: usize = 1;
pub const MAX_WEEK_PROFILES: usize = 4;
pub const MIN_DAY_PROFILES: usize = 1;
pub const MAX_DAY_PROFILES: usize = 16;
pub const MIN_SCHEDULES: usize = 1;
pub const MAX_SCHEDULES: usize = 48;
pub const MAX_SPECIAL_DAYS: usize = 50;
pub const MAX_TOUS: usize = 48;
pub const MIN_THRESHOLDS: usize = 1;
pub const MAX_THRESHOLDS: usize = 3;

/// Fixed number of block tariff slots.
pub const BLOCK_SLOTS: usize = 8;
pub const DAYS_PER_WEEK: usize = 7;
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Switching table granularity used by the meter (30 minutes).
pub const SECONDS_PER_SLOT: u32 = 1_800;

/// Month sentinel: second to last day of the month.
pub const SECOND_LAST_DAY_OF_MONTH: u8 = 0xfd;
/// Month sentinel: last day of the month.
pub const LAST_DAY_OF_MONTH: u8 = 0xfe;

// ── Range-restricted indices ───────────────────────────────────

macro_rules! ranged_index {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            pub const MAX: u8 = $max;

            pub fn new(value: u8) -> Result<Self, ModelError> {
                if (1..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(ModelError::OutOfRange {
                        kind: $kind,
                        value: u64::from(value),
                        max: Self::MAX,
                    })
                }
            }

            /// 1-based value as written in the tariff.
            pub fn get(self) -> u8 {
                self.0
            }

            /// 0-based position into the referenced collection.
            pub fn position(self) -> usize {
                usize::from(self.0 - 1)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ModelError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

ranged_index!(
    /// Time-of-use price index (1..=48), selects `tous[n - 1]`.
    TouAction,
    "tou action",
    48
);

ranged_index!(
    /// Block tariff slot (1..=8), selects `blocks[n - 1]`.
    BlockSlot,
    "block action",
    8
);

ranged_index!(
    /// Day profile reference used by week profiles (1..=16).
    DayProfileName,
    "day profile name",
    16
);

// ── Calendar ───────────────────────────────────────────────────

/// Date matching rule. Each absent field is a wildcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDate {
    /// 4 digit year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// 1 = jan ... 12 = dec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// 1..31
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u8>,
    /// 1 = monday ... 7 = sunday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
}

impl CalendarDate {
    /// Matches every day.
    pub fn wildcard() -> Self {
        Self::default()
    }

    /// Number of axes that are not wildcards.
    pub fn specified_fields(&self) -> usize {
        [
            self.year.is_some(),
            self.month.is_some(),
            self.day_of_month.is_some(),
            self.day_of_week.is_some(),
        ]
        .into_iter()
        .filter(|specified| *specified)
        .count()
    }
}

/// Calendar rule activating a week profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub name: String,
    #[serde(flatten)]
    pub start: CalendarDate,
    /// 1-based index into `Tariff::week_profiles`. Only the upper bound is
    /// checked, so 0 and negative values are accepted.
    pub week_profile: i64,
}

/// Calendar override assigning a day profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDay {
    #[serde(flatten)]
    pub date: CalendarDate,
    /// 1-based index into `Tariff::day_profiles`, upper bound only
    pub day_profile: i64,
}

// ── Switching table ────────────────────────────────────────────

/// Day profile per weekday, monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekProfile(pub [DayProfileName; DAYS_PER_WEEK]);

impl WeekProfile {
    pub fn days(&self) -> &[DayProfileName; DAYS_PER_WEEK] {
        &self.0
    }
}

/// Action selected by a schedule entry. The variant decides which price
/// table the index points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TariffAction {
    Tou(TouAction),
    Block(BlockSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleMode {
    Tou,
    Block,
}

impl TariffAction {
    pub fn mode(&self) -> ScheduleMode {
        match self {
            Self::Tou(_) => ScheduleMode::Tou,
            Self::Block(_) => ScheduleMode::Block,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::Tou(action) => action.get(),
            Self::Block(slot) => slot.get(),
        }
    }
}

/// Switching point within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfileSchedule", into = "RawProfileSchedule")]
pub struct ProfileSchedule {
    /// Seconds since local midnight
    pub start_time: u32,
    pub action: TariffAction,
}

impl ProfileSchedule {
    pub fn tou(start_time: u32, action: u8) -> Result<Self, ModelError> {
        Ok(Self {
            start_time,
            action: TariffAction::Tou(TouAction::new(action)?),
        })
    }

    pub fn block(start_time: u32, slot: u8) -> Result<Self, ModelError> {
        Ok(Self {
            start_time,
            action: TariffAction::Block(BlockSlot::new(slot)?),
        })
    }

    pub fn mode(&self) -> ScheduleMode {
        self.action.mode()
    }
}

/// Wire form: `{ "startTime": 0, "mode": "tou", "action": 2 }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfileSchedule {
    start_time: u32,
    mode: ScheduleMode,
    action: u8,
}

impl TryFrom<RawProfileSchedule> for ProfileSchedule {
    type Error = ModelError;

    fn try_from(raw: RawProfileSchedule) -> Result<Self, Self::Error> {
        match raw.mode {
            ScheduleMode::Tou => Self::tou(raw.start_time, raw.action),
            ScheduleMode::Block => Self::block(raw.start_time, raw.action),
        }
    }
}

impl From<ProfileSchedule> for RawProfileSchedule {
    fn from(schedule: ProfileSchedule) -> Self {
        Self {
            start_time: schedule.start_time,
            mode: schedule.mode(),
            action: schedule.action.index(),
        }
    }
}

/// Ordered switching points of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayProfile(pub Vec<ProfileSchedule>);

impl DayProfile {
    pub fn schedules(&self) -> &[ProfileSchedule] {
        &self.0
    }

    /// Number of half-hour slots covered by schedule `index`, i.e. until the
    /// next schedule starts or the day ends. Unknown index yields 0.
    pub fn schedule_size(&self, index: usize) -> u32 {
        let Some(schedule) = self.0.get(index) else {
            return 0;
        };
        let start = schedule.start_time / SECONDS_PER_SLOT;
        let end = self
            .0
            .get(index + 1)
            .map(|next| next.start_time / SECONDS_PER_SLOT)
            .unwrap_or(SECONDS_PER_DAY / SECONDS_PER_SLOT);
        end.saturating_sub(start)
    }
}

// ── Prices ─────────────────────────────────────────────────────

/// Consumption-tiered prices: `prices[i]` applies below `thresholds[i]`,
/// the final price above the last threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAction {
    pub thresholds: Vec<u32>,
    pub prices: Vec<u32>,
}

impl BlockAction {
    /// Single unused tier, the usual filler for slots a tariff does not use.
    pub fn unused() -> Self {
        Self {
            thresholds: vec![0],
            prices: vec![0, 0],
        }
    }
}

/// Standing charge and scaling. Effective value = mantissa × 10^scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub standing_charge: u32,
    /// e.g. 0 for pounds, -2 for pence
    pub standing_charge_scale: i8,
    /// applied to tou and block prices
    pub price_scale: i8,
}

// ── Tariff ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub seasons: Vec<Season>,
    pub week_profiles: Vec<WeekProfile>,
    pub day_profiles: Vec<DayProfile>,
    pub special_days: Vec<SpecialDay>,
    pub blocks: [BlockAction; BLOCK_SLOTS],
    /// `tous[i]` is the price of tou action `i + 1`; 0 marks an unused slot
    pub tous: Vec<u32>,
    pub pricing: Pricing,
}

impl Tariff {
    /// Every schedule entry across all day profiles.
    pub fn schedules(&self) -> impl Iterator<Item = &ProfileSchedule> + '_ {
        self.day_profiles.iter().flat_map(|dp| dp.schedules())
    }

    pub fn uses_tou(&self) -> bool {
        self.schedules().any(|s| s.mode() == ScheduleMode::Tou)
    }

    pub fn uses_block(&self) -> bool {
        self.schedules().any(|s| s.mode() == ScheduleMode::Block)
    }

    /// Whether any schedule selects block slot `slot` (1-based).
    pub fn references_block_slot(&self, slot: usize) -> bool {
        self.schedules().any(|s| match s.action {
            TariffAction::Block(b) => usize::from(b.get()) == slot,
            TariffAction::Tou(_) => false,
        })
    }

    pub fn mode(&self) -> TariffMode {
        TariffMode::of(self)
    }
}

/// Pricing section emitted for a tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TariffMode {
    Tou,
    Block,
    Hybrid,
}

impl TariffMode {
    /// Decided solely by which schedule modes occur. A tariff without any
    /// schedule is not well formed; it falls through to `Block`.
    pub fn of(tariff: &Tariff) -> Self {
        match (tariff.uses_tou(), tariff.uses_block()) {
            (true, true) => Self::Hybrid,
            (true, false) => Self::Tou,
            (false, _) => Self::Block,
        }
    }
}

impl fmt::Display for TariffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tou => write!(f, "TOU"),
            Self::Block => write!(f, "Block"),
            Self::Hybrid => write!(f, "Hybrid"),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
