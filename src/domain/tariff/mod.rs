//! Tariff aggregate
//!
//! Contains the Tariff entity, its bounded collections and effective price
//! helpers.

pub mod model;
pub mod pricing;

#[cfg(test)]
pub(crate) mod fixtures;

pub use model::{
    BlockAction, BlockSlot, CalendarDate, DayProfile, DayProfileName, Pricing, ProfileSchedule,
    ScheduleMode, Season, SpecialDay, Tariff, TariffAction, TariffMode, TouAction, WeekProfile,
    BLOCK_SLOTS, LAST_DAY_OF_MONTH, SECOND_LAST_DAY_OF_MONTH,
};
