pub mod duis;
pub mod tariff;

// Re-export commonly used types
pub use duis::{lookup_cv, lookup_srv, CommandVariant, RequestId, ServiceReferenceVariant};
pub use tariff::{
    BlockAction, CalendarDate, DayProfile, Pricing, ProfileSchedule, Season, SpecialDay, Tariff,
    TariffAction, TariffMode, WeekProfile,
};
