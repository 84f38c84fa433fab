//! Update Import Tariff message shapes
//!
//! Serializable mirror of the simplified DUIS request. Element names follow
//! the XML schema; `#text` and `@_index` mark text nodes and `index`
//! attributes. Every scalar is carried as text.

use serde::{Serialize, Serializer};

use crate::domain::duis::{CommandVariant, RequestId, ServiceReferenceVariant};

// ── Building blocks ────────────────────────────────────────────

/// A repeated element: a bare element when there is exactly one, otherwise a
/// list (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn singlify<T>(mut items: Vec<T>) -> OneOrMany<T> {
    if items.len() == 1 {
        if let Some(item) = items.pop() {
            return OneOrMany::One(item);
        }
    }
    OneOrMany::Many(items)
}

/// Empty element, e.g. `<NonSpecifiedYear/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marker;

impl Serialize for Marker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("")
    }
}

/// Text node carrying an `index` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedText {
    #[serde(rename = "#text")]
    pub text: String,
    #[serde(rename = "@_index")]
    pub index: String,
}

impl IndexedText {
    pub fn new(text: impl ToString, index: usize) -> Self {
        Self {
            text: text.to_string(),
            index: index.to_string(),
        }
    }
}

// ── Dates ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum YearSpec {
    NonSpecifiedYear(Marker),
    SpecifiedYear(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MonthSpec {
    NonSpecifiedMonth(Marker),
    SecondLastDayOfMonth(Marker),
    LastDayOfMonth(Marker),
    SpecifiedMonth(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DayOfMonthSpec {
    NonSpecifiedDayOfMonth(Marker),
    SpecifiedDayOfMonth(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DayOfWeekSpec {
    NonSpecifiedDayOfWeek(Marker),
    SpecifiedDayOfWeek(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateSpec {
    pub year: YearSpec,
    pub month: MonthSpec,
    pub day_of_month: DayOfMonthSpec,
    pub day_of_week: DayOfWeekSpec,
}

// ── Switching table ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeasonEntry {
    pub season_name: String,
    pub season_start_date: DateSpec,
    pub referenced_week_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Seasons {
    pub season: OneOrMany<SeasonEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekProfileEntry {
    pub week_name: String,
    pub referenced_day_name: OneOrMany<IndexedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekProfiles {
    pub week_profile: OneOrMany<WeekProfileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScheduleAction {
    BlockTariffAction(String),
    #[serde(rename = "TOUTariffAction")]
    TouTariffAction(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleEntry {
    /// `HH:MM:SS.00Z`
    pub start_time: String,
    #[serde(flatten)]
    pub action: ScheduleAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayProfileEntry {
    pub day_name: String,
    pub profile_schedule: OneOrMany<ScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayProfiles {
    pub day_profile: OneOrMany<DayProfileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SwitchingTable {
    pub day_profiles: DayProfiles,
    pub week_profiles: WeekProfiles,
    pub seasons: Seasons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialDayEntry {
    pub date: DateSpec,
    pub referenced_day_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialDayTable {
    pub special_day: OneOrMany<SpecialDayEntry>,
}

/// Emitted as an empty element when there are no special days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SpecialDays {
    Empty(Marker),
    Table(SpecialDayTable),
}

// ── Thresholds and prices ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThresholdEntry {
    pub block_threshold: OneOrMany<IndexedText>,
    #[serde(rename = "@_index")]
    pub index: String,
}

/// Always all eight slots, never collapsed to a bare element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThresholdMatrix {
    pub thresholds: Vec<ThresholdEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockPricesEntry {
    pub block_price: OneOrMany<IndexedText>,
    #[serde(rename = "@_index")]
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockTariff {
    pub block_prices: OneOrMany<BlockPricesEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouTariff {
    #[serde(rename = "TOUPrice")]
    pub tou_price: OneOrMany<IndexedText>,
}

/// Block and tou prices side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HybridTariff {
    #[serde(rename = "BlockPrices")]
    pub block_prices: OneOrMany<BlockPricesEntry>,
    #[serde(rename = "TOUPrice")]
    pub tou_price: OneOrMany<IndexedText>,
}

/// Exactly one pricing section per message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PriceSection {
    #[serde(rename = "TOUTariff")]
    Tou(TouTariff),
    #[serde(rename = "BlockTariff")]
    Block(BlockTariff),
    #[serde(rename = "HybridTariff")]
    Hybrid(HybridTariff),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElectricityPriceElements {
    pub standing_charge: String,
    pub standing_charge_scale: String,
    pub price_scale: String,
    #[serde(flatten)]
    pub pricing: PriceSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceElements {
    pub electricity_price_elements: ElectricityPriceElements,
}

// ── Message ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElecTariffElements {
    pub currency_units: String,
    pub switching_table: SwitchingTable,
    pub special_days: SpecialDays,
    pub threshold_matrix: ThresholdMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateImportTariffPrimaryElement {
    pub elec_tariff_elements: ElecTariffElements,
    pub price_elements: PriceElements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestBody {
    pub update_import_tariff_primary_element: UpdateImportTariffPrimaryElement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    #[serde(rename = "type")]
    pub request_type: String,
    pub command_variant: CommandVariant,
    pub service_reference: String,
    pub service_reference_variant: ServiceReferenceVariant,
    pub request_id: RequestId,
}

/// Simplified DUIS request, ready for XML construction and signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateImportTariffRequest {
    pub header: RequestHeader,
    pub body: RequestBody,
}
