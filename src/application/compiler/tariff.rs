//! Tariff compiler
//!
//! Turns a validated [`Tariff`] into an "Update Import Tariff (Primary
//! Element)" request (service reference variant 1.1.1). Positions become
//! 1-based names, unused prices are elided and exactly one pricing section
//! is chosen from the schedule modes in use.
//!
//! Input is assumed to have passed both validation stages; anything else
//! yields an unspecified but well-typed body.

use tracing::{debug, info};

use super::body::{
    singlify, BlockPricesEntry, BlockTariff, DayProfileEntry, DayProfiles, ElecTariffElements,
    ElectricityPriceElements, HybridTariff, IndexedText, Marker, OneOrMany, PriceElements,
    PriceSection, RequestBody, RequestHeader, ScheduleAction, ScheduleEntry, SeasonEntry, Seasons,
    SpecialDayEntry, SpecialDayTable, SpecialDays, SwitchingTable, ThresholdEntry,
    ThresholdMatrix, TouTariff, UpdateImportTariffPrimaryElement, UpdateImportTariffRequest,
    WeekProfileEntry, WeekProfiles,
};
use super::calendar::{build_date, start_time};
use crate::domain::duis::{lookup_cv, lookup_srv, RequestId};
use crate::domain::tariff::model::{Tariff, TariffAction, TariffMode};
use crate::support::errors::CompileError;

pub const SERVICE_REFERENCE: &str = "1.1";
pub const SERVICE_REFERENCE_VARIANT: &str = "1.1.1";
/// Critical, send to device via WAN.
pub const COMMAND_VARIANT: u8 = 4;
pub const CURRENCY_UNITS: &str = "GBP";

/// Builds the full request: header stamped for SRV 1.1.1 plus the tariff
/// body.
pub fn build_update_import_tariff_primary_element(
    tariff: &Tariff,
    request_id: RequestId,
) -> Result<UpdateImportTariffRequest, CompileError> {
    let service_reference_variant = lookup_srv(SERVICE_REFERENCE_VARIANT).ok_or(
        CompileError::UnknownServiceReferenceVariant(SERVICE_REFERENCE_VARIANT),
    )?;
    let command_variant =
        lookup_cv(COMMAND_VARIANT).ok_or(CompileError::UnknownCommandVariant(COMMAND_VARIANT))?;

    info!(
        counter = request_id.counter,
        target_id = %request_id.target_id,
        srv = SERVICE_REFERENCE_VARIANT,
        "Compiling import tariff update"
    );

    Ok(UpdateImportTariffRequest {
        header: RequestHeader {
            request_type: "request".to_string(),
            command_variant: *command_variant,
            service_reference: SERVICE_REFERENCE.to_string(),
            service_reference_variant: *service_reference_variant,
            request_id,
        },
        body: build_body(tariff),
    })
}

/// Message body alone; pure and infallible.
pub fn build_body(tariff: &Tariff) -> RequestBody {
    let mode = TariffMode::of(tariff);
    debug!(
        %mode,
        seasons = tariff.seasons.len(),
        week_profiles = tariff.week_profiles.len(),
        day_profiles = tariff.day_profiles.len(),
        special_days = tariff.special_days.len(),
        "Building tariff body"
    );

    RequestBody {
        update_import_tariff_primary_element: UpdateImportTariffPrimaryElement {
            elec_tariff_elements: ElecTariffElements {
                currency_units: CURRENCY_UNITS.to_string(),
                switching_table: SwitchingTable {
                    day_profiles: build_day_profiles(tariff),
                    week_profiles: build_week_profiles(tariff),
                    seasons: build_seasons(tariff),
                },
                special_days: build_special_days(tariff),
                threshold_matrix: build_threshold_matrix(tariff),
            },
            price_elements: PriceElements {
                electricity_price_elements: ElectricityPriceElements {
                    standing_charge: tariff.pricing.standing_charge.to_string(),
                    standing_charge_scale: tariff.pricing.standing_charge_scale.to_string(),
                    price_scale: tariff.pricing.price_scale.to_string(),
                    pricing: build_price_section(tariff, mode),
                },
            },
        },
    }
}

// ── Switching table ────────────────────────────────────────────

fn build_seasons(tariff: &Tariff) -> Seasons {
    Seasons {
        season: singlify(
            tariff
                .seasons
                .iter()
                .map(|season| SeasonEntry {
                    season_name: season.name.clone(),
                    season_start_date: build_date(&season.start),
                    referenced_week_name: season.week_profile.to_string(),
                })
                .collect(),
        ),
    }
}

fn build_week_profiles(tariff: &Tariff) -> WeekProfiles {
    WeekProfiles {
        week_profile: singlify(
            tariff
                .week_profiles
                .iter()
                .enumerate()
                .map(|(i, week_profile)| WeekProfileEntry {
                    week_name: (i + 1).to_string(),
                    referenced_day_name: indexed(week_profile.days().iter().map(|d| d.get())),
                })
                .collect(),
        ),
    }
}

fn build_day_profiles(tariff: &Tariff) -> DayProfiles {
    DayProfiles {
        day_profile: singlify(
            tariff
                .day_profiles
                .iter()
                .enumerate()
                .map(|(i, day_profile)| DayProfileEntry {
                    day_name: (i + 1).to_string(),
                    profile_schedule: singlify(
                        day_profile
                            .schedules()
                            .iter()
                            .map(|schedule| ScheduleEntry {
                                start_time: start_time(schedule.start_time),
                                action: match schedule.action {
                                    TariffAction::Block(slot) => {
                                        ScheduleAction::BlockTariffAction(slot.to_string())
                                    }
                                    TariffAction::Tou(action) => {
                                        ScheduleAction::TouTariffAction(action.to_string())
                                    }
                                },
                            })
                            .collect(),
                    ),
                })
                .collect(),
        ),
    }
}

fn build_special_days(tariff: &Tariff) -> SpecialDays {
    if tariff.special_days.is_empty() {
        return SpecialDays::Empty(Marker);
    }
    SpecialDays::Table(SpecialDayTable {
        special_day: singlify(
            tariff
                .special_days
                .iter()
                .map(|special_day| SpecialDayEntry {
                    date: build_date(&special_day.date),
                    referenced_day_name: special_day.day_profile.to_string(),
                })
                .collect(),
        ),
    })
}

// ── Thresholds and prices ──────────────────────────────────────

/// Values with their 1-based position as index.
fn indexed<T: ToString>(values: impl IntoIterator<Item = T>) -> OneOrMany<IndexedText> {
    singlify(
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| IndexedText::new(value, i + 1))
            .collect(),
    )
}

/// Like [`indexed`] but drops zero prices. Remaining prices keep the index
/// of their position in `values`.
fn nonzero_indexed(values: &[u32]) -> OneOrMany<IndexedText> {
    singlify(
        values
            .iter()
            .enumerate()
            .filter(|(_, price)| **price != 0)
            .map(|(i, price)| IndexedText::new(price, i + 1))
            .collect(),
    )
}

fn build_threshold_matrix(tariff: &Tariff) -> ThresholdMatrix {
    ThresholdMatrix {
        thresholds: tariff
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| ThresholdEntry {
                block_threshold: indexed(block.thresholds.iter()),
                index: (i + 1).to_string(),
            })
            .collect(),
    }
}

/// Prices of the block slots some schedule selects.
fn build_block_prices(tariff: &Tariff) -> OneOrMany<BlockPricesEntry> {
    singlify(
        tariff
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (i + 1, block))
            .filter(|(slot, _)| tariff.references_block_slot(*slot))
            .map(|(slot, block)| BlockPricesEntry {
                block_price: nonzero_indexed(&block.prices),
                index: slot.to_string(),
            })
            .collect(),
    )
}

fn build_tou_prices(tariff: &Tariff) -> OneOrMany<IndexedText> {
    nonzero_indexed(&tariff.tous)
}

fn build_price_section(tariff: &Tariff, mode: TariffMode) -> PriceSection {
    match mode {
        TariffMode::Hybrid => PriceSection::Hybrid(HybridTariff {
            block_prices: build_block_prices(tariff),
            tou_price: build_tou_prices(tariff),
        }),
        TariffMode::Tou => PriceSection::Tou(TouTariff {
            tou_price: build_tou_prices(tariff),
        }),
        TariffMode::Block => PriceSection::Block(BlockTariff {
            block_prices: build_block_prices(tariff),
        }),
    }
}
