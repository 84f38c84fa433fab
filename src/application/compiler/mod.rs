//! DUIS message compilation for import tariffs.

pub mod body;
pub mod calendar;
pub mod tariff;

pub use body::{singlify, OneOrMany, UpdateImportTariffRequest};
pub use tariff::{build_body, build_update_import_tariff_primary_element};
