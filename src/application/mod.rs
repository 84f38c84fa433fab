//! Application layer
//!
//! Validation of caller input and compilation of validated tariffs into
//! protocol messages.

pub mod compiler;
pub mod validation;

pub use compiler::{build_body, build_update_import_tariff_primary_element, UpdateImportTariffRequest};
pub use validation::{is_valid_tariff, is_well_formed, validate_tariff};
