//! # Texnouz Tariff
//!
//! Smart-meter electricity import tariffs: data model, validation and
//! compilation into DUIS "Update Import Tariff (Primary Element)" requests
//! (service reference variant 1.1.1).
//!
//! ## Architecture
//!
//! - **domain**: Tariff entity, DUIS identifiers and lookup tables
//! - **application**: Two-stage validation and the message compiler
//! - **support**: Error types and logging setup
//! - **config**: TOML configuration for the command line tool
//!
//! ```no_run
//! use texnouz_tariff::{build_update_import_tariff_primary_element, validate_tariff, RequestId};
//!
//! # fn run(input: serde_json::Value) -> Result<(), texnouz_tariff::AppError> {
//! let tariff = validate_tariff(&input)?;
//! let request_id = RequestId::new(1, "90-b3-d5-1f-30-01-00-00", "00-db-12-34-56-78-90-a0");
//! let request = build_update_import_tariff_primary_element(&tariff, request_id)?;
//! println!("{}", serde_json::to_string_pretty(&request)?);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use application::compiler::{singlify, OneOrMany};
pub use application::validation::structure::{is_tariff, is_tariff_shape};
pub use application::{
    build_body, build_update_import_tariff_primary_element, is_valid_tariff, is_well_formed,
    validate_tariff, UpdateImportTariffRequest,
};
pub use domain::{RequestId, Tariff, TariffMode};
pub use support::errors::{AppError, CompileError, ConfigError, TariffError, WellFormednessError};
pub use support::logging::init_tracing;
