//! Request identifier
//!
//! A DUIS request id is the originating user's EUI-64, the target device's
//! EUI-64 and a counter unique per originator.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestId {
    pub counter: u64,
    #[validate(custom(function = "validate_eui64"))]
    pub originator_id: String,
    #[validate(custom(function = "validate_eui64"))]
    pub target_id: String,
}

impl RequestId {
    pub fn new(counter: u64, originator_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            counter,
            originator_id: originator_id.into(),
            target_id: target_id.into(),
        }
    }
}

/// Accepts `xx-xx-xx-xx-xx-xx-xx-xx` with hex octets, either case.
pub fn validate_eui64(value: &str) -> Result<(), ValidationError> {
    let octets: Vec<&str> = value.split('-').collect();
    let well_formed = octets.len() == 8
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()));
    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("eui64");
        err.message = Some("expected EUI-64 as xx-xx-xx-xx-xx-xx-xx-xx".into());
        Err(err)
    }
}
