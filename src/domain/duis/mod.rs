//! DUIS envelope metadata
//!
//! Identifiers and lookup tables needed to stamp a request header. Only the
//! entries used when building tariff updates are catalogued.

pub mod catalogue;
pub mod request_id;

pub use catalogue::{lookup_cv, lookup_srv, CommandVariant, ServiceReferenceVariant};
pub use request_id::{validate_eui64, RequestId};
