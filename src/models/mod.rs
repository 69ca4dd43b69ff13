//! Domain models for the SC dashboard
//!
//! - `PurchaseRequest`: one cleaned SC row with its derived fields
//! - `UrgencyTier`: the four buckets over days open
//! - `Dataset`: the immutable row set of one load

pub mod conversion;
pub mod dataset;
pub mod purchase_request;
pub mod urgency;

pub use conversion::{RequestRecord, requests_to_record_batch};
pub use dataset::{Dataset, LoadReport};
pub use purchase_request::{PurchaseRequest, days_between, priority_score};
pub use urgency::UrgencyTier;
