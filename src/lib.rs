//! Core of the SC urgency dashboard: loads the open purchase request (SC)
//! summary, cleans it, and prepares the filtered views, metrics, rankings
//! and export the dashboard renders.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod models;
pub mod reader;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DashboardConfig, ExportConfig};
pub use error::{DashboardError, Result};
pub use loader::{DatasetCache, LoadOutcome, load_requests};
pub use models::{Dataset, LoadReport, PurchaseRequest, UrgencyTier};

// Views
pub use algorithm::{CriticalityThreshold, SummaryMetrics, ThresholdMetrics, TierAggregate};
pub use filter::{FilterOptions, RequestSelection};
pub use report::DashboardReport;

// Arrow types
pub use arrow::record_batch::RecordBatch;
