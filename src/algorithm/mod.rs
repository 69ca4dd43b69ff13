//! Metrics, aggregations and rankings over filtered views
//!
//! Everything here works on a view (`&[&PurchaseRequest]`) produced by a
//! [`crate::filter::RequestSelection`] and never mutates the dataset.

pub mod ranking;
pub mod statistics;
pub mod tiers;

pub use ranking::{
    RankedRequest, RankingKind, TOP_N, ranking_to_record_batch, top_oldest, top_priority,
};
pub use statistics::{
    CriticalityThreshold, SummaryMetrics, ThresholdMetrics, distinct_requests, summarize,
    summarize_over_threshold, total_value,
};
pub use tiers::{TierAggregate, TierRecord, aggregate_by_tier, tiers_to_record_batch};
