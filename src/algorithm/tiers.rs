//! Aggregation of a view by urgency tier.

use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PurchaseRequest, UrgencyTier};
use crate::schema::tier_view_schema;

/// Value and distinct SC count of one urgency tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierAggregate {
    pub tier: UrgencyTier,
    pub total_value: f64,
    pub distinct_requests: usize,
}

/// Flat row of the tier chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecord {
    #[serde(rename = "URGÊNCIA")]
    pub label: String,
    #[serde(rename = "VALOR_TOTAL")]
    pub total_value: f64,
    #[serde(rename = "CONTAGEM_SC")]
    pub distinct_requests: i64,
    #[serde(rename = "COR")]
    pub color: String,
}

impl From<&TierAggregate> for TierRecord {
    fn from(aggregate: &TierAggregate) -> Self {
        Self {
            label: aggregate.tier.label().to_string(),
            total_value: aggregate.total_value,
            distinct_requests: i64::try_from(aggregate.distinct_requests).unwrap_or(i64::MAX),
            color: aggregate.tier.color().to_string(),
        }
    }
}

/// Aggregate a view by urgency tier
///
/// Only tiers with at least one request appear, in tier order. Every row
/// falls in exactly one tier, so the tier totals add up to the view total.
#[must_use]
pub fn aggregate_by_tier(rows: &[&PurchaseRequest]) -> Vec<TierAggregate> {
    rows.iter()
        .into_group_map_by(|r| r.urgency())
        .into_iter()
        .sorted_by_key(|(tier, _)| *tier)
        .map(|(tier, members)| TierAggregate {
            tier,
            total_value: members.iter().map(|r| r.value).sum(),
            distinct_requests: members
                .iter()
                .map(|r| r.sc.as_str())
                .collect::<FxHashSet<_>>()
                .len(),
        })
        .collect()
}

/// Convert a tier aggregation to a record batch for the tier chart
pub fn tiers_to_record_batch(tiers: &[TierAggregate]) -> Result<RecordBatch> {
    let schema = tier_view_schema();
    let records: Vec<TierRecord> = tiers.iter().map(TierRecord::from).collect();
    Ok(serde_arrow::to_record_batch(schema.fields(), &records)?)
}
