//! Summary statistics over a filtered view
//!
//! Value totals, distinct SC counts and the "older than N days" panel.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::filter::{DaysOpenAboveFilter, Filter};
use crate::models::PurchaseRequest;

/// Days-open thresholds offered by the criticality selector
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CriticalityThreshold {
    Days15,
    Days30,
    #[default]
    Days60,
    Days90,
}

impl CriticalityThreshold {
    /// All thresholds in selector order
    pub const ALL: [Self; 4] = [Self::Days15, Self::Days30, Self::Days60, Self::Days90];

    /// Number of days
    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            Self::Days15 => 15,
            Self::Days30 => 30,
            Self::Days60 => 60,
            Self::Days90 => 90,
        }
    }

    /// Selector label, e.g. `> 60 dias`
    #[must_use]
    pub fn label(self) -> String {
        format!("> {} dias", self.days())
    }
}

impl TryFrom<u32> for CriticalityThreshold {
    type Error = DashboardError;

    fn try_from(days: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.days() == days)
            .ok_or_else(|| {
                DashboardError::Validation(format!(
                    "threshold must be one of 15, 30, 60 or 90 days, got {days}"
                ))
            })
    }
}

impl fmt::Display for CriticalityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Headline numbers of a view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Rows in the view
    pub row_count: usize,
    /// Sum of values
    pub total_value: f64,
    /// Number of distinct SCs
    pub distinct_requests: usize,
    /// Days open of the oldest request, `None` for an empty view
    pub oldest_days_open: Option<u32>,
}

/// The "SCs older than N days" panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdMetrics {
    pub threshold: CriticalityThreshold,
    /// Sum of values of requests open longer than the threshold
    pub total_value: f64,
    /// Distinct SCs open longer than the threshold
    pub distinct_requests: usize,
}

/// Sum of values of a view
#[must_use]
pub fn total_value(rows: &[&PurchaseRequest]) -> f64 {
    rows.iter().map(|r| r.value).sum()
}

/// Number of distinct SC identifiers in a view
#[must_use]
pub fn distinct_requests(rows: &[&PurchaseRequest]) -> usize {
    rows.iter()
        .map(|r| r.sc.as_str())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Headline numbers of a view
#[must_use]
pub fn summarize(rows: &[&PurchaseRequest]) -> SummaryMetrics {
    SummaryMetrics {
        row_count: rows.len(),
        total_value: total_value(rows),
        distinct_requests: distinct_requests(rows),
        oldest_days_open: rows.iter().map(|r| r.days_open).max(),
    }
}

/// Value and distinct SCs of requests open strictly longer than the threshold
#[must_use]
pub fn summarize_over_threshold(
    rows: &[&PurchaseRequest],
    threshold: CriticalityThreshold,
) -> ThresholdMetrics {
    let critical = DaysOpenAboveFilter::new(threshold.days()).apply(rows);

    ThresholdMetrics {
        threshold,
        total_value: total_value(&critical),
        distinct_requests: distinct_requests(&critical),
    }
}
