//! Top-N rankings of a view
//!
//! Two rankings feed the dashboard bar charts: the oldest requests and the
//! requests with the highest priority score. Both sorts are stable, so ties
//! keep the order of the view.

use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::PurchaseRequest;
use crate::schema::ranking_view_schema;

/// Number of bars in each ranking chart
pub const TOP_N: usize = 10;

/// Which ranking a list of requests belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingKind {
    /// Highest days open first
    Oldest,
    /// Highest priority score first
    Priority,
}

impl RankingKind {
    /// Chart title
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Oldest => "Top 10 SCs Mais Antigas",
            Self::Priority => "Top 10 SCs por Prioridade",
        }
    }

    /// Rank a view
    #[must_use]
    pub fn rank<'a>(self, rows: &[&'a PurchaseRequest], n: usize) -> Vec<&'a PurchaseRequest> {
        match self {
            Self::Oldest => top_oldest(rows, n),
            Self::Priority => top_priority(rows, n),
        }
    }
}

/// The `n` requests open the longest
#[must_use]
pub fn top_oldest<'a>(rows: &[&'a PurchaseRequest], n: usize) -> Vec<&'a PurchaseRequest> {
    rows.iter()
        .copied()
        .sorted_by(|a, b| b.days_open.cmp(&a.days_open))
        .take(n)
        .collect()
}

/// The `n` requests with the highest priority score
#[must_use]
pub fn top_priority<'a>(rows: &[&'a PurchaseRequest], n: usize) -> Vec<&'a PurchaseRequest> {
    rows.iter()
        .copied()
        .sorted_by(|a, b| b.score().total_cmp(&a.score()))
        .take(n)
        .collect()
}

/// Flat row of a ranking chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRequest {
    #[serde(rename = "LABEL")]
    pub label: String,
    #[serde(rename = "SC")]
    pub sc: String,
    #[serde(rename = "WBS")]
    pub wbs: String,
    #[serde(rename = "PROJETO")]
    pub project: String,
    #[serde(rename = "REQUISITANTE")]
    pub requester: String,
    #[serde(rename = "PENDENTE COM")]
    pub approver: String,
    #[serde(rename = "DIAS EM ABERTO")]
    pub days_open: i64,
    #[serde(rename = "VALOR")]
    pub value: f64,
    #[serde(rename = "SCORE")]
    pub score: f64,
}

impl From<&PurchaseRequest> for RankedRequest {
    fn from(request: &PurchaseRequest) -> Self {
        Self {
            label: request.ranking_label(),
            sc: request.sc.clone(),
            wbs: request.wbs.clone(),
            project: request.project.clone(),
            requester: request.requester.clone(),
            approver: request.approver.clone(),
            days_open: i64::from(request.days_open),
            value: request.value,
            score: request.score(),
        }
    }
}

/// Convert a ranking to a record batch for a bar chart
pub fn ranking_to_record_batch(ranked: &[&PurchaseRequest]) -> Result<RecordBatch> {
    let schema = ranking_view_schema();
    let records: Vec<RankedRequest> = ranked.iter().map(|r| RankedRequest::from(*r)).collect();
    Ok(serde_arrow::to_record_batch(schema.fields(), &records)?)
}
