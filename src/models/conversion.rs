//! Conversion of purchase requests to Arrow record batches
//!
//! Chart and table renderers consume Arrow batches; this is where the typed
//! rows are flattened into them with `serde_arrow`.

use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::purchase_request::PurchaseRequest;
use crate::schema::request_view_schema;

/// Flat, serializable form of a purchase request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(rename = "SC")]
    pub sc: String,
    #[serde(rename = "WBS")]
    pub wbs: String,
    #[serde(rename = "REQUISITANTE")]
    pub requester: String,
    #[serde(rename = "PENDENTE COM")]
    pub approver: String,
    #[serde(rename = "PROJETO")]
    pub project: String,
    #[serde(rename = "VALOR")]
    pub value: f64,
    #[serde(rename = "DATA CRIAÇÃO")]
    pub created_on: NaiveDate,
    #[serde(rename = "SC_WBS")]
    pub composite_key: String,
    #[serde(rename = "PROJETO_COMPLETO")]
    pub project_label: String,
    #[serde(rename = "DIAS EM ABERTO")]
    pub days_open: i64,
    #[serde(rename = "URGÊNCIA")]
    pub urgency: String,
    #[serde(rename = "SCORE")]
    pub score: f64,
}

impl From<&PurchaseRequest> for RequestRecord {
    fn from(request: &PurchaseRequest) -> Self {
        Self {
            sc: request.sc.clone(),
            wbs: request.wbs.clone(),
            requester: request.requester.clone(),
            approver: request.approver.clone(),
            project: request.project.clone(),
            value: request.value,
            created_on: request.created_on,
            composite_key: request.composite_key.clone(),
            project_label: request.project_label.clone(),
            days_open: i64::from(request.days_open),
            urgency: request.urgency().label().to_string(),
            score: request.score(),
        }
    }
}

/// Convert a view of purchase requests to a record batch
pub fn requests_to_record_batch(rows: &[&PurchaseRequest]) -> Result<RecordBatch> {
    let schema = request_view_schema();
    let records: Vec<RequestRecord> = rows.iter().map(|r| RequestRecord::from(*r)).collect();
    Ok(serde_arrow::to_record_batch(schema.fields(), &records)?)
}

/// Read request records back from a record batch
pub fn records_from_record_batch(batch: &RecordBatch) -> Result<Vec<RequestRecord>> {
    Ok(serde_arrow::from_record_batch(batch)?)
}
