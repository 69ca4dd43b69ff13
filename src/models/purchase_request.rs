//! Purchase request (SC) entity model
//!
//! One cleaned row of the SC summary sheet, with the fields the dashboard
//! derives from it at load time.

use chrono::NaiveDate;

use crate::models::urgency::UrgencyTier;
use crate::reader::Cell;

/// A cleaned open purchase request
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    /// SC number, trimmed and non-empty
    pub sc: String,
    /// WBS code, trimmed
    pub wbs: String,
    /// Requesting engineer (`REQUISITANTE`)
    pub requester: String,
    /// Party the request is pending with (`PENDENTE COM`)
    pub approver: String,
    /// Project name (`PROJETO`)
    pub project: String,
    /// Monetary value, never negative
    pub value: f64,
    /// Creation date (`DATA CRIAÇÃO`)
    pub created_on: NaiveDate,
    /// `SC-WBS`
    pub composite_key: String,
    /// `PROJETO (WBS)`
    pub project_label: String,
    /// Whole days between creation and the reference date, floored at zero
    pub days_open: u32,
    /// Cells of the non-standard source columns, in dataset order
    pub extras: Vec<Cell>,
}

impl PurchaseRequest {
    /// Create a request and derive its computed fields
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sc: String,
        wbs: String,
        requester: String,
        approver: String,
        project: String,
        value: f64,
        created_on: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        let composite_key = format!("{sc}-{wbs}");
        let project_label = format!("{project} ({wbs})");
        let days_open = days_between(created_on, today);

        Self {
            sc,
            wbs,
            requester,
            approver,
            project,
            value,
            created_on,
            composite_key,
            project_label,
            days_open,
            extras: Vec::new(),
        }
    }

    /// Attach the cells of the non-standard columns
    #[must_use]
    pub fn with_extras(mut self, extras: Vec<Cell>) -> Self {
        self.extras = extras;
        self
    }

    /// Urgency tier for the days open
    #[must_use]
    pub fn urgency(&self) -> UrgencyTier {
        UrgencyTier::from_days_open(self.days_open)
    }

    /// Priority score, `days_open * ln(1 + value)`
    #[must_use]
    pub fn score(&self) -> f64 {
        priority_score(self.days_open, self.value)
    }

    /// Label used by the rankings, `SC <sc> (<wbs>)`
    #[must_use]
    pub fn ranking_label(&self) -> String {
        format!("SC {} ({})", self.sc, self.wbs)
    }
}

/// Priority score combining age and value
///
/// Strictly increasing in `days_open` for a positive value and in `value`
/// for a positive day count; zero when either is zero.
#[must_use]
pub fn priority_score(days_open: u32, value: f64) -> f64 {
    f64::from(days_open) * value.max(0.0).ln_1p()
}

/// Days from `created_on` to `today`, zero for future dates
#[must_use]
pub fn days_between(created_on: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - created_on).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}
