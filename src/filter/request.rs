//! Filters over purchase requests
//!
//! The dashboard exposes three independent single-select controls
//! (requester, approver, project) with an "all" option. A [`RequestSelection`]
//! captures their state and turns it into an AND of equality filters.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::filter::generic::{AndFilter, Filter};
use crate::models::{Dataset, PurchaseRequest};

/// The option of a control that means "no restriction"
pub const ALL_OPTION: &str = "Todos";

/// A categorical field a control can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestField {
    /// `REQUISITANTE`
    Requester,
    /// `PENDENTE COM`
    Approver,
    /// `PROJETO_COMPLETO`, the project label including the WBS
    ProjectLabel,
}

impl RequestField {
    /// Value of the field for a request
    #[must_use]
    pub fn value(self, request: &PurchaseRequest) -> &str {
        match self {
            Self::Requester => &request.requester,
            Self::Approver => &request.approver,
            Self::ProjectLabel => &request.project_label,
        }
    }
}

/// Keeps requests whose field equals a value exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEqualsFilter {
    field: RequestField,
    value: String,
}

impl FieldEqualsFilter {
    #[must_use]
    pub fn new(field: RequestField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl Filter<PurchaseRequest> for FieldEqualsFilter {
    fn matches(&self, input: &PurchaseRequest) -> bool {
        self.field.value(input) == self.value
    }
}

/// Keeps requests open strictly longer than a number of days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaysOpenAboveFilter {
    days: u32,
}

impl DaysOpenAboveFilter {
    #[must_use]
    pub fn new(days: u32) -> Self {
        Self { days }
    }
}

impl Filter<PurchaseRequest> for DaysOpenAboveFilter {
    fn matches(&self, input: &PurchaseRequest) -> bool {
        input.days_open > self.days
    }
}

/// State of the three filter controls
///
/// `None` means the control is on [`ALL_OPTION`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSelection {
    pub requester: Option<String>,
    pub approver: Option<String>,
    pub project: Option<String>,
}

impl RequestSelection {
    /// A selection with every control on "all"
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a selection from the raw control values
    ///
    /// The sentinel [`ALL_OPTION`] becomes "no restriction".
    #[must_use]
    pub fn from_choices(requester: &str, approver: &str, project: &str) -> Self {
        Self {
            requester: choice(requester),
            approver: choice(approver),
            project: choice(project),
        }
    }

    #[must_use]
    pub fn with_requester(mut self, requester: &str) -> Self {
        self.requester = choice(requester);
        self
    }

    #[must_use]
    pub fn with_approver(mut self, approver: &str) -> Self {
        self.approver = choice(approver);
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: &str) -> Self {
        self.project = choice(project);
        self
    }

    /// Whether no control restricts anything
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.requester.is_none() && self.approver.is_none() && self.project.is_none()
    }

    /// The equality filters for the restricted controls
    #[must_use]
    pub fn to_filter(&self) -> AndFilter<PurchaseRequest, FieldEqualsFilter> {
        let filters = [
            (RequestField::Requester, &self.requester),
            (RequestField::Approver, &self.approver),
            (RequestField::ProjectLabel, &self.project),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .map(|value| FieldEqualsFilter::new(field, value))
        })
        .collect();

        AndFilter::new(filters)
    }

    /// Apply the selection to a dataset
    ///
    /// The result keeps source order. A value that matches nothing yields an
    /// empty view, which is a valid state.
    #[must_use]
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a PurchaseRequest> {
        let filter = self.to_filter();
        let filtered = filter.apply(&dataset.view());
        log::debug!(
            "Selection {:?} ({} active filters) kept {} of {} SCs",
            self,
            filter.len(),
            filtered.len(),
            dataset.len()
        );
        filtered
    }
}

fn choice(value: &str) -> Option<String> {
    (value != ALL_OPTION).then(|| value.to_string())
}

/// Options offered by each control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub requesters: Vec<String>,
    pub approvers: Vec<String>,
    pub projects: Vec<String>,
}

impl FilterOptions {
    /// Sorted distinct values of each control over the whole dataset,
    /// each list starting with [`ALL_OPTION`]
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            requesters: options_for(dataset, RequestField::Requester),
            approvers: options_for(dataset, RequestField::Approver),
            projects: options_for(dataset, RequestField::ProjectLabel),
        }
    }
}

fn options_for(dataset: &Dataset, field: RequestField) -> Vec<String> {
    std::iter::once(ALL_OPTION.to_string())
        .chain(
            dataset
                .rows()
                .iter()
                .map(|r| field.value(r))
                .unique()
                .sorted()
                .map(ToString::to_string),
        )
        .collect()
}
