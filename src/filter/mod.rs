//! Filtering capabilities for purchase request views
//!
//! This module provides the generic filter framework and the concrete
//! filters behind the dashboard controls.

pub mod generic;
pub mod request;

pub use generic::{AndFilter, Filter};
pub use request::{
    ALL_OPTION, DaysOpenAboveFilter, FieldEqualsFilter, FilterOptions, RequestField,
    RequestSelection,
};
