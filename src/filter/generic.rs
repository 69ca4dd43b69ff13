//! Generic filtering framework
//!
//! A small trait-based approach to row predicates. The request filters in
//! [`crate::filter::request`] are built from these pieces.

use std::fmt::Debug;

/// A generic filter trait that can be applied to any data type
pub trait Filter<T>: Debug {
    /// Whether the input passes the filter
    fn matches(&self, input: &T) -> bool;

    /// Keep the elements of a view that pass the filter, preserving order
    fn apply<'a>(&self, inputs: &[&'a T]) -> Vec<&'a T> {
        inputs.iter().copied().filter(|input| self.matches(input)).collect()
    }
}

/// A filter that combines multiple filters with a logical AND
///
/// An empty AND filter includes everything.
#[derive(Debug, Clone)]
pub struct AndFilter<T, F>
where
    F: Filter<T>,
{
    filters: Vec<F>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, F> AndFilter<T, F>
where
    F: Filter<T>,
{
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<F>) -> Self {
        Self {
            filters,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Number of combined filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T: Debug, F> Filter<T> for AndFilter<T, F>
where
    F: Filter<T>,
{
    fn matches(&self, input: &T) -> bool {
        self.filters.iter().all(|f| f.matches(input))
    }
}
