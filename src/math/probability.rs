//! Ordered probability tables
//!
//! A table maps labels to non-negative weights that sum to one. Labels keep
//! their insertion order, which makes sampling reproducible for a given
//! sequence of uniform draws.

use crate::io::error::{CircuitError, Result, invalid_parameter};
use crate::math::random::RandomSource;

/// Allowed deviation of a table's total weight from one
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

// Rounding left behind by repeated redistribution stays far below this
const ROUNDING_SLACK: f64 = 1e-12;

/// Weighted labels sampled by cumulative subtraction
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable<L> {
    name: &'static str,
    entries: Vec<(L, f64)>,
}

impl<L: Copy + PartialEq> ProbabilityTable<L> {
    /// Build a table without validation
    ///
    /// Malformed tables are reported lazily by [`Self::choose`].
    pub const fn new(name: &'static str, entries: Vec<(L, f64)>) -> Self {
        Self { name, entries }
    }

    /// Build a table after checking that weights are finite, non-negative and sum to one
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the table is empty, a weight is negative
    /// or not finite, or the weights do not sum to one within [`WEIGHT_TOLERANCE`]
    pub fn validated(name: &'static str, entries: Vec<(L, f64)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(invalid_parameter(name, &"{}", &"table has no labels"));
        }

        if let Some((_, weight)) = entries
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(invalid_parameter(
                name,
                weight,
                &"weights must be finite and non-negative",
            ));
        }

        let table = Self::new(name, entries);
        let total = table.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(invalid_parameter(name, &total, &"weights must sum to 1"));
        }

        Ok(table)
    }

    /// Name used in error messages
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of labels
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no labels left
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight).sum()
    }

    /// Labels with their weights, in table order
    pub fn entries(&self) -> &[(L, f64)] {
        &self.entries
    }

    /// Weight of `label`, if present
    pub fn weight(&self, label: L) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, weight)| *weight)
    }

    /// Labels in table order
    pub fn labels(&self) -> impl Iterator<Item = L> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Select the label whose cumulative weight first reaches `sample`
    ///
    /// Labels with zero weight are never selected.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` if the weights are exhausted before reaching
    /// `sample`, beyond floating-point rounding; no label is ever returned
    /// arbitrarily.
    pub fn choose(&self, sample: f64) -> Result<L> {
        let mut remainder = sample;
        let mut last_positive = None;
        for &(label, weight) in &self.entries {
            remainder -= weight;
            if weight > 0.0 {
                if remainder <= 0.0 {
                    return Ok(label);
                }
                last_positive = Some(label);
            }
        }

        if remainder <= ROUNDING_SLACK
            && let Some(label) = last_positive
        {
            return Ok(label);
        }

        Err(CircuitError::MalformedTable {
            table: self.name,
            sample,
            total: self.total(),
        })
    }

    /// Draw a label using one sample from `source`
    ///
    /// # Errors
    ///
    /// Propagates `MalformedTable` from [`Self::choose`]
    pub fn draw<S: RandomSource + ?Sized>(&self, source: &mut S) -> Result<L> {
        self.choose(source.sample_unit())
    }

    /// Copy of the table without `label`, its weight split evenly over the rest
    ///
    /// Total mass is unchanged unless `label` was the only entry, in which case
    /// the result is empty. Removing an absent label returns an identical table.
    #[must_use]
    pub fn without(&self, label: L) -> Self {
        let Some(removed) = self.weight(label) else {
            return self.clone();
        };

        let remaining = self.entries.len() - 1;
        if remaining == 0 {
            return Self::new(self.name, Vec::new());
        }

        let share = removed / remaining as f64;
        let entries = self
            .entries
            .iter()
            .filter(|(candidate, _)| *candidate != label)
            .map(|&(candidate, weight)| (candidate, weight + share))
            .collect();

        Self::new(self.name, entries)
    }
}
