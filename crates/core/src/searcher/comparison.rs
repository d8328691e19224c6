// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered comparison bounds for a single attribute.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::term::Operator;

use super::TermSpec;

/// Collects comparison terms on one attribute, holding at most one value per
/// operator and narrowing bounds as terms are added.
///
/// - `Exists` and `NotExists` exclude each other.
/// - `Equal` and `NotEqual` may each be added once.
/// - Repeated lower bounds keep the larger value; repeated upper bounds keep
///   the smaller value.
///
/// [`terms`](Self::terms) additionally collapses a `LessThan` /
/// `LessThanOrEqual` pair (and the `GreaterThan` / `GreaterThanOrEqual` pair)
/// down to whichever bound excludes more values.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSearcher<T> {
    terms: BTreeMap<Operator, T>,
}

impl<T> Default for ComparisonSearcher<T> {
    fn default() -> Self {
        ComparisonSearcher {
            terms: BTreeMap::new(),
        }
    }
}

impl<T: PartialOrd + Clone> ComparisonSearcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term, narrowing an existing bound of the same operator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] when adding `Exists` alongside
    /// `NotExists` (or the reverse), or when `Equal`/`NotEqual` is added twice.
    pub fn add_term(&mut self, op: Operator, value: T) -> Result<()> {
        match op {
            Operator::Exists | Operator::NotExists => {
                let opposite = if op == Operator::Exists {
                    Operator::NotExists
                } else {
                    Operator::Exists
                };
                if self.terms.contains_key(&opposite) {
                    return Err(Error::InvalidOperation(format!(
                        "cannot add {op} when {opposite} is already present"
                    )));
                }
                self.terms.insert(op, value);
            }
            Operator::Equal | Operator::NotEqual => {
                if self.terms.contains_key(&op) {
                    return Err(Error::InvalidOperation(format!(
                        "{op} may only be specified once"
                    )));
                }
                self.terms.insert(op, value);
            }
            Operator::GreaterThan | Operator::GreaterThanOrEqual => {
                let tighter = self.terms.get(&op).map_or(true, |current| value > *current);
                if tighter {
                    self.terms.insert(op, value);
                }
            }
            Operator::LessThan | Operator::LessThanOrEqual => {
                let tighter = self.terms.get(&op).map_or(true, |current| value < *current);
                if tighter {
                    self.terms.insert(op, value);
                }
            }
        }
        Ok(())
    }

    /// Bounds the attribute to `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if `min > max`.
    pub fn range(&mut self, min: T, max: T) -> Result<()> {
        if min > max {
            return Err(Error::InvalidOperation(
                "range minimum is greater than its maximum".to_string(),
            ));
        }
        self.add_term(Operator::GreaterThanOrEqual, min)?;
        self.add_term(Operator::LessThanOrEqual, max)
    }

    /// The optimized term set, in operator order.
    pub fn terms(&self) -> Vec<(Operator, T)> {
        let mut terms = self.terms.clone();

        if let (Some(less), Some(less_or_equal)) = (
            terms.get(&Operator::LessThan),
            terms.get(&Operator::LessThanOrEqual),
        ) {
            let drop = if less_or_equal >= less {
                Operator::LessThanOrEqual
            } else {
                Operator::LessThan
            };
            terms.remove(&drop);
        }

        if let (Some(greater), Some(greater_or_equal)) = (
            terms.get(&Operator::GreaterThan),
            terms.get(&Operator::GreaterThanOrEqual),
        ) {
            let drop = if greater_or_equal <= greater {
                Operator::GreaterThanOrEqual
            } else {
                Operator::GreaterThan
            };
            terms.remove(&drop);
        }

        terms.into_iter().collect()
    }

    pub fn contains(&self, op: Operator) -> bool {
        self.terms.contains_key(&op)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }
}

impl<'de, T> Deserialize<'de> for ComparisonSearcher<T>
where
    T: Deserialize<'de> + PartialOrd + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let specs = Vec::<TermSpec<T>>::deserialize(deserializer)?;
        let mut searcher = ComparisonSearcher::new();
        for spec in specs {
            match spec {
                TermSpec::Range { min, max } => searcher.range(min, max),
                TermSpec::Term { op, value } => searcher.add_term(op, value),
            }
            .map_err(serde::de::Error::custom)?;
        }
        Ok(searcher)
    }
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
