// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric bounds for optional numeric attributes (estimates, risk, value).

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::term::Operator;

use super::{ComparisonSearcher, RawTermSpec};

/// Numeric bounds plus "has a value" / "has no value" for an optional number.
///
/// The existence term and numeric bounds exclude each other: a filter asks
/// either whether the attribute is set, or what range its value falls in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullableDoubleSearcher {
    numbers: ComparisonSearcher<f64>,
    existence: Option<Operator>,
}

impl NullableDoubleSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term. `Exists` and `NotExists` take no value; every other
    /// operator requires one. A value passed with an existence operator is
    /// ignored and the term lands in the existence slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] when a comparison operator has no
    /// value, when `Exists` and `NotExists` are mixed, or when an existence
    /// term is mixed with numeric bounds.
    pub fn add_term(&mut self, op: Operator, value: Option<f64>) -> Result<()> {
        if op.is_existence() {
            if !self.numbers.is_empty() {
                return Err(Error::InvalidOperation(format!(
                    "cannot add {op} to a searcher that already has numeric bounds"
                )));
            }
            if let Some(current) = self.existence {
                if current != op {
                    return Err(Error::InvalidOperation(format!(
                        "cannot add {op} when {current} is already present"
                    )));
                }
            }
            self.existence = Some(op);
            return Ok(());
        }

        let Some(value) = value else {
            return Err(Error::InvalidOperation(format!(
                "{op} requires a value; only exists and not_exists may omit it"
            )));
        };
        self.ensure_no_existence(op)?;
        self.numbers.add_term(op, value)
    }

    /// Bounds the value to `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if either bound is missing or
    /// `min > max`.
    pub fn range(&mut self, min: Option<f64>, max: Option<f64>) -> Result<()> {
        let (Some(min), Some(max)) = (min, max) else {
            return Err(Error::InvalidOperation(
                "range requires both a minimum and a maximum".to_string(),
            ));
        };
        self.ensure_no_existence(Operator::GreaterThanOrEqual)?;
        self.numbers.range(min, max)
    }

    /// Numeric terms followed by the existence term, if any.
    pub fn terms(&self) -> Vec<(Operator, Option<f64>)> {
        let mut terms: Vec<(Operator, Option<f64>)> = self
            .numbers
            .terms()
            .into_iter()
            .map(|(op, value)| (op, Some(value)))
            .collect();
        if let Some(op) = self.existence {
            terms.push((op, None));
        }
        terms
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty() && self.existence.is_none()
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
        self.existence = None;
    }

    fn ensure_no_existence(&self, op: Operator) -> Result<()> {
        match self.existence {
            Some(existence) => Err(Error::InvalidOperation(format!(
                "cannot add {op} to a searcher that already has {existence}"
            ))),
            None => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for NullableDoubleSearcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let specs = Vec::<RawTermSpec<f64>>::deserialize(deserializer)?;
        let mut searcher = NullableDoubleSearcher::new();
        for spec in specs {
            match spec {
                RawTermSpec {
                    op: Some(op),
                    value,
                    min: None,
                    max: None,
                } => searcher.add_term(op, value),
                RawTermSpec {
                    op: None,
                    value: None,
                    min,
                    max,
                } if min.is_some() || max.is_some() => searcher.range(min, max),
                spec => Err(Error::InvalidOperation(spec.shape_error())),
            }
            .map_err(serde::de::Error::custom)?;
        }
        Ok(searcher)
    }
}

#[cfg(test)]
#[path = "nullable_tests.rs"]
mod tests;
