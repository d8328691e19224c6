// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date bounds at whole-second granularity.
//!
//! The service stores dates with sub-second precision, so equality against a
//! user-supplied instant is expressed as a half-open one-second window rather
//! than an exact match. Every operator is rewritten in terms of
//! `GreaterThanOrEqual` and `LessThan`:
//!
//! | added             | stored                             |
//! |-------------------|------------------------------------|
//! | `> d`             | `>= trunc(d) + 1s`                 |
//! | `>= d`            | `>= trunc(d)`                      |
//! | `< d`             | `< trunc(d)`                       |
//! | `<= d`            | `< trunc(d) + 1s`                  |
//! | `= d`             | `>= trunc(d)` and `< trunc(d) + 1s` |

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::term::Operator;

use super::{ComparisonSearcher, TermSpec};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSearcher {
    inner: ComparisonSearcher<DateTime<Utc>>,
}

impl DateSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a date term after truncating it to the second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] for `NotEqual`, `Exists` and `NotExists`,
    /// and [`Error::InvalidOperation`] when the one-second window would run
    /// past the last representable instant.
    pub fn add_term(&mut self, op: Operator, value: DateTime<Utc>) -> Result<()> {
        let value = value.trunc_subsecs(0);
        match op {
            Operator::GreaterThan => {
                let next_second = next_second(value)?;
                self.inner.add_term(Operator::GreaterThanOrEqual, next_second)
            }
            Operator::GreaterThanOrEqual => self.inner.add_term(Operator::GreaterThanOrEqual, value),
            Operator::LessThan => self.inner.add_term(Operator::LessThan, value),
            Operator::LessThanOrEqual => {
                let next_second = next_second(value)?;
                self.inner.add_term(Operator::LessThan, next_second)
            }
            Operator::Equal => {
                let next_second = next_second(value)?;
                self.inner.add_term(Operator::GreaterThanOrEqual, value)?;
                self.inner.add_term(Operator::LessThan, next_second)
            }
            Operator::NotEqual | Operator::Exists | Operator::NotExists => {
                Err(Error::NotSupported {
                    operator: op.to_string(),
                    searcher: "DateSearcher",
                })
            }
        }
    }

    /// Bounds the date to `min..=max`, both truncated to the second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if `min > max`.
    pub fn range(&mut self, min: DateTime<Utc>, max: DateTime<Utc>) -> Result<()> {
        if min > max {
            return Err(Error::InvalidOperation(
                "range minimum is greater than its maximum".to_string(),
            ));
        }
        self.add_term(Operator::GreaterThanOrEqual, min)?;
        self.add_term(Operator::LessThanOrEqual, max)
    }

    pub fn terms(&self) -> Vec<(Operator, DateTime<Utc>)> {
        self.inner.terms()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

fn next_second(value: DateTime<Utc>) -> Result<DateTime<Utc>> {
    value
        .checked_add_signed(Duration::seconds(1))
        .ok_or_else(|| Error::InvalidOperation(format!("no second follows {value}")))
}

impl<'de> Deserialize<'de> for DateSearcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let specs = Vec::<TermSpec<DateTime<Utc>>>::deserialize(deserializer)?;
        let mut searcher = DateSearcher::new();
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
#[path = "date_tests.rs"]
mod tests;
