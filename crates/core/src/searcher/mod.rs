// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Searchers: per-attribute containers of comparison terms.
//!
//! A searcher collects the bounds a caller puts on one attribute and keeps
//! them in their tightest form, so the compiled filter carries at most one
//! lower and one upper bound per attribute.
//!
//! - [`ComparisonSearcher`] - ordered bounds over any comparable value
//! - [`DateSearcher`] - second-granularity date bounds
//! - [`NullableDoubleSearcher`] - numeric bounds plus "has a value" / "has no value"
//! - [`StringSearcher`] - full-text search text and the fields to search

mod comparison;
mod date;
mod nullable;
mod string;

pub use comparison::ComparisonSearcher;
pub use date::DateSearcher;
pub use nullable::NullableDoubleSearcher;
pub use string::StringSearcher;

use serde::{Deserialize, Deserializer};

use crate::term::Operator;

/// Every field a searcher document entry may carry; the shape is checked
/// after the values decode.
#[derive(Debug, Deserialize)]
struct RawTermSpec<T> {
    op: Option<Operator>,
    value: Option<T>,
    min: Option<T>,
    max: Option<T>,
}

impl<T> RawTermSpec<T> {
    fn shape_error(&self) -> String {
        match (&self.op, &self.min, &self.max) {
            (Some(op), None, None) => format!("{op} requires a value"),
            (Some(_), _, _) => "an entry carries either op/value or min/max, not both".to_string(),
            (None, Some(_), None) | (None, None, Some(_)) => {
                "range requires both a minimum and a maximum".to_string()
            }
            _ => "expected {\"op\": ..., \"value\": ...} or {\"min\": ..., \"max\": ...}"
                .to_string(),
        }
    }
}

/// One entry of a searcher document: `{"op": "greater_than", "value": 3}`
/// or `{"min": 1, "max": 5}`.
#[derive(Debug)]
enum TermSpec<T> {
    Range { min: T, max: T },
    Term { op: Operator, value: T },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for TermSpec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawTermSpec::<T>::deserialize(deserializer)? {
            RawTermSpec {
                op: Some(op),
                value: Some(value),
                min: None,
                max: None,
            } => Ok(TermSpec::Term { op, value }),
            RawTermSpec {
                op: None,
                value: None,
                min: Some(min),
                max: Some(max),
            } => Ok(TermSpec::Range { min, max }),
            raw => Err(serde::de::Error::custom(raw.shape_error())),
        }
    }
}
