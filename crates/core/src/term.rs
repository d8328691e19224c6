// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The compiled filter term tree.
//!
//! A compiled filter is a tree of boolean groups over attribute comparisons,
//! plus raw tokens for clauses whose text is fixed by the query protocol
//! (asset state and asset type). The tree renders to the service's `where`
//! token syntax:
//!
//! ```text
//! Estimate='1';(Owners='Member:20'|-Owners);AssetState!='Dead';AssetType='Story'
//! ```
//!
//! `;` joins AND groups, `|` joins OR groups, and nested groups are
//! parenthesised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Comparison operators understood by the query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Equal to any of the operands.
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    /// The attribute has a value.
    Exists,
    /// The attribute has no value.
    NotExists,
}

impl Operator {
    /// Returns the string representation used in documents and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::GreaterThan => "greater_than",
            Operator::GreaterThanOrEqual => "greater_than_or_equal",
            Operator::LessThan => "less_than",
            Operator::LessThanOrEqual => "less_than_or_equal",
            Operator::Exists => "exists",
            Operator::NotExists => "not_exists",
        }
    }

    /// Returns true for `Exists` and `NotExists`, which take no operand.
    pub fn is_existence(&self) -> bool {
        matches!(self, Operator::Exists | Operator::NotExists)
    }

    /// The infix symbol used in `where` tokens, or `None` for existence operators.
    fn symbol(&self) -> Option<&'static str> {
        match self {
            Operator::Equal => Some("="),
            Operator::NotEqual => Some("!="),
            Operator::GreaterThan => Some(">"),
            Operator::GreaterThanOrEqual => Some(">="),
            Operator::LessThan => Some("<"),
            Operator::LessThanOrEqual => Some("<="),
            Operator::Exists | Operator::NotExists => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "equal" | "eq" | "=" => Ok(Operator::Equal),
            "not_equal" | "ne" | "!=" => Ok(Operator::NotEqual),
            "greater_than" | "gt" | ">" => Ok(Operator::GreaterThan),
            "greater_than_or_equal" | "gte" | ">=" => Ok(Operator::GreaterThanOrEqual),
            "less_than" | "lt" | "<" => Ok(Operator::LessThan),
            "less_than_or_equal" | "lte" | "<=" => Ok(Operator::LessThanOrEqual),
            "exists" => Ok(Operator::Exists),
            "not_exists" => Ok(Operator::NotExists),
            _ => Err(Error::InvalidOperation(format!("unknown operator '{s}'"))),
        }
    }
}

/// Opaque identifier of an asset or list value, e.g. `Member:20`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid {
    asset_type: String,
    number: u64,
}

impl Oid {
    pub fn new(asset_type: impl Into<String>, number: u64) -> Self {
        Oid {
            asset_type: asset_type.into(),
            number,
        }
    }

    pub fn asset_type(&self) -> &str {
        &self.asset_type
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.asset_type, self.number)
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (asset_type, number) = s
            .split_once(':')
            .ok_or_else(|| Error::UnresolvedIdentifier(s.to_string()))?;
        if asset_type.is_empty() || !asset_type.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::UnresolvedIdentifier(s.to_string()));
        }
        let number = number
            .parse::<u64>()
            .map_err(|_| Error::UnresolvedIdentifier(s.to_string()))?;
        Ok(Oid::new(asset_type, number))
    }
}

impl TryFrom<String> for Oid {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.to_string()
    }
}

/// A resolved reference to a named attribute of an asset type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeHandle {
    asset_type: String,
    name: String,
}

impl AttributeHandle {
    pub fn new(asset_type: impl Into<String>, name: impl Into<String>) -> Self {
        AttributeHandle {
            asset_type: asset_type.into(),
            name: name.into(),
        }
    }

    pub fn asset_type(&self) -> &str {
        &self.asset_type
    }

    /// The attribute name as used in `where`, `sort` and `find` tokens.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified token, e.g. `Story.Estimate`.
    pub fn token(&self) -> String {
        format!("{}.{}", self.asset_type, self.name)
    }
}

/// A single operand of an attribute term.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operand {
    Oid(Oid),
    /// The null identifier: "no related asset" / "no list value".
    Null,
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
}

impl Operand {
    fn token(&self) -> String {
        match self {
            Operand::Oid(oid) => format!("'{oid}'"),
            Operand::Null => "'NULL'".to_string(),
            Operand::Text(text) => format!("'{}'", encode_value(text)),
            Operand::Number(n) => format!("'{n}'"),
            Operand::Date(d) => format!("'{}'", d.format("%Y-%m-%dT%H:%M:%S%.3f")),
        }
    }
}

impl From<Oid> for Operand {
    fn from(oid: Oid) -> Self {
        Operand::Oid(oid)
    }
}

impl From<Option<Oid>> for Operand {
    fn from(oid: Option<Oid>) -> Self {
        oid.map_or(Operand::Null, Operand::Oid)
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<DateTime<Utc>> for Operand {
    fn from(d: DateTime<Utc>) -> Self {
        Operand::Date(d)
    }
}

/// Percent-encode the characters that are structural in `where` tokens.
fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' | '\'' | '"' | ';' | '|' | ',' | '(' | ')' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}

/// A comparison of one attribute against zero or more operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeTerm {
    attribute: AttributeHandle,
    operator: Operator,
    operands: Vec<Operand>,
}

impl AttributeTerm {
    pub fn new(attribute: AttributeHandle, operator: Operator, operands: Vec<Operand>) -> Self {
        AttributeTerm {
            attribute,
            operator,
            operands,
        }
    }

    pub fn attribute(&self) -> &AttributeHandle {
        &self.attribute
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn token(&self) -> String {
        let name = self.attribute.name();
        match self.operator.symbol() {
            None if self.operator == Operator::Exists => format!("+{name}"),
            None => format!("-{name}"),
            Some(symbol) => {
                let operands: Vec<String> = self.operands.iter().map(Operand::token).collect();
                format!("{name}{symbol}{}", operands.join(","))
            }
        }
    }
}

/// How the children of a group combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    And,
    Or,
}

impl GroupKind {
    fn separator(&self) -> &'static str {
        match self {
            GroupKind::And => ";",
            GroupKind::Or => "|",
        }
    }
}

/// An ordered AND/OR group of terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTerm {
    kind: GroupKind,
    terms: Vec<FilterTerm>,
}

impl GroupTerm {
    pub fn and() -> Self {
        GroupTerm {
            kind: GroupKind::And,
            terms: Vec::new(),
        }
    }

    pub fn or() -> Self {
        GroupTerm {
            kind: GroupKind::Or,
            terms: Vec::new(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Appends a term. Empty child groups contribute nothing and are dropped.
    pub fn push(&mut self, term: impl Into<FilterTerm>) {
        let term = term.into();
        if let FilterTerm::Group(group) = &term {
            if !group.has_terms() {
                return;
            }
        }
        self.terms.push(term);
    }

    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn token(&self) -> String {
        let parts: Vec<String> = self
            .terms
            .iter()
            .map(|term| match term {
                FilterTerm::Group(group) => format!("({})", group.token()),
                other => other.token(),
            })
            .collect();
        parts.join(self.kind.separator())
    }
}

/// A node of the compiled filter tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTerm {
    Attribute(AttributeTerm),
    Group(GroupTerm),
    /// A pre-formed clause whose text is fixed by the query protocol.
    Token(String),
}

impl FilterTerm {
    /// Renders the term in `where` token syntax.
    pub fn token(&self) -> String {
        match self {
            FilterTerm::Attribute(term) => term.token(),
            FilterTerm::Group(group) => group.token(),
            FilterTerm::Token(text) => text.clone(),
        }
    }
}

impl fmt::Display for FilterTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl From<AttributeTerm> for FilterTerm {
    fn from(term: AttributeTerm) -> Self {
        FilterTerm::Attribute(term)
    }
}

impl From<GroupTerm> for FilterTerm {
    fn from(group: GroupTerm) -> Self {
        FilterTerm::Group(group)
    }
}

#[cfg(test)]
#[path = "term_tests.rs"]
mod tests;
