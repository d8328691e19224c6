// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of typed filter values into filter terms.
//!
//! [`FilterBuilder`] owns the root AND group of one compilation and exposes
//! the primitives every entity filter is written in terms of:
//!
//! - [`simple`](FilterBuilder::simple) - attribute equals any of a set of literals
//! - [`relation`](FilterBuilder::relation) - attribute refers to any of a set of assets
//! - [`multi_relation`](FilterBuilder::multi_relation) - multi-valued relation, where
//!   `None` means "related to nobody"
//! - [`list_relation`](FilterBuilder::list_relation) - attribute is any of a set of
//!   named list values
//! - [`comparison`](FilterBuilder::comparison) and [`searcher`](FilterBuilder::searcher) -
//!   ordered bounds and existence checks
//!
//! Empty inputs add nothing: an empty collection is the absence of a
//! constraint, not a contradiction.

use crate::error::{Error, Result};
use crate::resolve::Resolver;
use crate::searcher::{ComparisonSearcher, DateSearcher, NullableDoubleSearcher};
use crate::term::{AttributeHandle, AttributeTerm, FilterTerm, GroupTerm, Operand, Operator};

/// A searcher whose terms can be appended to a filter.
pub trait SearcherTerms {
    /// The optimized terms; `None` operands belong to existence operators.
    fn operand_terms(&self) -> Vec<(Operator, Option<Operand>)>;
}

impl<T> SearcherTerms for ComparisonSearcher<T>
where
    T: PartialOrd + Clone + Into<Operand>,
{
    fn operand_terms(&self) -> Vec<(Operator, Option<Operand>)> {
        self.terms()
            .into_iter()
            .map(|(op, value)| (op, Some(value.into())))
            .collect()
    }
}

impl SearcherTerms for DateSearcher {
    fn operand_terms(&self) -> Vec<(Operator, Option<Operand>)> {
        self.terms()
            .into_iter()
            .map(|(op, value)| (op, Some(Operand::Date(value))))
            .collect()
    }
}

impl SearcherTerms for NullableDoubleSearcher {
    fn operand_terms(&self) -> Vec<(Operator, Option<Operand>)> {
        self.terms()
            .into_iter()
            .map(|(op, value)| (op, value.map(Operand::Number)))
            .collect()
    }
}

pub struct FilterBuilder<'a> {
    asset_type: &'a str,
    resolver: &'a dyn Resolver,
    root: GroupTerm,
}

impl<'a> FilterBuilder<'a> {
    pub fn new(asset_type: &'a str, resolver: &'a dyn Resolver) -> Self {
        FilterBuilder {
            asset_type,
            resolver,
            root: GroupTerm::and(),
        }
    }

    pub fn asset_type(&self) -> &str {
        self.asset_type
    }

    pub fn root(&self) -> &GroupTerm {
        &self.root
    }

    pub fn into_root(self) -> GroupTerm {
        self.root
    }

    /// ANDs a term into the root.
    pub fn and(&mut self, term: impl Into<FilterTerm>) {
        self.root.push(term);
    }

    /// ANDs a protocol-defined raw clause into the root.
    pub fn token(&mut self, token: impl Into<String>) {
        self.root.push(FilterTerm::Token(token.into()));
    }

    fn attribute(&self, name: &str) -> Result<AttributeHandle> {
        self.resolver.resolve_attribute(self.asset_type, name)
    }

    /// The attribute equals any of `values`.
    pub fn simple<V>(&mut self, attribute: &str, values: &[V]) -> Result<()>
    where
        V: Clone + Into<Operand>,
    {
        if values.is_empty() {
            return Ok(());
        }
        tracing::trace!("simple {}.{} ({} values)", self.asset_type, attribute, values.len());
        let handle = self.attribute(attribute)?;
        let operands = values.iter().cloned().map(Into::into).collect();
        self.and(AttributeTerm::new(handle, Operator::Equal, operands));
        Ok(())
    }

    /// The attribute refers to any of the assets identified by `ids`.
    pub fn relation(&mut self, attribute: &str, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        tracing::trace!("relation {}.{} ({} ids)", self.asset_type, attribute, ids.len());
        let handle = self.attribute(attribute)?;
        let operands = ids
            .iter()
            .map(|id| self.resolver.resolve_asset_id(id).map(Operand::Oid))
            .collect::<Result<Vec<_>>>()?;
        self.and(AttributeTerm::new(handle, Operator::Equal, operands));
        Ok(())
    }

    /// A multi-valued relation contains any of the given assets, or, for a
    /// `None` entry, has no related assets at all.
    ///
    /// `[Some(a), Some(b), None]` compiles to
    /// `(Attr='a','b'|-Attr)`: "related to a or b, or to nobody".
    pub fn multi_relation(&mut self, attribute: &str, ids: &[Option<String>]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        tracing::trace!("multi-relation {}.{} ({} ids)", self.asset_type, attribute, ids.len());
        let handle = self.attribute(attribute)?;

        let mut oids = Vec::new();
        let mut includes_nobody = false;
        for id in ids {
            match id {
                Some(id) => oids.push(Operand::Oid(self.resolver.resolve_asset_id(id)?)),
                None => includes_nobody = true,
            }
        }

        let mut any = GroupTerm::or();
        if !oids.is_empty() {
            any.push(AttributeTerm::new(handle.clone(), Operator::Equal, oids));
        }
        if includes_nobody {
            any.push(AttributeTerm::new(handle, Operator::NotExists, Vec::new()));
        }
        self.and(any);
        Ok(())
    }

    /// The attribute is any of the named values of `list_type`. A `None`
    /// name stands for "no value".
    pub fn list_relation(
        &mut self,
        attribute: &str,
        list_type: &str,
        names: &[Option<String>],
    ) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        tracing::trace!("list {}.{} from {}", self.asset_type, attribute, list_type);
        let oids = names
            .iter()
            .map(|name| match name {
                Some(name) => self.resolver.resolve_list_value(list_type, name).map(Some),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>>>()?;
        self.simple(attribute, &oids)
    }

    /// Applies a single comparison. Existence operators ignore `value`;
    /// every other operator requires one.
    pub fn comparison(
        &mut self,
        attribute: &str,
        op: Operator,
        value: Option<Operand>,
    ) -> Result<()> {
        let handle = self.attribute(attribute)?;
        let operands = if op.is_existence() {
            Vec::new()
        } else {
            let value = value.ok_or_else(|| {
                Error::InvalidOperation(format!("{op} on {attribute} requires a value"))
            })?;
            vec![value]
        };
        self.and(AttributeTerm::new(handle, op, operands));
        Ok(())
    }

    /// ANDs every optimized term of `searcher` into the root.
    pub fn searcher(&mut self, attribute: &str, searcher: &impl SearcherTerms) -> Result<()> {
        for (op, value) in searcher.operand_terms() {
            self.comparison(attribute, op, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
