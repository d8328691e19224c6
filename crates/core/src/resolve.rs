// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution contracts the compiler requires from the meta-model.
//!
//! The compiler never talks to the service directly. Everything it needs to
//! know about names is asked through [`Resolver`]: which attribute a name
//! denotes on an asset type, and which opaque identifier a textual asset ID or
//! list-value name stands for. Lookups are expected to be pure for the
//! duration of one compilation; caching belongs to the implementor.

use crate::error::Result;
use crate::term::{AttributeHandle, Oid};

pub trait Resolver {
    /// Resolves `attribute` on `asset_type`.
    ///
    /// Fails with [`Error::UnknownAttribute`](crate::Error::UnknownAttribute)
    /// when the meta-model has no such attribute.
    fn resolve_attribute(&self, asset_type: &str, attribute: &str) -> Result<AttributeHandle>;

    /// Resolves a textual asset ID (`Member:20`, `S-01001`, ...).
    ///
    /// Fails with [`Error::UnresolvedIdentifier`](crate::Error::UnresolvedIdentifier).
    fn resolve_asset_id(&self, id: &str) -> Result<Oid>;

    /// Resolves a named member of a list type (`StoryStatus` / `Done`).
    fn resolve_list_value(&self, list_type: &str, name: &str) -> Result<Oid>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve_attribute(&self, asset_type: &str, attribute: &str) -> Result<AttributeHandle> {
        (**self).resolve_attribute(asset_type, attribute)
    }

    fn resolve_asset_id(&self, id: &str) -> Result<Oid> {
        (**self).resolve_asset_id(id)
    }

    fn resolve_list_value(&self, list_type: &str, name: &str) -> Result<Oid> {
        (**self).resolve_list_value(list_type, name)
    }
}
