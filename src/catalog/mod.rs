// src/catalog/mod.rs

//! The unit-of-work catalog.
//!
//! Units are stored flat in catalog order; every cross-reference (dependency,
//! reverse dependency) stays a plain id and is resolved through [`Catalog::get`].
//! Ids that no longer resolve are simply absent.

pub mod model;
pub mod validate;

use std::collections::HashMap;

pub use model::{Architecture, UnitOfWork};
pub use validate::build_catalog;

/// Immutable arena of [`UnitOfWork`] entries keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    units: Vec<UnitOfWork>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build from units that already passed validation (unique, non-empty ids).
    pub(crate) fn new_unchecked(units: Vec<UnitOfWork>) -> Self {
        let index = units
            .iter()
            .enumerate()
            .map(|(i, unit)| (unit.id.clone(), i))
            .collect();
        Self { units, index }
    }

    pub fn get(&self, id: &str) -> Option<&UnitOfWork> {
        self.index.get(id).map(|&i| &self.units[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Units in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitOfWork> {
        self.units.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
