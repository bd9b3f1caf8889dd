//! Aggregate action table.
//!
//! An aggregate is a shorthand action that stands for an ordered list of
//! primitive actions. The table is a compile-time constant.

use crate::actions::{CREATE, DELETE, UPDATE, WRITE};

const WRITE_EXPANSION: &[&str] = &[CREATE, UPDATE, DELETE];

/// The built-in aggregate table: `write` expands to create, update, delete.
pub static AGGREGATES: AggregateTable = AggregateTable::new(&[(WRITE, WRITE_EXPANSION)]);

/// An ordered mapping from aggregate action to the primitives it expands to.
#[derive(Debug, Clone, Copy)]
pub struct AggregateTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl AggregateTable {
    /// Build a table from `(aggregate, primitives)` entries.
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }

    /// Primitives an aggregate expands to, if `action` is an aggregate.
    pub fn expansion(&self, action: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(name, _)| *name == action)
            .map(|(_, primitives)| *primitives)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AggregateTable {
    fn default() -> Self {
        AGGREGATES
    }
}
