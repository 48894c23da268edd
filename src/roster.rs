//! In-memory student roster split across logical submodules: `records` holds
//! lookup and mutation, `ranking` holds the read-only queries.

mod ranking;
mod records;

use crate::models::Record;

/// Ordered collection of records. Order is insertion order and every `id` is
/// unique; both are maintained by [`Roster::add`].
#[derive(Debug, Default, Clone)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
