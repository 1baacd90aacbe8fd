//! Session-scoped data store.
//!
//! Owns the two append-only tables for one session. Whoever owns the store
//! owns mutation; the derivation stages only ever borrow it.

use sd_common::{LeadGenRecord, SalesRecord, SessionId};
use tracing::debug;

/// The lead-generation and sales tables for one session.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    session_id: SessionId,
    leadgen: Vec<LeadGenRecord>,
    sales: Vec<SalesRecord>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Append a lead-generation row, returning its index.
    pub fn append_leadgen(&mut self, record: LeadGenRecord) -> usize {
        self.leadgen.push(record);
        let index = self.leadgen.len() - 1;
        debug!(session = %self.session_id, index, "leadgen row appended");
        index
    }

    /// Append a sales row, returning its index.
    pub fn append_sales(&mut self, record: SalesRecord) -> usize {
        self.sales.push(record);
        let index = self.sales.len() - 1;
        debug!(session = %self.session_id, index, "sales row appended");
        index
    }

    pub fn leadgen(&self) -> &[LeadGenRecord] {
        &self.leadgen
    }

    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    /// Total rows across both tables.
    pub fn len(&self) -> usize {
        self.leadgen.len() + self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leadgen.is_empty() && self.sales.is_empty()
    }
}
