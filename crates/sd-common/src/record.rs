//! Lead-generation and sales activity records.
//!
//! Records are append-only rows in a session's two tables. They have no
//! identity of their own; duplicate submissions are distinct rows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;
use crate::sector::Sector;

/// Agent label used when a lead-generation submission names no agent.
pub const DEFAULT_AGENT: &str = "Total";

/// ISO-style week number in `1..=52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Week(u8);

impl Week {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 52;

    pub fn new(week: i64) -> Result<Self, Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&week) {
            Ok(Week(week as u8))
        } else {
            Err(Error::WeekOutOfRange { week })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Week {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Week::new(value)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One lead-generation activity row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LeadGenRow")]
pub struct LeadGenRecord {
    pub week: Week,
    /// Free-text label, e.g. "18-24 Nov".
    pub date_range: String,
    pub sector: Sector,
    /// Never empty; see [`LeadGenRecord::new`].
    pub agent: String,
    pub leads_generated: u64,
    pub leads_contacted: u64,
    pub appointments_booked: u64,
    pub spend: f64,
}

impl LeadGenRecord {
    /// Build a record, substituting [`DEFAULT_AGENT`] for a blank agent name.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        week: Week,
        date_range: impl Into<String>,
        sector: Sector,
        agent: Option<&str>,
        leads_generated: u64,
        leads_contacted: u64,
        appointments_booked: u64,
        spend: f64,
    ) -> Self {
        let agent = match agent.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_AGENT.to_string(),
        };
        Self {
            week,
            date_range: date_range.into(),
            sector,
            agent,
            leads_generated,
            leads_contacted,
            appointments_booked,
            spend,
        }
    }
}

/// Serialized shape of [`LeadGenRecord`]; decoding goes through
/// [`LeadGenRecord::new`] so the agent default still applies.
#[derive(Deserialize)]
struct LeadGenRow {
    week: Week,
    #[serde(default)]
    date_range: String,
    sector: Sector,
    #[serde(default)]
    agent: Option<String>,
    leads_generated: u64,
    leads_contacted: u64,
    appointments_booked: u64,
    spend: f64,
}

impl From<LeadGenRow> for LeadGenRecord {
    fn from(row: LeadGenRow) -> Self {
        LeadGenRecord::new(
            row.week,
            row.date_range,
            row.sector,
            row.agent.as_deref(),
            row.leads_generated,
            row.leads_contacted,
            row.appointments_booked,
            row.spend,
        )
    }
}

/// One sales-rep activity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub week: Week,
    pub date_range: String,
    pub sector: Sector,
    pub rep: String,
    pub appointments_sat: u64,
    pub proposals_issued: u64,
    pub sales_closed: u64,
}
