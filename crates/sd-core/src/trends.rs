//! Rolling weekly trends.
//!
//! A series sums one numeric column per week number, keeps the most recent
//! `window` weeks in ascending order, and never interpolates: only weeks with
//! at least one row appear. An empty table yields no series at all.

use std::collections::BTreeMap;

use sd_common::{LeadGenRecord, SalesRecord, Week};
use serde::{Deserialize, Serialize};

use crate::store::DataStore;

/// A row that belongs to a week.
pub trait WeeklyRecord {
    fn week(&self) -> Week;
}

impl WeeklyRecord for LeadGenRecord {
    fn week(&self) -> Week {
        self.week
    }
}

impl WeeklyRecord for SalesRecord {
    fn week(&self) -> Week {
        self.week
    }
}

/// A numeric column of some record type that can be charted.
pub trait TrendColumn: Copy {
    type Record: WeeklyRecord;

    fn value(self, record: &Self::Record) -> f64;

    /// Default chart label.
    fn label(self) -> &'static str;
}

/// Chartable lead-generation columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadGenColumn {
    LeadsGenerated,
    LeadsContacted,
    AppointmentsBooked,
    Spend,
}

impl TrendColumn for LeadGenColumn {
    type Record = LeadGenRecord;

    fn value(self, record: &LeadGenRecord) -> f64 {
        match self {
            LeadGenColumn::LeadsGenerated => record.leads_generated as f64,
            LeadGenColumn::LeadsContacted => record.leads_contacted as f64,
            LeadGenColumn::AppointmentsBooked => record.appointments_booked as f64,
            LeadGenColumn::Spend => record.spend,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LeadGenColumn::LeadsGenerated => "Leads Generated",
            LeadGenColumn::LeadsContacted => "Leads Contacted",
            LeadGenColumn::AppointmentsBooked => "Appointments Booked",
            LeadGenColumn::Spend => "Spend",
        }
    }
}

/// Chartable sales columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesColumn {
    AppointmentsSat,
    ProposalsIssued,
    SalesClosed,
}

impl TrendColumn for SalesColumn {
    type Record = SalesRecord;

    fn value(self, record: &SalesRecord) -> f64 {
        match self {
            SalesColumn::AppointmentsSat => record.appointments_sat as f64,
            SalesColumn::ProposalsIssued => record.proposals_issued as f64,
            SalesColumn::SalesClosed => record.sales_closed as f64,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SalesColumn::AppointmentsSat => "Appointments Sat",
            SalesColumn::ProposalsIssued => "Proposals Issued",
            SalesColumn::SalesClosed => "Sales Closed",
        }
    }
}

/// One charted point: the column total for a week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub week: Week,
    pub value: f64,
}

/// A labelled series of at most `window_weeks` points, weeks strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub label: String,
    pub window_weeks: usize,
    pub points: Vec<TrendPoint>,
}

/// Sum `column` by week and keep the last `window` weeks.
///
/// Returns `None` for an empty table.
pub fn rolling_trend<C: TrendColumn>(
    records: &[C::Record],
    column: C,
    label: &str,
    window: usize,
) -> Option<TrendSeries> {
    if records.is_empty() {
        return None;
    }

    let mut by_week: BTreeMap<Week, f64> = BTreeMap::new();
    for record in records {
        *by_week.entry(record.week()).or_insert(0.0) += column.value(record);
    }

    let skip = by_week.len().saturating_sub(window);
    let points = by_week
        .into_iter()
        .skip(skip)
        .map(|(week, value)| TrendPoint { week, value })
        .collect();

    Some(TrendSeries {
        label: label.to_string(),
        window_weeks: window,
        points,
    })
}

/// The five dashboard series: two from lead generation, three from sales.
pub fn standard_trends(store: &DataStore, window: usize) -> Vec<TrendSeries> {
    let leadgen = [LeadGenColumn::LeadsGenerated, LeadGenColumn::AppointmentsBooked]
        .into_iter()
        .filter_map(|c| rolling_trend(store.leadgen(), c, c.label(), window));
    let sales = [
        SalesColumn::AppointmentsSat,
        SalesColumn::ProposalsIssued,
        SalesColumn::SalesClosed,
    ]
    .into_iter()
    .filter_map(|c| rolling_trend(store.sales(), c, c.label(), window));

    leadgen.chain(sales).collect()
}
