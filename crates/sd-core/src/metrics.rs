//! Metrics engine: grouped conversion rates and costs.
//!
//! Lead-generation rows are grouped by sector, sales rows by rep. Each
//! group's numeric columns are summed and the ratios are computed from the
//! sums. A zero denominator yields 0 rather than an undefined value. Column
//! sums saturate at `u64::MAX`.

use std::collections::BTreeMap;

use sd_common::{LeadGenRecord, SalesRecord, Sector};
use sd_math::{safe_div, safe_pct, safe_ratio};
use serde::{Deserialize, Serialize};

/// Summed lead-generation columns for one sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorTotals {
    pub leads_generated: u64,
    pub leads_contacted: u64,
    pub appointments_booked: u64,
    pub spend: f64,
}

impl SectorTotals {
    fn add(&mut self, record: &LeadGenRecord) {
        self.leads_generated = self.leads_generated.saturating_add(record.leads_generated);
        self.leads_contacted = self.leads_contacted.saturating_add(record.leads_contacted);
        self.appointments_booked = self
            .appointments_booked
            .saturating_add(record.appointments_booked);
        self.spend += record.spend;
    }

    pub fn lead_to_appointment(&self) -> f64 {
        safe_ratio(self.appointments_booked, self.leads_generated)
    }

    pub fn cost_per_lead(&self) -> f64 {
        safe_div(self.spend, self.leads_generated as f64)
    }

    pub fn cost_per_appointment(&self) -> f64 {
        safe_div(self.spend, self.appointments_booked as f64)
    }
}

/// Per-sector lead-generation metrics.
///
/// The three ratio maps always share the key set of `totals`; all four are
/// empty when there are no lead-generation rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadGenMetrics {
    pub totals: BTreeMap<Sector, SectorTotals>,
    pub lead_to_appointment: BTreeMap<Sector, f64>,
    pub cost_per_lead: BTreeMap<Sector, f64>,
    pub cost_per_appointment: BTreeMap<Sector, f64>,
}

impl LeadGenMetrics {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Group lead-generation rows by sector and derive the sector ratios.
pub fn compute_leadgen_metrics(records: &[LeadGenRecord]) -> LeadGenMetrics {
    let mut totals: BTreeMap<Sector, SectorTotals> = BTreeMap::new();
    for record in records {
        totals.entry(record.sector).or_default().add(record);
    }

    let derive = |f: fn(&SectorTotals) -> f64| -> BTreeMap<Sector, f64> {
        totals.iter().map(|(sector, t)| (*sector, f(t))).collect()
    };

    LeadGenMetrics {
        lead_to_appointment: derive(SectorTotals::lead_to_appointment),
        cost_per_lead: derive(SectorTotals::cost_per_lead),
        cost_per_appointment: derive(SectorTotals::cost_per_appointment),
        totals,
    }
}

/// Summed sales columns and conversion percentages for one rep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepMetrics {
    pub appointments_sat: u64,
    pub proposals_issued: u64,
    pub sales_closed: u64,
    pub appointment_to_proposal_pct: f64,
    pub proposal_to_sale_pct: f64,
    pub appointment_to_sale_pct: f64,
}

/// Group sales rows by rep and derive the conversion percentages.
pub fn compute_rep_metrics(records: &[SalesRecord]) -> BTreeMap<String, RepMetrics> {
    let mut reps: BTreeMap<String, RepMetrics> = BTreeMap::new();
    for record in records {
        let entry = reps.entry(record.rep.clone()).or_default();
        entry.appointments_sat = entry.appointments_sat.saturating_add(record.appointments_sat);
        entry.proposals_issued = entry.proposals_issued.saturating_add(record.proposals_issued);
        entry.sales_closed = entry.sales_closed.saturating_add(record.sales_closed);
    }

    for m in reps.values_mut() {
        m.appointment_to_proposal_pct = safe_pct(m.proposals_issued, m.appointments_sat);
        m.proposal_to_sale_pct = safe_pct(m.sales_closed, m.proposals_issued);
        m.appointment_to_sale_pct = safe_pct(m.sales_closed, m.appointments_sat);
    }
    reps
}
