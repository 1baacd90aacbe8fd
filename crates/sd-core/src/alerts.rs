//! Threshold-based alert rules.
//!
//! Rules are evaluated independently and every match fires, in rule order:
//!
//! 1. Domestic appointment volume (always exactly one alert: ok, warn, or error)
//! 2. Per-sector lead-to-appointment rate below minimum
//! 3. Per sales row: appointments sat below minimum
//! 4. Per sales row: sales/appointments ratio below minimum
//!
//! Rules 3 and 4 look at individual rows, not rep aggregates, so a rep with
//! two weak weeks gets two warnings of each kind.

use std::fmt;

use sd_common::Sector;
use sd_config::AlertThresholds;
use sd_math::{round_to, safe_ratio};
use serde::{Deserialize, Serialize};

use crate::metrics::LeadGenMetrics;
use crate::store::DataStore;

/// Alert severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Which rule produced an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    DomesticAppointments,
    LeadToAppointmentRate,
    RepActivity,
    RepConversion,
}

/// One banner on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub rule: AlertRule,
    pub message: String,
}

impl Alert {
    fn new(severity: Severity, rule: AlertRule, message: String) -> Self {
        Self {
            severity,
            rule,
            message,
        }
    }
}

/// Evaluate all rules against the current tables and derived metrics.
pub fn evaluate_alerts(
    store: &DataStore,
    leadgen: &LeadGenMetrics,
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let mut alerts = vec![domestic_volume(store, thresholds)];

    let rate_pct = pct_label(thresholds.lead_to_appointment_min);
    for (sector, rate) in &leadgen.lead_to_appointment {
        if *rate < thresholds.lead_to_appointment_min {
            alerts.push(Alert::new(
                Severity::Warn,
                AlertRule::LeadToAppointmentRate,
                format!("Lead to Appointment rate for {sector} is below {rate_pct}%: {rate:.2}"),
            ));
        }
    }

    for record in store.sales() {
        if record.appointments_sat < thresholds.rep_min_appointments {
            alerts.push(Alert::new(
                Severity::Warn,
                AlertRule::RepActivity,
                format!(
                    "{} has fewer than {} appointments ({})",
                    record.rep, thresholds.rep_min_appointments, record.appointments_sat
                ),
            ));
        }
    }

    let sale_pct = pct_label(thresholds.rep_min_appointment_to_sale);
    for record in store.sales() {
        let ratio = safe_ratio(record.sales_closed, record.appointments_sat);
        if ratio < thresholds.rep_min_appointment_to_sale {
            alerts.push(Alert::new(
                Severity::Warn,
                AlertRule::RepConversion,
                format!(
                    "{} Appointment → Sale below {sale_pct}% ({ratio:.2})",
                    record.rep
                ),
            ));
        }
    }

    alerts
}

fn domestic_volume(store: &DataStore, thresholds: &AlertThresholds) -> Alert {
    let total: u64 = store
        .sales()
        .iter()
        .filter(|r| r.sector == Sector::Domestic)
        .fold(0u64, |acc, r| acc.saturating_add(r.appointments_sat));

    let severity = if total >= thresholds.domestic_ok_min {
        Severity::Ok
    } else if total >= thresholds.domestic_warn_min {
        Severity::Warn
    } else {
        Severity::Error
    };

    Alert::new(
        severity,
        AlertRule::DomesticAppointments,
        format!("Domestic Appointments: {total}"),
    )
}

/// `0.2` → `"20"`, `0.125` → `"12.5"`.
fn pct_label(rate: f64) -> String {
    let pct = round_to(rate * 100.0, 1);
    if pct.fract() == 0.0 {
        format!("{pct:.0}")
    } else {
        format!("{pct}")
    }
}
