//! The recompute pass and its output envelope.

use std::collections::BTreeMap;

use chrono::Utc;
use sd_common::{SessionId, SCHEMA_VERSION};
use sd_config::DashboardConfig;
use serde::Serialize;
use tracing::debug;

use crate::alerts::{evaluate_alerts, Alert, Severity};
use crate::forms::FormKind;
use crate::metrics::{compute_leadgen_metrics, compute_rep_metrics, LeadGenMetrics, RepMetrics};
use crate::store::DataStore;
use crate::sync::SheetSyncStatus;
use crate::trends::{standard_trends, TrendSeries};

/// Everything derived from one snapshot of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub leadgen_metrics: LeadGenMetrics,
    pub rep_metrics: BTreeMap<String, RepMetrics>,
    pub alerts: Vec<Alert>,
    pub trends: Vec<TrendSeries>,
}

impl Dashboard {
    /// Most severe alert, if any fired.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.alerts.iter().map(|a| a.severity).max()
    }

    /// Whether any warn or error alert fired.
    pub fn has_findings(&self) -> bool {
        self.worst_severity().is_some_and(|s| s > Severity::Ok)
    }
}

/// Recompute metrics, alerts, and trends from the current tables.
///
/// Pure: the same store and config always give the same dashboard.
pub fn recompute(store: &DataStore, config: &DashboardConfig) -> Dashboard {
    let leadgen_metrics = compute_leadgen_metrics(store.leadgen());
    let rep_metrics = compute_rep_metrics(store.sales());
    let alerts = evaluate_alerts(store, &leadgen_metrics, &config.thresholds);
    let trends = standard_trends(store, config.trends.window_weeks);

    debug!(
        session = %store.session_id(),
        leadgen_rows = store.leadgen().len(),
        sales_rows = store.sales().len(),
        sectors = leadgen_metrics.totals.len(),
        reps = rep_metrics.len(),
        alerts = alerts.len(),
        trends = trends.len(),
        "dashboard recomputed"
    );

    Dashboard {
        leadgen_metrics,
        rep_metrics,
        alerts,
        trends,
    }
}

/// A submission that did not make it into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub form: FormKind,
    /// Position in the submitted batch for that form.
    pub index: usize,
    pub reason: String,
}

/// Dashboard plus the metadata a renderer shows alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub schema_version: String,
    pub session_id: SessionId,
    pub generated_at: String,
    pub leadgen_rows: usize,
    pub sales_rows: usize,
    pub sheet_sync: SheetSyncStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<Rejection>,
    #[serde(flatten)]
    pub dashboard: Dashboard,
}

impl DashboardResponse {
    pub fn new(store: &DataStore, dashboard: Dashboard, sheet_sync: SheetSyncStatus) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            session_id: store.session_id().clone(),
            generated_at: Utc::now().to_rfc3339(),
            leadgen_rows: store.leadgen().len(),
            sales_rows: store.sales().len(),
            sheet_sync,
            rejected: Vec::new(),
            dashboard,
        }
    }

    pub fn with_rejections(mut self, rejected: Vec<Rejection>) -> Self {
        self.rejected = rejected;
        self
    }
}
