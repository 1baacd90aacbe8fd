//! Sales dashboard core: session store, input forms, metrics, alerting,
//! and rolling trends.
//!
//! The stages are pure functions over a [`DataStore`] snapshot. One call to
//! [`recompute`] produces everything a renderer needs:
//!
//! ```text
//! form submit → store append → metrics → alerts → trends
//! ```

pub mod alerts;
pub mod cli;
pub mod dashboard;
pub mod exit_codes;
pub mod forms;
pub mod identity;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod store;
pub mod sync;
pub mod trends;

pub use alerts::{evaluate_alerts, Alert, AlertRule, Severity};
pub use dashboard::{recompute, Dashboard, DashboardResponse, Rejection};
pub use exit_codes::ExitCode;
pub use forms::{submit_leadgen, submit_sales, FormError, FormKind, LeadGenForm, Receipt, SalesForm, SubmitError};
pub use identity::{IdentityProvider, StaticRoleProvider};
pub use metrics::{compute_leadgen_metrics, compute_rep_metrics, LeadGenMetrics, RepMetrics, SectorTotals};
pub use store::DataStore;
pub use sync::{sheet_sync_status, SheetSyncStatus};
pub use trends::{rolling_trend, standard_trends, LeadGenColumn, SalesColumn, TrendColumn, TrendPoint, TrendSeries, WeeklyRecord};
