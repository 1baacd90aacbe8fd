//! Dashboard configuration: alert thresholds, trend window, role directory,
//! and spreadsheet-sync settings.
//!
//! Every field has a default, so a partial JSON file (or none at all) yields
//! a usable configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use sd_common::Role;
use serde::{Deserialize, Serialize};

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub thresholds: AlertThresholds,
    pub trends: TrendSettings,
    pub roles: RoleDirectory,
    pub sheets: SheetSettings,
}

impl DashboardConfig {
    /// Parse a config from JSON. Missing sections take their defaults.
    pub fn parse_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Thresholds for the alert rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Domestic appointments at or above this total are on target.
    pub domestic_ok_min: u64,
    /// Domestic appointments at or above this (but below ok) warn; below it errors.
    pub domestic_warn_min: u64,
    /// Sector lead-to-appointment rates below this warn.
    pub lead_to_appointment_min: f64,
    /// A sales record with fewer appointments sat than this warns.
    pub rep_min_appointments: u64,
    /// A sales record whose sales/appointments ratio is below this warns.
    pub rep_min_appointment_to_sale: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            domestic_ok_min: 70,
            domestic_warn_min: 55,
            lead_to_appointment_min: 0.20,
            rep_min_appointments: 8,
            rep_min_appointment_to_sale: 0.20,
        }
    }
}

/// Rolling trend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendSettings {
    /// Number of most recent weeks kept per series.
    pub window_weeks: usize,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self { window_weeks: 4 }
    }
}

/// Static email → role table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleDirectory(pub BTreeMap<String, Role>);

impl RoleDirectory {
    /// Look up an email. Matching ignores surrounding whitespace and ASCII case.
    pub fn lookup(&self, email: &str) -> Option<Role> {
        let needle = email.trim();
        if needle.is_empty() {
            return None;
        }
        self.0
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(needle))
            .map(|(_, role)| *role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RoleDirectory {
    fn default() -> Self {
        let entries = [
            ("paudie@example.com", Role::Admin),
            ("rob@example.com", Role::Leader),
            ("rep1@example.com", Role::Rep),
            ("rep2@example.com", Role::Rep),
            ("leadgen1@example.com", Role::LeadGen),
            ("leadgen2@example.com", Role::LeadGen),
        ];
        RoleDirectory(
            entries
                .into_iter()
                .map(|(email, role)| (email.to_string(), role))
                .collect(),
        )
    }
}

/// Optional spreadsheet mirror settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    /// Path to a service-account credentials file.
    pub service_account_path: Option<PathBuf>,
    /// Spreadsheet name to mirror into.
    pub spreadsheet: Option<String>,
}
