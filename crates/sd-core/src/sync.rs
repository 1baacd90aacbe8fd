//! Spreadsheet mirror status.
//!
//! The mirror is an optional external copy of the tables. The dashboard never
//! reads from or writes to it; this module only reports whether it has been
//! configured so the renderer can show a notice.

use sd_config::SheetSettings;
use serde::Serialize;
use tracing::debug;

/// Shown when no service account is configured.
pub const NOT_CONNECTED_NOTICE: &str =
    "Spreadsheet sync not connected. Add a service account to the configuration.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SheetSyncStatus {
    Connected { spreadsheet: Option<String> },
    NotConnected,
}

impl SheetSyncStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, SheetSyncStatus::Connected { .. })
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SheetSyncStatus::Connected { .. } => None,
            SheetSyncStatus::NotConnected => Some(NOT_CONNECTED_NOTICE),
        }
    }
}

/// Connected when a service-account file is configured and present.
pub fn sheet_sync_status(settings: &SheetSettings) -> SheetSyncStatus {
    match &settings.service_account_path {
        Some(path) if path.is_file() => SheetSyncStatus::Connected {
            spreadsheet: settings.spreadsheet.clone(),
        },
        Some(path) => {
            debug!(path = %path.display(), "service account file missing");
            SheetSyncStatus::NotConnected
        }
        None => SheetSyncStatus::NotConnected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn unconfigured_is_not_connected() {
        let status = sheet_sync_status(&SheetSettings::default());
        assert_eq!(status, SheetSyncStatus::NotConnected);
        assert_eq!(status.notice(), Some(NOT_CONNECTED_NOTICE));
    }

    #[test]
    fn missing_file_is_not_connected() {
        let settings = SheetSettings {
            service_account_path: Some("/nonexistent/sa.json".into()),
            spreadsheet: Some("SalesDashboard".into()),
        };
        assert!(!sheet_sync_status(&settings).is_connected());
    }

    #[test]
    fn present_file_is_connected() {
        let file = NamedTempFile::new().unwrap();
        let settings = SheetSettings {
            service_account_path: Some(file.path().to_path_buf()),
            spreadsheet: Some("SalesDashboard".into()),
        };
        let status = sheet_sync_status(&settings);
        assert_eq!(
            status,
            SheetSyncStatus::Connected {
                spreadsheet: Some("SalesDashboard".into())
            }
        );
        assert!(status.notice().is_none());
    }
}
