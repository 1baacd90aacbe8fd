//! Session identity.
//!
//! A session is one in-memory dashboard lifetime; records carry no identity
//! of their own, so the session ID is the only handle on a set of tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session ID for tracking one dashboard session.
///
/// Format: `sess-<date>-<time>-<random>`
/// Example: `sess-20260115-143022-abc123`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new session ID.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let random: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(6)
            .collect();
        SessionId(format!("sess-{}-{}", now.format("%Y%m%d-%H%M%S"), random))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
