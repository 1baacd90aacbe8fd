//! Identity/role provider.
//!
//! Role lookup is a static table; there is no authentication. Unknown users
//! get read-only access.

use sd_common::Role;
use sd_config::{DashboardConfig, RoleDirectory};
use tracing::{debug, warn};

/// Resolves an email to a dashboard role.
pub trait IdentityProvider {
    fn role_for(&self, email: &str) -> Role;
}

/// Provider backed by a fixed email → role table.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleProvider {
    directory: RoleDirectory,
}

impl StaticRoleProvider {
    pub fn new(directory: RoleDirectory) -> Self {
        Self { directory }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.roles.clone())
    }
}

impl IdentityProvider for StaticRoleProvider {
    fn role_for(&self, email: &str) -> Role {
        match self.directory.lookup(email) {
            Some(role) => {
                debug!(email, %role, "user resolved");
                role
            }
            None => {
                warn!(email, "unknown user, read-only access");
                Role::ReadOnly
            }
        }
    }
}
