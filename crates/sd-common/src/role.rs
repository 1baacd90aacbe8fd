//! User roles and the forms each may submit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Access role resolved from a user's email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Leader,
    Rep,
    #[serde(rename = "leadgen")]
    LeadGen,
    #[serde(rename = "readonly")]
    ReadOnly,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Leader => "leader",
            Role::Rep => "rep",
            Role::LeadGen => "leadgen",
            Role::ReadOnly => "readonly",
        }
    }

    /// Whether this role sees the lead-generation input form.
    pub fn can_submit_leadgen(self) -> bool {
        matches!(self, Role::Admin | Role::Leader | Role::LeadGen)
    }

    /// Whether this role sees the sales-rep input form.
    pub fn can_submit_sales(self) -> bool {
        matches!(self, Role::Admin | Role::Leader | Role::Rep)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "leader" => Ok(Role::Leader),
            "rep" => Ok(Role::Rep),
            "leadgen" => Ok(Role::LeadGen),
            "readonly" => Ok(Role::ReadOnly),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}
