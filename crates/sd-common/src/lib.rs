//! Sales dashboard common types, IDs, and errors.
//!
//! This crate provides foundational types shared across sd-core modules:
//! - Lead-generation and sales activity records
//! - Sector, week, and role vocabulary
//! - Session and schema versioning
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod id;
pub mod output;
pub mod record;
pub mod role;
pub mod schema;
pub mod sector;

pub use error::{Error, Result};
pub use id::SessionId;
pub use output::OutputFormat;
pub use record::{LeadGenRecord, SalesRecord, Week, DEFAULT_AGENT};
pub use role::Role;
pub use schema::SCHEMA_VERSION;
pub use sector::Sector;
