//! Input forms: raw submissions, validation, and role-gated append.
//!
//! A form carries values as a user typed them (signed numbers, free-text
//! sector). Validation turns it into a record the metrics core can trust;
//! submission additionally checks that the submitter's role may use the form.

use std::fmt;

use sd_common::{LeadGenRecord, Role, SalesRecord, Sector, Week};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::store::DataStore;

/// Why a form could not become a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("week {0} is outside 1..=52")]
    WeekOutOfRange(i64),

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("unknown sector: {0:?}")]
    UnknownSector(String),
}

impl From<FormError> for sd_common::Error {
    fn from(err: FormError) -> Self {
        match err {
            FormError::WeekOutOfRange(week) => sd_common::Error::WeekOutOfRange { week },
            FormError::UnknownSector(s) => sd_common::Error::UnknownSector(s),
            other => sd_common::Error::InvalidRecord(other.to_string()),
        }
    }
}

/// Which of the two input forms a submission came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    LeadGen,
    Sales,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::LeadGen => write!(f, "lead generation input"),
            FormKind::Sales => write!(f, "sales rep input"),
        }
    }
}

/// Why a submission was not appended.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("role {role} may not use the {form} form")]
    Forbidden { role: Role, form: FormKind },

    #[error(transparent)]
    Invalid(#[from] FormError),
}

impl SubmitError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, SubmitError::Forbidden { .. })
    }
}

impl From<SubmitError> for sd_common::Error {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Forbidden { role, form } => sd_common::Error::Forbidden {
                role: role.to_string(),
                form: form.to_string(),
            },
            SubmitError::Invalid(inner) => inner.into(),
        }
    }
}

/// Confirmation of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub form: FormKind,
    /// Row index in the target table.
    pub row: usize,
    pub message: &'static str,
}

/// Lead-generation form as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadGenForm {
    pub week: i64,
    #[serde(default)]
    pub date_range: String,
    pub sector: String,
    #[serde(default)]
    pub leads_generated: i64,
    #[serde(default)]
    pub leads_contacted: i64,
    #[serde(default)]
    pub appointments_booked: i64,
    #[serde(default)]
    pub spend: f64,
    /// Optional; a blank name is recorded as the "Total" row.
    #[serde(default)]
    pub agent: Option<String>,
}

impl LeadGenForm {
    pub fn validate(&self) -> Result<LeadGenRecord, FormError> {
        let week = week(self.week)?;
        let sector = sector(&self.sector)?;
        if !self.spend.is_finite() {
            return Err(FormError::NonFinite { field: "spend" });
        }
        if self.spend < 0.0 {
            return Err(FormError::Negative {
                field: "spend",
                value: self.spend,
            });
        }
        Ok(LeadGenRecord::new(
            week,
            self.date_range.trim(),
            sector,
            self.agent.as_deref(),
            count("leads_generated", self.leads_generated)?,
            count("leads_contacted", self.leads_contacted)?,
            count("appointments_booked", self.appointments_booked)?,
            self.spend,
        ))
    }
}

/// Sales-rep form as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesForm {
    #[serde(default)]
    pub rep: String,
    pub week: i64,
    #[serde(default)]
    pub date_range: String,
    pub sector: String,
    #[serde(default)]
    pub appointments_sat: i64,
    #[serde(default)]
    pub proposals_issued: i64,
    #[serde(default)]
    pub sales_closed: i64,
}

impl SalesForm {
    pub fn validate(&self) -> Result<SalesRecord, FormError> {
        Ok(SalesRecord {
            week: week(self.week)?,
            date_range: self.date_range.trim().to_string(),
            sector: sector(&self.sector)?,
            rep: self.rep.trim().to_string(),
            appointments_sat: count("appointments_sat", self.appointments_sat)?,
            proposals_issued: count("proposals_issued", self.proposals_issued)?,
            sales_closed: count("sales_closed", self.sales_closed)?,
        })
    }
}

fn week(raw: i64) -> Result<Week, FormError> {
    Week::new(raw).map_err(|_| FormError::WeekOutOfRange(raw))
}

fn sector(raw: &str) -> Result<Sector, FormError> {
    raw.parse()
        .map_err(|_| FormError::UnknownSector(raw.trim().to_string()))
}

fn count(field: &'static str, raw: i64) -> Result<u64, FormError> {
    u64::try_from(raw).map_err(|_| FormError::Negative {
        field,
        value: raw as f64,
    })
}

/// Validate and append a lead-generation submission.
pub fn submit_leadgen(
    store: &mut DataStore,
    role: Role,
    form: &LeadGenForm,
) -> Result<Receipt, SubmitError> {
    if !role.can_submit_leadgen() {
        warn!(%role, "lead generation submission forbidden");
        return Err(SubmitError::Forbidden {
            role,
            form: FormKind::LeadGen,
        });
    }
    let record = form.validate().inspect_err(|e| {
        warn!(error = %e, "lead generation submission rejected");
    })?;
    info!(week = %record.week, sector = %record.sector, agent = %record.agent, "lead generation data submitted");
    let row = store.append_leadgen(record);
    Ok(Receipt {
        form: FormKind::LeadGen,
        row,
        message: "Lead Generation data submitted!",
    })
}

/// Validate and append a sales-rep submission.
pub fn submit_sales(
    store: &mut DataStore,
    role: Role,
    form: &SalesForm,
) -> Result<Receipt, SubmitError> {
    if !role.can_submit_sales() {
        warn!(%role, "sales submission forbidden");
        return Err(SubmitError::Forbidden {
            role,
            form: FormKind::Sales,
        });
    }
    let record = form.validate().inspect_err(|e| {
        warn!(error = %e, "sales submission rejected");
    })?;
    info!(week = %record.week, sector = %record.sector, rep = %record.rep, "sales rep data submitted");
    let row = store.append_sales(record);
    Ok(Receipt {
        form: FormKind::Sales,
        row,
        message: "Sales Rep data submitted!",
    })
}
