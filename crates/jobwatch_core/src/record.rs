use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contract form of a posting, as reported by the inference collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    Permanent,
    Contract,
    /// Off-schema wire values degrade to `Unknown` instead of failing the batch.
    #[serde(other)]
    Unknown,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::Permanent => "Permanent",
            EmploymentType::Contract => "Contract",
            EmploymentType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    #[serde(other)]
    Unknown,
}

impl Seniority {
    pub fn label(self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One job posting with its extracted and scored attributes.
///
/// Instances are produced by the inference collaborator and are immutable
/// once deserialized; the reconciler only reorders and concatenates them.
/// An unparsable `publishedAtUtc` fails deserialization of the whole batch,
/// so every record in the collection carries a comparable instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub primary_role: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub seniority: Seniority,
    pub published_at_utc: DateTime<Utc>,
    /// Hours between `published_at_utc` and the moment the record was produced.
    pub age_hours: f64,
    /// Producers target 0-100; the range is not enforced.
    pub match_score: i32,
    pub skills: Vec<String>,
    /// Free text identifying the origin platform, e.g. "LinkedIn".
    pub source: String,
    /// May be empty or a placeholder; see `resolve_apply_url`.
    pub apply_url: String,
    pub alert_message_en: String,
    pub alert_message_sv: String,
}
