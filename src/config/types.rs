//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ContributionSchemes, TaxBracket, TaxBracketTable};

/// Metadata about the tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Short code identifying the schedule (e.g., "IRSA-2024").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// Date from which the schedule applies.
    pub effective_date: NaiveDate,
    /// Currency the bounds are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "MGA".to_string()
}

/// Structure of `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleFile {
    /// Schedule metadata.
    pub schedule: ScheduleMetadata,
    /// Brackets in ascending order; validated when the table is built.
    pub brackets: Vec<TaxBracket>,
}

/// The complete payroll configuration.
///
/// The bracket table inside has already passed validation, so holding a
/// `PayrollConfig` means the schedule is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: ScheduleMetadata,
    table: TaxBracketTable,
    schemes: ContributionSchemes,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: ScheduleMetadata,
        table: TaxBracketTable,
        schemes: ContributionSchemes,
    ) -> Self {
        Self {
            metadata,
            table,
            schemes,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the validated bracket table.
    pub fn table(&self) -> &TaxBracketTable {
        &self.table
    }

    /// Returns the contribution schemes.
    pub fn schemes(&self) -> &ContributionSchemes {
        &self.schemes
    }
}
