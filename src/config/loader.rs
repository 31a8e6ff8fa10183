//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the IRSA
//! schedule and contribution schemes from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::calculation::{default_contribution_schemes, get_bracket_table};
use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionSchemes, TaxBracketTable};

use super::types::{PayrollConfig, ScheduleFile, ScheduleMetadata};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/irsa_2024/
/// ├── schedule.yaml       # Schedule metadata and IRSA brackets
/// └── contributions.yaml  # CNAPS (pension) and OSTIE (health) schemes
/// ```
///
/// # Example
///
/// ```no_run
/// use irsa_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/irsa_2024").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// println!("Brackets: {}", loader.table().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or an out-of-range rate (`ConfigParseError`)
    /// - The brackets do not form a valid schedule (`InvalidBracketTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_file = Self::load_yaml::<ScheduleFile>(&path.join("schedule.yaml"))?;
        let table = TaxBracketTable::new(schedule_file.brackets)?;

        let schemes = Self::load_yaml::<ContributionSchemes>(&path.join("contributions.yaml"))?;
        Self::warn_inert_ceilings(&schemes);

        info!(
            path = %path.display(),
            schedule = %schedule_file.schedule.code,
            brackets = table.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(schedule_file.schedule, table, schemes),
        })
    }

    /// The built-in Madagascar 2024 configuration: IRSA 2024 brackets,
    /// CNAPS 1%/13% and OSTIE 1%/5%.
    pub fn builtin() -> Self {
        let metadata = ScheduleMetadata {
            code: "IRSA-2024".to_string(),
            name: "Impot sur les Revenus Salariaux et Assimiles 2024".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            currency: "MGA".to_string(),
        };

        Self {
            config: PayrollConfig::new(
                metadata,
                get_bracket_table(),
                default_contribution_schemes(),
            ),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn warn_inert_ceilings(schemes: &ContributionSchemes) {
        for scheme in schemes.as_array() {
            if let Some(ceiling) = scheme.ceiling {
                warn!(
                    scheme = %scheme.name,
                    ceiling,
                    "Contribution ceiling is configured but not applied"
                );
            }
        }
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }

    /// Returns the validated bracket table.
    pub fn table(&self) -> &TaxBracketTable {
        self.config.table()
    }

    /// Returns the contribution schemes.
    pub fn schemes(&self) -> &ContributionSchemes {
        self.config.schemes()
    }
}
