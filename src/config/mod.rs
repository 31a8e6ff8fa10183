//! Configuration loading and management for the payroll engine.
//!
//! This module loads the IRSA bracket schedule and the CNAPS/OSTIE
//! contribution schemes from YAML files, or provides the built-in
//! Madagascar 2024 defaults.
//!
//! # Example
//!
//! ```no_run
//! use irsa_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/irsa_2024").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, ScheduleFile, ScheduleMetadata};
