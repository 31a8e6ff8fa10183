//! Payroll engine for Madagascar salaries
//!
//! This crate computes IRSA (Impot sur les Revenus Salariaux et Assimiles)
//! with a progressive bracket schedule, derives CNAPS pension and OSTIE health
//! contributions, and composes them into a gross-to-net payroll breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
