//! Payroll Calculation Engine
//!
//! This crate calculates employee payroll for a pay period from attendance
//! records, approved leave, and salary structures, and persists processed
//! runs as payroll records with a managed status lifecycle.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod orchestrator;
