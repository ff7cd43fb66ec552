//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the payroll policy from a
//! YAML file: weekend days, the late check-in cutoff, the half-day
//! threshold, and leave allowance defaults.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Weekend days: {:?}", loader.policy().weekend());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{LeaveRounding, PayrollPolicy, PolicyDocument};
