//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the payroll
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollPolicy, PolicyDocument};

/// Loads and provides access to the payroll policy.
///
/// The `PolicyLoader` reads a YAML policy file and normalizes it into a
/// validated [`PayrollPolicy`].
///
/// # File Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Weekend days, late cutoff, thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml")?;
/// let policy = loader.policy();
/// println!("Late after: {}", policy.late_cutoff());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayrollPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The policy fails validation (unknown weekday names, non-positive
    ///   thresholds)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let document = Self::load_yaml::<PolicyDocument>(path)?;

        let policy =
            PayrollPolicy::from_document(document).map_err(|message| {
                PayrollError::ConfigParseError {
                    path: path.display().to_string(),
                    message,
                }
            })?;

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> PayrollPolicy {
        self.policy
    }
}
