//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::calculation::PayrollInput;
use crate::config::PayrollPolicy;
use crate::error::PayrollError;
use crate::orchestrator::PayrollOrchestrator;

/// Shared application state.
///
/// Holds the orchestrator (policy plus ledger) and the employee roster
/// the service resolves request IDs against.
#[derive(Clone)]
pub struct AppState {
    /// The orchestrator, shared so every handler sees one ledger.
    orchestrator: Arc<PayrollOrchestrator>,
    /// Employee payroll inputs keyed by employee ID.
    roster: Arc<HashMap<String, PayrollInput>>,
}

impl AppState {
    /// Creates a new application state from a policy and a roster.
    pub fn new(policy: PayrollPolicy, roster: HashMap<String, PayrollInput>) -> Self {
        Self {
            orchestrator: Arc::new(PayrollOrchestrator::new(policy)),
            roster: Arc::new(roster),
        }
    }

    /// Returns a reference to the orchestrator.
    pub fn orchestrator(&self) -> &PayrollOrchestrator {
        &self.orchestrator
    }

    /// Returns a reference to the employee roster.
    pub fn roster(&self) -> &HashMap<String, PayrollInput> {
        &self.roster
    }

    /// Resolves requested employee IDs against the roster.
    ///
    /// Returns the matched inputs in request order, plus an
    /// [`PayrollError::UnknownEmployee`] entry for each ID the roster
    /// does not contain. Unknown IDs do not fail the batch; they are
    /// reported alongside the per-employee results.
    pub fn resolve_batch(
        &self,
        employee_ids: &[String],
    ) -> (Vec<PayrollInput>, BTreeMap<String, PayrollError>) {
        let mut inputs = Vec::with_capacity(employee_ids.len());
        let mut unknown = BTreeMap::new();
        for id in employee_ids {
            match self.roster.get(id) {
                Some(input) => inputs.push(input.clone()),
                None => {
                    unknown.insert(
                        id.clone(),
                        PayrollError::UnknownEmployee {
                            employee_id: id.clone(),
                        },
                    );
                }
            }
        }
        (inputs, unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, SalaryStructure};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(id: &str) -> PayrollInput {
        PayrollInput {
            employee: Employee {
                id: id.to_string(),
                name: format!("Employee {}", id),
                salary_structure: Some(SalaryStructure {
                    basic_salary: dec("30000"),
                    allowances: dec("3000"),
                    standard_deductions: dec("500"),
                }),
                annual_leave_allowance: None,
            },
            attendance: vec![],
            leave: vec![],
        }
    }

    fn create_test_state() -> AppState {
        let mut roster = HashMap::new();
        roster.insert("emp_001".to_string(), create_test_input("emp_001"));
        roster.insert("emp_002".to_string(), create_test_input("emp_002"));
        AppState::new(PayrollPolicy::default(), roster)
    }

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_resolve_batch_all_known() {
        let state = create_test_state();

        let ids = vec!["emp_001".to_string(), "emp_002".to_string()];
        let (inputs, unknown) = state.resolve_batch(&ids);

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].employee.id, "emp_001");
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_resolve_batch_reports_unknown_ids() {
        let state = create_test_state();

        let ids = vec!["emp_001".to_string(), "emp_999".to_string()];
        let (inputs, unknown) = state.resolve_batch(&ids);

        assert_eq!(inputs.len(), 1);
        assert_eq!(unknown.len(), 1);
        assert_eq!(
            unknown.get("emp_999"),
            Some(&PayrollError::UnknownEmployee {
                employee_id: "emp_999".to_string()
            })
        );
    }

    #[test]
    fn test_clones_share_one_ledger() {
        let state = create_test_state();
        let clone = state.clone();

        assert!(std::ptr::eq(state.orchestrator(), clone.orchestrator()));
    }
}
