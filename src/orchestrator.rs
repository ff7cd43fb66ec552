//! Batch payroll orchestration.
//!
//! The [`PayrollOrchestrator`] drives the calculation pipeline across a
//! batch of employees for one pay period, in two modes: *preview* runs the
//! pure pipeline and persists nothing, *process* runs the same pipeline
//! and commits one ledger record per employee. Both modes share one
//! calculation path, so their numbers can never diverge.
//!
//! Batches have partial-failure semantics: per-employee errors are
//! collected alongside successes instead of aborting the run. Only batch
//! validation (a bad period, an empty or duplicated batch, a malformed
//! salary structure) fails the whole call.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::calculation::{PayrollInput, calculate_payroll};
use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::ledger::{PayrollLedger, ProcessReceipt};
use crate::models::{PayPeriod, PayrollCalculationResult};

/// The outcome of a preview run: results and errors keyed by employee ID.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOutcome {
    /// Successful calculations.
    pub results: BTreeMap<String, PayrollCalculationResult>,
    /// Employees whose calculation failed.
    pub errors: BTreeMap<String, PayrollError>,
}

/// The outcome of a process run: receipts and errors keyed by employee ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    /// Employees whose record was committed.
    pub processed: BTreeMap<String, ProcessReceipt>,
    /// Employees whose calculation or commit failed.
    pub errors: BTreeMap<String, PayrollError>,
}

/// Drives payroll calculation and persistence across employee batches.
#[derive(Debug, Clone)]
pub struct PayrollOrchestrator {
    policy: Arc<PayrollPolicy>,
    ledger: Arc<PayrollLedger>,
}

impl PayrollOrchestrator {
    /// Creates an orchestrator with its own empty ledger.
    pub fn new(policy: PayrollPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
            ledger: Arc::new(PayrollLedger::new()),
        }
    }

    /// Creates an orchestrator over an existing ledger.
    pub fn with_ledger(policy: PayrollPolicy, ledger: Arc<PayrollLedger>) -> Self {
        Self {
            policy: Arc::new(policy),
            ledger,
        }
    }

    /// Returns the policy in force.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns the ledger of persisted payroll records.
    pub fn ledger(&self) -> &PayrollLedger {
        &self.ledger
    }

    /// Validates the batch as a whole before any calculation runs.
    fn validate_batch(&self, batch: &[PayrollInput], period: &PayPeriod) -> PayrollResult<()> {
        period.validate()?;

        if batch.is_empty() {
            return Err(PayrollError::EmptyBatch);
        }

        let mut seen = HashSet::new();
        for input in batch {
            if !seen.insert(input.employee.id.as_str()) {
                return Err(PayrollError::DuplicateEmployee {
                    employee_id: input.employee.id.clone(),
                });
            }
            // A present but malformed structure poisons the whole batch; a
            // missing one is reported per employee during calculation.
            if let Some(salary) = &input.employee.salary_structure {
                salary.validate(&input.employee.id)?;
            }
        }

        Ok(())
    }

    /// Calculates payroll for every employee in the batch without
    /// persisting anything.
    ///
    /// # Errors
    ///
    /// Returns a batch validation error if the period is invalid, the
    /// batch is empty or contains duplicate employees, or any present
    /// salary structure is malformed. Per-employee failures land in the
    /// outcome's error map instead.
    pub fn preview(
        &self,
        batch: &[PayrollInput],
        period: &PayPeriod,
    ) -> PayrollResult<PreviewOutcome> {
        self.validate_batch(batch, period)?;

        let mut outcome = PreviewOutcome {
            results: BTreeMap::new(),
            errors: BTreeMap::new(),
        };
        for input in batch {
            let employee_id = input.employee.id.clone();
            match calculate_payroll(input, period, &self.policy) {
                Ok(result) => {
                    outcome.results.insert(employee_id, result);
                }
                Err(err) => {
                    outcome.errors.insert(employee_id, err);
                }
            }
        }
        Ok(outcome)
    }

    /// Calculates payroll for every employee in the batch and commits a
    /// processed ledger record per success.
    ///
    /// Each employee's persistence is independent: a duplicate period or
    /// calculation failure for one employee never rolls back the others.
    ///
    /// # Errors
    ///
    /// Batch validation errors abort the whole call, exactly as in
    /// [`preview`](Self::preview). Everything else is per-employee.
    pub fn process(
        &self,
        batch: &[PayrollInput],
        period: &PayPeriod,
        notes: Option<&str>,
    ) -> PayrollResult<ProcessOutcome> {
        self.validate_batch(batch, period)?;

        let mut outcome = ProcessOutcome {
            processed: BTreeMap::new(),
            errors: BTreeMap::new(),
        };
        for input in batch {
            let employee_id = input.employee.id.clone();
            let committed = calculate_payroll(input, period, &self.policy).and_then(|result| {
                self.ledger
                    .commit_processed(result, notes.map(str::to_string))
            });
            match committed {
                Ok(receipt) => {
                    outcome.processed.insert(employee_id, receipt);
                }
                Err(err) => {
                    outcome.errors.insert(employee_id, err);
                }
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, PayrollStatus, SalaryStructure};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_january_period() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2026-01-01"),
            end_date: make_date("2026-01-31"),
            holidays: vec![],
        }
    }

    fn create_input(employee_id: &str) -> PayrollInput {
        PayrollInput {
            employee: Employee {
                id: employee_id.to_string(),
                name: format!("Employee {}", employee_id),
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

    fn input_without_salary(employee_id: &str) -> PayrollInput {
        let mut input = create_input(employee_id);
        input.employee.salary_structure = None;
        input
    }

    // ==========================================================================
    // PO-001: preview computes every employee and persists nothing
    // ==========================================================================
    #[test]
    fn test_po_001_preview_is_pure() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let batch = vec![create_input("emp_001"), create_input("emp_002")];

        let outcome = orchestrator
            .preview(&batch, &create_january_period())
            .unwrap();
        assert_eq!(outcome.results.len(), 2);
        assert!(outcome.errors.is_empty());
        assert!(orchestrator.ledger().is_empty());
    }

    // ==========================================================================
    // PO-002: a per-employee failure never fails the batch
    // ==========================================================================
    #[test]
    fn test_po_002_partial_failure() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let batch = vec![create_input("emp_001"), input_without_salary("emp_002")];

        let outcome = orchestrator
            .preview(&batch, &create_january_period())
            .unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.results.contains_key("emp_001"));
        assert_eq!(
            outcome.errors.get("emp_002"),
            Some(&PayrollError::MissingSalaryStructure {
                employee_id: "emp_002".to_string(),
            })
        );
    }

    // ==========================================================================
    // PO-003: process commits one processed record per success
    // ==========================================================================
    #[test]
    fn test_po_003_process_commits_records() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let period = create_january_period();
        let batch = vec![create_input("emp_001"), create_input("emp_002")];

        let outcome = orchestrator
            .process(&batch, &period, Some("January run"))
            .unwrap();
        assert_eq!(outcome.processed.len(), 2);
        assert!(outcome.errors.is_empty());

        let record = orchestrator.ledger().get("emp_001", &period).unwrap();
        assert_eq!(record.status, PayrollStatus::Processed);
        assert_eq!(record.notes.as_deref(), Some("January run"));
        assert_eq!(orchestrator.ledger().len(), 2);
    }

    // ==========================================================================
    // PO-004: processing the same period twice rejects per employee
    // ==========================================================================
    #[test]
    fn test_po_004_process_twice_is_idempotent() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let period = create_january_period();
        let batch = vec![create_input("emp_001")];

        orchestrator.process(&batch, &period, None).unwrap();
        let second = orchestrator.process(&batch, &period, None).unwrap();

        assert!(second.processed.is_empty());
        assert_eq!(
            second.errors.get("emp_001"),
            Some(&PayrollError::DuplicatePeriod {
                employee_id: "emp_001".to_string(),
                period_start: period.start_date,
                period_end: period.end_date,
            })
        );
        assert_eq!(orchestrator.ledger().len(), 1);
    }

    // ==========================================================================
    // PO-005: preview and process agree on the numbers
    // ==========================================================================
    #[test]
    fn test_po_005_preview_and_process_agree() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let period = create_january_period();
        let batch = vec![create_input("emp_001")];

        let preview = orchestrator.preview(&batch, &period).unwrap();
        orchestrator.process(&batch, &period, None).unwrap();

        let previewed = &preview.results["emp_001"].calculations;
        let committed = orchestrator.ledger().get("emp_001", &period).unwrap();
        assert_eq!(previewed, &committed.result.calculations);
    }

    #[test]
    fn test_empty_batch_rejected() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let err = orchestrator
            .preview(&[], &create_january_period())
            .unwrap_err();
        assert_eq!(err, PayrollError::EmptyBatch);
        assert!(err.is_batch_validation());
    }

    #[test]
    fn test_invalid_period_rejected() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let period = PayPeriod {
            start_date: make_date("2026-01-31"),
            end_date: make_date("2026-01-01"),
            holidays: vec![],
        };
        let err = orchestrator
            .preview(&[create_input("emp_001")], &period)
            .unwrap_err();
        assert!(matches!(err, PayrollError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_duplicate_employee_rejected() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let batch = vec![create_input("emp_001"), create_input("emp_001")];
        let err = orchestrator
            .preview(&batch, &create_january_period())
            .unwrap_err();
        assert_eq!(
            err,
            PayrollError::DuplicateEmployee {
                employee_id: "emp_001".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_salary_fails_whole_batch() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let mut bad = create_input("emp_002");
        bad.employee.salary_structure = Some(SalaryStructure {
            basic_salary: dec("-1"),
            allowances: Decimal::ZERO,
            standard_deductions: Decimal::ZERO,
        });
        let batch = vec![create_input("emp_001"), bad];

        let err = orchestrator
            .process(&batch, &create_january_period(), None)
            .unwrap_err();
        assert!(matches!(err, PayrollError::InvalidSalaryStructure { .. }));
        assert!(err.is_batch_validation());
        // Nothing was committed for anyone.
        assert!(orchestrator.ledger().is_empty());
    }

    #[test]
    fn test_process_partial_failure_commits_the_rest() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let period = create_january_period();
        let batch = vec![create_input("emp_001"), input_without_salary("emp_002")];

        let outcome = orchestrator.process(&batch, &period, None).unwrap();
        assert_eq!(outcome.processed.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(orchestrator.ledger().len(), 1);
        assert!(orchestrator.ledger().get("emp_001", &period).is_some());
        assert!(orchestrator.ledger().get("emp_002", &period).is_none());
    }

    #[test]
    fn test_cancelled_record_frees_the_period() {
        let orchestrator = PayrollOrchestrator::new(PayrollPolicy::default());
        let period = create_january_period();
        let batch = vec![create_input("emp_001")];

        orchestrator.process(&batch, &period, None).unwrap();
        orchestrator.ledger().cancel("emp_001", &period).unwrap();

        let rerun = orchestrator.process(&batch, &period, None).unwrap();
        assert_eq!(rerun.processed.len(), 1);
        assert!(rerun.errors.is_empty());
    }

    #[test]
    fn test_with_ledger_shares_records() {
        let ledger = Arc::new(PayrollLedger::new());
        let period = create_january_period();

        let first =
            PayrollOrchestrator::with_ledger(PayrollPolicy::default(), Arc::clone(&ledger));
        first
            .process(&[create_input("emp_001")], &period, None)
            .unwrap();

        // A second orchestrator over the same ledger sees the record.
        let second = PayrollOrchestrator::with_ledger(PayrollPolicy::default(), ledger);
        let outcome = second
            .process(&[create_input("emp_001")], &period, None)
            .unwrap();
        assert!(matches!(
            outcome.errors.get("emp_001"),
            Some(PayrollError::DuplicatePeriod { .. })
        ));
    }
}
