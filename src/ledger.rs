//! Persisted payroll records with per-period idempotency.
//!
//! The [`PayrollLedger`] is the one shared mutable resource in the engine.
//! It stores at most one live [`PayrollRecord`] per (employee, period) key
//! and guards every write with an atomic check-and-insert, so concurrent
//! process calls for the same employee and period can never produce
//! duplicate records.

use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayPeriod, PayrollCalculationResult, PayrollRecord, PayrollStatus};

/// The uniqueness key: one live record per employee and period.
type PeriodKey = (String, NaiveDate, NaiveDate);

/// A confirmation of a ledger write, suitable for returning to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceipt {
    /// The ID of the record that was written or updated.
    pub record_id: Uuid,
    /// The record's status after the write.
    pub status: PayrollStatus,
}

/// Concurrent store of payroll records keyed by (employee, period).
///
/// Uniqueness invariant: at most one non-cancelled record per key. A
/// cancelled record does not block the period; committing over it replaces
/// it with a fresh record.
///
/// # Thread Safety
///
/// Backed by [`DashMap`]; every check-then-write goes through the entry
/// API so the check and the write are a single atomic step per key.
#[derive(Debug, Default)]
pub struct PayrollLedger {
    /// Records indexed by (employee_id, period_start, period_end).
    records: DashMap<PeriodKey, PayrollRecord>,
}

impl PayrollLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    fn key_for(result: &PayrollCalculationResult) -> PeriodKey {
        (
            result.employee_id.clone(),
            result.pay_period.start_date,
            result.pay_period.end_date,
        )
    }

    /// Commits a calculation result as a processed record.
    ///
    /// The write depends on what the key currently holds:
    ///
    /// - nothing: a new record is inserted with status `processed`.
    /// - a `cancelled` record: it is replaced by a fresh `processed` record.
    /// - a `pending` record: it is promoted in place, keeping its ID and
    ///   creation time but taking the new result and notes.
    /// - a `processed` or `paid` record: the write is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::DuplicatePeriod`] when a non-cancelled,
    /// already-processed record holds the key.
    pub fn commit_processed(
        &self,
        result: PayrollCalculationResult,
        notes: Option<String>,
    ) -> PayrollResult<ProcessReceipt> {
        let key = Self::key_for(&result);
        match self.records.entry(key) {
            Entry::Vacant(entry) => {
                let record = PayrollRecord::new(PayrollStatus::Processed, result, notes);
                let receipt = ProcessReceipt {
                    record_id: record.id,
                    status: record.status,
                };
                entry.insert(record);
                Ok(receipt)
            }
            Entry::Occupied(mut entry) => match entry.get().status {
                PayrollStatus::Cancelled => {
                    let record = PayrollRecord::new(PayrollStatus::Processed, result, notes);
                    let receipt = ProcessReceipt {
                        record_id: record.id,
                        status: record.status,
                    };
                    entry.insert(record);
                    Ok(receipt)
                }
                PayrollStatus::Pending => {
                    let record = entry.get_mut();
                    record.result = result;
                    record.notes = notes;
                    record.transition_to(PayrollStatus::Processed)?;
                    Ok(ProcessReceipt {
                        record_id: record.id,
                        status: record.status,
                    })
                }
                PayrollStatus::Processed | PayrollStatus::Paid => {
                    let record = entry.get();
                    Err(PayrollError::DuplicatePeriod {
                        employee_id: record.result.employee_id.clone(),
                        period_start: record.result.pay_period.start_date,
                        period_end: record.result.pay_period.end_date,
                    })
                }
            },
        }
    }

    /// Stages a calculation result as a pending record.
    ///
    /// Only an empty key or a cancelled record admits staging; any live
    /// record rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::DuplicatePeriod`] when a non-cancelled
    /// record holds the key.
    pub fn stage_pending(
        &self,
        result: PayrollCalculationResult,
        notes: Option<String>,
    ) -> PayrollResult<ProcessReceipt> {
        let key = Self::key_for(&result);
        match self.records.entry(key) {
            Entry::Vacant(entry) => {
                let record = PayrollRecord::new(PayrollStatus::Pending, result, notes);
                let receipt = ProcessReceipt {
                    record_id: record.id,
                    status: record.status,
                };
                entry.insert(record);
                Ok(receipt)
            }
            Entry::Occupied(mut entry) => {
                if entry.get().status == PayrollStatus::Cancelled {
                    let record = PayrollRecord::new(PayrollStatus::Pending, result, notes);
                    let receipt = ProcessReceipt {
                        record_id: record.id,
                        status: record.status,
                    };
                    entry.insert(record);
                    Ok(receipt)
                } else {
                    let record = entry.get();
                    Err(PayrollError::DuplicatePeriod {
                        employee_id: record.result.employee_id.clone(),
                        period_start: record.result.pay_period.start_date,
                        period_end: record.result.pay_period.end_date,
                    })
                }
            }
        }
    }

    /// Marks the record for this employee and period as paid.
    ///
    /// This transition belongs to the payment collaborator; the engine
    /// itself never calls it during processing.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::RecordNotFound`] if no record holds the key.
    /// - [`PayrollError::InvalidStatusTransition`] if the record is not
    ///   in the `processed` state.
    pub fn mark_paid(&self, employee_id: &str, period: &PayPeriod) -> PayrollResult<ProcessReceipt> {
        self.transition(employee_id, period, PayrollStatus::Paid)
    }

    /// Cancels the record for this employee and period.
    ///
    /// Only `pending` and `processed` records can be cancelled. A cancelled
    /// record frees the period for reprocessing.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::RecordNotFound`] if no record holds the key.
    /// - [`PayrollError::InvalidStatusTransition`] if the record is paid
    ///   or already cancelled.
    pub fn cancel(&self, employee_id: &str, period: &PayPeriod) -> PayrollResult<ProcessReceipt> {
        self.transition(employee_id, period, PayrollStatus::Cancelled)
    }

    fn transition(
        &self,
        employee_id: &str,
        period: &PayPeriod,
        next: PayrollStatus,
    ) -> PayrollResult<ProcessReceipt> {
        let key = (
            employee_id.to_string(),
            period.start_date,
            period.end_date,
        );
        let mut record = self
            .records
            .get_mut(&key)
            .ok_or_else(|| PayrollError::RecordNotFound {
                employee_id: employee_id.to_string(),
                period_start: period.start_date,
                period_end: period.end_date,
            })?;
        record.transition_to(next)?;
        Ok(ProcessReceipt {
            record_id: record.id,
            status: record.status,
        })
    }

    /// Retrieves a copy of the record for this employee and period.
    pub fn get(&self, employee_id: &str, period: &PayPeriod) -> Option<PayrollRecord> {
        let key = (
            employee_id.to_string(),
            period.start_date,
            period.end_date,
        );
        self.records.get(&key).map(|r| r.value().clone())
    }

    /// Returns copies of all stored records.
    pub fn records(&self) -> Vec<PayrollRecord> {
        self.records.iter().map(|r| r.value().clone()).collect()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
