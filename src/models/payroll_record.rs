//! Persisted payroll record and its status lifecycle.
//!
//! A [`PayrollRecord`] is the unit the ledger stores: one calculation
//! result for one employee and pay period, together with a status that
//! moves through a fixed lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayrollCalculationResult;

/// The lifecycle status of a payroll record.
///
/// Valid transitions are `pending -> processed -> paid`, with a side
/// transition to `cancelled` from `pending` or `processed`. `paid` and
/// `cancelled` are terminal.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollStatus;
///
/// assert!(PayrollStatus::Pending.can_transition_to(PayrollStatus::Processed));
/// assert!(!PayrollStatus::Paid.can_transition_to(PayrollStatus::Cancelled));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Staged but not yet processed.
    Pending,
    /// Calculation committed; awaiting payment.
    Processed,
    /// Payment disbursed.
    Paid,
    /// Voided; the period may be processed again.
    Cancelled,
}

impl PayrollStatus {
    /// Returns whether the transition from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: PayrollStatus) -> bool {
        matches!(
            (self, next),
            (PayrollStatus::Pending, PayrollStatus::Processed)
                | (PayrollStatus::Processed, PayrollStatus::Paid)
                | (PayrollStatus::Pending, PayrollStatus::Cancelled)
                | (PayrollStatus::Processed, PayrollStatus::Cancelled)
        )
    }

    /// Returns whether this status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, PayrollStatus::Paid | PayrollStatus::Cancelled)
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PayrollStatus::Pending => "pending",
            PayrollStatus::Processed => "processed",
            PayrollStatus::Paid => "paid",
            PayrollStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// A stored payroll record: one calculation result plus its lifecycle state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// Current lifecycle status.
    pub status: PayrollStatus,
    /// Free-form operator notes attached at processing time.
    pub notes: Option<String>,
    /// When this record was first created.
    pub created_at: DateTime<Utc>,
    /// The calculation result this record stores.
    pub result: PayrollCalculationResult,
}

impl PayrollRecord {
    /// Creates a new record with a fresh ID and the current timestamp.
    pub fn new(
        status: PayrollStatus,
        result: PayrollCalculationResult,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            notes,
            created_at: Utc::now(),
            result,
        }
    }

    /// Moves this record to `next`, enforcing the status lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidStatusTransition`] if the lifecycle
    /// does not permit the move.
    pub fn transition_to(&mut self, next: PayrollStatus) -> PayrollResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(PayrollError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
