//! Engine - end-to-end settlement computation
//!
//! Composes the balance calculator and the transfer resolver into the one
//! call a hosting service needs: group snapshot in, settlement report out.
//! The report is recomputed from scratch on every call; nothing is cached
//! or mutated incrementally, so concurrent invocations for different
//! groups share no state.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::balance::{compute_balances, Balance, BalanceError};
use crate::models::expense::Expense;
use crate::models::member::Member;
use crate::models::payment::Payment;
use crate::settlement::{resolve, SettlementError, Transfer};

/// Errors surfaced by a full settlement run
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller-supplied data failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] BalanceError),

    /// Post-computation invariant violated; signals an upstream defect
    #[error("consistency check failed: {0}")]
    Consistency(#[from] SettlementError),
}

/// Complete result of one settlement computation
///
/// # Example
/// ```
/// use expense_splitter_core_rs::{settle_group, Expense, Member};
///
/// let members = vec![
///     Member::new(1, "Alice".to_string()),
///     Member::new(2, "Bob".to_string()),
/// ];
/// let expenses = vec![Expense::new(1, 1000, 1, vec![1, 2])];
///
/// let report = settle_group(&members, &expenses, &[]).unwrap();
/// assert_eq!(report.balances[0].balance, 500);
/// assert_eq!(report.settlements.len(), 1);
/// assert_eq!(report.settlements[0].amount, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Net position per roster member, ascending by member id
    pub balances: Vec<Balance>,

    /// Proposed transfers that flatten all balances
    pub settlements: Vec<Transfer>,
}

impl SettlementReport {
    /// SHA-256 hex digest of the report's canonical JSON encoding.
    ///
    /// Two runs over identical input produce identical digests; tests use
    /// this to pin down bit-for-bit determinism the same way a caller can
    /// use it as a cheap change detector.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let encoded = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&encoded);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Compute balances and transfers for one group snapshot.
///
/// # Arguments
/// * `members` - Group roster
/// * `expenses` - Expense log
/// * `payments` - Confirmed out-of-band repayments (pass `&[]` if none)
///
/// # Returns
/// A [`SettlementReport`] with per-member balances and the transfer list.
///
/// # Errors
/// - [`EngineError::Validation`] for malformed input (non-positive amount,
///   empty participant list, unknown member reference, duplicates)
/// - [`EngineError::Consistency`] if the computed balances fail the
///   resolver's zero-sum gate (indicates a defect, not bad user data)
pub fn settle_group(
    members: &[Member],
    expenses: &[Expense],
    payments: &[Payment],
) -> Result<SettlementReport, EngineError> {
    let balances = compute_balances(members, expenses, payments)?;
    let settlements = resolve(&balances)?;

    Ok(SettlementReport {
        balances,
        settlements,
    })
}
