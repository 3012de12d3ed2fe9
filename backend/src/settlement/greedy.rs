//! Greedy transfer resolver
//!
//! Matches the largest outstanding debt against the largest outstanding
//! credit until every position is flat. Each round fully zeroes at least
//! one party, so the loop terminates with at most `members - 1` transfers.
//!
//! This greedy matching does **not** guarantee the globally minimal number
//! of transfers (exact minimization is NP-hard); it is the standard
//! practical heuristic, bounded and deterministic, which is what small
//! groups need. Ties on amount break toward the smaller member id so the
//! output is reproducible and testable.
//!
//! CRITICAL: All money values are i64 (cents)

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::balance::Balance;
use crate::core::money::Cents;
use crate::models::member::MemberId;

/// Errors that can occur during transfer resolution
#[derive(Debug, Error, PartialEq)]
pub enum SettlementError {
    #[error("balances sum to {residual}, beyond the rounding tolerance of {tolerance}")]
    UnbalancedLedger { residual: Cents, tolerance: Cents },
}

/// A proposed payment from one member to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Paying member
    pub from_id: MemberId,

    /// Paying member's display name
    pub from_name: String,

    /// Receiving member
    pub to_id: MemberId,

    /// Receiving member's display name
    pub to_name: String,

    /// Transfer amount (i64 cents, always positive)
    pub amount: Cents,
}

/// One side of an open position while matching runs.
///
/// Heap order: larger outstanding amount first, then smaller member id.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Party {
    amount: Cents,
    member_id: MemberId,
    name: String,
}

impl Ord for Party {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.member_id.cmp(&self.member_id))
    }
}

impl PartialOrd for Party {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Resolve balances into a transfer list that flattens every position.
///
/// # Arguments
/// * `balances` - Net positions, e.g. from [`crate::balance::compute_balances`]
///
/// # Returns
/// Transfers in emission order. Applying them all (each one moves `from`
/// up by its amount and `to` down) brings every balance to zero.
///
/// # Errors
/// [`SettlementError::UnbalancedLedger`] if the balances sum beyond one
/// cent per member. A balanced expense log can never trip this; it signals
/// an upstream data or logic defect and is not retryable.
///
/// # Example
/// ```
/// use expense_splitter_core_rs::{resolve, Balance};
///
/// let balances = vec![
///     Balance { member_id: 1, name: "Alice".to_string(), balance: 2000 },
///     Balance { member_id: 2, name: "Bob".to_string(), balance: -1000 },
///     Balance { member_id: 3, name: "Carol".to_string(), balance: -1000 },
/// ];
///
/// let transfers = resolve(&balances).unwrap();
/// assert_eq!(transfers.len(), 2);
/// assert_eq!(transfers[0].from_id, 2); // tie on 10.00 debt: lower id first
/// assert_eq!(transfers[1].from_id, 3);
/// assert!(transfers.iter().all(|t| t.to_id == 1));
/// ```
pub fn resolve(balances: &[Balance]) -> Result<Vec<Transfer>, SettlementError> {
    let residual: Cents = balances.iter().map(|b| b.balance).sum();
    let tolerance = balances.len() as Cents;
    if residual.abs() > tolerance {
        return Err(SettlementError::UnbalancedLedger {
            residual,
            tolerance,
        });
    }

    let mut debtors: BinaryHeap<Party> = BinaryHeap::new();
    let mut creditors: BinaryHeap<Party> = BinaryHeap::new();

    for balance in balances {
        match balance.balance.cmp(&0) {
            Ordering::Less => debtors.push(Party {
                amount: -balance.balance,
                member_id: balance.member_id,
                name: balance.name.clone(),
            }),
            Ordering::Greater => creditors.push(Party {
                amount: balance.balance,
                member_id: balance.member_id,
                name: balance.name.clone(),
            }),
            Ordering::Equal => {}
        }
    }

    let mut transfers = Vec::new();

    // Parties re-enter their heap only while still owing/owed, so every
    // round retires at least one of the two.
    while let (Some(mut debtor), Some(mut creditor)) = (debtors.pop(), creditors.pop()) {
        let amount = debtor.amount.min(creditor.amount);

        transfers.push(Transfer {
            from_id: debtor.member_id,
            from_name: debtor.name.clone(),
            to_id: creditor.member_id,
            to_name: creditor.name.clone(),
            amount,
        });

        debtor.amount -= amount;
        creditor.amount -= amount;

        if debtor.amount > 0 {
            debtors.push(debtor);
        }
        if creditor.amount > 0 {
            creditors.push(creditor);
        }
    }

    // A sub-tolerance residual leaves dust stranded on one side; it is
    // dropped here, never emitted as a transfer.
    Ok(transfers)
}
