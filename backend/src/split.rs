//! Share allocation
//!
//! Splits an expense amount equally across its participants in minor units.
//! Integer division leaves a remainder of up to `participants - 1` cents;
//! each of the first `remainder` participants (in the caller's input order)
//! absorbs one extra cent, so a 3-way split of 10.01 yields
//! 3.34 / 3.34 / 3.33.
//!
//! # Critical Invariants
//!
//! 1. **Conservation**: the shares of an expense sum to the expense amount
//!    exactly, in cents. No drift, ever.
//! 2. **Determinism**: identical input order produces identical shares.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::money::Cents;
use crate::models::expense::Expense;
use crate::models::member::MemberId;

/// Errors that can occur when allocating shares
#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("expense {expense_id} has non-positive amount {amount}")]
    NonPositiveAmount { expense_id: i64, amount: Cents },

    #[error("expense {expense_id} has no participants")]
    NoParticipants { expense_id: i64 },

    #[error("expense {expense_id} lists participant {member_id} more than once")]
    DuplicateParticipant { expense_id: i64, member_id: MemberId },
}

/// One participant's share of a single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Participant owing this share
    pub member_id: MemberId,

    /// Share amount (i64 cents)
    pub amount: Cents,
}

/// Allocate an expense's amount across its participants.
///
/// # Returns
/// One [`Share`] per participant, in the expense's input order.
///
/// # Errors
/// - [`SplitError::NonPositiveAmount`] if the amount is zero or negative
/// - [`SplitError::NoParticipants`] if the participant list is empty
/// - [`SplitError::DuplicateParticipant`] if a member is listed twice
///
/// # Example
/// ```
/// use expense_splitter_core_rs::{expense_shares, Expense};
///
/// let expense = Expense::new(1, 1001, 1, vec![1, 2, 3]);
/// let shares = expense_shares(&expense).unwrap();
///
/// let amounts: Vec<i64> = shares.iter().map(|s| s.amount).collect();
/// assert_eq!(amounts, vec![334, 334, 333]);
/// assert_eq!(amounts.iter().sum::<i64>(), 1001);
/// ```
pub fn expense_shares(expense: &Expense) -> Result<Vec<Share>, SplitError> {
    let amount = expense.amount();
    if amount <= 0 {
        return Err(SplitError::NonPositiveAmount {
            expense_id: expense.id(),
            amount,
        });
    }

    let participants = expense.participants();
    if participants.is_empty() {
        return Err(SplitError::NoParticipants {
            expense_id: expense.id(),
        });
    }

    let mut seen = std::collections::HashSet::with_capacity(participants.len());
    for &member_id in participants {
        if !seen.insert(member_id) {
            return Err(SplitError::DuplicateParticipant {
                expense_id: expense.id(),
                member_id,
            });
        }
    }

    let count = participants.len() as Cents;
    let base = amount / count;
    let remainder = amount % count;

    let shares = participants
        .iter()
        .enumerate()
        .map(|(index, &member_id)| Share {
            member_id,
            amount: if (index as Cents) < remainder {
                base + 1
            } else {
                base
            },
        })
        .collect();

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split_has_no_remainder() {
        let expense = Expense::new(1, 3000, 1, vec![1, 2, 3]);
        let shares = expense_shares(&expense).unwrap();

        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|s| s.amount == 1000));
    }

    #[test]
    fn test_remainder_lands_on_earliest_participants() {
        // 10.00 five ways: 2.00 each; 10.02 five ways: first two get 2.01
        let expense = Expense::new(1, 1002, 9, vec![4, 5, 6, 7, 8]);
        let shares = expense_shares(&expense).unwrap();

        let amounts: Vec<Cents> = shares.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![201, 201, 200, 200, 200]);
    }

    #[test]
    fn test_single_participant_takes_everything() {
        let expense = Expense::new(1, 777, 1, vec![2]);
        let shares = expense_shares(&expense).unwrap();

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].member_id, 2);
        assert_eq!(shares[0].amount, 777);
    }

    #[test]
    fn test_conservation_across_awkward_amounts() {
        for amount in [1, 2, 99, 100, 101, 1001, 9999] {
            for count in 1..=6 {
                let participants: Vec<MemberId> = (1..=count).collect();
                let expense = Expense::new(1, amount, 1, participants);
                let shares = expense_shares(&expense).unwrap();
                let total: Cents = shares.iter().map(|s| s.amount).sum();
                assert_eq!(total, amount, "amount {} over {} people", amount, count);
            }
        }
    }

    #[test]
    fn test_rejects_zero_and_negative_amounts() {
        let zero = Expense::new(3, 0, 1, vec![1, 2]);
        assert_eq!(
            expense_shares(&zero),
            Err(SplitError::NonPositiveAmount {
                expense_id: 3,
                amount: 0
            })
        );

        let negative = Expense::new(4, -500, 1, vec![1, 2]);
        assert_eq!(
            expense_shares(&negative),
            Err(SplitError::NonPositiveAmount {
                expense_id: 4,
                amount: -500
            })
        );
    }

    #[test]
    fn test_rejects_empty_participants() {
        let expense = Expense::new(5, 1000, 1, vec![]);
        assert_eq!(
            expense_shares(&expense),
            Err(SplitError::NoParticipants { expense_id: 5 })
        );
    }

    #[test]
    fn test_rejects_duplicate_participant() {
        let expense = Expense::new(6, 1000, 1, vec![1, 2, 1]);
        assert_eq!(
            expense_shares(&expense),
            Err(SplitError::DuplicateParticipant {
                expense_id: 6,
                member_id: 1
            })
        );
    }
}
