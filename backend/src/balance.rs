//! Balance Calculator
//!
//! Turns a group's expense log into per-member net positions:
//! 1. Every roster member starts at zero.
//! 2. Per expense, the payer is credited the full amount and every
//!    participant is debited their share. Shares conserve the amount
//!    exactly (see [`crate::split`]), so each expense nets to zero.
//! 3. Confirmed repayments are applied last: the payer of the repayment
//!    moves toward zero, the recipient's credit shrinks by the same amount.
//!
//! # Critical Invariants
//!
//! 1. **Zero-sum**: output balances sum to exactly zero.
//! 2. **Fail fast**: any malformed expense or unknown member reference
//!    aborts the whole computation; no partial results.
//!
//! CRITICAL: All money values are i64 (cents)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::money::Cents;
use crate::models::expense::Expense;
use crate::models::member::{Member, MemberId};
use crate::models::payment::Payment;
use crate::split::{expense_shares, SplitError};

/// Errors that can occur while computing balances
#[derive(Debug, Error, PartialEq)]
pub enum BalanceError {
    #[error("member {member_id} appears in the roster more than once")]
    DuplicateMember { member_id: MemberId },

    #[error("expense {expense_id} was paid by unknown member {payer_id}")]
    UnknownPayer { expense_id: i64, payer_id: MemberId },

    #[error("expense {expense_id} includes unknown participant {member_id}")]
    UnknownParticipant { expense_id: i64, member_id: MemberId },

    #[error("payment references unknown member {member_id}")]
    UnknownPaymentMember { member_id: MemberId },

    #[error("payment from {from_id} to {to_id} has non-positive amount {amount}")]
    NonPositivePayment {
        from_id: MemberId,
        to_id: MemberId,
        amount: Cents,
    },

    #[error("invalid expense: {0}")]
    Split(#[from] SplitError),
}

/// A member's net position across all expenses
///
/// Positive = the group owes this member; negative = this member owes the
/// group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Member identifier
    pub member_id: MemberId,

    /// Member display name
    pub name: String,

    /// Net signed amount (i64 cents)
    pub balance: Cents,
}

/// Compute every member's net balance from the expense log.
///
/// # Arguments
/// * `members` - Group roster; every id referenced anywhere must be here
/// * `expenses` - Expense log in any order
/// * `payments` - Confirmed out-of-band repayments, applied after expenses
///
/// # Returns
/// One [`Balance`] per roster member (including members at zero), sorted
/// ascending by member id.
///
/// # Errors
/// Fails fast with [`BalanceError`] on the first malformed expense, unknown
/// member reference, or invalid payment; nothing is silently dropped.
///
/// # Example
/// ```
/// use expense_splitter_core_rs::{compute_balances, Expense, Member};
///
/// let members = vec![
///     Member::new(1, "Alice".to_string()),
///     Member::new(2, "Bob".to_string()),
///     Member::new(3, "Carol".to_string()),
/// ];
/// // Alice paid 30.00, split three ways
/// let expenses = vec![Expense::new(1, 3000, 1, vec![1, 2, 3])];
///
/// let balances = compute_balances(&members, &expenses, &[]).unwrap();
/// let amounts: Vec<i64> = balances.iter().map(|b| b.balance).collect();
/// assert_eq!(amounts, vec![2000, -1000, -1000]);
/// ```
pub fn compute_balances(
    members: &[Member],
    expenses: &[Expense],
    payments: &[Payment],
) -> Result<Vec<Balance>, BalanceError> {
    struct Account<'a> {
        name: &'a str,
        balance: Cents,
    }

    // BTreeMap keys double as the sorted output order.
    let mut ledger: BTreeMap<MemberId, Account<'_>> = BTreeMap::new();

    for member in members {
        let account = Account {
            name: member.name(),
            balance: 0,
        };
        if ledger.insert(member.id(), account).is_some() {
            return Err(BalanceError::DuplicateMember {
                member_id: member.id(),
            });
        }
    }

    for expense in expenses {
        let shares = expense_shares(expense)?;

        match ledger.get_mut(&expense.payer_id()) {
            Some(account) => account.balance += expense.amount(),
            None => {
                return Err(BalanceError::UnknownPayer {
                    expense_id: expense.id(),
                    payer_id: expense.payer_id(),
                })
            }
        }

        for share in &shares {
            match ledger.get_mut(&share.member_id) {
                Some(account) => account.balance -= share.amount,
                None => {
                    return Err(BalanceError::UnknownParticipant {
                        expense_id: expense.id(),
                        member_id: share.member_id,
                    })
                }
            }
        }
    }

    for payment in payments {
        if payment.amount() <= 0 {
            return Err(BalanceError::NonPositivePayment {
                from_id: payment.from_id(),
                to_id: payment.to_id(),
                amount: payment.amount(),
            });
        }

        match ledger.get_mut(&payment.from_id()) {
            Some(account) => account.balance += payment.amount(),
            None => {
                return Err(BalanceError::UnknownPaymentMember {
                    member_id: payment.from_id(),
                })
            }
        }
        match ledger.get_mut(&payment.to_id()) {
            Some(account) => account.balance -= payment.amount(),
            None => {
                return Err(BalanceError::UnknownPaymentMember {
                    member_id: payment.to_id(),
                })
            }
        }
    }

    let balances = ledger
        .into_iter()
        .map(|(member_id, account)| Balance {
            member_id,
            name: account.name.to_string(),
            balance: account.balance,
        })
        .collect();

    Ok(balances)
}
