//! Expense model
//!
//! Represents a single logged expense: one member paid an amount that a
//! list of participants share equally. The payer need not be a participant
//! (they may have paid purely on others' behalf).
//!
//! Constructors accept the caller's data as-is; referential and amount
//! validation happens in the balance calculator, which is the engine's
//! single fail-fast validation point.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

use crate::core::money::Cents;
use crate::models::member::MemberId;

/// A logged group expense
///
/// # Example
/// ```
/// use expense_splitter_core_rs::Expense;
///
/// // Alice (id 1) paid 30.00, split three ways with Bob and Carol
/// let expense = Expense::new(10, 3000, 1, vec![1, 2, 3]);
/// assert_eq!(expense.amount(), 3000);
/// assert_eq!(expense.participants(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Caller-assigned expense identifier
    id: i64,

    /// Expense amount (i64 cents)
    amount: Cents,

    /// Member who paid the full amount up front
    payer_id: MemberId,

    /// Members sharing the cost, in the order the caller listed them.
    /// Order matters: the rounding remainder lands on the earliest
    /// participants.
    #[serde(rename = "participant_ids")]
    participants: Vec<MemberId>,
}

impl Expense {
    /// Create a new expense
    ///
    /// # Arguments
    /// * `id` - Caller-assigned expense identifier
    /// * `amount` - Expense amount in cents
    /// * `payer_id` - Member who paid
    /// * `participants` - Members sharing the cost (input order preserved)
    pub fn new(id: i64, amount: Cents, payer_id: MemberId, participants: Vec<MemberId>) -> Self {
        Self {
            id,
            amount,
            payer_id,
            participants,
        }
    }

    /// Get expense identifier
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get expense amount (i64 cents)
    pub fn amount(&self) -> Cents {
        self.amount
    }

    /// Get the paying member's identifier
    pub fn payer_id(&self) -> MemberId {
        self.payer_id
    }

    /// Get the participant identifiers, in input order
    pub fn participants(&self) -> &[MemberId] {
        &self.participants
    }
}
