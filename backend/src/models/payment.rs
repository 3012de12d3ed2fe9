//! Payment model
//!
//! A confirmed out-of-band repayment between two members: `from` handed
//! `amount` to `to` outside the expense log (bank transfer, cash). Confirmed
//! payments shrink both members' outstanding positions before transfers are
//! resolved. The confirmation workflow itself (slip upload, approval) lives
//! in the collaborator layer; the engine only sees the settled fact.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

use crate::core::money::Cents;
use crate::models::member::MemberId;

/// A confirmed repayment from one member to another
///
/// # Example
/// ```
/// use expense_splitter_core_rs::Payment;
///
/// // Bob (id 2) already paid Alice (id 1) 10.00
/// let payment = Payment::new(2, 1, 1000);
/// assert_eq!(payment.from_id(), 2);
/// assert_eq!(payment.to_id(), 1);
/// assert_eq!(payment.amount(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Member who paid
    from_id: MemberId,

    /// Member who received the money
    to_id: MemberId,

    /// Amount handed over (i64 cents)
    amount: Cents,
}

impl Payment {
    /// Create a new confirmed payment
    pub fn new(from_id: MemberId, to_id: MemberId, amount: Cents) -> Self {
        Self {
            from_id,
            to_id,
            amount,
        }
    }

    /// Get the paying member's identifier
    pub fn from_id(&self) -> MemberId {
        self.from_id
    }

    /// Get the receiving member's identifier
    pub fn to_id(&self) -> MemberId {
        self.to_id
    }

    /// Get the payment amount (i64 cents)
    pub fn amount(&self) -> Cents {
        self.amount
    }
}
