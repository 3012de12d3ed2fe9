//! Member model
//!
//! A member of an expense-sharing group. Members are opaque to the engine
//! beyond their identifier and display name, and are immutable for the
//! duration of a computation. Identifiers are assigned by the caller
//! (typically database row ids).

use serde::{Deserialize, Serialize};

/// Caller-assigned member identifier.
pub type MemberId = i64;

/// A group member
///
/// # Example
/// ```
/// use expense_splitter_core_rs::Member;
///
/// let member = Member::new(1, "Alice".to_string());
/// assert_eq!(member.id(), 1);
/// assert_eq!(member.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier within the group
    id: MemberId,

    /// Display name, carried through to balances and transfers
    name: String,
}

impl Member {
    /// Create a new member
    pub fn new(id: MemberId, name: String) -> Self {
        Self { id, name }
    }

    /// Get member identifier
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }
}
