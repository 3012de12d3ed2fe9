//! Settlement Module
//!
//! Resolves net balances into a concrete list of member-to-member
//! transfers. The resolver is pure: it reads a balance snapshot and emits
//! transfers; recording who actually paid whom is the collaborator layer's
//! problem (see [`crate::models::payment`] for how confirmed repayments
//! feed back in).
//!
//! # Critical Invariants
//!
//! 1. **Consistency gate**: balances that do not sum to zero (beyond one
//!    cent per member of rounding tolerance) are rejected outright — an
//!    unbalanced transfer list is never produced.
//! 2. **Completeness**: applying every emitted transfer flattens every
//!    balance to exactly zero (modulo sub-tolerance dust, which is dropped).
//! 3. **Determinism**: identical balances produce identical transfers, in
//!    identical order.

pub mod greedy;

// Re-export public API
pub use greedy::{resolve, SettlementError, Transfer};
