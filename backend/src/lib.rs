//! Expense Splitter Core - Rust Engine
//!
//! Pure settlement engine for group expense splitting: consumes a group's
//! members, expense log, and confirmed repayments; produces per-member net
//! balances and a transfer list that flattens them. No I/O, no storage, no
//! transport — those belong to the hosting service.
//!
//! # Architecture
//!
//! - **core**: fixed-point money handling
//! - **models**: domain types (Member, Expense, Payment)
//! - **split**: per-expense share allocation
//! - **balance**: balance calculator
//! - **settlement**: greedy transfer resolver
//! - **engine**: end-to-end composition + report fingerprinting
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Computation is deterministic (no clocks, no randomness, no floats)
//! 3. Shares of an expense always sum to the expense amount exactly
//! 4. Balances always sum to zero; unbalanced input fails, never settles
//!
//! The transfer resolver is a greedy heuristic: bounded at `members - 1`
//! transfers and deterministic, but not guaranteed to be the global
//! minimum transfer count (exact minimization is NP-hard).

// Module declarations
pub mod balance;
pub mod core;
pub mod engine;
pub mod models;
pub mod settlement;
pub mod split;

// Re-exports for convenience
pub use balance::{compute_balances, Balance, BalanceError};
pub use engine::{settle_group, EngineError, SettlementReport};
pub use models::{
    expense::Expense,
    member::{Member, MemberId},
    payment::Payment,
};
pub use self::core::money::{format_cents, parse_amount, Cents, MoneyError};
pub use settlement::{resolve, SettlementError, Transfer};
pub use split::{expense_shares, Share, SplitError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn expense_splitter_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::settle_group, m)?)?;
    Ok(())
}
