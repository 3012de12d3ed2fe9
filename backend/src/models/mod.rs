//! Domain models for the expense splitter

pub mod expense;
pub mod member;
pub mod payment;

// Re-exports
pub use expense::Expense;
pub use member::{Member, MemberId};
pub use payment::Payment;
