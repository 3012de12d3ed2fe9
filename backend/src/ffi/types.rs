//! Type conversion utilities for FFI boundary
//!
//! Converts Python dicts/lists into domain types and engine results back
//! into Python structures. Amounts cross this boundary as integer minor
//! units (cents), never floats.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::balance::Balance;
use crate::models::{Expense, Member, Payment};
use crate::settlement::Transfer;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message.
fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

// ========================================================================
// Input Parsers
// ========================================================================

/// Convert a Python dict `{id, name}` to a Member
pub(crate) fn parse_member(dict: &Bound<'_, PyDict>) -> PyResult<Member> {
    let id: i64 = extract_required(dict, "id")?;
    let name: String = extract_required(dict, "name")?;
    Ok(Member::new(id, name))
}

/// Convert a Python dict `{id, amount, payer_id, participant_ids}` to an
/// Expense. `amount` is integer cents.
pub(crate) fn parse_expense(dict: &Bound<'_, PyDict>) -> PyResult<Expense> {
    let id: i64 = extract_required(dict, "id")?;
    let amount: i64 = extract_required(dict, "amount")?;
    let payer_id: i64 = extract_required(dict, "payer_id")?;
    let participant_ids: Vec<i64> = extract_required(dict, "participant_ids")?;
    Ok(Expense::new(id, amount, payer_id, participant_ids))
}

/// Convert a Python dict `{from_id, to_id, amount}` to a Payment
pub(crate) fn parse_payment(dict: &Bound<'_, PyDict>) -> PyResult<Payment> {
    let from_id: i64 = extract_required(dict, "from_id")?;
    let to_id: i64 = extract_required(dict, "to_id")?;
    let amount: i64 = extract_required(dict, "amount")?;
    Ok(Payment::new(from_id, to_id, amount))
}

/// Parse a Python list of dicts with the given item parser
pub(crate) fn parse_dict_list<T>(
    list: &Bound<'_, PyList>,
    parse: impl Fn(&Bound<'_, PyDict>) -> PyResult<T>,
) -> PyResult<Vec<T>> {
    let mut items = Vec::with_capacity(list.len());
    for item in list.iter() {
        let dict = item.downcast::<PyDict>()?;
        items.push(parse(dict)?);
    }
    Ok(items)
}

// ========================================================================
// Output Builders
// ========================================================================

/// Convert a Balance to a Python dict `{member_id, name, balance}`
pub(crate) fn balance_to_dict<'py>(
    py: Python<'py>,
    balance: &Balance,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("member_id", balance.member_id)?;
    dict.set_item("name", &balance.name)?;
    dict.set_item("balance", balance.balance)?;
    Ok(dict)
}

/// Convert a Transfer to a Python dict
/// `{from_id, from_name, to_id, to_name, amount}`
pub(crate) fn transfer_to_dict<'py>(
    py: Python<'py>,
    transfer: &Transfer,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("from_id", transfer.from_id)?;
    dict.set_item("from_name", &transfer.from_name)?;
    dict.set_item("to_id", transfer.to_id)?;
    dict.set_item("to_name", &transfer.to_name)?;
    dict.set_item("amount", transfer.amount)?;
    Ok(dict)
}
