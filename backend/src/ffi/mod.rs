//! FFI boundary (PyO3)
//!
//! Minimal Python surface: one function that takes the group snapshot as
//! plain lists of dicts and returns the settlement report as a dict. The
//! hosting service (auth, storage, transport) stays on the Python side;
//! the engine stays pure.

pub mod types;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine;

/// Compute balances and settlement transfers for one group.
///
/// # Arguments (Python)
/// * `members` - list of `{id, name}`
/// * `expenses` - list of `{id, amount, payer_id, participant_ids}`,
///   amounts in integer cents
/// * `payments` - optional list of `{from_id, to_id, amount}` confirmed
///   repayments
///
/// # Returns (Python)
/// `{"balances": [...], "settlements": [...], "fingerprint": "..."}`
///
/// Raises `ValueError` for malformed input or a consistency violation.
#[pyfunction]
#[pyo3(signature = (members, expenses, payments = None))]
pub fn settle_group(
    py: Python<'_>,
    members: &Bound<'_, PyList>,
    expenses: &Bound<'_, PyList>,
    payments: Option<&Bound<'_, PyList>>,
) -> PyResult<Py<PyDict>> {
    let members = types::parse_dict_list(members, types::parse_member)?;
    let expenses = types::parse_dict_list(expenses, types::parse_expense)?;
    let payments = match payments {
        Some(list) => types::parse_dict_list(list, types::parse_payment)?,
        None => Vec::new(),
    };

    let report = engine::settle_group(&members, &expenses, &payments)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    let fingerprint = report
        .fingerprint()
        .map_err(|err| PyValueError::new_err(err.to_string()))?;

    let balances = PyList::empty_bound(py);
    for balance in &report.balances {
        balances.append(types::balance_to_dict(py, balance)?)?;
    }

    let settlements = PyList::empty_bound(py);
    for transfer in &report.settlements {
        settlements.append(types::transfer_to_dict(py, transfer)?)?;
    }

    let result = PyDict::new_bound(py);
    result.set_item("balances", balances)?;
    result.set_item("settlements", settlements)?;
    result.set_item("fingerprint", fingerprint)?;
    Ok(result.unbind())
}
