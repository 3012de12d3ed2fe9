//! Expense Splitter CLI
//!
//! Thin driver around the settlement engine: reads a group snapshot as
//! JSON (file path argument, or stdin when no argument is given), runs the
//! computation, and prints who owes whom.
//!
//! Snapshot format (amounts are decimal strings, converted to cents at
//! this boundary):
//!
//! ```json
//! {
//!   "members":  [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}],
//!   "expenses": [{"id": 1, "amount": "30.00", "payer_id": 1,
//!                 "participant_ids": [1, 2]}],
//!   "payments": [{"from_id": 2, "to_id": 1, "amount": "5.00"}]
//! }
//! ```
//!
//! Default output is a human-readable summary; `--json` prints the raw
//! report (amounts in integer cents) instead.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use serde::Deserialize;

use expense_splitter_core_rs::{
    format_cents, parse_amount, settle_group, Expense, Member, MemberId, Payment,
    SettlementReport,
};

#[derive(Debug, Deserialize)]
struct ExpenseInput {
    id: i64,
    amount: String,
    payer_id: MemberId,
    participant_ids: Vec<MemberId>,
}

#[derive(Debug, Deserialize)]
struct PaymentInput {
    from_id: MemberId,
    to_id: MemberId,
    amount: String,
}

#[derive(Debug, Deserialize)]
struct GroupSnapshot {
    members: Vec<Member>,
    expenses: Vec<ExpenseInput>,
    #[serde(default)]
    payments: Vec<PaymentInput>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut path: Option<String> = None;
    let mut as_json = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "--help" | "-h" => {
                println!("usage: expense-splitter [--json] [snapshot.json]");
                println!("Reads the snapshot from stdin when no path is given.");
                return Ok(());
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(format!("unexpected argument '{}'", arg)),
        }
    }

    let input = match path {
        Some(path) => {
            fs::read_to_string(&path).map_err(|err| format!("cannot read {}: {}", path, err))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("cannot read stdin: {}", err))?;
            buffer
        }
    };

    let snapshot: GroupSnapshot =
        serde_json::from_str(&input).map_err(|err| format!("invalid group snapshot: {}", err))?;

    let expenses = snapshot
        .expenses
        .into_iter()
        .map(|expense| {
            let cents = parse_amount(&expense.amount)
                .map_err(|err| format!("expense {}: {}", expense.id, err))?;
            Ok(Expense::new(
                expense.id,
                cents,
                expense.payer_id,
                expense.participant_ids,
            ))
        })
        .collect::<Result<Vec<_>, String>>()?;

    let payments = snapshot
        .payments
        .into_iter()
        .map(|payment| {
            let cents = parse_amount(&payment.amount).map_err(|err| err.to_string())?;
            Ok(Payment::new(payment.from_id, payment.to_id, cents))
        })
        .collect::<Result<Vec<_>, String>>()?;

    let report = settle_group(&snapshot.members, &expenses, &payments)
        .map_err(|err| err.to_string())?;

    if as_json {
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{}", rendered);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &SettlementReport) {
    println!("Balances:");
    for balance in &report.balances {
        let sign = if balance.balance > 0 { "+" } else { "" };
        println!(
            "  {} ({}): {}{}",
            balance.name,
            balance.member_id,
            sign,
            format_cents(balance.balance)
        );
    }

    if report.settlements.is_empty() {
        println!("Nothing to settle.");
        return;
    }

    println!("Settlements:");
    for transfer in &report.settlements {
        println!(
            "  {} -> {}: {}",
            transfer.from_name,
            transfer.to_name,
            format_cents(transfer.amount)
        );
    }
}
