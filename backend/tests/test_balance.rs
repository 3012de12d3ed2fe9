//! Tests for the balance calculator
//!
//! CRITICAL: All money values are i64 (cents)

use expense_splitter_core_rs::{
    compute_balances, BalanceError, Expense, Member, Payment, SplitError,
};

fn abc() -> Vec<Member> {
    vec![
        Member::new(1, "Alice".to_string()),
        Member::new(2, "Bob".to_string()),
        Member::new(3, "Carol".to_string()),
    ]
}

#[test]
fn test_single_expense_three_way() {
    // Alice pays 30.00 for everyone: +20.00 / -10.00 / -10.00
    let expenses = vec![Expense::new(1, 3000, 1, vec![1, 2, 3])];
    let balances = compute_balances(&abc(), &expenses, &[]).unwrap();

    assert_eq!(balances[0].member_id, 1);
    assert_eq!(balances[0].name, "Alice");
    assert_eq!(balances[0].balance, 2000);
    assert_eq!(balances[1].balance, -1000);
    assert_eq!(balances[2].balance, -1000);
}

#[test]
fn test_mutual_expenses_cancel_out() {
    let members = vec![
        Member::new(1, "Alice".to_string()),
        Member::new(2, "Bob".to_string()),
    ];
    let expenses = vec![
        Expense::new(1, 1000, 1, vec![1, 2]),
        Expense::new(2, 1000, 2, vec![1, 2]),
    ];
    let balances = compute_balances(&members, &expenses, &[]).unwrap();

    assert!(balances.iter().all(|b| b.balance == 0));
}

#[test]
fn test_awkward_amount_balances_sum_to_zero() {
    // 10.01 three ways: Alice is owed 6.67, Bob owes 3.34, Carol owes 3.33
    let expenses = vec![Expense::new(1, 1001, 1, vec![1, 2, 3])];
    let balances = compute_balances(&abc(), &expenses, &[]).unwrap();

    assert_eq!(balances[0].balance, 667);
    assert_eq!(balances[1].balance, -334);
    assert_eq!(balances[2].balance, -333);
    assert_eq!(balances.iter().map(|b| b.balance).sum::<i64>(), 0);
}

#[test]
fn test_every_member_reported_even_at_zero() {
    let expenses = vec![Expense::new(1, 1000, 1, vec![1, 2])];
    let balances = compute_balances(&abc(), &expenses, &[]).unwrap();

    // Carol took no part but still shows up, flat
    assert_eq!(balances.len(), 3);
    assert_eq!(balances[2].member_id, 3);
    assert_eq!(balances[2].balance, 0);
}

#[test]
fn test_confirmed_payment_settles_debt() {
    let expenses = vec![Expense::new(1, 3000, 1, vec![1, 2, 3])];
    let payments = vec![Payment::new(2, 1, 1000)];
    let balances = compute_balances(&abc(), &expenses, &payments).unwrap();

    assert_eq!(balances[0].balance, 1000); // Alice now owed only by Carol
    assert_eq!(balances[1].balance, 0); // Bob square
    assert_eq!(balances[2].balance, -1000);
}

#[test]
fn test_overpayment_flips_the_direction() {
    let expenses = vec![Expense::new(1, 2000, 1, vec![1, 2])];
    let payments = vec![Payment::new(2, 1, 1500)];
    let balances = compute_balances(&abc(), &expenses, &payments).unwrap();

    // Bob owed 10.00 but paid 15.00; Alice now owes him 5.00
    assert_eq!(balances[0].balance, -500);
    assert_eq!(balances[1].balance, 500);
}

#[test]
fn test_empty_participants_fails_validation() {
    let expenses = vec![Expense::new(7, 1000, 1, vec![])];
    assert_eq!(
        compute_balances(&abc(), &expenses, &[]),
        Err(BalanceError::Split(SplitError::NoParticipants {
            expense_id: 7
        }))
    );
}

#[test]
fn test_unknown_payer_fails_validation() {
    let expenses = vec![Expense::new(7, 1000, 99, vec![1, 2])];
    assert_eq!(
        compute_balances(&abc(), &expenses, &[]),
        Err(BalanceError::UnknownPayer {
            expense_id: 7,
            payer_id: 99
        })
    );
}

#[test]
fn test_nothing_applied_on_validation_failure() {
    // Second expense is malformed: the whole computation fails, the valid
    // first expense is not silently kept
    let expenses = vec![
        Expense::new(1, 3000, 1, vec![1, 2, 3]),
        Expense::new(2, 1000, 99, vec![1]),
    ];
    assert!(compute_balances(&abc(), &expenses, &[]).is_err());
}
