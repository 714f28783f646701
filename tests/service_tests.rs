use bank_core::config::SeedProfile;
use bank_core::core::services::{LoanService, SummaryService, TransferService};
use bank_core::domain::{Account, Bank, Movement};
use bank_core::errors::{LoanError, TransferError};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn demo_bank() -> Bank {
    SeedProfile::default().into_bank()
}

#[test]
fn seeded_summaries_match_the_demo_dataset() {
    let mut bank = demo_bank();

    let jessica = bank
        .find_by_username("jd")
        .expect("seeded account")
        .clone();
    assert_close(SummaryService::total_deposits(&jessica), 16900.0);
    assert_close(SummaryService::total_withdrawals(&jessica), 5180.0);
    assert_close(jessica.balance, 11720.0);
    assert_close(SummaryService::total_interest(&jessica), 253.5);

    let steven_id = bank.find_by_username("stw").expect("seeded account").id;
    let steven = bank.account_mut(steven_id).expect("seeded account");
    let summary = SummaryService::summarize(steven);
    assert_close(summary.balance, 10.0);
    assert_close(summary.deposits_in - summary.withdrawals_out, summary.balance);
    // 50 * 0.7% = 0.35 is dropped by the per-deposit threshold
    assert_close(summary.interest, 6.58);
}

#[test]
fn transfer_between_seeded_accounts_grows_both_histories() {
    let mut bank = demo_bank();
    let sender_id = bank.find_by_username("jm").expect("sender").id;
    let sender_len = bank.find_by_username("jm").unwrap().movements.len();
    let recipient_len = bank.find_by_username("jd").unwrap().movements.len();

    TransferService::transfer(&mut bank, sender_id, "jd", 100.0).expect("transfer succeeds");

    let sender = bank.find_by_username("jm").unwrap();
    let recipient = bank.find_by_username("jd").unwrap();
    assert_eq!(sender.movements.len(), sender_len + 1);
    assert_eq!(recipient.movements.len(), recipient_len + 1);
    assert_close(sender.balance, 3740.0);
    assert_close(recipient.balance, 11820.0);
}

#[test]
fn rejected_transfers_leave_the_bank_untouched() {
    let mut bank = demo_bank();
    let sender_id = bank.find_by_username("stw").expect("sender").id;
    let before = bank.clone();

    // balance is 10; anything larger must fail closed
    assert_eq!(
        TransferService::transfer(&mut bank, sender_id, "jd", 5000.0),
        Err(TransferError::InsufficientFunds)
    );
    assert_eq!(
        TransferService::transfer(&mut bank, sender_id, "nobody", 5.0),
        Err(TransferError::RecipientNotFound("nobody".into()))
    );
    assert_eq!(
        TransferService::transfer(&mut bank, sender_id, "stw", 5.0),
        Err(TransferError::SelfTransfer)
    );

    for account in &before.accounts {
        let after = bank.find_by_username(&account.username).expect("still present");
        assert_eq!(after.movements, account.movements);
    }
}

#[test]
fn loan_rule_is_a_ten_percent_deposit_threshold() {
    let mut account = Account::new("Jamie McIntyre", 1111, 1.2);
    account.record(Movement::now(100.0));

    // 10% of 1000 is exactly 100: approved
    LoanService::request(&mut account, 1000.0).expect("approved");
    // 10% of 10010 is 1001; best movement is the fresh 1000 credit: denied
    assert_eq!(
        LoanService::request(&mut account, 10010.0),
        Err(LoanError::Denied)
    );
    assert_eq!(account.movements.len(), 2);
}

#[test]
fn balance_is_reconstructable_after_every_mutation() {
    let mut bank = demo_bank();
    let sender_id = bank.find_by_username("jm").expect("sender").id;

    TransferService::transfer(&mut bank, sender_id, "ss", 250.0).expect("transfer");
    let sender = bank.account_mut(sender_id).expect("sender");
    LoanService::request(sender, 2000.0).expect("loan approved");

    for account in &mut bank.accounts {
        let replayed: f64 = account.movements.iter().map(|m| m.amount).sum();
        assert_close(SummaryService::refresh_balance(account), replayed);
    }
}

#[test]
fn sorted_amounts_never_reorder_the_history() {
    let bank = demo_bank();
    let account = bank.find_by_username("jm").expect("seeded account");
    let before: Vec<f64> = account.movements.iter().map(|m| m.amount).collect();

    let sorted = SummaryService::sorted_amounts(account);
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut expected = before.clone();
    expected.sort_by(f64::total_cmp);
    assert_eq!(sorted, expected);

    let after: Vec<f64> = account.movements.iter().map(|m| m.amount).collect();
    assert_eq!(before, after);
}
