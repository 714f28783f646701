use crate::domain::Account;

/// Derived totals for one account, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSummary {
    pub balance: f64,
    pub deposits_in: f64,
    pub withdrawals_out: f64,
    pub interest: f64,
}

/// Pure computations over a single account's movement history.
pub struct SummaryService;

impl SummaryService {
    /// Recomputes the balance from the full movement history and refreshes
    /// the cached projection on the account.
    pub fn refresh_balance(account: &mut Account) -> f64 {
        let balance = account.movements.iter().map(|m| m.amount).sum();
        account.balance = balance;
        balance
    }

    /// Sum of all deposits (amounts strictly above zero).
    pub fn total_deposits(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .filter(|m| m.is_deposit())
            .map(|m| m.amount)
            .sum()
    }

    /// Magnitude of all withdrawals (amounts strictly below zero).
    /// Zero-amount movements count toward neither total.
    pub fn total_withdrawals(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .filter(|m| m.amount < 0.0)
            .map(|m| m.amount)
            .sum::<f64>()
            .abs()
    }

    /// Interest earned per deposit at the account's rate. Any single
    /// deposit whose computed interest falls below 1 is discarded before
    /// summing; the threshold applies per deposit, not to the total.
    pub fn total_interest(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .filter(|m| m.is_deposit())
            .map(|m| m.amount * account.interest_rate / 100.0)
            .filter(|earned| *earned >= 1.0)
            .sum()
    }

    /// Ascending copy of the movement amounts; the stored history keeps its
    /// chronological order.
    pub fn sorted_amounts(account: &Account) -> Vec<f64> {
        let mut amounts: Vec<f64> = account.movements.iter().map(|m| m.amount).collect();
        amounts.sort_by(f64::total_cmp);
        amounts
    }

    /// Refreshes the balance cache and bundles every derived total.
    pub fn summarize(account: &mut Account) -> AccountSummary {
        AccountSummary {
            balance: Self::refresh_balance(account),
            deposits_in: Self::total_deposits(account),
            withdrawals_out: Self::total_withdrawals(account),
            interest: Self::total_interest(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Movement;

    fn account_with(amounts: &[f64], interest_rate: f64) -> Account {
        let mut account = Account::new("Jamie McIntyre", 1111, interest_rate);
        for &amount in amounts {
            account.record(Movement::now(amount));
        }
        account
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn balance_is_the_sum_of_all_movements() {
        let mut account = account_with(&[200.0, 450.0, -400.0, 3000.0], 1.2);
        assert_close(SummaryService::refresh_balance(&mut account), 3250.0);
        assert_close(account.balance, 3250.0);
    }

    #[test]
    fn totals_split_by_sign_and_exclude_zero() {
        let account = account_with(&[500.0, -200.0, 0.0, 300.0, -100.0], 1.0);
        assert_close(SummaryService::total_deposits(&account), 800.0);
        assert_close(SummaryService::total_withdrawals(&account), 300.0);
    }

    #[test]
    fn interest_discards_contributions_below_one() {
        // 1000 * 1.5% = 15 (kept); the withdrawal earns nothing
        let account = account_with(&[1000.0, -50.0], 1.5);
        assert_close(SummaryService::total_interest(&account), 15.0);

        // 50 * 0.7% = 0.35 is dropped per deposit, not summed first
        let account = account_with(&[200.0, 340.0, 50.0, 400.0], 0.7);
        assert_close(SummaryService::total_interest(&account), 1.4 + 2.38 + 2.8);
    }

    #[test]
    fn sorted_amounts_is_an_ascending_permutation() {
        let account = account_with(&[200.0, -200.0, 340.0, -300.0], 0.7);
        let sorted = SummaryService::sorted_amounts(&account);
        assert_eq!(sorted, vec![-300.0, -200.0, 200.0, 340.0]);
        // original order untouched
        let amounts: Vec<f64> = account.movements.iter().map(|m| m.amount).collect();
        assert_eq!(amounts, vec![200.0, -200.0, 340.0, -300.0]);
    }

    #[test]
    fn summarize_refreshes_the_cache() {
        let mut account = account_with(&[430.0, 1000.0, 700.0, 50.0, 90.0], 1.0);
        let summary = SummaryService::summarize(&mut account);
        assert_close(summary.balance, 2270.0);
        assert_close(summary.deposits_in, 2270.0);
        assert_close(summary.withdrawals_out, 0.0);
        assert_close(account.balance, 2270.0);
    }

    #[test]
    fn deposits_minus_withdrawals_equals_balance_for_nonzero_histories() {
        let mut account = account_with(&[5000.0, 3400.0, -150.0, -790.0, -3210.0], 1.5);
        let summary = SummaryService::summarize(&mut account);
        assert_close(summary.deposits_in - summary.withdrawals_out, summary.balance);
    }
}
