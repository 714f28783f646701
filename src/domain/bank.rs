use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;

/// In-memory collection of the demo accounts.
///
/// Accounts are registered once from seed configuration and removed only by
/// the close-account flow. Username uniqueness is assumed, not enforced;
/// lookups resolve the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default)]
    pub accounts: Vec<Account>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bank {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            accounts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Registers an account, refreshing its derived username.
    pub fn register(&mut self, mut account: Account) -> Uuid {
        account.refresh_username();
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username == username)
    }

    /// Resolves the first account matching the username, then checks its
    /// pin. A username hit with a wrong pin resolves to nothing.
    pub fn find_by_credentials(&self, username: &str, pin: u32) -> Option<&Account> {
        self.find_by_username(username)
            .filter(|account| account.pin == pin)
    }

    /// Removes the first account matching the username and returns it;
    /// `None` when no account matched.
    pub fn remove_by_username(&mut self, username: &str) -> Option<Account> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.username == username)?;
        let removed = self.accounts.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_bank() -> Bank {
        let mut bank = Bank::new();
        bank.register(Account::new("Jamie McIntyre", 1111, 1.2));
        bank.register(Account::new("Jessica Davis", 2222, 1.5));
        bank
    }

    #[test]
    fn register_derives_usernames() {
        let bank = seeded_bank();
        assert!(bank.find_by_username("jm").is_some());
        assert!(bank.find_by_username("jd").is_some());
    }

    #[test]
    fn credentials_require_username_and_pin() {
        let bank = seeded_bank();
        assert!(bank.find_by_credentials("jm", 1111).is_some());
        assert!(bank.find_by_credentials("jm", 2222).is_none());
        assert!(bank.find_by_credentials("zz", 1111).is_none());
    }

    #[test]
    fn remove_by_username_returns_the_account() {
        let mut bank = seeded_bank();
        let removed = bank.remove_by_username("jm").expect("account removed");
        assert_eq!(removed.owner, "Jamie McIntyre");
        assert_eq!(bank.len(), 1);
        assert!(bank.remove_by_username("jm").is_none());
    }
}
