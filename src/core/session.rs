use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::services::{AccountSummary, LoanService, SummaryService, TransferService};
use crate::domain::{Bank, MovementKind};
use crate::errors::{AuthError, BankError, CloseError, SessionError};

/// Whether a session currently has a signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Uuid),
}

/// One movement as presented to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementLine {
    pub amount: f64,
    pub kind: MovementKind,
    pub recorded_at: DateTime<Utc>,
}

/// Render-ready picture of the signed-in account, recomputed after every
/// mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub owner: String,
    pub first_name: String,
    pub username: String,
    pub currency: Option<String>,
    pub locale: Option<String>,
    pub movements: Vec<MovementLine>,
    pub summary: AccountSummary,
    pub sorted: bool,
}

/// One interactive banking session over an in-memory bank.
///
/// Owns the account store and funnels every intent through the services.
/// There is no signed-in-to-signed-in transition: switching accounts
/// requires an explicit logout first.
pub struct Session {
    bank: Bank,
    state: SessionState,
    sort_movements: bool,
}

impl Session {
    pub fn new(bank: Bank) -> Self {
        Self {
            bank,
            state: SessionState::LoggedOut,
            sort_movements: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Signs in iff the store resolves the credentials; any failure leaves
    /// the session signed out.
    pub fn login(&mut self, username: &str, pin: u32) -> Result<AccountSnapshot, BankError> {
        if let SessionState::LoggedIn(_) = self.state {
            return Err(SessionError::AlreadySignedIn.into());
        }
        let account = self
            .bank
            .find_by_credentials(username, pin)
            .ok_or_else(|| {
                warn!(username, "login rejected: invalid credentials");
                AuthError::InvalidCredentials
            })?;
        let id = account.id;
        self.state = SessionState::LoggedIn(id);
        self.sort_movements = false;
        info!(username, "signed in");
        self.snapshot()
    }

    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
        self.sort_movements = false;
    }

    /// Sends funds from the active account to the named recipient and
    /// returns the refreshed view of the sender.
    pub fn transfer(
        &mut self,
        recipient_username: &str,
        amount: f64,
    ) -> Result<AccountSnapshot, BankError> {
        let id = self.active_id()?;
        TransferService::transfer(&mut self.bank, id, recipient_username, amount)?;
        self.snapshot()
    }

    /// Requests a loan credit on the active account.
    pub fn request_loan(&mut self, amount: f64) -> Result<AccountSnapshot, BankError> {
        let id = self.active_id()?;
        let account = self.bank.account_mut(id).ok_or(SessionError::NotSignedIn)?;
        LoanService::request(account, amount)?;
        self.bank.touch();
        self.snapshot()
    }

    /// Removes the active account from the store when the confirmation
    /// matches it exactly, ending the session. A mismatch changes nothing.
    pub fn close_account(
        &mut self,
        confirm_username: &str,
        confirm_pin: u32,
    ) -> Result<(), BankError> {
        let id = self.active_id()?;
        let account = self.bank.account(id).ok_or(SessionError::NotSignedIn)?;
        if account.username != confirm_username || account.pin != confirm_pin {
            warn!(username = %account.username, "close rejected: confirmation mismatch");
            return Err(CloseError::InvalidCredentials.into());
        }
        let username = account.username.clone();
        self.bank.remove_by_username(&username);
        self.logout();
        info!(username = %username, "account closed");
        Ok(())
    }

    /// Flips the ascending-sort display flag and returns the refreshed view.
    pub fn toggle_sort(&mut self) -> Result<AccountSnapshot, BankError> {
        self.active_id()?;
        self.sort_movements = !self.sort_movements;
        self.snapshot()
    }

    /// Recomputes every derived value for the active account.
    pub fn snapshot(&mut self) -> Result<AccountSnapshot, BankError> {
        let id = self.active_id()?;
        let sorted = self.sort_movements;
        let account = self.bank.account_mut(id).ok_or(SessionError::NotSignedIn)?;
        let summary = SummaryService::summarize(account);
        let mut movements: Vec<MovementLine> = account
            .movements
            .iter()
            .map(|m| MovementLine {
                amount: m.amount,
                kind: m.kind(),
                recorded_at: m.recorded_at,
            })
            .collect();
        if sorted {
            // amounts and their dates travel together in the sorted view
            movements.sort_by(|a, b| a.amount.total_cmp(&b.amount));
        }
        Ok(AccountSnapshot {
            owner: account.owner.clone(),
            first_name: account.first_name().to_string(),
            username: account.username.clone(),
            currency: account.currency.clone(),
            locale: account.locale.clone(),
            movements,
            summary,
            sorted,
        })
    }

    fn active_id(&self) -> Result<Uuid, SessionError> {
        match self.state {
            SessionState::LoggedIn(id) => Ok(id),
            SessionState::LoggedOut => Err(SessionError::NotSignedIn),
        }
    }
}
