use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::services::SummaryService;
use crate::domain::{Bank, Movement};
use crate::errors::TransferError;

/// Moves funds between two accounts held by the same bank.
pub struct TransferService;

impl TransferService {
    /// Validates every precondition before touching either account; a
    /// rejected transfer leaves both movement histories unchanged. Both
    /// sides of a successful transfer are stamped with the same instant.
    ///
    /// # Panics
    ///
    /// Panics if `sender_id` is not registered in the bank. The session
    /// resolves the sender before delegating here.
    pub fn transfer(
        bank: &mut Bank,
        sender_id: Uuid,
        recipient_username: &str,
        amount: f64,
    ) -> Result<(), TransferError> {
        if !(amount > 0.0) {
            warn!(amount, "transfer rejected: non-positive amount");
            return Err(TransferError::InvalidAmount);
        }

        let recipient_idx = bank
            .accounts
            .iter()
            .position(|account| account.username == recipient_username)
            .ok_or_else(|| {
                warn!(recipient = recipient_username, "transfer rejected: unknown recipient");
                TransferError::RecipientNotFound(recipient_username.to_string())
            })?;

        // Safety: the session resolves the sender before delegating here
        let sender_idx = bank
            .accounts
            .iter()
            .position(|account| account.id == sender_id)
            .expect("sender account exists");

        // the cached balance may be stale; spend against the real sum
        let funds: f64 = bank.accounts[sender_idx]
            .movements
            .iter()
            .map(|m| m.amount)
            .sum();
        if funds < amount {
            warn!(
                username = %bank.accounts[sender_idx].username,
                amount,
                funds,
                "transfer rejected: insufficient funds"
            );
            return Err(TransferError::InsufficientFunds);
        }

        if bank.accounts[sender_idx].username == bank.accounts[recipient_idx].username {
            warn!(
                username = %bank.accounts[sender_idx].username,
                "transfer rejected: self transfer"
            );
            return Err(TransferError::SelfTransfer);
        }

        let stamp = Utc::now();
        bank.accounts[sender_idx].record(Movement::new(-amount, stamp));
        bank.accounts[recipient_idx].record(Movement::new(amount, stamp));
        SummaryService::refresh_balance(&mut bank.accounts[sender_idx]);
        SummaryService::refresh_balance(&mut bank.accounts[recipient_idx]);
        bank.touch();

        info!(
            from = %bank.accounts[sender_idx].username,
            to = recipient_username,
            amount,
            "transfer completed"
        );
        Ok(())
    }
}
