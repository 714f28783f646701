use tracing::{info, warn};

use crate::core::services::SummaryService;
use crate::domain::{Account, Movement};
use crate::errors::LoanError;

/// Grants loan credits against an account's deposit history.
pub struct LoanService;

impl LoanService {
    /// Floors the request toward negative infinity, then grants it only
    /// when some past movement reaches 10% of the floored amount. Since a
    /// negative movement can never reach 10% of a positive request, only
    /// deposits can qualify. A rejected request records nothing.
    pub fn request(account: &mut Account, requested: f64) -> Result<(), LoanError> {
        if !requested.is_finite() {
            return Err(LoanError::InvalidAmount);
        }
        let granted = requested.floor();
        if granted <= 0.0 {
            warn!(
                username = %account.username,
                requested,
                "loan rejected: non-positive amount"
            );
            return Err(LoanError::InvalidAmount);
        }

        let qualifies = account
            .movements
            .iter()
            .any(|m| m.amount >= granted * 0.1);
        if !qualifies {
            warn!(
                username = %account.username,
                granted,
                "loan denied: no deposit covers 10% of the request"
            );
            return Err(LoanError::Denied);
        }

        account.record(Movement::now(granted));
        SummaryService::refresh_balance(account);
        info!(username = %account.username, granted, "loan credited");
        Ok(())
    }
}
