use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single signed ledger entry on an account.
///
/// Positive amounts are deposits, negative amounts withdrawals. The
/// timestamp is captured at the instant the movement is recorded, so the
/// stored order is also the chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

impl Movement {
    pub fn new(amount: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            recorded_at,
        }
    }

    /// Stamps a movement with the current instant.
    pub fn now(amount: f64) -> Self {
        Self::new(amount, Utc::now())
    }

    /// Classifies the movement. Exactly zero counts as a withdrawal; note
    /// that summary totals exclude zero-amount movements from both sides.
    pub fn kind(&self) -> MovementKind {
        if self.amount > 0.0 {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.amount > 0.0
    }
}

/// The two movement classifications shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Deposit => write!(f, "deposit"),
            MovementKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}
