use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::movement::Movement;
use crate::domain::{Displayable, Identifiable};

/// A retail account held by the demo bank.
///
/// The `username` is derived from `owner` and must stay consistent with it
/// for the account's lifetime; `balance` is a cached projection of the
/// movement history, never an independent source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub owner: String,
    pub username: String,
    pub pin: u32,
    /// Percentage applied to each qualifying deposit.
    pub interest_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub movements: Vec<Movement>,
    #[serde(default)]
    pub balance: f64,
}

impl Account {
    /// Creates an empty account, deriving the username from the owner name.
    pub fn new(owner: impl Into<String>, pin: u32, interest_rate: f64) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self {
            id: Uuid::new_v4(),
            owner,
            username,
            pin,
            interest_rate,
            currency: None,
            locale: None,
            movements: Vec::new(),
            balance: 0.0,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Owner's given name, used for the welcome message.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    /// Recomputes the derived username; a no-op when already consistent.
    pub fn refresh_username(&mut self) {
        self.username = derive_username(&self.owner);
    }

    /// Appends a movement to the history. Order of insertion is order of
    /// occurrence.
    pub fn record(&mut self, movement: Movement) {
        self.movements.push(movement);
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.owner, self.username)
    }
}

/// Lowercase first letter of each whitespace-separated word of the owner
/// name, concatenated in order.
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|initial| initial.to_lowercase())
        .collect()
}
