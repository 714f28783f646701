use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::services::SummaryService;
use crate::domain::{Account, Bank, Movement};
use crate::errors::BankError;

const TMP_SUFFIX: &str = "tmp";

/// One seeded movement: a signed amount and the instant it occurred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMovement {
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

/// One seeded demo account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    pub owner: String,
    pub pin: u32,
    pub interest_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub movements: Vec<SeedMovement>,
}

/// The static dataset the demo bank starts from.
///
/// Loaded once at startup; ledger state is never written back. The default
/// profile carries the four canonical demo accounts with their historical
/// movements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProfile {
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
}

impl SeedProfile {
    /// Reads a profile from a JSON file; a missing file yields the default
    /// demo dataset.
    pub fn load(path: &Path) -> Result<Self, BankError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the profile as pretty JSON via a temp file and rename.
    pub fn save(&self, path: &Path) -> Result<(), BankError> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Registers every seeded account into a fresh bank, deriving usernames
    /// and refreshing the balance caches.
    pub fn into_bank(self) -> Bank {
        let mut bank = Bank::new();
        for seed in self.accounts {
            let mut account = Account::new(seed.owner, seed.pin, seed.interest_rate);
            account.currency = seed.currency;
            account.locale = seed.locale;
            for movement in seed.movements {
                account.record(Movement::new(movement.amount, movement.recorded_at));
            }
            SummaryService::refresh_balance(&mut account);
            bank.register(account);
        }
        bank
    }
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            accounts: vec![
                seed_account(
                    "Jamie McIntyre",
                    1111,
                    1.2,
                    "USD",
                    "en-US",
                    &[
                        (200.0, "2019-01-28T09:15:04.904Z"),
                        (450.0, "2019-04-01T10:17:24.185Z"),
                        (-400.0, "2019-05-27T17:01:17.194Z"),
                        (3000.0, "2019-07-11T23:36:17.929Z"),
                        (-650.0, "2019-11-18T21:31:17.178Z"),
                        (-130.0, "2023-01-01T07:42:02.383Z"),
                        (70.0, "2023-01-02T14:11:59.604Z"),
                        (1300.0, "2023-01-06T10:51:36.790Z"),
                    ],
                ),
                seed_account(
                    "Jessica Davis",
                    2222,
                    1.5,
                    "EUR",
                    "pt-PT",
                    &[
                        (5000.0, "2019-01-28T09:15:04.904Z"),
                        (3400.0, "2019-04-01T10:17:24.185Z"),
                        (-150.0, "2019-05-27T17:01:17.194Z"),
                        (-790.0, "2019-07-11T23:36:17.929Z"),
                        (-3210.0, "2019-11-18T21:31:17.178Z"),
                        (-1000.0, "2019-12-23T07:42:02.383Z"),
                        (8500.0, "2020-03-08T14:11:59.604Z"),
                        (-30.0, "2020-03-12T10:51:36.790Z"),
                    ],
                ),
                seed_account(
                    "Steven Thomas Williams",
                    3333,
                    0.7,
                    "USD",
                    "en-US",
                    &[
                        (200.0, "2019-01-28T09:15:04.904Z"),
                        (-200.0, "2019-04-01T10:17:24.185Z"),
                        (340.0, "2019-05-27T17:01:17.194Z"),
                        (-300.0, "2019-07-11T23:36:17.929Z"),
                        (-20.0, "2019-11-18T21:31:17.178Z"),
                        (50.0, "2019-12-23T07:42:02.383Z"),
                        (400.0, "2020-03-08T14:11:59.604Z"),
                        (-460.0, "2020-03-12T10:51:36.790Z"),
                    ],
                ),
                seed_account(
                    "Sarah Smith",
                    4444,
                    1.0,
                    "USD",
                    "en-US",
                    &[
                        (430.0, "2019-01-28T09:15:04.904Z"),
                        (1000.0, "2019-04-01T10:17:24.185Z"),
                        (700.0, "2019-05-27T17:01:17.194Z"),
                        (50.0, "2019-07-11T23:36:17.929Z"),
                        (90.0, "2019-11-18T21:31:17.178Z"),
                    ],
                ),
            ],
        }
    }
}

fn seed_account(
    owner: &str,
    pin: u32,
    interest_rate: f64,
    currency: &str,
    locale: &str,
    entries: &[(f64, &str)],
) -> SeedAccount {
    SeedAccount {
        owner: owner.to_string(),
        pin,
        interest_rate,
        currency: Some(currency.to_string()),
        locale: Some(locale.to_string()),
        movements: entries
            .iter()
            .map(|(amount, stamp)| SeedMovement {
                amount: *amount,
                recorded_at: stamp.parse().expect("valid seed timestamp"),
            })
            .collect(),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
