use thiserror::Error;

/// Sign-in failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or pin")]
    InvalidCredentials,
}

/// Transfer precondition failures. Every rejection leaves both accounts'
/// movement histories unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum TransferError {
    #[error("transfer amount must be positive")]
    InvalidAmount,
    #[error("recipient `{0}` not found")]
    RecipientNotFound(String),
    #[error("insufficient funds to cover the transfer")]
    InsufficientFunds,
    #[error("cannot transfer to the sending account")]
    SelfTransfer,
}

/// Loan request failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    #[error("loan amount must be positive")]
    InvalidAmount,
    #[error("no deposit covers 10% of the requested amount")]
    Denied,
}

/// Account closure confirmation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloseError {
    #[error("confirmation did not match the signed-in account")]
    InvalidCredentials,
}

/// Intents that arrived in the wrong session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no account is signed in")]
    NotSignedIn,
    #[error("an account is already signed in")]
    AlreadySignedIn,
}

/// Error type that captures every failure surfaced at the crate boundary.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    Loan(#[from] LoanError),
    #[error(transparent)]
    Close(#[from] CloseError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
