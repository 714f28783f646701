#![doc(test(attr(deny(warnings))))]

//! Bank Core implements the account-ledger domain of a demo retail bank:
//! seeded accounts, movement summaries, transfers between accounts, loan
//! requests, and an interactive session over an in-memory store.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
