use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::cli::output;
use crate::core::session::{AccountSnapshot, Session};
use crate::domain::MovementKind;
use crate::errors::BankError;

const MENU: &[&str] = &[
    "View movements",
    "Toggle sort",
    "Transfer",
    "Request loan",
    "Close account",
    "Log out",
    "Quit",
];

/// Runs the interactive demo shell until the user quits. Every ledger
/// decision lives in the session; this loop only collects input and prints
/// snapshots.
pub fn run(mut session: Session) -> Result<(), BankError> {
    let theme = ColorfulTheme::default();
    output::section("Demo Bank");
    output::info("Sign in with a username and PIN, or type `quit` to exit.");

    loop {
        let username: String = Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()
            .map_err(into_bank_err)?;
        let username = username.trim().to_string();
        if username.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        let Some(pin) = prompt_pin(&theme, "PIN")? else {
            continue;
        };

        let snapshot = match session.login(&username, pin) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                output::error(err);
                continue;
            }
        };
        output::success(format!("Welcome back, {}!", snapshot.first_name));
        render(&snapshot);

        if signed_in_loop(&mut session, &theme)? {
            return Ok(());
        }
    }
}

/// Menu loop for a signed-in account. Returns `true` when the user quits
/// the shell entirely, `false` when the session just ended.
fn signed_in_loop(session: &mut Session, theme: &ColorfulTheme) -> Result<bool, BankError> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Action")
            .items(MENU)
            .default(0)
            .interact()
            .map_err(into_bank_err)?;

        match MENU[choice] {
            "View movements" => render(&session.snapshot()?),
            "Toggle sort" => render(&session.toggle_sort()?),
            "Transfer" => {
                let recipient: String = Input::with_theme(theme)
                    .with_prompt("Transfer to (username)")
                    .interact_text()
                    .map_err(into_bank_err)?;
                let amount: f64 = Input::with_theme(theme)
                    .with_prompt("Amount")
                    .interact_text()
                    .map_err(into_bank_err)?;
                match session.transfer(recipient.trim(), amount) {
                    Ok(snapshot) => {
                        output::success("Transfer completed.");
                        render(&snapshot);
                    }
                    Err(err) => output::error(err),
                }
            }
            "Request loan" => {
                let amount: f64 = Input::with_theme(theme)
                    .with_prompt("Loan amount")
                    .interact_text()
                    .map_err(into_bank_err)?;
                match session.request_loan(amount) {
                    Ok(snapshot) => {
                        output::success("Loan approved.");
                        render(&snapshot);
                    }
                    Err(err) => output::error(err),
                }
            }
            "Close account" => {
                let confirm_user: String = Input::with_theme(theme)
                    .with_prompt("Confirm username")
                    .interact_text()
                    .map_err(into_bank_err)?;
                let Some(confirm_pin) = prompt_pin(theme, "Confirm PIN")? else {
                    continue;
                };
                match session.close_account(confirm_user.trim(), confirm_pin) {
                    Ok(()) => {
                        output::success("Account closed. Goodbye.");
                        return Ok(false);
                    }
                    Err(err) => output::error(err),
                }
            }
            "Log out" => {
                session.logout();
                output::info("Signed out.");
                return Ok(false);
            }
            _ => return Ok(true),
        }
    }
}

fn prompt_pin(theme: &ColorfulTheme, label: &str) -> Result<Option<u32>, BankError> {
    let raw = Password::with_theme(theme)
        .with_prompt(label)
        .interact()
        .map_err(into_bank_err)?;
    match raw.trim().parse::<u32>() {
        Ok(pin) => Ok(Some(pin)),
        Err(_) => {
            output::warning("The PIN must be numeric.");
            Ok(None)
        }
    }
}

/// Prints the movement list, newest first, followed by the balance and
/// summary totals.
fn render(snapshot: &AccountSnapshot) {
    output::section(format!("{} ({})", snapshot.owner, snapshot.username));
    for (index, line) in snapshot.movements.iter().enumerate().rev() {
        let tag = format!("{} {}", index + 1, line.kind);
        let tag = match line.kind {
            MovementKind::Deposit => tag.bright_green().to_string(),
            MovementKind::Withdrawal => tag.bright_red().to_string(),
        };
        println!(
            "  {:<28} {}  {:>12}",
            tag,
            line.recorded_at.format("%Y-%m-%d"),
            format!("{:+.2}", line.amount)
        );
    }
    output::info(format!(
        "Balance: {}",
        format_amount(snapshot.summary.balance, snapshot.currency.as_deref())
    ));
    output::info(format!(
        "In: {}  Out: {}  Interest: {}",
        format_amount(snapshot.summary.deposits_in, snapshot.currency.as_deref()),
        format_amount(snapshot.summary.withdrawals_out, snapshot.currency.as_deref()),
        format_amount(snapshot.summary.interest, snapshot.currency.as_deref()),
    ));
    if snapshot.sorted {
        output::info("(movements sorted ascending)");
    }
}

fn format_amount(value: f64, currency: Option<&str>) -> String {
    match currency {
        Some(code) => format!("{value:.2} {code}"),
        None => format!("{value:.2}"),
    }
}

fn into_bank_err(err: dialoguer::Error) -> BankError {
    match err {
        dialoguer::Error::IO(inner) => BankError::Io(inner),
    }
}
