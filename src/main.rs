use std::path::Path;
use std::process::ExitCode;

use bank_core::cli::{output, shell};
use bank_core::config::SeedProfile;
use bank_core::core::session::Session;

fn main() -> ExitCode {
    bank_core::init();

    // optional first argument: path to a JSON seed profile
    let profile = match std::env::args().nth(1) {
        Some(path) => match SeedProfile::load(Path::new(&path)) {
            Ok(profile) => profile,
            Err(err) => {
                output::error(format!("failed to load seed profile: {err}"));
                return ExitCode::FAILURE;
            }
        },
        None => SeedProfile::default(),
    };

    let session = Session::new(profile.into_bank());
    match shell::run(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
