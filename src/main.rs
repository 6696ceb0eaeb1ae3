use std::process::ExitCode;

use gh::GhError;

fn main() -> ExitCode {
    match gh::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(GhError::Usage(usage)) => {
            eprint!("{usage}");
            ExitCode::FAILURE
        }
        Err(e @ (GhError::MissingEnv(_) | GhError::InvalidEnv { .. })) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("gh: {e}");
            ExitCode::FAILURE
        }
    }
}
