use std::process::ExitCode;

fn main() -> ExitCode {
    match roastgen::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // A closed pipe (`roastgen | head -1`) is not worth reporting
        Err(e) if roastgen::errors::is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(roastgen::errors::get_exit_code(&e))
        }
    }
}
