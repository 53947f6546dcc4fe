use std::process::ExitCode;

use kata::{run_server, Config};

fn main() -> ExitCode {
    env_logger::init();

    match Config::from_env().and_then(|config| run_server(&config)) {
        Ok(answered) => {
            log::debug!("answered {answered} commands");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("kata-server: {e}");
            ExitCode::FAILURE
        }
    }
}
