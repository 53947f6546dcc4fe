use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use kata::{merge_palindromes, run_server, Config, Result};

/// Read two lines from stdin and write their merged palindrome to the file
/// named by `OUTPUT_PATH` (stdout when unset).
fn merge_stdin(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let s1 = lines.next().transpose()?.unwrap_or_default();
    let s2 = lines.next().transpose()?.unwrap_or_default();

    let merged = merge_palindromes(s1.trim_end(), s2.trim_end(), config.alphabet)?;

    let mut out: Box<dyn Write> = match env::var_os("OUTPUT_PATH") {
        Some(path) => Box::new(io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(out, "{merged}")?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let result = Config::from_env().and_then(|config| {
        if env::args().any(|a| a == "--server") {
            run_server(&config).map(|answered| log::debug!("answered {answered} commands"))
        } else {
            merge_stdin(&config)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("kata-merge: {e}");
            ExitCode::FAILURE
        }
    }
}
