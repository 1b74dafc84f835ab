//! `tether`: runs every demonstration.
//!
//! The report goes to stdout, log lines go to stderr, and the function
//! demonstration's results are saved to `results.json` in the working
//! directory. There are no flags.

use std::io;
use std::process::ExitCode;

use tether::Config;
use tether::demo;
use tether_log::{error, info};

fn main() -> ExitCode {
    let config = Config::default().with_persist(true);
    tether_log::set_level(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> tether::Result<()> {
    let report = demo::run_all(config)?;
    report.write_to(io::stdout().lock())?;
    info!("wrote {} report lines", report.len());
    Ok(())
}
