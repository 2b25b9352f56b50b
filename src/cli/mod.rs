//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    logging::init(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result)?;

    Ok(ExitStatus::from_result(&result).into())
}
