use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, export::export, init::init, preview::preview},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with issue counts and exit behavior
/// - `Err` if the command fails (e.g., missing path, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Preview(cmd)) => preview(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
