//! Command-line interface module.
//!
//! CLI structure and command handlers for the hamartia binary.

mod analyze;
mod commands;
mod records;

pub use analyze::{handle_analyze, handle_batch, handle_suggest};
pub use commands::{BatchArgs, Cli, Commands};
pub use records::{handle_delete, handle_find, handle_get, handle_list, handle_update};

use hamartia::{HamartiaResult, JsonError};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> HamartiaResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
