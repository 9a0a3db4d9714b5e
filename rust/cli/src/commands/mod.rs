//! Command handler modules for the bonusholdem CLI.
//!
//! Each subcommand lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via [`CliError`]

pub mod bonus;
pub mod cfg;
pub mod deal;
pub mod eval;
pub mod resolve;
pub mod sim;

pub use bonus::handle_bonus_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use resolve::{ResolveRequest, handle_resolve_command};
pub use sim::handle_sim_command;

use std::io::Write;

use bonusholdem_engine::bets::{BetStructure, MIN_ANTE};
use bonusholdem_engine::cards::{Card, parse_cards};

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Parses exactly two card tokens, naming `who` in the error.
pub(crate) fn parse_hole(input: &str, who: &str) -> Result<[Card; 2], CliError> {
    match parse_cards(input)?.as_slice() {
        &[a, b] => Ok([a, b]),
        other => Err(CliError::InvalidInput(format!(
            "{} needs 2 hole cards, got {}",
            who,
            other.len()
        ))),
    }
}

pub(crate) fn load_config() -> Result<Config, CliError> {
    config::load().map_err(|e| CliError::Config(e.to_string()))
}

/// Bets from the command line, or the configured defaults. Warns when the
/// ante is below the table minimum.
pub(crate) fn resolve_bets(
    arg: Option<&str>,
    cfg: &Config,
    err: &mut dyn Write,
) -> Result<BetStructure, CliError> {
    let bets = match arg {
        Some(s) => s.parse()?,
        None => cfg.default_bets,
    };
    if !bets.meets_minimum_ante() {
        ui::display_warning(
            err,
            &format!("ante {} is below the table minimum of {}", bets.ante, MIN_ANTE),
        )?;
    }
    Ok(bets)
}
