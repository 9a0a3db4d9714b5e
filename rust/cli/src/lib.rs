//! # Bonus Hold'em CLI Library
//!
//! Command-line front end for the `bonusholdem-engine` hand ranking and payout
//! engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```
//! use std::io;
//! let args = vec!["bonusholdem", "eval", "--cards", "AH KH QH JH 10H"];
//! let code = bonusholdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify five cards or pick the best five of seven
//! - `bonus`: Look up the bonus multiplier for hole cards
//! - `resolve`: Settle one hand from explicit cards and bets
//! - `deal`: Deal and settle a single random hand
//! - `sim`: Deal and settle many hands and report the house return
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod history_log;
pub mod logging;
pub mod ui;

use cli::{BonusHoldemCli, Commands};
use commands::{
    ResolveRequest, handle_bonus_command, handle_cfg_command, handle_deal_command,
    handle_eval_command, handle_resolve_command, handle_sim_command, load_config,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "bonus", "resolve", "deal", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` on success, `2` for usage errors and
/// every rejected command.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BonusHoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    logging::init();

    let result = match cli.cmd {
        // cfg needs the value sources, not just the resolved config
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Bonus { player, dealer } => load_config().and_then(|cfg| {
            handle_bonus_command(&player, dealer.as_deref(), &cfg.paytable.bonus, out)
        }),
        Commands::Resolve {
            player,
            dealer,
            board,
            bets,
            fold,
            json,
            history,
        } => {
            let req = ResolveRequest {
                player,
                dealer,
                board,
                bets,
                fold,
                json,
                history,
            };
            load_config().and_then(|cfg| handle_resolve_command(&req, &cfg, out, err))
        }
        Commands::Deal { seed, bets, json } => load_config()
            .and_then(|cfg| handle_deal_command(seed, bets.as_deref(), json, &cfg, out, err)),
        Commands::Sim {
            hands,
            seed,
            bets,
            output,
        } => load_config().and_then(|cfg| {
            handle_sim_command(hands, seed, bets.as_deref(), output, &cfg, out, err)
        }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Bonus Hold'em CLI");
    let _ = writeln!(err, "Usage: bonusholdem <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: bonusholdem --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_list_matches_clap() {
        let cmd = BonusHoldemCli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, COMMANDS);
    }

    #[test]
    fn unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["bonusholdem", "play"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("Commands:"));
        assert!(text.contains("  resolve"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(run(["bonusholdem", "--help"], &mut out, &mut err), 0);
        assert!(!out.is_empty());
        assert!(err.is_empty());
    }
}
