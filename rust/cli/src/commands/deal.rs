//! Deal command handler for single hand dealing and settlement.
//!
//! Deals one hand from a seeded deck, plays it to showdown with the given (or
//! configured) stakes and prints the settlement. The seed is printed first so
//! the hand can be dealt again.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::write_payout;
use bonusholdem_engine::deck::Deck;
use bonusholdem_engine::showdown::Resolver;
use std::io::Write;

/// Handle the deal command.
///
/// The seed comes from `--seed`, then the configuration, then the thread RNG.
pub fn handle_deal_command(
    seed: Option<u64>,
    bets: Option<&str>,
    json: bool,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let bets = super::resolve_bets(bets, cfg, err)?;
    let hand = Deck::new_with_seed(seed).deal_hand()?;
    let resolver = Resolver::new(cfg.paytable.clone())?;
    let result = resolver.resolve(hand.player, hand.dealer, &hand.board, &bets, false)?;

    if json {
        let doc = serde_json::json!({ "seed": seed, "result": result });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        writeln!(out, "Seed: {}", seed)?;
        write_payout(out, &result)?;
    }
    Ok(())
}
