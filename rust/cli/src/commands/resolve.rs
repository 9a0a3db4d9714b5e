//! Resolve command: settle one hand from explicit cards and stakes.

use std::io::Write;
use std::path::PathBuf;

use bonusholdem_engine::cards::parse_cards;
use bonusholdem_engine::showdown::Resolver;

use super::{parse_hole, resolve_bets};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::write_payout;
use crate::history_log::HistoryLog;

/// Inputs of one `resolve` invocation.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub player: String,
    pub dealer: String,
    pub board: String,
    pub bets: Option<String>,
    pub fold: bool,
    pub json: bool,
    pub history: Option<PathBuf>,
}

/// Handle the resolve command.
///
/// Parses the cards and bets, settles the hand with the configured paytable
/// and prints either the breakdown table or the JSON result. With
/// `--history` the compact record is appended to the rotating history file.
pub fn handle_resolve_command(
    req: &ResolveRequest,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let player = parse_hole(&req.player, "player")?;
    let dealer = parse_hole(&req.dealer, "dealer")?;
    let board = parse_cards(&req.board)?;
    let bets = resolve_bets(req.bets.as_deref(), cfg, err)?;

    let resolver = Resolver::new(cfg.paytable.clone())?;
    let result = resolver.resolve(player, dealer, &board, &bets, req.fold)?;

    if req.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write_payout(out, &result)?;
    }

    if let Some(path) = &req.history {
        let mut log = HistoryLog::open(path, cfg.history_cap)?;
        log.append(&result.history())?;
        tracing::debug!(path = %log.path().display(), "hand appended to history");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(player: &str, dealer: &str, board: &str, bets: &str) -> ResolveRequest {
        ResolveRequest {
            player: player.into(),
            dealer: dealer.into(),
            board: board.into(),
            bets: Some(bets.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_prints_breakdown() {
        let req = request("9C 8D", "2C 2D", "7H 6S 5C KD 3H", "ante=25,flop=50");
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_resolve_command(&req, &Config::default(), &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Result: Player wins with Straight"));
        assert!(text.contains("Total payout: 150"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_resolve_json() {
        let mut req = request("AH AD", "AC AS", "2C 5S 9D JC KS", "ante=25,bonus=10");
        req.json = true;
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_resolve_command(&req, &Config::default(), &mut out, &mut err).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["bonus_return"], 10_010);
        assert_eq!(v["outcome"], "tie");
    }

    #[test]
    fn test_resolve_warns_on_small_ante() {
        let req = request("AH AD", "2C 3C", "", "ante=5");
        let req = ResolveRequest { fold: true, ..req };
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_resolve_command(&req, &Config::default(), &mut out, &mut err).unwrap();
        assert!(String::from_utf8(err).unwrap().contains("WARNING"));
    }

    #[test]
    fn test_resolve_incomplete_board_fails() {
        let req = request("AH AD", "2C 3C", "KH KD KC", "ante=25");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let e = handle_resolve_command(&req, &Config::default(), &mut out, &mut err).unwrap_err();
        assert!(matches!(e, CliError::Engine(_)));
    }
}
