//! Sim command: deal and settle many hands from one seeded deck.
//!
//! Every hand goes to showdown with the same stakes. The summary reports how
//! much was wagered and returned so house-rule variants can be compared.

use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;

use bonusholdem_engine::deck::Deck;
use bonusholdem_engine::history::HandHistory;
use bonusholdem_engine::showdown::{Outcome, Resolver};

use crate::config::Config;
use crate::error::CliError;
use crate::history_log::HistoryLog;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub hands: u64,
    pub wagered: u64,
    pub returned: u64,
    pub player_wins: u64,
    pub dealer_wins: u64,
    pub ties: u64,
    pub bonus_hits: u64,
    pub jackpot_hits: u64,
}

impl SimSummary {
    /// Returned divided by wagered; 0 when nothing was wagered.
    pub fn return_ratio(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.returned as f64 / self.wagered as f64
        }
    }
}

/// Handle the sim command.
pub fn handle_sim_command(
    hands: u64,
    seed: Option<u64>,
    bets: Option<&str>,
    output: Option<PathBuf>,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >=1".into()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let bets = super::resolve_bets(bets, cfg, err)?;
    let resolver = Resolver::new(cfg.paytable.clone())?;
    let mut deck = Deck::new_with_seed(seed);

    let mut summary = SimSummary::default();
    let mut records: VecDeque<HandHistory> = VecDeque::new();
    // only the newest entries survive rotation, so keep no more than that
    let keep = if output.is_some() { cfg.history_cap } else { 0 };

    for _ in 0..hands {
        let hand = deck.deal_hand()?;
        let result = resolver.resolve(hand.player, hand.dealer, &hand.board, &bets, false)?;
        summary.hands += 1;
        summary.wagered = summary.wagered.saturating_add(bets.total_staked());
        summary.returned = summary.returned.saturating_add(result.total);
        match result.outcome {
            Outcome::PlayerWin => summary.player_wins += 1,
            Outcome::DealerWin => summary.dealer_wins += 1,
            Outcome::Tie => summary.ties += 1,
        }
        if result.bonus_return > 0 {
            summary.bonus_hits += 1;
        }
        if result.jackpot_return > 0 {
            summary.jackpot_hits += 1;
        }
        if keep > 0 {
            if records.len() == keep {
                records.pop_front();
            }
            records.push_back(result.history());
        }
    }
    tracing::info!(
        hands = summary.hands,
        wagered = summary.wagered,
        returned = summary.returned,
        "simulation finished"
    );

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Bets: {}", bets)?;
    writeln!(out, "Hands: {}", summary.hands)?;
    writeln!(
        out,
        "Outcomes: player {} / dealer {} / push {}",
        summary.player_wins, summary.dealer_wins, summary.ties
    )?;
    writeln!(out, "Bonus hits: {}", summary.bonus_hits)?;
    writeln!(out, "Jackpot hits: {}", summary.jackpot_hits)?;
    writeln!(out, "Wagered: {}", summary.wagered)?;
    writeln!(out, "Returned: {}", summary.returned)?;
    writeln!(out, "Return ratio: {:.4}", summary.return_ratio())?;

    if let Some(path) = output {
        let mut log = HistoryLog::open(&path, cfg.history_cap)?;
        log.append_all(records.make_contiguous())?;
        writeln!(out, "History: {}", path.display())?;
    }
    Ok(())
}
