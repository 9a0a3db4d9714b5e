//! Command-line definitions parsed with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bonusholdem",
    version,
    about = "Hand ranking and payout tools for bonus hold'em"
)]
pub struct BonusHoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify 5 cards, or pick the best hand out of 7
    Eval {
        /// Card tokens such as "AH KD 10S 2C 9C"
        #[arg(long)]
        cards: String,
    },
    /// Show the bonus multiplier for a pair of hole cards
    Bonus {
        #[arg(long)]
        player: String,
        /// Dealer hole cards, for the dual-aces payout
        #[arg(long)]
        dealer: Option<String>,
    },
    /// Settle one hand from explicit cards and bets
    Resolve {
        #[arg(long)]
        player: String,
        #[arg(long)]
        dealer: String,
        /// Board cards dealt so far (5 for a showdown)
        #[arg(long, default_value = "")]
        board: String,
        /// Stakes as "ante=25,bonus=10,jackpot=5,flop=50,turn=0,river=0"
        #[arg(long)]
        bets: Option<String>,
        /// The player folded; every stake is lost
        #[arg(long)]
        fold: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Append the hand to this JSONL history file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Deal a random hand and settle it at showdown
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        bets: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Deal and settle many hands, reporting the house return
    Sim {
        #[arg(long, default_value_t = 1000)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        bets: Option<String>,
        /// Write the history of the simulated hands here
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
