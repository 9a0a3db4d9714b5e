//! # bonusholdem-engine: Hand Ranking and Payout Core
//!
//! Settles a casino hold'em hand played against the dealer with two side
//! bets: a bonus bet on the player's hole cards and a jackpot bet on the hole
//! cards plus the flop. The engine is pure and synchronous; the table's state
//! machine feeds it cards and stakes once per hand and renders or stores what
//! comes back.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, Rank and Suit plus the card token parser
//! - [`hand`] - Five-card classification and best-of-seven selection
//! - [`paytable`] - Data-driven bonus and jackpot payout tables
//! - [`bonus`] - Bonus bet multiplier on the two hole cards
//! - [`jackpot`] - Jackpot bet on hole cards plus flop
//! - [`bets`] - Stake structure, parsing and validation
//! - [`showdown`] - The resolver producing the payout breakdown
//! - [`history`] - Per-hand history record
//! - [`deck`] - Seeded shuffling for simulations
//! - [`errors`] - Error type shared by all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use bonusholdem_engine::bets::BetStructure;
//! use bonusholdem_engine::cards::parse_cards;
//! use bonusholdem_engine::showdown::resolve;
//!
//! let player = parse_cards("AH AD").unwrap();
//! let dealer = parse_cards("KC QC").unwrap();
//! let board = parse_cards("AC AS KH 2D 3D").unwrap();
//! let bets: BetStructure = "ante=25,bonus=10,jackpot=25,flop=50".parse().unwrap();
//!
//! let result = resolve([player[0], player[1]], [dealer[0], dealer[1]], &board, &bets, false).unwrap();
//! assert_eq!(result.jackpot_return, 10_025);
//! println!("{} -> {}", result.outcome_text, result.total);
//! ```

pub mod bets;
pub mod bonus;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod history;
pub mod jackpot;
pub mod paytable;
pub mod showdown;
