//! House-rule payout tables for the two side bets.
//!
//! Both tables are plain data so a different house can load its own rules
//! (for example from a TOML file) without touching the evaluators.
//!
//! ```
//! use bonusholdem_engine::paytable::Paytable;
//!
//! let table = Paytable::default();
//! assert_eq!(table.jackpot.royal_flush_amount, 1_000_000);
//! assert_eq!(table.bonus.dual_aces_multiplier, Some(1000));
//! assert!(table.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::EngineError;
use crate::hand::Category;

/// Shape of a two-card starting hand that a bonus rule pays on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolePattern {
    /// Both cards share one of `ranks`.
    PocketPair { ranks: Vec<Rank> },
    /// Two different ranks: the higher is `high`, the lower one of `low`,
    /// and the suits match exactly when `suited` is set.
    Unpaired {
        high: Rank,
        low: Vec<Rank>,
        suited: bool,
    },
}

impl HolePattern {
    pub fn matches(&self, hole: &[Card; 2]) -> bool {
        let [a, b] = *hole;
        match self {
            HolePattern::PocketPair { ranks } => a.rank == b.rank && ranks.contains(&a.rank),
            HolePattern::Unpaired { high, low, suited } => {
                if a.rank == b.rank || (a.suit == b.suit) != *suited {
                    return false;
                }
                let (hi, lo) = if a.rank > b.rank {
                    (a.rank, b.rank)
                } else {
                    (b.rank, a.rank)
                };
                hi == *high && low.contains(&lo)
            }
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            HolePattern::PocketPair { ranks } => ranks.is_empty(),
            HolePattern::Unpaired { low, .. } => low.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRule {
    pub pattern: HolePattern,
    pub multiplier: u32,
}

/// Bonus bet table. Rules are tried in order and the first match pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTable {
    pub rules: Vec<BonusRule>,
    /// Paid instead of the table multiplier when it is larger and both the
    /// player and the dealer hold pocket Aces.
    #[serde(default)]
    pub dual_aces_multiplier: Option<u32>,
}

impl Default for BonusTable {
    fn default() -> Self {
        use Rank::*;
        let pair = |ranks: &[Rank]| HolePattern::PocketPair {
            ranks: ranks.to_vec(),
        };
        let ace_with = |low: &[Rank], suited: bool| HolePattern::Unpaired {
            high: Ace,
            low: low.to_vec(),
            suited,
        };
        let rule = |pattern, multiplier| BonusRule {
            pattern,
            multiplier,
        };
        Self {
            rules: vec![
                rule(pair(&[Ace]), 30),
                rule(ace_with(&[King], true), 30),
                rule(ace_with(&[Queen, Jack], true), 20),
                rule(ace_with(&[King], false), 15),
                rule(ace_with(&[Queen, Jack], false), 5),
                rule(pair(&[King, Queen, Jack]), 10),
                rule(
                    pair(&[Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten]),
                    3,
                ),
            ],
            dual_aces_multiplier: Some(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JackpotMultiplier {
    pub category: Category,
    pub multiplier: u64,
}

/// Jackpot bet table for the hole-plus-flop hand. Fields left out of a
/// config file keep their house defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JackpotTable {
    /// Fixed award for a Royal Flush, independent of the stake.
    pub royal_flush_amount: u64,
    /// A Straight Flush pays this percentage of the royal award.
    pub straight_flush_percent: u64,
    /// Stake multipliers for the remaining paying categories.
    pub multipliers: Vec<JackpotMultiplier>,
}

impl Default for JackpotTable {
    fn default() -> Self {
        let pay = |category, multiplier| JackpotMultiplier {
            category,
            multiplier,
        };
        Self {
            royal_flush_amount: 1_000_000,
            straight_flush_percent: 10,
            multipliers: vec![
                pay(Category::FourOfAKind, 400),
                pay(Category::FullHouse, 80),
                pay(Category::Flush, 40),
                pay(Category::Straight, 20),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paytable {
    #[serde(default)]
    pub bonus: BonusTable,
    #[serde(default)]
    pub jackpot: JackpotTable,
}

impl Paytable {
    pub fn validate(&self) -> Result<(), EngineError> {
        if let Some(i) = self.bonus.rules.iter().position(|r| r.pattern.is_empty()) {
            return Err(EngineError::paytable(format!(
                "bonus rule {} matches no hole cards",
                i + 1
            )));
        }
        if self.jackpot.royal_flush_amount == 0 {
            return Err(EngineError::paytable("royal flush amount must be >0"));
        }
        if self.jackpot.straight_flush_percent > 100 {
            return Err(EngineError::paytable(
                "straight flush percent must be <=100",
            ));
        }
        for m in &self.jackpot.multipliers {
            if matches!(m.category, Category::RoyalFlush | Category::StraightFlush) {
                return Err(EngineError::paytable(format!(
                    "{} is paid from the royal award, not a stake multiplier",
                    m.category
                )));
            }
            let repeats = self
                .jackpot
                .multipliers
                .iter()
                .filter(|o| o.category == m.category)
                .count();
            if repeats > 1 {
                return Err(EngineError::paytable(format!(
                    "{} listed more than once",
                    m.category
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn hole(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn unpaired_pattern_ignores_card_order() {
        let p = HolePattern::Unpaired {
            high: Rank::Ace,
            low: vec![Rank::King],
            suited: true,
        };
        assert!(p.matches(&hole("KS AS")));
        assert!(p.matches(&hole("AS KS")));
        assert!(!p.matches(&hole("AS KD")));
    }

    #[test]
    fn rejects_duplicate_jackpot_rows() {
        let mut table = Paytable::default();
        table.jackpot.multipliers.push(JackpotMultiplier {
            category: Category::Flush,
            multiplier: 1,
        });
        assert!(matches!(
            table.validate(),
            Err(EngineError::InvalidPaytable { .. })
        ));
    }

    #[test]
    fn rejects_empty_patterns_and_zero_royal() {
        let mut table = Paytable::default();
        table.bonus.rules.push(BonusRule {
            pattern: HolePattern::PocketPair { ranks: vec![] },
            multiplier: 2,
        });
        assert!(table.validate().is_err());

        let mut table = Paytable::default();
        table.jackpot.royal_flush_amount = 0;
        assert!(table.validate().is_err());
    }
}
