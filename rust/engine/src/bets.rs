use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Smallest ante that opens a hand. Checked by the table, not by the resolver.
pub const MIN_ANTE: u32 = 25;

/// Jackpot stakes the table accepts.
pub const JACKPOT_STAKES: [u32; 6] = [0, 5, 10, 15, 20, 25];

/// The six wagers a player can have riding on one hand.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BetStructure {
    pub ante: u32,
    pub bonus: u32,
    pub jackpot: u32,
    pub flop: u32,
    pub turn: u32,
    pub river: u32,
}

impl BetStructure {
    /// Checks the jackpot stake against [`JACKPOT_STAKES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bonusholdem_engine::bets::BetStructure;
    /// use bonusholdem_engine::errors::EngineError;
    ///
    /// let bets: BetStructure = "ante=25,jackpot=15".parse().unwrap();
    /// assert!(bets.validate().is_ok());
    ///
    /// let bad = BetStructure { jackpot: 12, ..bets };
    /// assert!(matches!(bad.validate(), Err(EngineError::InvalidBet { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), EngineError> {
        if !JACKPOT_STAKES.contains(&self.jackpot) {
            return Err(EngineError::bet(format!(
                "jackpot stake {} must be one of {:?}",
                self.jackpot, JACKPOT_STAKES
            )));
        }
        Ok(())
    }

    pub fn meets_minimum_ante(&self) -> bool {
        self.ante >= MIN_ANTE
    }

    /// Flop, turn and river stakes settled together as one wager.
    pub fn play_stake(&self) -> u64 {
        u64::from(self.flop) + u64::from(self.turn) + u64::from(self.river)
    }

    pub fn total_staked(&self) -> u64 {
        u64::from(self.ante) + u64::from(self.bonus) + u64::from(self.jackpot) + self.play_stake()
    }
}

impl fmt::Display for BetStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ante={},bonus={},jackpot={},flop={},turn={},river={}",
            self.ante, self.bonus, self.jackpot, self.flop, self.turn, self.river
        )
    }
}

impl FromStr for BetStructure {
    type Err = EngineError;

    /// Parses `key=value` pairs separated by commas or whitespace. Keys not
    /// mentioned stay at 0. The result is validated before it is returned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bets = BetStructure::default();
        for pair in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
        {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| EngineError::bet(format!("expected key=value, got {:?}", pair)))?;
            let amount: i64 = value
                .trim()
                .parse()
                .map_err(|_| EngineError::bet(format!("{} stake {:?} is not a number", key, value)))?;
            let amount = u32::try_from(amount)
                .map_err(|_| EngineError::bet(format!("{} stake {} out of range", key, amount)))?;
            let slot = match key.trim() {
                "ante" => &mut bets.ante,
                "bonus" => &mut bets.bonus,
                "jackpot" => &mut bets.jackpot,
                "flop" => &mut bets.flop,
                "turn" => &mut bets.turn,
                "river" => &mut bets.river,
                other => return Err(EngineError::bet(format!("unknown bet {:?}", other))),
            };
            *slot = amount;
        }
        bets.validate()?;
        Ok(bets)
    }
}
