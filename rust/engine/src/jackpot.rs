use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;
use crate::hand::{classify, Category};
use crate::paytable::JackpotTable;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct JackpotOutcome {
    pub category: Category,
    /// Amount won on top of the returned stake; 0 when the hand does not pay.
    pub payout: u64,
}

/// Evaluates the jackpot bet on the player's hole cards plus the flop.
///
/// Only the first three board cards count, however far the hand went. The
/// five cards are classified as they are; there is no best-of search.
///
/// ```
/// use bonusholdem_engine::cards::parse_cards;
/// use bonusholdem_engine::hand::Category;
/// use bonusholdem_engine::jackpot::evaluate_jackpot;
/// use bonusholdem_engine::paytable::JackpotTable;
///
/// let hole = parse_cards("AH AD").unwrap();
/// let board = parse_cards("AC AS KH 2D 3D").unwrap();
/// let out = evaluate_jackpot(&[hole[0], hole[1]], &board, 25, &JackpotTable::default()).unwrap();
/// assert_eq!(out.category, Category::FourOfAKind);
/// assert_eq!(out.payout, 10_000);
/// ```
pub fn evaluate_jackpot(
    hole: &[Card; 2],
    board: &[Card],
    stake: u32,
    table: &JackpotTable,
) -> Result<JackpotOutcome, EngineError> {
    if board.len() < 3 {
        return Err(EngineError::hand(format!(
            "jackpot needs the flop, only {} board cards dealt",
            board.len()
        )));
    }
    let cards = [hole[0], hole[1], board[0], board[1], board[2]];
    let category = classify(&cards)?.category;
    Ok(JackpotOutcome {
        category,
        payout: jackpot_payout(category, stake, table)?,
    })
}

/// Amount paid for `category` at `stake`. An empty stake wins nothing.
///
/// Fails with `InvalidPaytable` when the table's amounts push the payout past
/// `u64::MAX`.
pub fn jackpot_payout(
    category: Category,
    stake: u32,
    table: &JackpotTable,
) -> Result<u64, EngineError> {
    if stake == 0 {
        return Ok(0);
    }
    let payout = match category {
        Category::RoyalFlush => Some(table.royal_flush_amount),
        Category::StraightFlush => table
            .royal_flush_amount
            .checked_mul(table.straight_flush_percent)
            .map(|v| v / 100),
        other => match table.multipliers.iter().find(|m| m.category == other) {
            Some(m) => m.multiplier.checked_mul(u64::from(stake)),
            None => Some(0),
        },
    };
    payout.ok_or_else(|| {
        EngineError::paytable(format!("{} payout at stake {} overflows", category, stake))
    })
}
