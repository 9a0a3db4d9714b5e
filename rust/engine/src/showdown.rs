//! Settles every wager of a hand once play reaches its terminal state.
//!
//! The table calls [`Resolver::resolve`] exactly once per hand, on the
//! transition into showdown (or when the player folds). The resolver keeps no
//! state between calls, so calling it again with the same input yields the
//! same [`PayoutResult`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bets::BetStructure;
use crate::bonus::bonus_multiplier;
use crate::cards::{ensure_distinct, Card};
use crate::errors::EngineError;
use crate::hand::{best_of_seven, compare_hands, decisive_step, Category, Decision, EvalResult};
use crate::history::{EndedBy, HandHistory};
use crate::jackpot::evaluate_jackpot;
use crate::paytable::Paytable;

/// Weakest winning hand that also wins the ante; below it the ante pushes.
pub const ANTE_WIN_MIN: Category = Category::Straight;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Tie,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "Player wins",
            Outcome::DealerWin => "Dealer wins",
            Outcome::Tie => "Push",
        }
    }
}

/// One row of the payout breakdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub stake: u64,
    /// Total handed back for this wager, stake included. 0 means lost.
    pub returned: u64,
    pub detail: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub total_bet: u64,
    pub ante: LineItem,
    pub play: LineItem,
    pub bonus: LineItem,
    pub jackpot: LineItem,
}

/// Authoritative settlement of one hand. Built once, never modified.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PayoutResult {
    pub player_cards: [Card; 2],
    pub dealer_cards: [Card; 2],
    pub board: Vec<Card>,
    /// Best five-card hands; `None` when the player folded.
    pub player_hand: Option<EvalResult>,
    pub dealer_hand: Option<EvalResult>,
    pub outcome: Outcome,
    pub outcome_text: String,
    /// The categories and primary rank matched and a later value decided.
    pub kicker_decided: bool,
    pub ante_return: u64,
    pub play_return: u64,
    pub bonus_return: u64,
    pub jackpot_return: u64,
    pub total: u64,
    pub bonus_multiplier: u32,
    pub jackpot_category: Option<Category>,
    pub breakdown: Breakdown,
    pub ended_by: EndedBy,
}

impl PayoutResult {
    pub fn history(&self) -> HandHistory {
        HandHistory {
            player_cards: self.player_cards.to_vec(),
            dealer_cards: self.dealer_cards.to_vec(),
            board: self.board.clone(),
            outcome: self.outcome,
            total_payout: self.total,
            ended_by: self.ended_by,
            ts: None,
        }
    }
}

/// Settles hands against one house paytable.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    paytable: Paytable,
}

impl Resolver {
    pub fn new(paytable: Paytable) -> Result<Self, EngineError> {
        paytable.validate()?;
        Ok(Self { paytable })
    }

    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }

    /// Settles the ante, play, bonus and jackpot wagers of one hand.
    ///
    /// On a fold nothing is evaluated and every stake is lost. Otherwise the
    /// full five-card board is required.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidBet`] when the jackpot stake is not allowed
    /// - [`EngineError::InvalidHand`] when a card repeats within the player's
    ///   or the dealer's seven cards, the board has more than five cards, or
    ///   a showdown is requested without a complete board
    /// - [`EngineError::InvalidPaytable`] when the paytable's amounts push a
    ///   payout past `u64::MAX`
    ///
    /// # Examples
    ///
    /// ```
    /// use bonusholdem_engine::bets::BetStructure;
    /// use bonusholdem_engine::cards::parse_cards;
    /// use bonusholdem_engine::showdown::{Outcome, Resolver};
    ///
    /// let p = parse_cards("AH KH").unwrap();
    /// let d = parse_cards("2C 7D").unwrap();
    /// let board = parse_cards("QH JH 10H 3S 4S").unwrap();
    /// let bets: BetStructure = "ante=25,bonus=10,jackpot=5,flop=50".parse().unwrap();
    ///
    /// let result = Resolver::default()
    ///     .resolve([p[0], p[1]], [d[0], d[1]], &board, &bets, false)
    ///     .unwrap();
    /// assert_eq!(result.outcome, Outcome::PlayerWin);
    /// assert_eq!(result.ante_return, 50);
    /// assert_eq!(result.play_return, 100);
    /// assert_eq!(result.bonus_return, 310);
    /// assert_eq!(result.jackpot_return, 1_000_005);
    /// ```
    pub fn resolve(
        &self,
        player: [Card; 2],
        dealer: [Card; 2],
        board: &[Card],
        bets: &BetStructure,
        folded: bool,
    ) -> Result<PayoutResult, EngineError> {
        bets.validate()?;
        if board.len() > 5 {
            return Err(EngineError::hand(format!(
                "board holds {} cards, at most 5 allowed",
                board.len()
            )));
        }
        let player_seven = with_board(player, board);
        let dealer_seven = with_board(dealer, board);
        ensure_distinct(&player_seven)?;
        ensure_distinct(&dealer_seven)?;

        if folded {
            return Ok(self.settle_fold(player, dealer, board, bets));
        }
        if board.len() != 5 {
            return Err(EngineError::hand(format!(
                "showdown needs 5 board cards, got {}",
                board.len()
            )));
        }
        self.settle_showdown(player, dealer, board, bets, &player_seven, &dealer_seven)
    }

    fn settle_fold(
        &self,
        player: [Card; 2],
        dealer: [Card; 2],
        board: &[Card],
        bets: &BetStructure,
    ) -> PayoutResult {
        debug!(board_cards = board.len(), "player folded, all stakes forfeited");
        let lost = |stake: u64| LineItem {
            stake,
            returned: 0,
            detail: "Forfeited (fold)".to_string(),
        };
        PayoutResult {
            player_cards: player,
            dealer_cards: dealer,
            board: board.to_vec(),
            player_hand: None,
            dealer_hand: None,
            outcome: Outcome::DealerWin,
            outcome_text: "Player folded".to_string(),
            kicker_decided: false,
            ante_return: 0,
            play_return: 0,
            bonus_return: 0,
            jackpot_return: 0,
            total: 0,
            bonus_multiplier: 0,
            jackpot_category: None,
            breakdown: Breakdown {
                total_bet: bets.total_staked(),
                ante: lost(u64::from(bets.ante)),
                play: lost(bets.play_stake()),
                bonus: lost(u64::from(bets.bonus)),
                jackpot: lost(u64::from(bets.jackpot)),
            },
            ended_by: EndedBy::Fold,
        }
    }

    fn settle_showdown(
        &self,
        player: [Card; 2],
        dealer: [Card; 2],
        board: &[Card],
        bets: &BetStructure,
        player_seven: &[Card],
        dealer_seven: &[Card],
    ) -> Result<PayoutResult, EngineError> {
        let jackpot_stake = u64::from(bets.jackpot);
        let jackpot = evaluate_jackpot(&player, board, bets.jackpot, &self.paytable.jackpot)?;
        let jackpot_return = if jackpot.payout > 0 {
            jackpot_stake
                .checked_add(jackpot.payout)
                .ok_or_else(|| payout_overflow("jackpot"))?
        } else {
            0
        };
        debug!(category = %jackpot.category, payout = jackpot.payout, "jackpot evaluated");

        let bonus_stake = u64::from(bets.bonus);
        let multiplier = bonus_multiplier(&player, Some(&dealer), &self.paytable.bonus);
        let bonus_return = if multiplier > 0 && bonus_stake > 0 {
            bonus_stake
                .checked_mul(u64::from(multiplier))
                .and_then(|won| won.checked_add(bonus_stake))
                .ok_or_else(|| payout_overflow("bonus"))?
        } else {
            0
        };
        debug!(multiplier, "bonus evaluated");

        let player_hand = best_of_seven(player_seven)?;
        let dealer_hand = best_of_seven(dealer_seven)?;
        let outcome = match compare_hands(&player_hand, &dealer_hand) {
            std::cmp::Ordering::Greater => Outcome::PlayerWin,
            std::cmp::Ordering::Less => Outcome::DealerWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        let kicker_decided = matches!(
            decisive_step(&player_hand, &dealer_hand),
            Decision::CompareIndex(i) if i >= 1
        );
        debug!(
            player = %player_hand.category,
            dealer = %dealer_hand.category,
            ?outcome,
            kicker_decided,
            "main hand compared"
        );

        let ante_stake = u64::from(bets.ante);
        let (ante_return, ante_detail) = match outcome {
            Outcome::PlayerWin if player_hand.category >= ANTE_WIN_MIN => {
                (ante_stake * 2, format!("Win 1:1 ({} or better)", ANTE_WIN_MIN))
            }
            Outcome::PlayerWin => (ante_stake, format!("Push (win below {})", ANTE_WIN_MIN)),
            Outcome::Tie => (ante_stake, "Push (tie)".to_string()),
            Outcome::DealerWin => (0, "Lost".to_string()),
        };

        let play_stake = bets.play_stake();
        let (play_return, play_detail) = match outcome {
            Outcome::PlayerWin => (play_stake * 2, "Win 1:1"),
            Outcome::Tie => (play_stake, "Push (tie)"),
            Outcome::DealerWin => (0, "Lost"),
        };

        let bonus_detail = if bonus_stake == 0 {
            "No bet".to_string()
        } else if bonus_return > 0 {
            format!("Win {}:1", multiplier)
        } else {
            "Lost".to_string()
        };
        let jackpot_detail = if jackpot_stake == 0 {
            format!("No bet ({})", jackpot.category)
        } else if jackpot_return > 0 {
            format!("{} pays {}", jackpot.category, jackpot.payout)
        } else {
            format!("Lost ({})", jackpot.category)
        };

        let total = [play_return, bonus_return, jackpot_return]
            .into_iter()
            .try_fold(ante_return, u64::checked_add)
            .ok_or_else(|| payout_overflow("total"))?;
        let winning = match outcome {
            Outcome::PlayerWin => Some(player_hand.category),
            Outcome::DealerWin => Some(dealer_hand.category),
            Outcome::Tie => None,
        };
        let mut outcome_text = match winning {
            Some(category) => format!("{} with {}", outcome.label(), category),
            None => format!("{} ({} each)", outcome.label(), player_hand.category),
        };
        if kicker_decided {
            outcome_text.push_str(" on kicker");
        }
        info!(?outcome, total, total_bet = bets.total_staked(), "hand settled");

        Ok(PayoutResult {
            player_cards: player,
            dealer_cards: dealer,
            board: board.to_vec(),
            outcome,
            outcome_text,
            kicker_decided,
            ante_return,
            play_return,
            bonus_return,
            jackpot_return,
            total,
            bonus_multiplier: multiplier,
            jackpot_category: Some(jackpot.category),
            breakdown: Breakdown {
                total_bet: bets.total_staked(),
                ante: LineItem {
                    stake: ante_stake,
                    returned: ante_return,
                    detail: ante_detail,
                },
                play: LineItem {
                    stake: play_stake,
                    returned: play_return,
                    detail: play_detail.to_string(),
                },
                bonus: LineItem {
                    stake: bonus_stake,
                    returned: bonus_return,
                    detail: bonus_detail,
                },
                jackpot: LineItem {
                    stake: jackpot_stake,
                    returned: jackpot_return,
                    detail: jackpot_detail,
                },
            },
            player_hand: Some(player_hand),
            dealer_hand: Some(dealer_hand),
            ended_by: EndedBy::Showdown,
        })
    }
}

/// [`Resolver::resolve`] with the standard house paytable.
pub fn resolve(
    player: [Card; 2],
    dealer: [Card; 2],
    board: &[Card],
    bets: &BetStructure,
    folded: bool,
) -> Result<PayoutResult, EngineError> {
    Resolver::default().resolve(player, dealer, board, bets, folded)
}

fn payout_overflow(what: &str) -> EngineError {
    EngineError::paytable(format!("{} payout exceeds the u64 range", what))
}

fn with_board(hole: [Card; 2], board: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend_from_slice(&hole);
    cards.extend_from_slice(board);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn two(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn kicker_decided_outcome_text() {
        // both pair aces on board; player's king kicker beats dealer's queen
        let board = parse_cards("AH AD 8C 5S 2D").unwrap();
        let bets: BetStructure = "ante=25,flop=50".parse().unwrap();
        let r = resolve(two("KC 3H"), two("QC 4H"), &board, &bets, false).unwrap();
        assert_eq!(r.outcome, Outcome::PlayerWin);
        assert!(r.kicker_decided);
        assert_eq!(r.outcome_text, "Player wins with One Pair on kicker");
        assert_eq!(r.ante_return, 25);
        assert_eq!(r.play_return, 100);
    }

    #[test]
    fn board_plays_for_both_is_a_tie() {
        let board = parse_cards("10H JD QC KS AH").unwrap();
        let bets: BetStructure = "ante=25,turn=50".parse().unwrap();
        let r = resolve(two("2C 3D"), two("4C 5D"), &board, &bets, false).unwrap();
        assert_eq!(r.outcome, Outcome::Tie);
        assert!(!r.kicker_decided);
        assert_eq!(r.ante_return, 25);
        assert_eq!(r.play_return, 50);
        assert_eq!(r.total, 75);
        assert_eq!(r.outcome_text, "Push (Straight each)");
    }

    #[test]
    fn history_mirrors_result() {
        let board = parse_cards("10H JD QC KS AH").unwrap();
        let bets: BetStructure = "ante=25".parse().unwrap();
        let r = resolve(two("2C 3D"), two("4C 5D"), &board, &bets, false).unwrap();
        let h = r.history();
        assert_eq!(h.total_payout, r.total);
        assert_eq!(h.ended_by, EndedBy::Showdown);
        assert_eq!(h.board, board);
    }
}
