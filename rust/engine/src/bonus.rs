use crate::cards::{Card, Rank};
use crate::paytable::BonusTable;

/// Multiplier earned by the bonus bet on the player's hole cards.
///
/// The first matching rule of `table` sets the base multiplier (0 when none
/// match). If the table carries a dual-aces override and both the player and
/// the dealer hold pocket Aces, the larger of the two is paid.
///
/// ```
/// use bonusholdem_engine::bonus::bonus_multiplier;
/// use bonusholdem_engine::cards::parse_cards;
/// use bonusholdem_engine::paytable::BonusTable;
///
/// let table = BonusTable::default();
/// let aces = parse_cards("AH AD").unwrap();
/// let hole = [aces[0], aces[1]];
/// assert_eq!(bonus_multiplier(&hole, None, &table), 30);
/// assert_eq!(bonus_multiplier(&hole, Some(&hole), &table), 1000);
/// ```
pub fn bonus_multiplier(player: &[Card; 2], dealer: Option<&[Card; 2]>, table: &BonusTable) -> u32 {
    let base = table
        .rules
        .iter()
        .find(|rule| rule.pattern.matches(player))
        .map_or(0, |rule| rule.multiplier);

    let both_aces = is_pocket_aces(player) && dealer.is_some_and(is_pocket_aces);
    match table.dual_aces_multiplier {
        Some(special) if both_aces => base.max(special),
        _ => base,
    }
}

fn is_pocket_aces(hole: &[Card; 2]) -> bool {
    hole.iter().all(|c| c.rank == Rank::Ace)
}
