use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{ensure_distinct, Card, Rank, ACE_LOW};
use crate::errors::EngineError;

/// Poker hand classes. The discriminant is the category score used for the
/// primary comparison (High Card = 1 .. Royal Flush = 10).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub fn score(self) -> u8 {
        self as u8
    }

    /// Zero-based strength: 0 for High Card up to 9 for Royal Flush.
    pub fn strength_index(self) -> u8 {
        self.score() - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying one five-card hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub category: Category,
    /// The five cards, most significant first (quad cards before the kicker,
    /// trips before the pair, the wheel's Ace last).
    pub cards: [Card; 5],
    /// Tie-break values compared lexicographically within a category.
    pub compare: Vec<u8>,
}

impl EvalResult {
    pub fn score(&self) -> u8 {
        self.category.score()
    }
}

/// What settled a comparison between two hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    /// The categories differ.
    Category,
    /// Same category; the compare vector first differs at this index.
    CompareIndex(usize),
    /// Identical category and compare vector.
    Tie,
}

/// Classifies exactly five distinct cards.
///
/// ```
/// use bonusholdem_engine::cards::parse_cards;
/// use bonusholdem_engine::hand::{classify, Category};
///
/// let cards = parse_cards("5S 4H 3D 2C AH").unwrap();
/// let result = classify(&cards).unwrap();
/// assert_eq!(result.category, Category::Straight);
/// assert_eq!(result.compare, vec![5, 4, 3, 2, 1]);
/// ```
pub fn classify(cards: &[Card]) -> Result<EvalResult, EngineError> {
    if cards.len() != 5 {
        return Err(EngineError::hand(format!(
            "expected 5 cards, got {}",
            cards.len()
        )));
    }
    ensure_distinct(cards)?;

    // (count, rank) groups, biggest group first, then highest rank
    let mut rank_counts = [0u8; 15];
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_values(&groups);

    let (category, compare) = if let (true, Some(run)) = (flush, straight) {
        let category = if run[0] == Rank::Ace.value() {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        (category, run.to_vec())
    } else if groups[0].0 == 4 {
        (Category::FourOfAKind, vec![groups[0].1, groups[1].1])
    } else if groups[0].0 == 3 && groups[1].0 == 2 {
        (Category::FullHouse, vec![groups[0].1, groups[1].1])
    } else if flush {
        (Category::Flush, group_ranks(&groups))
    } else if let Some(run) = straight {
        (Category::Straight, run.to_vec())
    } else if groups[0].0 == 3 {
        (Category::ThreeOfAKind, group_ranks(&groups))
    } else if groups[0].0 == 2 && groups[1].0 == 2 {
        (Category::TwoPair, group_ranks(&groups))
    } else if groups[0].0 == 2 {
        (Category::OnePair, group_ranks(&groups))
    } else {
        (Category::HighCard, group_ranks(&groups))
    };

    Ok(EvalResult {
        category,
        cards: order_by_significance(cards, &rank_counts, &compare),
        compare,
    })
}

/// Picks the strongest five-card hand out of seven distinct cards by
/// classifying all 21 subsets.
pub fn best_of_seven(cards: &[Card]) -> Result<EvalResult, EngineError> {
    if cards.len() != 7 {
        return Err(EngineError::hand(format!(
            "expected 7 cards, got {}",
            cards.len()
        )));
    }
    ensure_distinct(cards)?;

    let mut best: Option<EvalResult> = None;
    // each subset is the seven cards minus the pair (skip_a, skip_b)
    for skip_a in 0..7 {
        for skip_b in skip_a + 1..7 {
            let subset: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip_a && i != skip_b)
                .map(|(_, &c)| c)
                .collect();
            let candidate = classify(&subset)?;
            let better = match &best {
                None => true,
                Some(current) => compare_hands(&candidate, current).is_gt(),
            };
            if better {
                best = Some(candidate);
            }
        }
    }
    best.ok_or_else(|| EngineError::hand("no five-card subset"))
}

pub fn compare_hands(a: &EvalResult, b: &EvalResult) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.compare.cmp(&b.compare),
        ord => ord,
    }
}

/// Reports which step of the comparison separated `a` from `b`.
pub fn decisive_step(a: &EvalResult, b: &EvalResult) -> Decision {
    if a.category != b.category {
        return Decision::Category;
    }
    a.compare
        .iter()
        .zip(b.compare.iter())
        .position(|(x, y)| x != y)
        .map_or(Decision::Tie, Decision::CompareIndex)
}

fn group_ranks(groups: &[(u8, u8)]) -> Vec<u8> {
    groups.iter().map(|&(_, r)| r).collect()
}

// Five distinct ranks forming a run, returned high to low. The wheel comes
// back as [5, 4, 3, 2, 1] so it ranks below every other straight.
fn straight_values(groups: &[(u8, u8)]) -> Option<[u8; 5]> {
    if groups.len() != 5 {
        return None;
    }
    let mut v = [0u8; 5];
    for (slot, &(_, r)) in v.iter_mut().zip(groups) {
        *slot = r;
    }
    if v[0] - v[4] == 4 {
        return Some(v);
    }
    if v == [14, 5, 4, 3, 2] {
        return Some([5, 4, 3, 2, ACE_LOW]);
    }
    None
}

fn order_by_significance(cards: &[Card], rank_counts: &[u8; 15], compare: &[u8]) -> [Card; 5] {
    let wheel = compare.last() == Some(&ACE_LOW);
    let sort_value = |c: &Card| {
        if wheel && c.rank == Rank::Ace {
            ACE_LOW
        } else {
            c.rank.value()
        }
    };
    let mut ordered = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    ordered.sort_by(|a, b| {
        let ka = (rank_counts[a.rank.value() as usize], sort_value(a), a.suit);
        let kb = (rank_counts[b.rank.value() as usize], sort_value(b), b.suit);
        kb.cmp(&ka)
    });
    ordered
}
