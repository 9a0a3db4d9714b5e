use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// One of the four suits. Suits carry no ordering significance in play;
/// the derived `Ord` only exists so cards can live in sorted collections.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts (H)
    #[serde(rename = "H")]
    Hearts,
    /// Diamonds (D)
    #[serde(rename = "D")]
    Diamonds,
    /// Clubs (C)
    #[serde(rename = "C")]
    Clubs,
    /// Spades (S)
    #[serde(rename = "S")]
    Spades,
}

impl Suit {
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Suit> {
        match s {
            "H" => Some(Suit::Hearts),
            "D" => Some(Suit::Diamonds),
            "C" => Some(Suit::Clubs),
            "S" => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Rank of a card from Two through Ace.
/// The discriminant is the numeric value used by hand comparison (Two = 2 .. Ace = 14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two = 2,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

/// Value the Ace takes when it closes the A-2-3-4-5 straight.
pub const ACE_LOW: u8 = 1;

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.value() == v)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.symbol() == s)
    }
}

/// A single playing card.
///
/// Cards are built from the token contract shared with the table UI: a rank
/// symbol (`2`..`10`, `J`, `Q`, `K`, `A`) followed by a suit symbol
/// (`H`, `D`, `C`, `S`). Parsing happens once at the boundary; everything
/// past [`Card::from_str`] works on the validated value.
///
/// ```
/// use bonusholdem_engine::cards::{Card, Rank, Suit};
///
/// let ten: Card = "10H".parse().unwrap();
/// assert_eq!(ten, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(ten.to_string(), "10H");
/// assert!("1H".parse::<Card>().is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCard {
            token: token.to_string(),
        };
        // suit symbols are single ASCII letters, so slicing off the last byte is safe
        if token.len() < 2 || !token.is_ascii() {
            return Err(invalid());
        }
        let (rank, suit) = token.split_at(token.len() - 1);
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

impl TryFrom<String> for Card {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses a list of card tokens separated by whitespace and/or commas.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, EngineError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Fails with `InvalidHand` when the same card appears twice.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), EngineError> {
    for (i, a) in cards.iter().enumerate() {
        if cards[i + 1..].contains(a) {
            return Err(EngineError::hand(format!("duplicate card {}", a)));
        }
    }
    Ok(())
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
