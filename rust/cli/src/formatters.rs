//! Card, hand, and payout formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♦ ♣ ♠) where the terminal supports
//! them and as lowercase letters otherwise. Ranks use the card token symbols,
//! so a ten is shown as `10`.
//!
//! ## Example
//!
//! ```rust
//! use bonusholdem_engine::cards::{Card, Rank, Suit};
//! use bonusholdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use std::io::Write;

use bonusholdem_engine::cards::{Card, Suit};
use bonusholdem_engine::hand::EvalResult;
use bonusholdem_engine::showdown::{LineItem, PayoutResult};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Format cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Category name followed by the five cards in significance order.
pub fn format_hand(hand: &EvalResult) -> String {
    format!("{} {}", hand.category, format_board(&hand.cards))
}

fn write_line_item(out: &mut dyn Write, label: &str, item: &LineItem) -> std::io::Result<()> {
    writeln!(
        out,
        "  {:<8} stake {:>7}  returns {:>9}  {}",
        label, item.stake, item.returned, item.detail
    )
}

/// Writes the full settlement: hands, winner line, per-bet rows and totals.
pub fn write_payout(out: &mut dyn Write, result: &PayoutResult) -> std::io::Result<()> {
    writeln!(out, "Player: {}", format_board(&result.player_cards))?;
    writeln!(out, "Dealer: {}", format_board(&result.dealer_cards))?;
    writeln!(out, "Board:  {}", format_board(&result.board))?;
    if let (Some(p), Some(d)) = (&result.player_hand, &result.dealer_hand) {
        writeln!(out, "Player best: {}", format_hand(p))?;
        writeln!(out, "Dealer best: {}", format_hand(d))?;
    }
    writeln!(out, "Result: {}", result.outcome_text)?;
    let b = &result.breakdown;
    writeln!(out, "Bets (total {}):", b.total_bet)?;
    write_line_item(out, "Ante", &b.ante)?;
    write_line_item(out, "Play", &b.play)?;
    write_line_item(out, "Bonus", &b.bonus)?;
    write_line_item(out, "Jackpot", &b.jackpot)?;
    writeln!(out, "Total payout: {}", result.total)
}
