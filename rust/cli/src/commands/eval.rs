//! Eval command: classify a five-card hand or choose the best of seven.

use std::io::Write;

use bonusholdem_engine::cards::parse_cards;
use bonusholdem_engine::hand::{best_of_seven, classify};

use crate::error::CliError;
use crate::formatters::format_board;

/// Handle the eval command.
///
/// Five tokens are classified directly; seven go through the best-of-seven
/// search. Prints the category, its score, the chosen cards in significance
/// order and the tie-break vector.
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let result = match cards.len() {
        5 => classify(&cards)?,
        7 => best_of_seven(&cards)?,
        n => {
            return Err(CliError::InvalidInput(format!(
                "eval takes 5 or 7 cards, got {}",
                n
            )));
        }
    };
    writeln!(out, "Category: {}", result.category)?;
    writeln!(out, "Score: {}", result.score())?;
    writeln!(out, "Cards: {}", format_board(&result.cards))?;
    writeln!(out, "Compare: {:?}", result.compare)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_five_cards() {
        let mut out = Vec::new();
        handle_eval_command("AH KH QH JH 10H", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Category: Royal Flush"));
        assert!(text.contains("Score: 10"));
    }

    #[test]
    fn test_eval_seven_cards() {
        let mut out = Vec::new();
        handle_eval_command("2C 2D 2H 9S 9D 4C KH", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Category: Full House"));
        assert!(text.contains("Compare: [2, 9]"));
    }

    #[test]
    fn test_eval_wrong_count() {
        let mut out = Vec::new();
        let err = handle_eval_command("2C 2D 2H", &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_eval_bad_token() {
        let mut out = Vec::new();
        let err = handle_eval_command("2C 2D 2H 9S 1D", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
