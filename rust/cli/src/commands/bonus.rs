//! Bonus command: look up the bonus multiplier for two hole cards.

use std::io::Write;

use bonusholdem_engine::bonus::bonus_multiplier;
use bonusholdem_engine::paytable::BonusTable;

use super::parse_hole;
use crate::error::CliError;

pub fn handle_bonus_command(
    player: &str,
    dealer: Option<&str>,
    table: &BonusTable,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let player = parse_hole(player, "player")?;
    let dealer = dealer.map(|d| parse_hole(d, "dealer")).transpose()?;
    let multiplier = bonus_multiplier(&player, dealer.as_ref(), table);
    writeln!(out, "Bonus multiplier: {}", multiplier)?;
    Ok(())
}
