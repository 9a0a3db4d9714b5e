use bonusholdem_engine::bonus::bonus_multiplier;
use bonusholdem_engine::cards::{parse_cards, Rank};
use bonusholdem_engine::hand::Category;
use bonusholdem_engine::jackpot::jackpot_payout;
use bonusholdem_engine::paytable::{HolePattern, Paytable};

const HOUSE_RULES: &str = r#"
[bonus]
dual_aces_multiplier = 500

[[bonus.rules]]
multiplier = 25
pattern = { kind = "pocket_pair", ranks = ["A", "K"] }

[[bonus.rules]]
multiplier = 8
pattern = { kind = "unpaired", high = "A", low = ["K", "Q"], suited = true }

[jackpot]
royal_flush_amount = 250000
straight_flush_percent = 20

[[jackpot.multipliers]]
category = "FourOfAKind"
multiplier = 300

[[jackpot.multipliers]]
category = "FullHouse"
multiplier = 50
"#;

#[test]
fn house_rules_load_from_toml() {
    let table: Paytable = toml::from_str(HOUSE_RULES).expect("parse paytable");
    table.validate().expect("valid paytable");

    assert_eq!(table.bonus.rules.len(), 2);
    assert_eq!(
        table.bonus.rules[0].pattern,
        HolePattern::PocketPair {
            ranks: vec![Rank::Ace, Rank::King]
        }
    );

    let kings = parse_cards("KH KD").unwrap();
    assert_eq!(bonus_multiplier(&[kings[0], kings[1]], None, &table.bonus), 25);
    let ace_jack = parse_cards("AH JH").unwrap();
    assert_eq!(bonus_multiplier(&[ace_jack[0], ace_jack[1]], None, &table.bonus), 0);

    assert_eq!(jackpot_payout(Category::StraightFlush, 5, &table.jackpot).unwrap(), 50_000);
    assert_eq!(jackpot_payout(Category::FourOfAKind, 10, &table.jackpot).unwrap(), 3_000);
    assert_eq!(jackpot_payout(Category::Flush, 10, &table.jackpot).unwrap(), 0);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let table: Paytable = toml::from_str("").expect("empty paytable");
    assert_eq!(table, Paytable::default());
}

#[test]
fn partial_jackpot_section_keeps_other_defaults() {
    let table: Paytable =
        toml::from_str("[jackpot]\nroyal_flush_amount = 500000\n").expect("partial jackpot");
    assert_eq!(table.jackpot.royal_flush_amount, 500_000);
    assert_eq!(table.jackpot.straight_flush_percent, 10);
    assert_eq!(jackpot_payout(Category::FullHouse, 5, &table.jackpot).unwrap(), 400);
}
