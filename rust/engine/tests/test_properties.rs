/// Property-based tests for classification and settlement using proptest.
///
/// Hands are drawn as distinct indices into a full deck so every generated
/// input is well formed.
use bonusholdem_engine::bets::BetStructure;
use bonusholdem_engine::cards::{full_deck, Card};
use bonusholdem_engine::hand::{best_of_seven, classify, compare_hands, Category};
use bonusholdem_engine::showdown::{resolve, Outcome, ANTE_WIN_MIN};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), n).prop_shuffle()
}

fn bet_strategy() -> impl Strategy<Value = BetStructure> {
    (
        25u32..=500,
        0u32..=100,
        0usize..6,
        0u32..=200,
        0u32..=200,
        0u32..=200,
    )
        .prop_map(|(ante, bonus, jp, flop, turn, river)| BetStructure {
            ante,
            bonus,
            jackpot: jp as u32 * 5,
            flop,
            turn,
            river,
        })
}

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(cards in distinct_cards(5)) {
        let first = classify(&cards).unwrap();
        let again = classify(&cards).unwrap();
        prop_assert_eq!(&first, &again);
        prop_assert!(Category::ALL.contains(&first.category));
        prop_assert_eq!(first.score(), first.category.score());
        let mut used = first.cards.to_vec();
        used.sort();
        let mut given = cards.clone();
        given.sort();
        prop_assert_eq!(used, given);
    }

    #[test]
    fn classification_ignores_card_order(cards in distinct_cards(5)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        let a = classify(&cards).unwrap();
        let b = classify(&reversed).unwrap();
        prop_assert_eq!(a.category, b.category);
        prop_assert_eq!(a.compare, b.compare);
    }

    #[test]
    fn best_of_seven_is_maximal(cards in distinct_cards(7)) {
        let best = best_of_seven(&cards).unwrap();
        for skip_a in 0..7 {
            for skip_b in skip_a + 1..7 {
                let subset: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip_a && i != skip_b)
                    .map(|(_, &c)| c)
                    .collect();
                let r = classify(&subset).unwrap();
                prop_assert!(best.score() >= r.score());
                prop_assert!(!compare_hands(&r, &best).is_gt());
            }
        }
        for c in best.cards {
            prop_assert!(cards.contains(&c));
        }
    }

    #[test]
    fn fold_always_pays_nothing(cards in distinct_cards(9), bets in bet_strategy(), dealt in 0usize..=5) {
        let player = [cards[0], cards[1]];
        let dealer = [cards[2], cards[3]];
        let r = resolve(player, dealer, &cards[4..4 + dealt], &bets, true).unwrap();
        prop_assert_eq!(r.total, 0);
        prop_assert_eq!(r.ante_return, 0);
        prop_assert_eq!(r.play_return, 0);
        prop_assert_eq!(r.bonus_return, 0);
        prop_assert_eq!(r.jackpot_return, 0);
    }

    #[test]
    fn ante_and_play_follow_the_outcome(cards in distinct_cards(9), bets in bet_strategy()) {
        let player = [cards[0], cards[1]];
        let dealer = [cards[2], cards[3]];
        let r = resolve(player, dealer, &cards[4..9], &bets, false).unwrap();
        let ante = u64::from(bets.ante);
        let play = bets.play_stake();
        let category = r.player_hand.as_ref().unwrap().category;
        match r.outcome {
            Outcome::PlayerWin if category >= ANTE_WIN_MIN => prop_assert_eq!(r.ante_return, ante * 2),
            Outcome::PlayerWin | Outcome::Tie => prop_assert_eq!(r.ante_return, ante),
            Outcome::DealerWin => prop_assert_eq!(r.ante_return, 0),
        }
        match r.outcome {
            Outcome::PlayerWin => prop_assert_eq!(r.play_return, play * 2),
            Outcome::Tie => prop_assert_eq!(r.play_return, play),
            Outcome::DealerWin => prop_assert_eq!(r.play_return, 0),
        }
        prop_assert_eq!(
            r.total,
            r.ante_return + r.play_return + r.bonus_return + r.jackpot_return
        );
        if r.outcome == Outcome::Tie {
            prop_assert!(!r.kicker_decided);
        }
    }
}
