use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// Cards for one hand: both hole pairs and the full board, in deal order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DealtHand {
    pub player: [Card; 2],
    pub dealer: [Card; 2],
    pub board: [Card; 5],
}

/// A 52-card deck shuffled by a seeded ChaCha20 stream, so a seed always
/// reproduces the same sequence of deals.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Shuffles and deals player, dealer, then the five board cards.
    pub fn deal_hand(&mut self) -> Result<DealtHand, EngineError> {
        self.shuffle();
        let mut next = || {
            self.deal_card()
                .ok_or_else(|| EngineError::hand("deck exhausted"))
        };
        let player = [next()?, next()?];
        let dealer = [next()?, next()?];
        let board = [next()?, next()?, next()?, next()?, next()?];
        Ok(DealtHand {
            player,
            dealer,
            board,
        })
    }
}
