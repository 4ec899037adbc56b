use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Cards already drawn during one round.
#[derive(Debug, Clone, Default)]
pub struct DealtTracker {
    dealt: HashSet<Card>,
}

impl DealtTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.dealt.contains(card)
    }

    pub fn len(&self) -> usize {
        self.dealt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dealt.is_empty()
    }

    fn record(&mut self, card: Card) {
        self.dealt.insert(card);
    }
}

#[derive(Debug)]
enum Source {
    /// Uniform sampling with replacement, retried until an undealt card comes up.
    Sampled(ChaCha20Rng),
    /// Cards come out in the stored order.
    Stacked { position: usize },
}

/// A single-deck card source.
///
/// The deck itself is never consumed: uniqueness within a round comes from
/// the [`DealtTracker`] passed to [`Deck::draw`].
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    source: Source,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self {
            cards,
            source: Source::Sampled(rng),
        }
    }

    /// A deck that deals `cards` front to back. Cards already present in the
    /// tracker are skipped, and the scan wraps around to the front so the
    /// deck can be drawn again under a fresh tracker.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            source: Source::Stacked { position: 0 },
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck the tracker has not seen yet.
    pub fn remaining(&self, tracker: &DealtTracker) -> usize {
        self.cards.iter().filter(|c| !tracker.contains(c)).count()
    }

    pub fn draw(&mut self, tracker: &mut DealtTracker) -> Result<Card, GameError> {
        if self.remaining(tracker) == 0 {
            return Err(GameError::DeckExhausted);
        }

        let card = match &mut self.source {
            Source::Sampled(rng) => loop {
                let candidate = self.cards[rng.random_range(0..self.cards.len())];
                if !tracker.contains(&candidate) {
                    break candidate;
                }
            },
            Source::Stacked { position } => {
                let len = self.cards.len();
                let index = (0..len)
                    .map(|k| (*position + k) % len)
                    .find(|&i| !tracker.contains(&self.cards[i]))
                    .ok_or(GameError::DeckExhausted)?;
                *position = (index + 1) % len;
                self.cards[index]
            }
        };
        tracker.record(card);
        Ok(card)
    }
}
