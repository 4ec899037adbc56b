use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Highest total a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// Best blackjack value of a set of cards.
///
/// Aces start at 11. While the total is over 21, one Ace at a time is
/// downgraded to 1; downgrading stops as soon as the total is 21 or less, so
/// the result is the highest non-busting total, or the smallest overshoot
/// when every Ace is already counted as 1.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::value_of;
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ten, Suit::Clubs),
/// ];
/// assert_eq!(value_of(&hand), 12);
/// ```
pub fn value_of(cards: &[Card]) -> u8 {
    let mut total: u32 = cards.iter().map(|c| u32::from(c.value())).sum();
    let mut aces = cards.iter().filter(|c| c.rank.is_ace()).count();

    while total > u32::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    saturate(total)
}

fn saturate(total: u32) -> u8 {
    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Total with every Ace counted as 1.
pub fn lowest_total(cards: &[Card]) -> u8 {
    saturate(
        cards
            .iter()
            .map(|c| if c.rank.is_ace() { 1 } else { u32::from(c.value()) })
            .sum(),
    )
}

/// Total with every Ace counted as 11.
pub fn highest_total(cards: &[Card]) -> u8 {
    saturate(cards.iter().map(|c| u32::from(c.value())).sum())
}

/// A genuine two-card soft hand: exactly two cards, exactly one of them an Ace.
/// A pair of Aces does not qualify.
pub fn is_soft_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && cards.iter().filter(|c| c.rank.is_ace()).count() == 1
}

/// Ordered cards held by one agent. Cards are only ever appended.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(6),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn value(&self) -> u8 {
        value_of(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(r: Rank) -> Card {
        Card::new(r, Suit::Spades)
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(value_of(&[]), 0);
    }

    #[test]
    fn soft_pair_needs_exactly_one_ace() {
        assert!(is_soft_pair(&[c(Rank::Ace), c(Rank::Six)]));
        assert!(!is_soft_pair(&[c(Rank::Ace), c(Rank::Ace)]));
        assert!(!is_soft_pair(&[c(Rank::Nine), c(Rank::Six)]));
        assert!(!is_soft_pair(&[c(Rank::Ace), c(Rank::Two), c(Rank::Three)]));
    }

    #[test]
    fn hand_value_tracks_appends() {
        let mut hand = Hand::new();
        hand.push(c(Rank::Ace));
        assert_eq!(hand.value(), 11);
        hand.push(c(Rank::Nine));
        assert_eq!(hand.value(), 20);
        hand.push(c(Rank::Five));
        assert_eq!(hand.value(), 15);
        assert_eq!(hand.cards().len(), 3);
    }
}
