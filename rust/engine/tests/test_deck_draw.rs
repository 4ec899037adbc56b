use std::collections::HashSet;

use blackjack_engine::cards::Card;
use blackjack_engine::deck::{DealtTracker, Deck};
use blackjack_engine::errors::GameError;

#[test]
fn draws_are_unique_and_tracked() {
    let mut deck = Deck::new_with_seed(42);
    let mut tracker = DealtTracker::new();
    let mut seen = HashSet::new();
    for n in 1..=20 {
        let card = deck.draw(&mut tracker).expect("deck has cards left");
        assert!(seen.insert(card), "card {:?} dealt twice", card);
        assert_eq!(tracker.len(), n);
        assert!(tracker.contains(&card));
    }
}

#[test]
fn fifty_third_draw_is_exhaustion() {
    let mut deck = Deck::new_with_seed(7);
    let mut tracker = DealtTracker::new();
    let drawn: HashSet<Card> = (0..52).map(|_| deck.draw(&mut tracker).unwrap()).collect();
    assert_eq!(drawn.len(), 52);
    assert_eq!(deck.draw(&mut tracker), Err(GameError::DeckExhausted));
    assert_eq!(tracker.len(), 52, "failed draw must not grow the tracker");
}

#[test]
fn same_seed_same_cards() {
    let mut a = Deck::new_with_seed(12345);
    let mut b = Deck::new_with_seed(12345);
    let mut ta = DealtTracker::new();
    let mut tb = DealtTracker::new();
    let x: Vec<Card> = (0..10).map(|_| a.draw(&mut ta).unwrap()).collect();
    let y: Vec<Card> = (0..10).map(|_| b.draw(&mut tb).unwrap()).collect();
    assert_eq!(x, y, "same seed must yield identical draws");
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    let mut ta = DealtTracker::new();
    let mut tb = DealtTracker::new();
    let x: Vec<Card> = (0..10).map(|_| a.draw(&mut ta).unwrap()).collect();
    let y: Vec<Card> = (0..10).map(|_| b.draw(&mut tb).unwrap()).collect();
    assert_ne!(x, y, "different seeds should produce different draws (high probability)");
}

#[test]
fn one_tracker_can_span_fresh_decks() {
    // the tracker, not the deck, decides what is still available
    let mut tracker = DealtTracker::new();
    let mut first = Deck::new_with_seed(5);
    for _ in 0..50 {
        first.draw(&mut tracker).unwrap();
    }
    let mut second = Deck::new_with_seed(6);
    assert_eq!(second.remaining(&tracker), 2);
    second.draw(&mut tracker).unwrap();
    second.draw(&mut tracker).unwrap();
    assert_eq!(second.draw(&mut tracker), Err(GameError::DeckExhausted));
}

#[test]
fn stacked_deck_redeals_under_a_fresh_tracker() {
    let cards = blackjack_engine::cards::full_deck();
    let mut deck = Deck::stacked(cards.clone());

    let mut first = DealtTracker::new();
    let x: Vec<Card> = (0..10).map(|_| deck.draw(&mut first).unwrap()).collect();
    assert_eq!(x, cards[..10]);

    // the second tracker starts mid-deck and wraps to the front
    let mut second = DealtTracker::new();
    let y: HashSet<Card> = (0..52).map(|_| deck.draw(&mut second).unwrap()).collect();
    assert_eq!(y.len(), 52);
    assert_eq!(deck.draw(&mut second), Err(GameError::DeckExhausted));
    assert_eq!(deck.draw(&mut first).unwrap(), cards[10]);
}
