//! # blackjack-engine: Single-Deck Blackjack Round Engine
//!
//! Plays one hand of blackjack at a time between a pluggable player policy
//! and a dealer that draws to 17. Rounds are self-contained and reproducible
//! from a seed, so a driver can run thousands of them, in parallel if it
//! likes, and compare how different policies fare.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`hand`] - Hand value evaluation with Ace soft/hard adjustment
//! - [`deck`] - Seeded single-deck source and the per-round dealt-tracker
//! - [`player`] - Agents (player / dealer) and the HIT / STAND decision
//! - [`policy`] - The decision contract a strategy implements
//! - [`rules`] - Dealer policy and outcome resolution
//! - [`round`] - The round state machine
//! - [`logger`] - Round transcript events and JSONL round records
//! - [`errors`] - Error types for round execution
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::value_of;
//!
//! let hand = [
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Clubs),
//! ];
//! assert_eq!(value_of(&hand), 21);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use blackjack_engine::cards::Card;
//! use blackjack_engine::hand::value_of;
//! use blackjack_engine::round::Round;
//!
//! let hit_below_17 = |hand: &[Card], _up: Card| {
//!     (if value_of(hand) < 17 { "HIT" } else { "STAND" }).to_string()
//! };
//!
//! let mut round = Round::with_seed(hit_below_17, 7);
//! match round.run() {
//!     Ok(outcome) => println!("{}", outcome),
//!     Err(e) => println!("round failed: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod round;
pub mod rules;
