//! # blackjack-strategy: Player Strategies for Blackjack Simulation
//!
//! Provides the catalogue of player strategies the simulator compares.
//! Every strategy is a pure function of the player's hand and the dealer's
//! up-card, and answers HIT or STAND.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Tagged set of built-in strategies, usable as a round [`Policy`]
//! - [`tables`] - Static basic-strategy lookup tables
//! - [`catalogue`] - The strategies a full simulation run compares
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::round::Round;
//! use blackjack_strategy::Strategy;
//!
//! let strategy: Strategy = "optimal-soft".parse().expect("known strategy");
//! let mut round = Round::with_seed(strategy, 42);
//! let outcome = round.run().expect("round completes");
//! println!("{}: {}", strategy.title(), outcome);
//! ```
//!
//! ## Strategy Names
//!
//! - `"always-hit"` - hit until 21 or bust
//! - `"always-stand"` - keep the first two cards
//! - `"stand-after-N"` - hit while the hand is below N
//! - `"optimal-hard"` - basic strategy by hand total
//! - `"optimal-soft"` - basic strategy for Ace-X hands, hard table otherwise

use std::fmt;
use std::str::FromStr;

use blackjack_engine::cards::Card;
use blackjack_engine::errors::GameError;
use blackjack_engine::hand::{is_soft_pair, value_of, BLACKJACK};
use blackjack_engine::player::Decision;
use blackjack_engine::policy::Policy;
use serde::{Deserialize, Serialize};

pub mod tables;

/// Thresholds the default catalogue sweeps.
pub const THRESHOLDS: std::ops::RangeInclusive<u8> = 10..=20;

/// Hit until the hand reaches 21 or busts.
pub fn always_hit(hand: &[Card], _up_card: Card) -> Decision {
    if value_of(hand) < BLACKJACK {
        Decision::Hit
    } else {
        Decision::Stand
    }
}

/// Keep whatever was dealt.
pub fn always_stand(_hand: &[Card], _up_card: Card) -> Decision {
    Decision::Stand
}

/// Builds a strategy that hits while the hand is below `threshold`.
///
/// # Example
///
/// ```rust
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::player::Decision;
/// use blackjack_strategy::stand_after_threshold;
///
/// let stand_on_15 = stand_after_threshold(15);
/// let hand = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Four, Suit::Clubs)];
/// let up = Card::new(Rank::Nine, Suit::Hearts);
/// assert_eq!(stand_on_15(&hand[..], up), Decision::Hit);
/// ```
pub fn stand_after_threshold(threshold: u8) -> impl Fn(&[Card], Card) -> Decision + Copy {
    move |hand: &[Card], _up_card: Card| {
        if value_of(hand) < threshold {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

/// Basic strategy keyed by hand total and dealer up-card.
pub fn optimal_hard(hand: &[Card], up_card: Card) -> Decision {
    tables::hard(value_of(hand), up_card.rank)
}

/// Basic strategy for a two-card hand holding exactly one Ace, keyed by the
/// other card. Anything else (more than two cards, no Ace, two Aces) is
/// played with [`optimal_hard`].
pub fn optimal_soft(hand: &[Card], up_card: Card) -> Decision {
    if !is_soft_pair(hand) {
        return optimal_hard(hand, up_card);
    }
    hand.iter()
        .find(|c| !c.rank.is_ace())
        .and_then(|other| tables::soft(other.rank, up_card.rank))
        .unwrap_or_else(|| optimal_hard(hand, up_card))
}

/// The built-in strategies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    AlwaysHit,
    AlwaysStand,
    /// Hit while the hand value is below the threshold
    StandAfter(u8),
    OptimalHard,
    OptimalSoft,
}

impl Strategy {
    pub fn decide(&self, hand: &[Card], up_card: Card) -> Decision {
        match *self {
            Strategy::AlwaysHit => always_hit(hand, up_card),
            Strategy::AlwaysStand => always_stand(hand, up_card),
            Strategy::StandAfter(threshold) => stand_after_threshold(threshold)(hand, up_card),
            Strategy::OptimalHard => optimal_hard(hand, up_card),
            Strategy::OptimalSoft => optimal_soft(hand, up_card),
        }
    }

    /// Short identifier, accepted back by [`Strategy::from_str`].
    pub fn name(&self) -> String {
        match self {
            Strategy::AlwaysHit => "always-hit".to_string(),
            Strategy::AlwaysStand => "always-stand".to_string(),
            Strategy::StandAfter(t) => format!("stand-after-{}", t),
            Strategy::OptimalHard => "optimal-hard".to_string(),
            Strategy::OptimalSoft => "optimal-soft".to_string(),
        }
    }

    /// Heading used in simulation reports.
    pub fn title(&self) -> String {
        match self {
            Strategy::AlwaysHit => "Strategy: Always be hitting".to_string(),
            Strategy::AlwaysStand => "Strategy: Always be standing".to_string(),
            Strategy::StandAfter(t) => format!("Strategy: Stand After Threshold {}", t),
            Strategy::OptimalHard => "Strategy: Optimal Hard".to_string(),
            Strategy::OptimalSoft => "Strategy: Optimal Soft".to_string(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::AlwaysHit => "Keep hitting until you get 21 or bust.",
            Strategy::AlwaysStand => "Be happy with the two cards you're dealt.",
            Strategy::StandAfter(_) => {
                "Hit only if the value of your cards is under a certain threshold."
            }
            Strategy::OptimalHard => "Basic strategy by hand total; doubles are played as hits.",
            Strategy::OptimalSoft => {
                "Basic strategy for an Ace and one other card, hard strategy otherwise."
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Policy for Strategy {
    fn decide(&self, hand: &[Card], up_card: Card) -> Result<Decision, GameError> {
        Ok(Strategy::decide(self, hand, up_card))
    }

    fn name(&self) -> String {
        Strategy::name(self)
    }
}

/// Returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown strategy: {}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "always-hit" => Ok(Strategy::AlwaysHit),
            "always-stand" => Ok(Strategy::AlwaysStand),
            "optimal-hard" => Ok(Strategy::OptimalHard),
            "optimal-soft" => Ok(Strategy::OptimalSoft),
            other => other
                .strip_prefix("stand-after-")
                .and_then(|t| t.parse::<u8>().ok())
                .map(Strategy::StandAfter)
                .ok_or_else(|| UnknownStrategy(s.to_string())),
        }
    }
}

/// Every strategy a full simulation compares, in report order.
///
/// # Example
///
/// ```rust
/// use blackjack_strategy::{catalogue, Strategy};
///
/// let all = catalogue();
/// assert_eq!(all.first(), Some(&Strategy::AlwaysHit));
/// assert_eq!(all.len(), 15);
/// ```
pub fn catalogue() -> Vec<Strategy> {
    let mut v = vec![Strategy::AlwaysHit, Strategy::AlwaysStand];
    v.extend(THRESHOLDS.map(Strategy::StandAfter));
    v.push(Strategy::OptimalHard);
    v.push(Strategy::OptimalSoft);
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Rank, Suit};

    fn c(r: Rank) -> Card {
        Card::new(r, Suit::Diamonds)
    }

    fn up(r: Rank) -> Card {
        Card::new(r, Suit::Clubs)
    }

    #[test]
    fn names_round_trip_through_parse() {
        for s in catalogue() {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("yolo".parse::<Strategy>().is_err());
        assert!("stand-after-".parse::<Strategy>().is_err());
        assert!("stand-after-300".parse::<Strategy>().is_err());
        assert_eq!(" Optimal-Hard ".parse::<Strategy>(), Ok(Strategy::OptimalHard));
    }

    #[test]
    fn threshold_compares_against_current_value() {
        let s = Strategy::StandAfter(17);
        assert_eq!(s.decide(&[c(Rank::Ten), c(Rank::Six)], up(Rank::Two)), Decision::Hit);
        assert_eq!(s.decide(&[c(Rank::Ten), c(Rank::Seven)], up(Rank::Two)), Decision::Stand);
    }

    #[test]
    fn soft_hands_use_the_soft_table() {
        let s = Strategy::OptimalSoft;
        assert_eq!(s.decide(&[c(Rank::Ace), c(Rank::Nine)], up(Rank::Six)), Decision::Stand);
        assert_eq!(s.decide(&[c(Rank::Six), c(Rank::Ace)], up(Rank::Seven)), Decision::Hit);
        assert_eq!(s.decide(&[c(Rank::Ace), c(Rank::Seven)], up(Rank::Eight)), Decision::Stand);
    }

    #[test]
    fn non_soft_hands_fall_back_to_hard_table() {
        let dealer = up(Rank::Three);
        let pair_of_aces = [c(Rank::Ace), Card::new(Rank::Ace, Suit::Hearts)];
        let three_cards = [c(Rank::Ace), c(Rank::Two), c(Rank::Nine)];
        let no_ace = [c(Rank::Ten), c(Rank::Three)];
        for hand in [&pair_of_aces[..], &three_cards[..], &no_ace[..]] {
            assert_eq!(optimal_soft(hand, dealer), optimal_hard(hand, dealer));
        }
        // A-2-9 plays as a hard 12
        assert_eq!(optimal_soft(&three_cards, dealer), Decision::Hit);
    }

    #[test]
    fn policy_impl_never_fails() {
        let hand = [c(Rank::Ten), c(Rank::Two)];
        for s in catalogue() {
            assert!(Policy::decide(&s, &hand, up(Rank::Ten)).is_ok());
        }
    }
}
