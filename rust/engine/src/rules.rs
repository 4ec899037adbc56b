use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::BLACKJACK;
use crate::player::Role;

/// The dealer draws while below this total and stands on anything at or above it.
pub const DEALER_STANDS_ON: u8 = 17;

/// Final result of a round. A push is a decided round with no winner,
/// which is different from a round that has not been resolved yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    pub fn winner(self) -> Option<Role> {
        match self {
            Outcome::PlayerWins => Some(Role::Player),
            Outcome::DealerWins => Some(Role::Dealer),
            Outcome::Push => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(role) => write!(f, "{} wins", role),
            None => f.write_str("Nobody wins"),
        }
    }
}

/// Fixed dealer policy: the dealer never chooses.
pub fn dealer_should_draw(dealer_value: u8) -> bool {
    dealer_value < DEALER_STANDS_ON
}

/// Checks the player's hand before each decision.
///
/// Returns the outcome when the player's total alone settles the round:
/// exactly 21 wins on the spot, anything above 21 is a bust.
pub fn player_outcome(player_value: u8) -> Option<Outcome> {
    if player_value == BLACKJACK {
        Some(Outcome::PlayerWins)
    } else if player_value > BLACKJACK {
        Some(Outcome::DealerWins)
    } else {
        None
    }
}

/// Compares final totals once the dealer has finished drawing.
///
/// Checked in order:
/// 1. Dealer over 21: the player wins.
/// 2. Dealer exactly 21: the dealer wins.
/// 3. Dealer higher: the dealer wins.
/// 4. Equal totals: push.
/// 5. Otherwise the player wins.
///
/// Rule 2 can only fire against a player total below 21, because a player
/// who reached 21 already won during their own turn.
///
/// # Examples
///
/// ```
/// use blackjack_engine::rules::{resolve, Outcome};
///
/// assert_eq!(resolve(20, 20), Outcome::Push);
/// assert_eq!(resolve(18, 22), Outcome::PlayerWins);
/// assert_eq!(resolve(20, 21), Outcome::DealerWins);
/// ```
pub fn resolve(player_value: u8, dealer_value: u8) -> Outcome {
    if dealer_value > BLACKJACK {
        Outcome::PlayerWins
    } else if dealer_value == BLACKJACK {
        Outcome::DealerWins
    } else if dealer_value > player_value {
        Outcome::DealerWins
    } else if dealer_value == player_value {
        Outcome::Push
    } else {
        Outcome::PlayerWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_draws_to_seventeen() {
        assert!(dealer_should_draw(16));
        assert!(!dealer_should_draw(17));
        assert!(!dealer_should_draw(23));
    }

    #[test]
    fn player_total_settles_only_at_or_over_21() {
        assert_eq!(player_outcome(21), Some(Outcome::PlayerWins));
        assert_eq!(player_outcome(22), Some(Outcome::DealerWins));
        assert_eq!(player_outcome(20), None);
    }

    #[test]
    fn resolution_order() {
        assert_eq!(resolve(12, 25), Outcome::PlayerWins);
        assert_eq!(resolve(20, 21), Outcome::DealerWins);
        assert_eq!(resolve(17, 19), Outcome::DealerWins);
        assert_eq!(resolve(19, 19), Outcome::Push);
        assert_eq!(resolve(19, 17), Outcome::PlayerWins);
    }

    #[test]
    fn push_has_no_winner() {
        assert_eq!(Outcome::Push.winner(), None);
        assert_eq!(Outcome::DealerWins.winner(), Some(Role::Dealer));
        assert_eq!(Outcome::Push.to_string(), "Nobody wins");
    }
}
