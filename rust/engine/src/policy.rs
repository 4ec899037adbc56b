//! The decision contract between a round and whatever plays the player's hand.

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::Decision;

/// Maps the player's hand and the dealer's up-card to HIT or STAND.
///
/// Implementations must be pure: neither input may be mutated and the same
/// inputs must always give the same answer.
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_engine::cards::Card;
/// use blackjack_engine::errors::GameError;
/// use blackjack_engine::hand::value_of;
/// use blackjack_engine::player::Decision;
/// use blackjack_engine::policy::Policy;
///
/// struct HitBelowTwelve;
///
/// impl Policy for HitBelowTwelve {
///     fn decide(&self, hand: &[Card], _up_card: Card) -> Result<Decision, GameError> {
///         Ok(if value_of(hand) < 12 { Decision::Hit } else { Decision::Stand })
///     }
///
///     fn name(&self) -> String {
///         "hit-below-12".to_string()
///     }
/// }
/// ```
pub trait Policy: Send + Sync {
    /// Decide the next move. Returns [`GameError::InvalidAction`] if the
    /// policy produced something other than HIT or STAND.
    fn decide(&self, hand: &[Card], up_card: Card) -> Result<Decision, GameError>;

    /// Identifier used in logs and round records.
    fn name(&self) -> String;
}

/// Ad-hoc policies written as closures returning the raw action word.
/// The word is validated on every call.
impl<F> Policy for F
where
    F: Fn(&[Card], Card) -> String + Send + Sync,
{
    fn decide(&self, hand: &[Card], up_card: Card) -> Result<Decision, GameError> {
        self(hand, up_card).parse()
    }

    fn name(&self) -> String {
        "custom".to_string()
    }
}
