use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// Which side of the table an agent plays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Role {
    Player,
    Dealer,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Player => "Player",
            Role::Dealer => "Dealer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The only two moves a player can make.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Take another card
    Hit,
    /// Keep the current hand
    Stand,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Hit => "HIT",
            Decision::Stand => "STAND",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = GameError;

    /// Accepts exactly `HIT` or `STAND`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIT" => Ok(Decision::Hit),
            "STAND" => Ok(Decision::Stand),
            other => Err(GameError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

/// Either the player or the dealer, with the hand they hold.
/// The hand's value is always computed from the current cards.
#[derive(Debug, Clone)]
pub struct Agent {
    role: Role,
    hand: Hand,
}

impl Agent {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            hand: Hand::new(),
        }
    }

    pub fn player() -> Self {
        Self::new(Role::Player)
    }

    pub fn dealer() -> Self {
        Self::new(Role::Dealer)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    pub(crate) fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }
}
