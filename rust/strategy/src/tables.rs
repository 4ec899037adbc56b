//! Basic-strategy lookup tables.
//!
//! Both tables are fixed-size matrices in static memory: one row per hand
//! category, one column per dealer up-card. Ten, Jack, Queen and King share
//! a column. Doubles from the printed charts are played as hits.

use blackjack_engine::cards::Rank;
use blackjack_engine::player::Decision;

use Decision::{Hit as H, Stand as S};

/// Number of distinct up-card columns: Two through Nine, ten-value, Ace.
pub const COLUMNS: usize = 10;

/// Lowest hard total with a row in [`HARD`].
pub const HARD_MIN: u8 = 3;
/// Highest hard total with a row in [`HARD`].
pub const HARD_MAX: u8 = 20;

const ALL_HIT: [Decision; COLUMNS] = [H; COLUMNS];
const ALL_STAND: [Decision; COLUMNS] = [S; COLUMNS];
const STIFF: [Decision; COLUMNS] = [S, S, S, S, S, H, H, H, H, H];

/// Rows are hand totals 3 through 20.
pub static HARD: [[Decision; COLUMNS]; (HARD_MAX - HARD_MIN + 1) as usize] = [
    ALL_HIT,                      // 3
    ALL_HIT,                      // 4
    ALL_HIT,                      // 5
    ALL_HIT,                      // 6
    ALL_HIT,                      // 7
    ALL_HIT,                      // 8
    ALL_HIT,                      // 9
    ALL_HIT,                      // 10
    ALL_HIT,                      // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    STIFF,                        // 13
    STIFF,                        // 14
    STIFF,                        // 15
    STIFF,                        // 16
    ALL_STAND,                    // 17
    ALL_STAND,                    // 18
    ALL_STAND,                    // 19
    ALL_STAND,                    // 20
];

/// Rows are the card held next to the Ace: Two through Nine, then ten-value.
pub static SOFT: [[Decision; COLUMNS]; 9] = [
    ALL_HIT,                        // A-2
    ALL_HIT,                        // A-3
    ALL_HIT,                        // A-4
    ALL_HIT,                        // A-5
    ALL_HIT,                        // A-6
    [H, H, H, H, H, S, S, H, H, H], // A-7
    [S, S, S, S, H, S, S, S, S, S], // A-8
    ALL_STAND,                      // A-9
    ALL_STAND,                      // A-10
];

/// Column of a dealer up-card.
pub fn column(up: Rank) -> usize {
    match up {
        Rank::Two => 0,
        Rank::Three => 1,
        Rank::Four => 2,
        Rank::Five => 3,
        Rank::Six => 4,
        Rank::Seven => 5,
        Rank::Eight => 6,
        Rank::Nine => 7,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 8,
        Rank::Ace => 9,
    }
}

/// Hard-table lookup. Totals outside 3..=20 never reach a decision in a
/// real round; they still get an answer so the lookup is total.
pub fn hard(total: u8, up: Rank) -> Decision {
    match total {
        0..HARD_MIN => H,
        HARD_MIN..=HARD_MAX => HARD[usize::from(total - HARD_MIN)][column(up)],
        _ => S,
    }
}

/// Soft-table lookup by the non-Ace card. `None` for an Ace, since a pair
/// of Aces is not a soft hand.
pub fn soft(other: Rank, up: Rank) -> Option<Decision> {
    let row = match other {
        Rank::Ace => return None,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 8,
        r => usize::from(r.value() - 2),
    };
    Some(SOFT[row][column(up)])
}
