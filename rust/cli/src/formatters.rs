//! Card and round formatters for terminal display.
//!
//! Pure functions turning engine values into the lines the `play` and
//! `sim` commands print. Cards render with their full names ("Ten of
//! Spades") or, via [`format_card_short`], as a rank letter plus a suit
//! symbol with an ASCII fallback.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::format_cards;
//!
//! let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Nine, Suit::Hearts)];
//! assert_eq!(format_cards(&hand), "Ace of Spades, Nine of Hearts");
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::hand::value_of;
use blackjack_engine::logger::RoundEvent;
use blackjack_engine::player::{Decision, Role};

/// Check if the terminal supports Unicode suit symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Single-character rank (2-9, T, J, Q, K, A).
pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

/// Compact card such as `T♠` (or `Ts` without Unicode).
pub fn format_card_short(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Full card names joined with commas.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compact hand such as `[A♠ 9♥]`.
pub fn format_hand_short(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card_short).collect();
    format!("[{}]", inner.join(" "))
}

/// Turns a round transcript into narration lines.
///
/// The opening deal is summarised once all four cards are out: the dealer's
/// visible card, then the player's hand and value. The hole card stays
/// hidden until the dealer turns it over. The final `Resolved` event is not
/// narrated; callers print the outcome themselves.
pub fn narrate(events: &[RoundEvent]) -> Vec<String> {
    let mut lines = vec!["Dealing cards...".to_string()];
    let mut player: Vec<Card> = Vec::new();
    let mut up_card: Option<Card> = None;
    let mut deal_summarised = false;

    for event in events {
        if !deal_summarised && !matches!(event, RoundEvent::Dealt { .. }) {
            if let Some(up) = up_card {
                lines.push(format!("{} shows {}", Role::Dealer, up));
            }
            lines.push(player_line(&player, value_of(&player)));
            deal_summarised = true;
        }

        match *event {
            RoundEvent::Dealt {
                role: Role::Dealer,
                card,
                hidden: false,
            } => up_card = Some(card),
            RoundEvent::Dealt {
                role: Role::Player,
                card,
                ..
            } => player.push(card),
            RoundEvent::Dealt { .. } => {}
            RoundEvent::Decided {
                decision: Decision::Hit,
                ..
            } => lines.push("Player chose to hit!".to_string()),
            RoundEvent::Decided {
                decision: Decision::Stand,
                ..
            } => lines.push("Player stays".to_string()),
            RoundEvent::PlayerDrew { card, value } => {
                player.push(card);
                lines.push(player_line(&player, value));
            }
            RoundEvent::PlayerBlackjack { .. } => lines.push("Player has Blackjack!".to_string()),
            RoundEvent::PlayerBust { value } => {
                lines.push(format!("Player has busted ({})", value))
            }
            RoundEvent::Revealed { card, value } => {
                lines.push(format!("Dealer flips other card: it's {} ({})", card, value))
            }
            RoundEvent::DealerDrew { card, value } => {
                lines.push(format!("Dealer pulls a {} ({})", card, value))
            }
            RoundEvent::Resolved { .. } => {}
        }
    }
    lines
}

fn player_line(cards: &[Card], value: u8) -> String {
    format!("{} has {} ({})", Role::Player, format_cards(cards), value)
}
