//! Win / loss / push counters from the player's point of view.

use blackjack_engine::rules::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.wins += 1,
            Outcome::DealerWins => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.pushes
    }

    /// Win, loss and push percentages. All zero for an empty tally.
    pub fn percentages(&self) -> (f64, f64, f64) {
        let total = self.total();
        if total == 0 {
            return (0.0, 0.0, 0.0);
        }
        let pct = |n: u64| n as f64 / total as f64 * 100.0;
        (pct(self.wins), pct(self.losses), pct(self.pushes))
    }

    /// Report line: `W% wins, L% losses, P% draws (T%)`.
    pub fn summary(&self) -> String {
        let (w, l, p) = self.percentages();
        format!(
            "{:.2}% wins, {:.2}% losses, {:.2}% draws ({:.2}%)",
            w,
            l,
            p,
            w + l + p
        )
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for outcome in iter {
            tally.record(outcome);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_formats_two_decimals() {
        let tally: Tally = [
            Outcome::PlayerWins,
            Outcome::DealerWins,
            Outcome::DealerWins,
            Outcome::Push,
        ]
        .into_iter()
        .collect();
        assert_eq!(tally.total(), 4);
        assert_eq!(
            tally.summary(),
            "25.00% wins, 50.00% losses, 25.00% draws (100.00%)"
        );
    }

    #[test]
    fn test_empty_tally_reports_zero() {
        assert_eq!(
            Tally::default().summary(),
            "0.00% wins, 0.00% losses, 0.00% draws (0.00%)"
        );
    }
}
