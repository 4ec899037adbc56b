use crate::cards::Card;
use crate::deck::{DealtTracker, Deck};
use crate::errors::GameError;
use crate::logger::{RoundEvent, RoundRecord};
use crate::player::{Agent, Decision, Role};
use crate::policy::Policy;
use crate::rules::{self, Outcome};

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Nothing dealt yet
    Dealing,
    /// The policy is playing the player's hand against the visible card
    PlayerTurn { up_card: Card },
    /// The player stood; the dealer draws to 17
    DealerTurn,
    /// Terminal: the outcome never changes after this
    Resolved(Outcome),
    /// Terminal: a draw or a decision failed
    Aborted(GameError),
}

/// One simulated hand of blackjack between a policy-driven player and the dealer.
///
/// A round owns its deck, its dealt-tracker and both agents, so independent
/// rounds can run on separate threads without sharing anything.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::Card;
/// use blackjack_engine::round::Round;
///
/// let stand = |_: &[Card], _: Card| "STAND".to_string();
/// let mut round = Round::with_seed(stand, 42);
/// let outcome = round.run().expect("a single-deck round cannot run dry");
///
/// assert_eq!(round.outcome(), Some(outcome));
/// assert!(round.dealer().cards().len() >= 2);
/// ```
pub struct Round<P> {
    policy: P,
    deck: Deck,
    tracker: DealtTracker,
    dealer: Agent,
    player: Agent,
    seed: Option<u64>,
    verbose: bool,
    phase: Phase,
    decisions: Vec<Decision>,
    events: Vec<RoundEvent>,
}

impl<P: Policy> Round<P> {
    /// A round over a freshly shuffled deck with an entropy seed.
    pub fn new(policy: P) -> Self {
        Self::with_seed(policy, rand::random())
    }

    pub fn with_seed(policy: P, seed: u64) -> Self {
        let mut round = Self::with_deck(policy, Deck::new_with_seed(seed));
        round.seed = Some(seed);
        round
    }

    pub fn with_deck(policy: P, deck: Deck) -> Self {
        Self {
            policy,
            deck,
            tracker: DealtTracker::new(),
            dealer: Agent::dealer(),
            player: Agent::player(),
            seed: None,
            verbose: false,
            phase: Phase::Dealing,
            decisions: Vec::new(),
            events: Vec::with_capacity(12),
        }
    }

    /// Verbose rounds log every event at `debug` instead of `trace`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Plays the round to completion.
    ///
    /// Running an already resolved round returns the same outcome again;
    /// running an aborted round returns the same error again.
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        loop {
            let step = match self.phase.clone() {
                Phase::Dealing => self.deal(),
                Phase::PlayerTurn { up_card } => self.play_player(up_card),
                Phase::DealerTurn => self.play_dealer(),
                Phase::Resolved(outcome) => return Ok(outcome),
                Phase::Aborted(e) => return Err(e),
            };
            if let Err(e) = step {
                tracing::warn!(error = %e, policy = %self.policy.name(), "round aborted");
                self.phase = Phase::Aborted(e.clone());
                return Err(e);
            }
        }
    }

    fn deal(&mut self) -> Result<(), GameError> {
        let up_card = self.draw_to(Role::Dealer, false)?;
        self.draw_to(Role::Player, false)?;
        self.draw_to(Role::Dealer, true)?;
        self.draw_to(Role::Player, false)?;
        self.phase = Phase::PlayerTurn { up_card };
        Ok(())
    }

    fn draw_to(&mut self, role: Role, hidden: bool) -> Result<Card, GameError> {
        let card = self.deck.draw(&mut self.tracker)?;
        match role {
            Role::Player => self.player.give_card(card),
            Role::Dealer => self.dealer.give_card(card),
        }
        self.emit(RoundEvent::Dealt { role, card, hidden });
        Ok(card)
    }

    fn play_player(&mut self, up_card: Card) -> Result<(), GameError> {
        loop {
            let value = self.player.value();
            if let Some(outcome) = rules::player_outcome(value) {
                self.emit(match outcome {
                    Outcome::PlayerWins => RoundEvent::PlayerBlackjack { value },
                    _ => RoundEvent::PlayerBust { value },
                });
                self.finish(outcome);
                return Ok(());
            }

            let decision = self.policy.decide(self.player.cards(), up_card)?;
            self.decisions.push(decision);
            self.emit(RoundEvent::Decided { decision, value });

            match decision {
                Decision::Hit => {
                    let card = self.deck.draw(&mut self.tracker)?;
                    self.player.give_card(card);
                    let value = self.player.value();
                    self.emit(RoundEvent::PlayerDrew { card, value });
                }
                Decision::Stand => {
                    self.phase = Phase::DealerTurn;
                    return Ok(());
                }
            }
        }
    }

    fn play_dealer(&mut self) -> Result<(), GameError> {
        let hole = self.dealer.cards().get(1).copied();
        if let Some(card) = hole {
            let value = self.dealer.value();
            self.emit(RoundEvent::Revealed { card, value });
        }

        while rules::dealer_should_draw(self.dealer.value()) {
            let card = self.deck.draw(&mut self.tracker)?;
            self.dealer.give_card(card);
            let value = self.dealer.value();
            self.emit(RoundEvent::DealerDrew { card, value });
        }

        let outcome = rules::resolve(self.player.value(), self.dealer.value());
        self.finish(outcome);
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.emit(RoundEvent::Resolved {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        });
        self.phase = Phase::Resolved(outcome);
    }

    fn emit(&mut self, event: RoundEvent) {
        if self.verbose {
            tracing::debug!(?event, "round event");
        } else {
            tracing::trace!(?event, "round event");
        }
        self.events.push(event);
    }

    /// Snapshot of a resolved round for JSONL output.
    pub fn record(&self, round_id: String) -> Option<RoundRecord> {
        let outcome = self.outcome()?;
        Some(RoundRecord {
            round_id,
            seed: self.seed,
            strategy: self.policy.name(),
            player: self.player.cards().to_vec(),
            dealer: self.dealer.cards().to_vec(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            decisions: self.decisions.clone(),
            outcome,
            ts: None,
        })
    }
}

impl<P> Round<P> {
    pub fn player(&self) -> &Agent {
        &self.player
    }

    pub fn dealer(&self) -> &Agent {
        &self.dealer
    }

    /// The dealer's first card, the only one the player sees while deciding.
    pub fn up_card(&self) -> Option<Card> {
        self.dealer.hand().first()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// `None` until the round is resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The winning side, `None` for a push or an unresolved round.
    /// Use [`Round::outcome`] to tell those two apart.
    pub fn winner(&self) -> Option<Role> {
        self.outcome().and_then(Outcome::winner)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, Phase::Resolved(_))
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Cards drawn so far this round.
    pub fn dealt(&self) -> usize {
        self.tracker.len()
    }
}
