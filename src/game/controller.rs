//! The game controller: single owner and writer of `GameState`.
//!
//! ## Selection cycle
//!
//! ```text
//! Idle --flip--> OneFlipped --flip--> Resolving --resolve delay--> Idle
//! ```
//!
//! The second flip of a cycle counts a move, evaluates the pair and
//! schedules the commit. Until the commit fires, the two face-up cards
//! block every further flip; that guard is the only lock in the engine.
//! A match that finishes the deck schedules the success cue a little later.
//!
//! New games and level changes cancel every pending task before dealing.

use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::stats::GameStats;
use crate::cards::{CardId, DeckGenerator, EmotionCatalog, LevelSummary};
use crate::core::{Action, ActionRecord, GameRng, GameState, Level, MemoryConfig, Result};
use crate::notify::{Notification, NotificationSink};
use crate::rules::is_match;
use crate::schedule::Scheduler;

/// Where the current selection cycle stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card face-up.
    Idle,
    /// One card face-up, waiting for its partner.
    OneFlipped,
    /// Two cards face-up, commit pending.
    Resolving,
}

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Two cards are already awaiting resolution.
    PairPending,
    /// No card with that id is on the board.
    UnknownCard,
    /// The card is already face-up.
    AlreadyFlipped,
    /// The card belongs to a found pair.
    AlreadyMatched,
}

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a cycle is now face-up.
    Revealed,
    /// Second card is face-up; the pair resolves after the resolve delay.
    PairPending { matched: bool },
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl FlipOutcome {
    /// Whether the flip changed the board.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Work deferred on the scheduler.
#[derive(Clone, Copy, Debug)]
enum Deferred {
    /// Commit a pending pair.
    Resolve { pair: [CardId; 2], matched: bool },
    /// Emit the success cue.
    Celebrate,
}

/// Builder for creating a `GameController`.
///
/// ```
/// use emotion_memory::core::Level;
/// use emotion_memory::game::GameControllerBuilder;
/// use emotion_memory::notify::NullSink;
///
/// let controller = GameControllerBuilder::new()
///     .seed(42)
///     .level(Level::new(2).unwrap())
///     .build(NullSink)
///     .unwrap();
///
/// assert_eq!(controller.state().deck_size(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct GameControllerBuilder {
    config: MemoryConfig,
    catalog: EmotionCatalog,
    level: Level,
    rng: Option<GameRng>,
}

impl Default for GameControllerBuilder {
    fn default() -> Self {
        Self {
            config: MemoryConfig::default(),
            catalog: EmotionCatalog::reference(),
            level: Level::FIRST,
            rng: None,
        }
    }
}

impl GameControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MemoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(mut self, catalog: EmotionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Seed the RNG. Overrides `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(GameRng::new(seed));
        self
    }

    /// Use an existing RNG. Overrides `config.seed`.
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and deal the first deck.
    pub fn build<N: NotificationSink>(self, sink: N) -> Result<GameController<N>> {
        self.config.validate()?;

        let mut rng = self
            .rng
            .or_else(|| self.config.seed.map(GameRng::new))
            .unwrap_or_else(GameRng::from_entropy);
        let generator = DeckGenerator::new(self.catalog, &self.config);
        let state = GameState::new(self.level, generator.generate(self.level, &mut rng));

        info!(
            seed = rng.seed(),
            level = %self.level,
            cards = state.deck_size(),
            "controller ready"
        );

        Ok(GameController {
            config: self.config,
            generator,
            state,
            rng,
            scheduler: Scheduler::new(),
            sink,
            history: Vec::new(),
        })
    }
}

/// Owns the game state and applies every rule that changes it.
pub struct GameController<N: NotificationSink> {
    config: MemoryConfig,
    generator: DeckGenerator,
    state: GameState,
    rng: GameRng,
    scheduler: Scheduler<Deferred>,
    sink: N,
    history: Vec<ActionRecord>,
}

impl<N: NotificationSink> GameController<N> {
    // === Observation ===

    /// The live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An independent copy of the state for renderers. O(1).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Scoreboard for the current level.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::from_state(&self.state)
    }

    /// Current selection phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state.flipped_cards().len() {
            0 => Phase::Idle,
            1 => Phase::OneFlipped,
            _ => Phase::Resolving,
        }
    }

    /// Level being played.
    #[must_use]
    pub fn level(&self) -> Level {
        self.state.level()
    }

    /// Pair and card counts for any level under this controller's formula.
    #[must_use]
    pub fn level_summary(&self, level: Level) -> LevelSummary {
        self.generator.summary(level)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Seed of the session RNG, for replays.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Scheduler clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Time until the next deferred transition, if one is pending.
    pub fn time_until_next_event(&mut self) -> Option<Duration> {
        let now = self.scheduler.now();
        self.scheduler
            .next_deadline()
            .map(|due| due.saturating_sub(now))
    }

    /// Accepted actions so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// The notification sink.
    #[must_use]
    pub fn sink(&self) -> &N {
        &self.sink
    }

    // === Actions ===

    /// Apply an action. Returns the flip outcome for `Action::Flip`.
    pub fn apply(&mut self, action: Action) -> Option<FlipOutcome> {
        match action {
            Action::Flip(id) => Some(self.flip(id)),
            Action::NewGame => {
                self.new_game();
                None
            }
            Action::ChangeLevel(level) => {
                self.change_level(level);
                None
            }
        }
    }

    /// Turn a card face-up.
    ///
    /// Ignored while a pair is pending and for unknown, flipped or matched
    /// cards. The second flip of a cycle counts a move and schedules the
    /// pair's resolution.
    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        if let Some(reason) = self.flip_blocker(id) {
            debug!(card = id.0, ?reason, "flip ignored");
            return FlipOutcome::Ignored(reason);
        }

        if let Some(card) = self.state.card_mut(id) {
            card.is_flipped = true;
        }
        self.state.push_flipped(id);
        self.record(Action::Flip(id));
        self.emit(Notification::Flip);

        let &[first, second] = self.state.flipped_cards() else {
            debug!(card = id.0, "first card revealed");
            return FlipOutcome::Revealed;
        };

        self.state.record_move();
        let pair = [first, second];
        let matched = is_match(self.state.cards(), &pair);
        let handle = self
            .scheduler
            .schedule(self.config.resolve_delay(), Deferred::Resolve { pair, matched });

        debug!(
            first = first.0,
            second = second.0,
            matched,
            moves = self.state.moves(),
            task = handle.id.0,
            "pair pending"
        );
        FlipOutcome::PairPending { matched }
    }

    /// Redeal at the current level.
    pub fn new_game(&mut self) {
        self.record(Action::NewGame);
        self.deal(self.state.level());
    }

    /// Redeal at `level`.
    pub fn change_level(&mut self, level: Level) {
        self.record(Action::ChangeLevel(level));
        self.deal(level);
    }

    // === Time ===

    /// Move the clock forward, running every transition that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now().saturating_add(elapsed);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run(task);
        }
        self.scheduler.advance_to(until);
    }

    /// Advance until nothing is pending.
    pub fn settle(&mut self) {
        while let Some(wait) = self.time_until_next_event() {
            self.advance(wait);
        }
    }

    /// Re-apply recorded actions at their recorded times.
    ///
    /// On a controller built with the same seed, catalog and configuration,
    /// this reproduces the recorded session.
    pub fn replay(&mut self, records: &[ActionRecord]) {
        for record in records {
            let at = Duration::from_millis(record.at_ms);
            let now = self.scheduler.now();
            if at > now {
                self.advance(at - now);
            }
            self.apply(record.action);
        }
    }

    // === Internals ===

    fn flip_blocker(&self, id: CardId) -> Option<IgnoreReason> {
        if self.state.flipped_cards().len() >= 2 {
            return Some(IgnoreReason::PairPending);
        }
        let Some(card) = self.state.card(id) else {
            return Some(IgnoreReason::UnknownCard);
        };
        if card.is_selectable() {
            None
        } else if card.is_matched {
            Some(IgnoreReason::AlreadyMatched)
        } else {
            Some(IgnoreReason::AlreadyFlipped)
        }
    }

    fn deal(&mut self, level: Level) {
        let cancelled = self.scheduler.cancel_all();
        let cards = self.generator.generate(level, &mut self.rng);
        self.state = GameState::new(level, cards);

        info!(%level, cards = self.state.deck_size(), cancelled, "new game");
    }

    fn run(&mut self, task: Deferred) {
        match task {
            Deferred::Resolve { pair, matched } => self.commit(pair, matched),
            Deferred::Celebrate => self.emit(Notification::GameComplete),
        }
    }

    fn commit(&mut self, pair: [CardId; 2], matched: bool) {
        let flipped = self.state.take_flipped();
        debug_assert_eq!(flipped.as_slice(), &pair);

        for id in pair {
            if let Some(card) = self.state.card_mut(id) {
                card.is_flipped = false;
                card.is_matched |= matched;
            }
        }

        if !matched {
            debug!(first = pair[0].0, second = pair[1].0, "no match");
            self.emit(Notification::NoMatch);
            return;
        }

        let complete = self.state.record_match();
        info!(
            label = self.state.card(pair[0]).map(|c| c.label()).unwrap_or_default(),
            matched_pairs = self.state.matched_pairs(),
            total_pairs = self.state.total_pairs(),
            "match"
        );
        self.emit(Notification::Match);

        if complete {
            let stats = self.stats();
            info!(
                level = %stats.level,
                moves = stats.moves,
                accuracy = stats.accuracy_percent(),
                "game complete"
            );
            self.scheduler
                .schedule(self.config.success_delay(), Deferred::Celebrate);
        }
    }

    fn record(&mut self, action: Action) {
        let at_ms = u64::try_from(self.scheduler.now().as_millis()).unwrap_or(u64::MAX);
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push(ActionRecord::new(action, at_ms, sequence));
    }

    fn emit(&mut self, notification: Notification) {
        let sink = &mut self.sink;
        if panic::catch_unwind(AssertUnwindSafe(|| sink.notify(notification))).is_err() {
            warn!(%notification, "notification sink panicked");
        }
    }
}
