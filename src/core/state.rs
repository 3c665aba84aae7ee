//! Game state for one level.
//!
//! ## GameState
//!
//! - The deck (`im::Vector<Card>`, so snapshots clone in O(1))
//! - Face-up unresolved ids (at most two)
//! - Progress counters: matched pairs, moves, completion
//! - The level being played
//!
//! A fresh `GameState` is built for every new game or level change and
//! thrown away on the next one. Only the controller mutates it; renderers
//! hold snapshots.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::level::Level;
use crate::cards::{Card, CardId};

/// Ids of face-up, unresolved cards. Never more than two.
pub type FlippedCards = SmallVec<[CardId; 2]>;

/// Authoritative state of the level in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board order is the order of this vector.
    cards: Vector<Card>,

    /// Position of each card id in `cards`.
    positions: FxHashMap<CardId, usize>,

    flipped_cards: FlippedCards,
    matched_pairs: usize,
    moves: u32,
    game_complete: bool,
    level: Level,

    /// Fixed at creation as `floor(deck size / 2)`.
    total_pairs: usize,
}

impl GameState {
    /// Create the state for a freshly dealt deck.
    #[must_use]
    pub fn new(level: Level, cards: Vec<Card>) -> Self {
        let positions = cards
            .iter()
            .enumerate()
            .map(|(idx, card)| (card.id, idx))
            .collect();
        let total_pairs = cards.len() / 2;

        Self {
            cards: cards.into_iter().collect(),
            positions,
            flipped_cards: SmallVec::new(),
            matched_pairs: 0,
            moves: 0,
            game_complete: total_pairs == 0,
            level,
            total_pairs,
        }
    }

    // === Read access ===

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).and_then(|&idx| self.cards.get(idx))
    }

    /// Ids currently face-up and unresolved, in flip order.
    #[must_use]
    pub fn flipped_cards(&self) -> &[CardId] {
        &self.flipped_cards
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Completed two-card attempts.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True once every pair is found.
    #[must_use]
    pub fn game_complete(&self) -> bool {
        self.game_complete
    }

    /// Level being played.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Pairs in this deck, derived from the deck size at creation.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    // === Mutation (controller only) ===

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let idx = *self.positions.get(&id)?;
        self.cards.get_mut(idx)
    }

    pub(crate) fn push_flipped(&mut self, id: CardId) {
        self.flipped_cards.push(id);
    }

    pub(crate) fn take_flipped(&mut self) -> FlippedCards {
        std::mem::take(&mut self.flipped_cards)
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Count a found pair. Returns true if it was the last one.
    pub(crate) fn record_match(&mut self) -> bool {
        self.matched_pairs += 1;
        if self.matched_pairs == self.total_pairs {
            self.game_complete = true;
        }
        self.game_complete
    }
}
