//! Deck generation.
//!
//! Builds the shuffled deck for a level:
//!
//! 1. Pair count from the level formula, capped.
//! 2. Shuffle the catalog and take the first `pair_count` emotions,
//!    wrapping around if the catalog is smaller than the pair count.
//! 3. Emit two cards per emotion with ids counting up from 0.
//! 4. Shuffle the whole deck.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, CardId};
use super::catalog::EmotionCatalog;
use super::emotion::Emotion;
use crate::core::{GameRng, Level, MemoryConfig};

/// Pair and card counts for a level, as shown by level pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level: Level,
    pub pairs: usize,
    pub cards: usize,
}

impl std::fmt::Display for LevelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} cards ({} pairs)", self.level, self.cards, self.pairs)
    }
}

/// Produces shuffled decks of matching pairs.
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    catalog: EmotionCatalog,
    base_pairs: usize,
    pairs_per_level: usize,
    max_pairs_cap: usize,
}

impl DeckGenerator {
    /// Create a generator over `catalog` using the pair formula from `config`.
    #[must_use]
    pub fn new(catalog: EmotionCatalog, config: &MemoryConfig) -> Self {
        Self {
            catalog,
            base_pairs: config.base_pairs as usize,
            pairs_per_level: config.pairs_per_level as usize,
            max_pairs_cap: config.max_pairs_cap as usize,
        }
    }

    /// The catalog this generator draws from.
    #[must_use]
    pub fn catalog(&self) -> &EmotionCatalog {
        &self.catalog
    }

    /// Pairs in a deck for `level`: `min(base + level * per_level, cap)`.
    #[must_use]
    pub fn pair_count(&self, level: Level) -> usize {
        (level.get() as usize)
            .saturating_mul(self.pairs_per_level)
            .saturating_add(self.base_pairs)
            .min(self.max_pairs_cap)
    }

    /// Pair and card counts for `level`.
    #[must_use]
    pub fn summary(&self, level: Level) -> LevelSummary {
        let pairs = self.pair_count(level);
        LevelSummary {
            level,
            pairs,
            cards: pairs * 2,
        }
    }

    /// Generate a shuffled deck for `level`.
    ///
    /// Every label in the result appears exactly twice, unless the catalog
    /// is smaller than the pair count, in which case emotions are reused
    /// and a label may appear in several pairs. An empty catalog yields an
    /// empty deck.
    pub fn generate(&self, level: Level, rng: &mut GameRng) -> Vec<Card> {
        if self.catalog.is_empty() {
            debug!(%level, "empty catalog, generating empty deck");
            return Vec::new();
        }

        let pair_count = self.pair_count(level);

        let mut pool: Vec<&Emotion> = self.catalog.iter().collect();
        rng.shuffle(&mut pool);

        let mut cards = Vec::with_capacity(pair_count * 2);
        let mut next_id = 0u32;

        for i in 0..pair_count {
            let emotion = pool[i % pool.len()];
            for _ in 0..2 {
                cards.push(Card::new(CardId::new(next_id), emotion.clone()));
                next_id += 1;
            }
        }

        rng.shuffle(&mut cards);

        debug!(%level, pairs = pair_count, cards = cards.len(), "generated deck");
        cards
    }
}
