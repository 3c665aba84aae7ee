//! Card system: emotions, catalog, card instances, deck generation.
//!
//! ## Key Types
//!
//! - `Emotion`: Label, glyph, and description shared by a pair
//! - `EmotionCatalog`: The emotions a deck may draw from
//! - `CardId`: Deck-unique card identifier
//! - `Card`: A card on the board with its visibility flags
//! - `DeckGenerator`: Builds shuffled decks of pairs per level

pub mod card;
pub mod catalog;
pub mod deck;
pub mod emotion;

pub use card::{Card, CardId};
pub use catalog::EmotionCatalog;
pub use deck::{DeckGenerator, LevelSummary};
pub use emotion::Emotion;
