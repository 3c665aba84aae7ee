//! Card instances - one face-down tile on the board.
//!
//! A `Card` pairs a deck-unique `CardId` with the `Emotion` it shows and
//! its two visibility flags. Both cards of a pair carry equal emotions and
//! differ only in id.

use serde::{Deserialize, Serialize};

use super::emotion::Emotion;

/// Identifier for a card within one deck.
///
/// Assigned monotonically from 0 at generation time and stable for the
/// deck's lifetime. Ids are not positions: the deck is shuffled after
/// ids are handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Deck-unique id.
    pub id: CardId,

    /// The emotion shown on the face. `emotion.label` is the match key.
    pub emotion: Emotion,

    /// Face-up and awaiting resolution.
    pub is_flipped: bool,

    /// Permanently resolved as part of a found pair.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, emotion: Emotion) -> Self {
        Self {
            id,
            emotion,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// The match key.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.emotion.label
    }

    /// Whether the face is currently visible (flipped or matched).
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Whether a flip on this card would be accepted on its own terms.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn happy() -> Emotion {
        Emotion::new("Happy", "😊", "A joyful, smiling face showing happiness")
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_new_card_face_down() {
        let card = Card::new(CardId::new(0), happy());

        assert_eq!(card.label(), "Happy");
        assert!(!card.is_flipped);
        assert!(!card.is_matched);
        assert!(!card.is_face_up());
        assert!(card.is_selectable());
    }

    #[test]
    fn test_selectable_flags() {
        let mut card = Card::new(CardId::new(1), happy());

        card.is_flipped = true;
        assert!(card.is_face_up());
        assert!(!card.is_selectable());

        card.is_flipped = false;
        card.is_matched = true;
        assert!(card.is_face_up());
        assert!(!card.is_selectable());
    }
}
