//! Emotion definitions - the static face of a card.
//!
//! An `Emotion` is what both cards of a pair show. The label is the match
//! key; glyph and description ride along for presentation.

use serde::{Deserialize, Serialize};

/// A named emotion with its presentation data.
///
/// ## Example
///
/// ```
/// use emotion_memory::cards::Emotion;
///
/// let happy = Emotion::new("Happy", "😊", "A joyful, smiling face showing happiness");
/// assert_eq!(happy.label, "Happy");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emotion {
    /// Display name and match key ("Happy", "Sad", ...).
    pub label: String,

    /// Emoji shown on the card face.
    pub glyph: String,

    /// Accessible text describing the expression.
    pub description: String,
}

impl Emotion {
    /// Create a new emotion.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        glyph: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            glyph: glyph.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let sad = Emotion::new("Sad", "😢", "A person looking sad with tears");
        assert_eq!(format!("{}", sad), "😢 Sad");
    }

    #[test]
    fn test_serialization() {
        let calm = Emotion::new("Calm", "😌", "A peaceful, relaxed expression");

        let json = serde_json::to_string(&calm).unwrap();
        let deserialized: Emotion = serde_json::from_str(&json).unwrap();

        assert_eq!(calm, deserialized);
    }
}
