//! Emotion catalog.
//!
//! The `EmotionCatalog` stores every emotion a deck may draw from.
//! Order is irrelevant: the deck generator shuffles the catalog before
//! picking, so two catalogs with the same entries behave identically.

use rustc_hash::FxHashSet;

use super::emotion::Emotion;

/// The reference emotion set: label, glyph, description.
const REFERENCE_EMOTIONS: [(&str, &str, &str); 16] = [
    ("Happy", "😊", "A joyful, smiling face showing happiness"),
    ("Sad", "😢", "A person looking sad with tears"),
    ("Angry", "😠", "An angry expression with furrowed brows"),
    ("Surprised", "😲", "A surprised face with wide eyes"),
    ("Excited", "🤩", "An excited, energetic expression"),
    ("Calm", "😌", "A peaceful, relaxed expression"),
    ("Scared", "😨", "A frightened expression showing fear"),
    ("Love", "🥰", "A loving, affectionate expression"),
    ("Confused", "😕", "A confused, puzzled expression"),
    ("Proud", "😎", "A proud, confident expression"),
    ("Sleepy", "😴", "A tired, sleepy expression"),
    ("Laughing", "😂", "A person laughing with joy"),
    ("Thinking", "🤔", "A thoughtful, contemplative expression"),
    ("Silly", "🤪", "A silly, playful expression"),
    ("Worried", "😟", "A worried, concerned expression"),
    ("Cool", "😎", "A cool, confident expression"),
];

/// Catalog of emotions available to the deck generator.
///
/// Labels are unique; registering a label twice replaces nothing and is
/// reported back to the caller.
///
/// ## Example
///
/// ```
/// use emotion_memory::cards::{Emotion, EmotionCatalog};
///
/// let mut catalog = EmotionCatalog::new();
/// assert!(catalog.register(Emotion::new("Happy", "😊", "A smiling face")));
/// assert!(!catalog.register(Emotion::new("Happy", "🙂", "Duplicate label")));
///
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.contains("Happy"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EmotionCatalog {
    emotions: Vec<Emotion>,
    labels: FxHashSet<String>,
}

impl EmotionCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in 16-emotion catalog.
    #[must_use]
    pub fn reference() -> Self {
        REFERENCE_EMOTIONS
            .iter()
            .map(|&(label, glyph, description)| Emotion::new(label, glyph, description))
            .collect()
    }

    /// Register an emotion.
    ///
    /// Returns false (and leaves the catalog unchanged) if the label is taken.
    pub fn register(&mut self, emotion: Emotion) -> bool {
        if self.contains(&emotion.label) {
            return false;
        }
        self.labels.insert(emotion.label.clone());
        self.emotions.push(emotion);
        true
    }

    /// Check if a label is registered.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Number of registered emotions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    /// Iterate over all emotions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Emotion> {
        self.emotions.iter()
    }

    /// All emotions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Emotion] {
        &self.emotions
    }
}

impl FromIterator<Emotion> for EmotionCatalog {
    fn from_iter<I: IntoIterator<Item = Emotion>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for emotion in iter {
            catalog.register(emotion);
        }
        catalog
    }
}
