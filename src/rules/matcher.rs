//! Match evaluation.

use crate::cards::{Card, CardId};

/// Decide whether the face-up ids form a pair.
///
/// Fails closed: anything other than exactly two ids, or an id missing
/// from `cards`, yields `false`. Equality is on the emotion label, never
/// on the id. The two ids are not required to differ; callers never pass
/// the same card twice because a flipped card cannot be flipped again.
///
/// ```
/// use emotion_memory::cards::{Card, CardId, Emotion};
/// use emotion_memory::rules::is_match;
///
/// let happy = Emotion::new("Happy", "😊", "smiling");
/// let sad = Emotion::new("Sad", "😢", "tears");
/// let cards = vec![
///     Card::new(CardId::new(0), happy.clone()),
///     Card::new(CardId::new(1), happy),
///     Card::new(CardId::new(2), sad),
/// ];
///
/// assert!(is_match(&cards, &[CardId::new(0), CardId::new(1)]));
/// assert!(!is_match(&cards, &[CardId::new(0), CardId::new(2)]));
/// assert!(!is_match(&cards, &[CardId::new(0)]));
/// ```
pub fn is_match<'a, I>(cards: I, ids: &[CardId]) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    let &[first, second] = ids else {
        return false;
    };

    let mut a = None;
    let mut b = None;
    for card in cards {
        if card.id == first {
            a = Some(card);
        }
        if card.id == second {
            b = Some(card);
        }
    }

    match (a, b) {
        (Some(a), Some(b)) => a.label() == b.label(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Emotion;

    fn deck() -> Vec<Card> {
        let happy = Emotion::new("Happy", "😊", "smiling");
        let sad = Emotion::new("Sad", "😢", "tears");
        vec![
            Card::new(CardId::new(0), happy.clone()),
            Card::new(CardId::new(1), sad.clone()),
            Card::new(CardId::new(2), happy),
            Card::new(CardId::new(3), sad),
        ]
    }

    #[test]
    fn test_matching_labels() {
        let cards = deck();
        assert!(is_match(&cards, &[CardId::new(0), CardId::new(2)]));
        assert!(is_match(&cards, &[CardId::new(1), CardId::new(3)]));
    }

    #[test]
    fn test_different_labels() {
        let cards = deck();
        assert!(!is_match(&cards, &[CardId::new(0), CardId::new(1)]));
    }

    #[test]
    fn test_symmetric() {
        let cards = deck();
        for a in 0..4 {
            for b in 0..4 {
                let (a, b) = (CardId::new(a), CardId::new(b));
                assert_eq!(is_match(&cards, &[a, b]), is_match(&cards, &[b, a]));
            }
        }
    }

    #[test]
    fn test_wrong_arity() {
        let cards = deck();
        assert!(!is_match(&cards, &[]));
        assert!(!is_match(&cards, &[CardId::new(0)]));
        assert!(!is_match(&cards, &[CardId::new(0), CardId::new(2), CardId::new(1)]));
    }

    #[test]
    fn test_unknown_ids() {
        let cards = deck();
        assert!(!is_match(&cards, &[CardId::new(0), CardId::new(99)]));
        assert!(!is_match(&cards, &[CardId::new(99), CardId::new(0)]));
        assert!(!is_match(&cards, &[CardId::new(98), CardId::new(99)]));
    }

    #[test]
    fn test_ignores_visibility_flags() {
        let mut cards = deck();
        cards[0].is_flipped = true;
        cards[2].is_matched = true;

        assert!(is_match(&cards, &[CardId::new(0), CardId::new(2)]));
    }

    #[test]
    fn test_empty_deck() {
        let cards: Vec<Card> = Vec::new();
        assert!(!is_match(&cards, &[CardId::new(0), CardId::new(1)]));
    }
}
