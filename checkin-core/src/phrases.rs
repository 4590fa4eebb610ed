//! Idiom matcher: fixed emotion deltas for multi-word expressions.

use crate::emotion::EmotionVector;
use crate::lexicon::EMOTIONAL_PHRASES;

/// Points per unit of phrase weight.
pub const PHRASE_POINTS: f64 = 20.0;

/// Sum the deltas of every idiom contained in `text`.
///
/// Matching is plain substring containment on the lowercased text, so nested
/// or overlapping idioms all fire.
pub fn detect_emotional_phrases(text: &str) -> EmotionVector {
    let lower = text.to_lowercase();
    let mut deltas = EmotionVector::zero();

    for entry in EMOTIONAL_PHRASES.iter().filter(|p| lower.contains(p.phrase)) {
        tracing::debug!(phrase = entry.phrase, "idiom matched");
        for &(emotion, weight) in entry.weights {
            deltas.add(emotion, PHRASE_POINTS * weight);
        }
    }

    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;

    #[test]
    fn test_joyful_idiom() {
        let v = detect_emotional_phrases("I'm feeling over the moon today!");
        assert_eq!(v.joy, 40.0);
    }

    #[test]
    fn test_sad_idiom_case_insensitive() {
        let v = detect_emotional_phrases("Lately I've been DOWN IN THE DUMPS.");
        assert!((v.sadness - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_multi_emotion_idiom() {
        let v = detect_emotional_phrases("I'm completely fed up with work.");
        assert!(v.anger > 0.0);
        assert!(v.disgust > 0.0);
        assert_eq!(v.joy, 0.0);
    }

    #[test]
    fn test_two_idioms_accumulate() {
        let v = detect_emotional_phrases("I'm on edge and stressed out");
        assert!((v.anxiety - (32.0 + 34.0)).abs() < 1e-9);
    }

    #[test]
    fn test_nested_idioms_both_fire() {
        // "out of my mind" and "mind blown" overlap on "mind".
        let v = detect_emotional_phrases("out of my mind blown");
        assert!((v.anxiety - 30.0).abs() < 1e-9);
        assert!((v.surprise - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_substring_without_boundaries() {
        // No word boundaries: "isolated" fires inside a longer word.
        let v = detect_emotional_phrases("a kind of isolatedness");
        assert!(v.get(Emotion::Sadness) > 0.0);
    }

    #[test]
    fn test_no_phrase_is_all_zero() {
        let v = detect_emotional_phrases("This is a calm and peaceful day.");
        assert!(v.iter().all(|(_, s)| s == 0.0));
    }
}
