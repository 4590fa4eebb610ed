//! Keyword scorer: weighted keyword hits with negation redirects.

use crate::context::{MODIFIER_WINDOW, NEGATION_WINDOW, find_modifier, is_negated};
use crate::emotion::{Emotion, EmotionVector};
use crate::lexicon::keyword_sets;
use crate::tokenize::{token_at, tokenize};

/// Points for a plain keyword hit.
pub const HIT_POINTS: f64 = 15.0;
/// Points moved to sadness when a joy keyword is negated.
pub const NEGATED_JOY_POINTS: f64 = 10.0;
/// Points moved to joy when a negative keyword is negated.
pub const NEGATED_NEGATIVE_POINTS: f64 = 5.0;

/// Where one keyword occurrence sends its points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub emotion: Emotion,
    pub points: f64,
}

/// Resolve a hit on `emotion` given its context.
///
/// Negated surprise has no opposite and contributes nothing.
pub fn contribution(emotion: Emotion, negated: bool, modifier: f64) -> Option<Contribution> {
    match (negated, emotion) {
        (false, e) => Some(Contribution { emotion: e, points: HIT_POINTS * modifier }),
        (true, Emotion::Joy) => Some(Contribution {
            emotion: Emotion::Sadness,
            points: NEGATED_JOY_POINTS * modifier,
        }),
        (true, e) if e.is_negative() => Some(Contribution {
            emotion: Emotion::Joy,
            points: NEGATED_NEGATIVE_POINTS * modifier,
        }),
        (true, _) => None,
    }
}

/// Add keyword contributions found in `text` to `scores`.
pub fn score_keywords(text: &str, scores: &mut EmotionVector) {
    let lower = text.to_lowercase();
    let tokens = tokenize(&lower);

    for set in keyword_sets() {
        for keyword in &set.keywords {
            for m in keyword.pattern.find_iter(&lower) {
                let Some(index) = token_at(&tokens, m.start()) else {
                    tracing::debug!(keyword = keyword.text, offset = m.start(), "match outside any token");
                    continue;
                };

                let negated = is_negated(&tokens, index, NEGATION_WINDOW);
                let modifier = find_modifier(&tokens, index, MODIFIER_WINDOW);

                if let Some(c) = contribution(set.emotion, negated, modifier) {
                    tracing::debug!(
                        keyword = keyword.text,
                        source = %set.emotion,
                        target = %c.emotion,
                        negated,
                        points = c.points,
                        "keyword hit"
                    );
                    scores.add(c.emotion, c.points);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str) -> EmotionVector {
        let mut v = EmotionVector::zero();
        score_keywords(text, &mut v);
        v
    }

    #[test]
    fn test_plain_hit() {
        let v = scored("I am happy");
        assert_eq!(v.joy, 15.0);
        assert_eq!(v.sadness, 0.0);
    }

    #[test]
    fn test_modifier_scales_hit() {
        let v = scored("I am extremely happy");
        assert_eq!(v.joy, 30.0);
    }

    #[test]
    fn test_negated_joy_moves_to_sadness() {
        let v = scored("I am not happy");
        assert_eq!(v.joy, 0.0);
        assert_eq!(v.sadness, 10.0);
    }

    #[test]
    fn test_negated_negative_moves_to_joy() {
        let v = scored("I am not angry");
        assert_eq!(v.anger, 0.0);
        assert_eq!(v.joy, 5.0);
    }

    #[test]
    fn test_contraction_does_not_negate() {
        let v = scored("I don't feel happy");
        assert_eq!(v.joy, 15.0);
        assert_eq!(v.sadness, 0.0);
    }

    #[test]
    fn test_accented_suffix_keeps_match() {
        let v = scored("happyé");
        assert_eq!(v.joy, 15.0);
    }

    #[test]
    fn test_negated_surprise_contributes_nothing() {
        let v = scored("I was not surprised");
        assert!(v.iter().all(|(_, s)| s == 0.0));
    }

    #[test]
    fn test_every_occurrence_counts() {
        let v = scored("happy happy happy");
        assert_eq!(v.joy, 45.0);
    }

    #[test]
    fn test_punctuation_adjacent_match_is_located() {
        let v = scored("Today I felt sad, really.");
        assert_eq!(v.sadness, 15.0);
    }

    #[test]
    fn test_multi_word_keyword_is_located() {
        let v = scored("he got me all worked up");
        assert_eq!(v.anger, 15.0);
    }

    #[test]
    fn test_shared_keyword_scores_each_emotion() {
        // "nervous" is both a fear and an anxiety trigger.
        let v = scored("nervous");
        assert_eq!(v.fear, 15.0);
        assert_eq!(v.anxiety, 15.0);
    }

    #[test]
    fn test_contribution_table() {
        assert_eq!(contribution(Emotion::Surprise, true, 1.5), None);
        assert_eq!(
            contribution(Emotion::Disgust, true, 2.0),
            Some(Contribution { emotion: Emotion::Joy, points: 10.0 })
        );
    }
}
