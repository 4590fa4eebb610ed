//! Signal adjustments applied after keyword and phrase scoring: polarity,
//! punctuation, first-person patterns, distress co-occurrence, and the
//! final clamp.

use std::sync::LazyLock;

use regex::Regex;

use crate::emotion::{Emotion, EmotionVector};

/// Flat bonus for a first-person emotion statement.
pub const FIRST_PERSON_BONUS: f64 = 30.0;
/// Extra anxiety on a first-person fear statement.
pub const FIRST_PERSON_FEAR_ANXIETY: f64 = 20.0;
/// A negative emotion above this counts as strong.
pub const DISTRESS_THRESHOLD: f64 = 40.0;
pub const DISTRESS_BOOST: f64 = 10.0;
/// Cap on how many `!` are counted.
pub const MAX_EXCLAMATIONS: usize = 5;

/// A first-person statement pattern and the points it awards.
#[derive(Debug)]
pub struct FirstPersonPattern {
    pub pattern: Regex,
    pub awards: &'static [(Emotion, f64)],
}

fn first_person(words: &str, awards: &'static [(Emotion, f64)]) -> FirstPersonPattern {
    let pattern = Regex::new(&format!(
        r"(?i)(?-u:\b)(i am|i'm|im|i feel|feeling)\s+({words})(?-u:\b)"
    ))
        .expect("first-person pattern");
    FirstPersonPattern { pattern, awards }
}

/// Compiled once on first access.
static FIRST_PERSON_PATTERNS: LazyLock<Vec<FirstPersonPattern>> = LazyLock::new(|| {
    vec![
        first_person("sad|depressed|down|unhappy", &[(Emotion::Sadness, FIRST_PERSON_BONUS)]),
        first_person("happy|excited|joyful|great", &[(Emotion::Joy, FIRST_PERSON_BONUS)]),
        first_person("angry|mad|upset|furious", &[(Emotion::Anger, FIRST_PERSON_BONUS)]),
        first_person(
            "scared|afraid|terrified|anxious",
            &[
                (Emotion::Fear, FIRST_PERSON_BONUS),
                (Emotion::Anxiety, FIRST_PERSON_FEAR_ANXIETY),
            ],
        ),
    ]
});

pub fn first_person_patterns() -> &'static [FirstPersonPattern] {
    &FIRST_PERSON_PATTERNS
}

/// Shift scores by the general polarity (`comparative`) of the text.
pub fn apply_polarity(scores: &mut EmotionVector, comparative: f64) {
    if comparative > 0.0 {
        scores.add(Emotion::Joy, (comparative * 20.0).min(50.0));
        scores.sub_floored(Emotion::Sadness, comparative * 10.0);
        scores.sub_floored(Emotion::Anger, comparative * 10.0);
    } else if comparative < 0.0 {
        let neg = comparative.abs();
        scores.add(Emotion::Sadness, (neg * 15.0).min(40.0));
        scores.add(Emotion::Anger, (neg * 10.0).min(30.0));
        scores.sub_floored(Emotion::Joy, neg * 15.0);
    }
}

/// Exclamation marks amplify whichever way the polarity leans; question
/// marks read as surprise and a little anxiety.
pub fn apply_punctuation(scores: &mut EmotionVector, text: &str, comparative: f64) {
    let exclamations = text.matches('!').count();
    if exclamations > 0 {
        let m = exclamations.min(MAX_EXCLAMATIONS) as f64;
        if comparative > 0.0 {
            scores.add(Emotion::Joy, m * 5.0);
            scores.add(Emotion::Surprise, m * 5.0);
        } else if comparative < 0.0 {
            scores.add(Emotion::Anger, m * 7.0);
            scores.add(Emotion::Surprise, m * 3.0);
        } else {
            scores.add(Emotion::Surprise, m * 8.0);
        }
    }

    let questions = text.matches('?').count();
    if questions > 0 {
        let q = questions as f64;
        scores.add(Emotion::Surprise, (q * 5.0).min(20.0));
        scores.add(Emotion::Anxiety, (q * 4.0).min(15.0));
    }
}

/// Flat bonuses for "I am sad", "feeling great" and the like.
pub fn apply_first_person(scores: &mut EmotionVector, text: &str) {
    for fp in first_person_patterns() {
        if fp.pattern.is_match(text) {
            for &(emotion, points) in fp.awards {
                scores.add(emotion, points);
            }
        }
    }
}

/// Boost each strong negative emotion when more than one is strong.
///
/// Returns the emotions that were boosted.
pub fn boost_co_occurrence(scores: &mut EmotionVector) -> Vec<Emotion> {
    let strong: Vec<Emotion> = Emotion::NEGATIVE
        .into_iter()
        .filter(|e| scores.get(*e) > DISTRESS_THRESHOLD)
        .collect();

    if strong.len() < 2 {
        return Vec::new();
    }
    for e in &strong {
        scores.add(*e, DISTRESS_BOOST);
    }
    strong
}

/// Clamp all scores into `[0, 100]`.
pub fn normalize(scores: &mut EmotionVector) {
    scores.clamp();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_polarity() {
        let mut v = EmotionVector::baseline();
        apply_polarity(&mut v, 0.5);
        assert_eq!(v.joy, 20.0);
        assert_eq!(v.sadness, 5.0);
        assert_eq!(v.anger, 5.0);
    }

    #[test]
    fn test_polarity_caps_and_floors() {
        let mut v = EmotionVector::baseline();
        apply_polarity(&mut v, 4.0);
        assert_eq!(v.joy, 60.0);
        assert_eq!(v.sadness, 0.0);

        let mut v = EmotionVector::baseline();
        apply_polarity(&mut v, -5.0);
        assert_eq!(v.sadness, 50.0);
        assert_eq!(v.anger, 40.0);
        assert_eq!(v.joy, 0.0);
    }

    #[test]
    fn test_zero_polarity_is_noop() {
        let mut v = EmotionVector::baseline();
        apply_polarity(&mut v, 0.0);
        assert_eq!(v, EmotionVector::baseline());
    }

    #[test]
    fn test_exclamations_follow_polarity() {
        let mut v = EmotionVector::zero();
        apply_punctuation(&mut v, "yes!!", 1.0);
        assert_eq!((v.joy, v.surprise), (10.0, 10.0));

        let mut v = EmotionVector::zero();
        apply_punctuation(&mut v, "no!!", -1.0);
        assert_eq!((v.anger, v.surprise), (14.0, 6.0));

        let mut v = EmotionVector::zero();
        apply_punctuation(&mut v, "!!!!!!!!", 0.0);
        assert_eq!(v.surprise, 40.0);
    }

    #[test]
    fn test_questions_are_capped() {
        let mut v = EmotionVector::zero();
        apply_punctuation(&mut v, "why? why? why? why? why? why?", 0.0);
        assert_eq!(v.surprise, 20.0);
        assert_eq!(v.anxiety, 15.0);
    }

    #[test]
    fn test_first_person_patterns() {
        let mut v = EmotionVector::zero();
        apply_first_person(&mut v, "Honestly I'm terrified of tomorrow");
        assert_eq!(v.fear, 30.0);
        assert_eq!(v.anxiety, 20.0);

        let mut v = EmotionVector::zero();
        apply_first_person(&mut v, "FEELING DOWN");
        assert_eq!(v.sadness, 30.0);

        // A word in between breaks the pattern.
        let mut v = EmotionVector::zero();
        apply_first_person(&mut v, "I am so happy");
        assert_eq!(v.joy, 0.0);
    }

    #[test]
    fn test_first_person_boundary_is_ascii_only() {
        let mut v = EmotionVector::zero();
        apply_first_person(&mut v, "i feel sadé");
        assert_eq!(v.sadness, 30.0);
    }

    #[test]
    fn test_co_occurrence_needs_two() {
        let mut v = EmotionVector::baseline();
        v.set(Emotion::Sadness, 50.0);
        assert!(boost_co_occurrence(&mut v).is_empty());
        assert_eq!(v.sadness, 50.0);

        v.set(Emotion::Fear, 41.0);
        v.set(Emotion::Joy, 90.0);
        let boosted = boost_co_occurrence(&mut v);
        assert_eq!(boosted, vec![Emotion::Sadness, Emotion::Fear]);
        assert_eq!(v.sadness, 60.0);
        assert_eq!(v.fear, 51.0);
        assert_eq!(v.joy, 90.0);
    }

    #[test]
    fn test_exactly_forty_is_not_strong() {
        let mut v = EmotionVector::baseline();
        v.set(Emotion::Anger, 40.0);
        v.set(Emotion::Disgust, 45.0);
        assert!(boost_co_occurrence(&mut v).is_empty());
    }
}
