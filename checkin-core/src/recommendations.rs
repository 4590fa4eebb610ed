//! Deterministic recommendation rules mapping emotion scores to advice.
//!
//! Rule order is fixed: sadness, anxiety, anger, fear, joy, then overall
//! tone, then the self-care fallback.

use crate::emotion::{Emotion, EmotionVector};

/// An emotion above this triggers its advice pair.
pub const ADVICE_THRESHOLD: f64 = 70.0;
/// Overall tone below this adds the self-talk advice.
pub const NEGATIVE_TONE_THRESHOLD: f64 = -1.5;

/// Emotions with advice, in the order they are checked.
pub const ADVICE_ORDER: [Emotion; 5] = [
    Emotion::Sadness,
    Emotion::Anxiety,
    Emotion::Anger,
    Emotion::Fear,
    Emotion::Joy,
];

pub const NEGATIVE_TONE_ADVICE: &str =
    "Your message has a strongly negative tone. Consider practicing positive self-talk techniques.";

pub const SELF_CARE_ADVICE: [&str; 2] = [
    "Continue monitoring your emotions and practicing self-care.",
    "Regular exercise and mindfulness can help maintain emotional balance.",
];

/// The two advice strings for a strong emotion. Surprise and disgust have none.
pub fn advice_for(emotion: Emotion) -> Option<[&'static str; 2]> {
    match emotion {
        Emotion::Sadness => Some([
            "Consider reaching out to a therapist to discuss your feelings.",
            "Try engaging in activities that bring you joy, like watching a favorite movie or listening to uplifting music.",
        ]),
        Emotion::Anxiety => Some([
            "Practice deep breathing exercises to help manage anxiety.",
            "Consider trying guided meditation to calm your mind.",
        ]),
        Emotion::Anger => Some([
            "Physical activity can help release tension. Consider going for a run or doing some exercise.",
            "Practice counting to 10 before reacting when you feel angry.",
        ]),
        Emotion::Fear => Some([
            "Talk to someone you trust about your fears.",
            "Try grounding techniques when feeling fearful: focus on 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
        ]),
        Emotion::Joy => Some([
            "Share your positive emotions with others to spread joy.",
            "Journal about what made you happy to refer back to on harder days.",
        ]),
        Emotion::Surprise | Emotion::Disgust => None,
    }
}

/// Select advice for a scored check-in.
pub fn recommend(emotions: &EmotionVector, comparative: f64) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for emotion in ADVICE_ORDER {
        if emotions.get(emotion) <= ADVICE_THRESHOLD {
            continue;
        }
        if let Some(pair) = advice_for(emotion) {
            out.extend(pair.iter().map(|s| s.to_string()));
        }
    }

    if comparative < NEGATIVE_TONE_THRESHOLD {
        out.push(NEGATIVE_TONE_ADVICE.to_string());
    }

    if out.is_empty() {
        out.extend(SELF_CARE_ADVICE.iter().map(|s| s.to_string()));
    }

    out
}
