//! Emotion types: the fixed seven-way label set and the score vector.

use serde::{Deserialize, Serialize};

/// Score every emotion starts from before any text is scored.
pub const BASELINE_SCORE: f64 = 10.0;

/// Upper bound of a normalized score.
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Emotion {
    #[serde(rename = "joy")]
    Joy,
    #[serde(rename = "sadness")]
    Sadness,
    #[serde(rename = "anger")]
    Anger,
    #[serde(rename = "fear")]
    Fear,
    #[serde(rename = "surprise")]
    Surprise,
    #[serde(rename = "disgust")]
    Disgust,
    #[serde(rename = "anxiety")]
    Anxiety,
}

impl Emotion {
    /// Declared order. Sorting and tie-breaks follow it.
    pub const ALL: [Emotion; 7] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Anxiety,
    ];

    /// Emotions that count towards compounding distress.
    pub const NEGATIVE: [Emotion; 5] = [
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Anxiety,
        Emotion::Disgust,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Anxiety => "anxiety",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Fear => "😨",
            Emotion::Surprise => "😲",
            Emotion::Disgust => "🤢",
            Emotion::Anxiety => "😰",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Emotion> {
        let name = name.trim().to_lowercase();
        Emotion::ALL.into_iter().find(|e| e.name() == name)
    }

    /// True for the emotions whose negation redirects into joy.
    pub fn is_negative(&self) -> bool {
        Emotion::NEGATIVE.contains(self)
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One score per emotion. Every key is a field, so a vector can never lose one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct EmotionVector {
    pub joy: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub disgust: f64,
    pub anxiety: f64,
}

impl EmotionVector {
    /// All zeros. Used for partial deltas.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Every emotion at [`BASELINE_SCORE`].
    pub fn baseline() -> Self {
        Self::splat(BASELINE_SCORE)
    }

    pub fn splat(value: f64) -> Self {
        Self {
            joy: value,
            sadness: value,
            anger: value,
            fear: value,
            surprise: value,
            disgust: value,
            anxiety: value,
        }
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Disgust => self.disgust,
            Emotion::Anxiety => self.anxiety,
        }
    }

    pub fn get_mut(&mut self, emotion: Emotion) -> &mut f64 {
        match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Disgust => &mut self.disgust,
            Emotion::Anxiety => &mut self.anxiety,
        }
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        *self.get_mut(emotion) = value;
    }

    pub fn add(&mut self, emotion: Emotion, delta: f64) {
        *self.get_mut(emotion) += delta;
    }

    /// Subtract, never going below zero.
    pub fn sub_floored(&mut self, emotion: Emotion, delta: f64) {
        let slot = self.get_mut(emotion);
        *slot = (*slot - delta).max(0.0);
    }

    /// Add only the strictly positive entries of `other`.
    pub fn add_positive(&mut self, other: &EmotionVector) {
        for (emotion, value) in other.iter() {
            if value > 0.0 {
                self.add(emotion, value);
            }
        }
    }

    /// (emotion, score) pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// Pairs sorted by descending score; ties keep declared order.
    pub fn ranked(&self) -> Vec<(Emotion, f64)> {
        let mut pairs: Vec<(Emotion, f64)> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs
    }

    /// Highest-scoring emotion (first in declared order on ties).
    pub fn dominant(&self) -> Emotion {
        self.ranked()[0].0
    }

    /// Clamp every score into `[0, MAX_SCORE]`.
    pub fn clamp(&mut self) {
        for emotion in Emotion::ALL {
            let slot = self.get_mut(emotion);
            *slot = slot.clamp(0.0, MAX_SCORE);
        }
    }
}
