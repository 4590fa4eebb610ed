//! General sentiment polarity: the scorer seam, a null scorer, an
//! AFINN-style lexicon scorer, and a one-shot load gate.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, OnceLock};

use serde::{Deserialize, Serialize};

use crate::lexicon::is_negator;

// Word -> valence (-5..=5), tab separated.
const AFINN_LEXICON: &str = include_str!("../data/afinn.tsv");

/// Output of a polarity scorer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentSignal {
    /// Sum of word valences.
    pub score: f64,
    /// `score` divided by token count.
    pub comparative: f64,
}

impl SentimentSignal {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// A polarity scorer the engine can consult.
pub trait SentimentScorer {
    /// False while the scorer is still loading; the engine then uses a
    /// neutral signal.
    fn is_ready(&self) -> bool {
        true
    }

    fn analyze(&self, text: &str) -> SentimentSignal;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn analyze(&self, text: &str) -> SentimentSignal {
        (**self).analyze(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Box<T> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn analyze(&self, text: &str) -> SentimentSignal {
        (**self).analyze(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Arc<T> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn analyze(&self, text: &str) -> SentimentSignal {
        (**self).analyze(text)
    }
}

/// Always neutral. Used when sentiment scoring is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralScorer;

impl SentimentScorer for NeutralScorer {
    fn analyze(&self, _text: &str) -> SentimentSignal {
        SentimentSignal::neutral()
    }
}

/// AFINN-style scorer: sum of per-word valences, with a valence flipped
/// when the previous token is a negator.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, i32>,
}

static BUILTIN: LazyLock<LexiconScorer> = LazyLock::new(LexiconScorer::new);

impl LexiconScorer {
    /// Scorer over the embedded word list.
    pub fn new() -> Self {
        Self::from_tsv(AFINN_LEXICON)
    }

    /// Shared scorer over the embedded word list.
    pub fn builtin() -> &'static LexiconScorer {
        &BUILTIN
    }

    /// Parse `word<TAB>valence` lines. Lines that do not parse are skipped.
    pub fn from_tsv(tsv: &str) -> Self {
        let mut valences = HashMap::new();
        for line in tsv.lines() {
            if let Some((word, value)) = line.split_once('\t') {
                if let Ok(v) = value.trim().parse::<i32>() {
                    valences.insert(word.trim().to_lowercase(), v);
                }
            }
        }
        Self { valences }
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    pub fn valence(&self, word: &str) -> Option<i32> {
        self.valences.get(word).copied()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn sentiment_tokens(text: &str) -> Vec<String> {
    const STRIP: &[char] = &[
        '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"',
        '~', '(', ')',
    ];
    text.to_lowercase()
        .replace(STRIP, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

impl SentimentScorer for LexiconScorer {
    fn analyze(&self, text: &str) -> SentimentSignal {
        let tokens = sentiment_tokens(text);
        if tokens.is_empty() {
            return SentimentSignal::neutral();
        }

        let mut score = 0i32;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut v) = self.valence(token) else {
                continue;
            };
            if i > 0 && is_negator(&tokens[i - 1]) {
                v = -v;
            }
            score += v;
        }

        let score = f64::from(score);
        SentimentSignal {
            score,
            comparative: score / tokens.len() as f64,
        }
    }
}

/// A lexicon scorer that becomes available once its loader has run.
///
/// Cloning shares the same slot, so a clone handed to a background task
/// and the one held by the engine see the same state.
#[derive(Debug, Clone, Default)]
pub struct DeferredScorer {
    slot: Arc<OnceLock<LexiconScorer>>,
}

impl DeferredScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that performs the one-shot load.
    pub fn loader(&self) -> ScorerLoader {
        ScorerLoader { slot: Arc::clone(&self.slot) }
    }
}

impl SentimentScorer for DeferredScorer {
    fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }

    fn analyze(&self, text: &str) -> SentimentSignal {
        match self.slot.get() {
            Some(scorer) => scorer.analyze(text),
            None => SentimentSignal::neutral(),
        }
    }
}

/// Loads the lexicon into a [`DeferredScorer`]. Loading twice is a no-op.
#[derive(Debug, Clone)]
pub struct ScorerLoader {
    slot: Arc<OnceLock<LexiconScorer>>,
}

impl ScorerLoader {
    pub fn load(&self) {
        self.load_with(LexiconScorer::new);
    }

    pub fn load_with(&self, build: impl FnOnce() -> LexiconScorer) {
        let scorer = self.slot.get_or_init(build);
        tracing::debug!(words = scorer.len(), "sentiment lexicon loaded");
    }
}

/// Coarse polarity label for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SentimentLabel {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
}

impl SentimentLabel {
    pub fn from_comparative(comparative: f64) -> Self {
        if comparative > 0.0 {
            SentimentLabel::Positive
        } else if comparative < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// Position on a 0..=100 gauge centred on 50.
pub fn sentiment_gauge(comparative: f64) -> f64 {
    (50.0 + comparative * 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_loads() {
        let scorer = LexiconScorer::builtin();
        assert!(scorer.len() > 150);
        assert_eq!(scorer.valence("happy"), Some(3));
        assert_eq!(scorer.valence("sad"), Some(-2));
    }

    #[test]
    fn test_positive_text() {
        let s = LexiconScorer::new().analyze("I am so happy and excited today!");
        assert_eq!(s.score, 6.0);
        assert!((s.comparative - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_negator_flips_valence() {
        let s = LexiconScorer::new().analyze("I am not happy");
        assert_eq!(s.score, -3.0);
        assert_eq!(s.comparative, -0.75);
    }

    #[test]
    fn test_contraction_negator_flips_valence() {
        let s = LexiconScorer::new().analyze("Don't worry");
        assert_eq!(s.score, 3.0);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(LexiconScorer::new().analyze("   "), SentimentSignal::neutral());
    }

    #[test]
    fn test_from_tsv_skips_bad_lines() {
        let s = LexiconScorer::from_tsv("good\t3\nbroken line\nbad\tx\n");
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_deferred_scorer_gate() {
        let deferred = DeferredScorer::new();
        assert!(!deferred.is_ready());
        assert_eq!(deferred.analyze("happy"), SentimentSignal::neutral());

        let loader = deferred.loader();
        std::thread::spawn(move || loader.load()).join().unwrap();

        assert!(deferred.is_ready());
        assert!(deferred.analyze("happy").score > 0.0);
    }

    #[test]
    fn test_label_and_gauge() {
        assert_eq!(SentimentLabel::from_comparative(0.2), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_comparative(-0.2), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_comparative(0.0), SentimentLabel::Neutral);
        assert_eq!(sentiment_gauge(0.0), 50.0);
        assert_eq!(sentiment_gauge(-2.5), 25.0);
        assert_eq!(sentiment_gauge(9.0), 100.0);
    }
}
