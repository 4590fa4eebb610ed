//! Emotion engine: runs the full scoring pipeline over one text.
//!
//! Pipeline:
//! 1) baseline + idiom deltas
//! 2) keyword hits with negation/modifier context
//! 3) polarity, punctuation, first-person patterns
//! 4) distress co-occurrence boost
//! 5) clamp, then summary and recommendations

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionVector;
use crate::keywords::score_keywords;
use crate::phrases::detect_emotional_phrases;
use crate::recommendations::recommend;
use crate::sentiment::{LexiconScorer, NeutralScorer, SentimentScorer, SentimentSignal};
use crate::signals::{apply_first_person, apply_polarity, apply_punctuation, boost_co_occurrence, normalize};
use crate::summary::generate_summary;

/// Non-fatal conditions the caller may want to surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnalysisWarning {
    /// The sentiment scorer was not ready; polarity was treated as neutral.
    #[serde(rename = "sentiment_unavailable")]
    SentimentUnavailable,
}

impl AnalysisWarning {
    pub fn message(&self) -> &'static str {
        match self {
            AnalysisWarning::SentimentUnavailable => {
                "Sentiment analysis is still loading. Analysis may be less accurate."
            }
        }
    }
}

/// Scores and polarity before summary/recommendation selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub emotions: EmotionVector,
    pub sentiment: SentimentSignal,
    pub summary: String,
    pub warnings: Vec<AnalysisWarning>,
}

/// Result of one check-in analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub emotions: EmotionVector,
    /// Comparative polarity of the text.
    pub sentiment_score: f64,
    pub summary: String,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct EmotionEngine<S: SentimentScorer> {
    scorer: S,
}

impl EmotionEngine<NeutralScorer> {
    /// Engine that ignores general polarity.
    pub fn neutral() -> Self {
        Self::new(NeutralScorer)
    }
}

impl EmotionEngine<&'static LexiconScorer> {
    /// Engine backed by the embedded sentiment lexicon.
    pub fn with_lexicon() -> Self {
        Self::new(LexiconScorer::builtin())
    }
}

impl<S: SentimentScorer> EmotionEngine<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    fn sentiment(&self, text: &str, warnings: &mut Vec<AnalysisWarning>) -> SentimentSignal {
        if self.scorer.is_ready() {
            return self.scorer.analyze(text);
        }
        tracing::warn!("sentiment scorer not ready; using neutral polarity");
        warnings.push(AnalysisWarning::SentimentUnavailable);
        SentimentSignal::neutral()
    }

    /// Score `text` and summarize it.
    pub fn detect(&self, text: &str) -> Detection {
        let mut warnings = Vec::new();
        let sentiment = self.sentiment(text, &mut warnings);
        let comparative = sentiment.comparative;

        let mut emotions = EmotionVector::baseline();
        emotions.add_positive(&detect_emotional_phrases(text));
        score_keywords(text, &mut emotions);
        tracing::debug!(?emotions, "lexical scores");

        apply_polarity(&mut emotions, comparative);
        apply_punctuation(&mut emotions, text, comparative);
        apply_first_person(&mut emotions, text);

        let boosted = boost_co_occurrence(&mut emotions);
        if !boosted.is_empty() {
            tracing::debug!(?boosted, "co-occurring distress boosted");
        }

        normalize(&mut emotions);
        let summary = generate_summary(&emotions, comparative);

        Detection {
            emotions,
            sentiment,
            summary,
            warnings,
        }
    }

    /// Full analysis: scores, summary and recommendations.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let detection = self.detect(text);
        let recommendations = recommend(&detection.emotions, detection.sentiment.comparative);

        tracing::debug!(
            dominant = %detection.emotions.dominant(),
            comparative = detection.sentiment.comparative,
            recommendations = recommendations.len(),
            "check-in analyzed"
        );

        AnalysisResult {
            emotions: detection.emotions,
            sentiment_score: detection.sentiment.comparative,
            summary: detection.summary,
            recommendations,
            warnings: detection.warnings,
        }
    }
}
