//! checkin-core: rule-based emotion scoring for daily check-in text

pub mod context;
pub mod emotion;
pub mod engine;
pub mod facial;
pub mod keywords;
pub mod lexicon;
pub mod phrases;
pub mod recommendations;
pub mod sentiment;
pub mod signals;
pub mod summary;
pub mod tokenize;

pub use context::{find_modifier, find_modifier_in, is_negated, is_negated_in};
pub use emotion::{Emotion, EmotionVector};
pub use engine::{AnalysisResult, AnalysisWarning, Detection, EmotionEngine};
pub use facial::FacialReading;
pub use keywords::score_keywords;
pub use phrases::detect_emotional_phrases;
pub use recommendations::recommend;
pub use sentiment::{
    DeferredScorer,
    LexiconScorer,
    NeutralScorer,
    ScorerLoader,
    SentimentLabel,
    SentimentScorer,
    SentimentSignal,
    sentiment_gauge,
};
pub use summary::generate_summary;
pub use tokenize::{Token, tokenize};

/// Caller-side checks run before text reaches the engine
pub mod validation {
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum InputError {
        #[error("please enter some text to analyze")]
        Empty,
    }

    /// Reject empty or whitespace-only text. Returns the text trimmed.
    pub fn validate_text(text: &str) -> Result<&str, InputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(trimmed)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_rejects_blank() {
            assert_eq!(validate_text(""), Err(InputError::Empty));
            assert_eq!(validate_text(" \n\t"), Err(InputError::Empty));
        }

        #[test]
        fn test_trims() {
            assert_eq!(validate_text("  feeling ok \n"), Ok("feeling ok"));
        }
    }
}

pub use validation::{InputError, validate_text};
