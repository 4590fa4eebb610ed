//! One- or two-sentence mood description.

use crate::emotion::EmotionVector;

/// Emotions at or below this are left out of the summary.
pub const MENTION_THRESHOLD: f64 = 20.0;
/// A second emotion needs more than this to be mentioned.
pub const SECOND_MENTION_THRESHOLD: f64 = 30.0;

pub const POSITIVE_MOOD: &str = "You seem to be in a positive mood.";
pub const NEGATIVE_MOOD: &str = "You seem to be in a negative mood.";
pub const NEUTRAL_MOOD: &str = "Your mood appears to be neutral.";

fn qualifier(score: f64) -> &'static str {
    if score > 75.0 {
        "very "
    } else if score > 50.0 {
        "quite "
    } else if score < 30.0 {
        "slightly "
    } else {
        ""
    }
}

pub fn generate_summary(emotions: &EmotionVector, comparative: f64) -> String {
    let ranked: Vec<_> = emotions
        .ranked()
        .into_iter()
        .filter(|(_, score)| *score > MENTION_THRESHOLD)
        .collect();

    let Some(&(top, top_score)) = ranked.first() else {
        let fallback = if comparative > 0.5 {
            POSITIVE_MOOD
        } else if comparative < -0.5 {
            NEGATIVE_MOOD
        } else {
            NEUTRAL_MOOD
        };
        return fallback.to_string();
    };

    let mut summary = format!("You seem to be feeling {}{}", qualifier(top_score), top);

    if let Some(&(second, second_score)) = ranked.get(1) {
        if second_score > SECOND_MENTION_THRESHOLD {
            let degree = if second_score > 50.0 { "quite " } else { "somewhat " };
            summary.push_str(&format!(" and {degree}{second}"));
        }
    }

    if comparative < -1.0 && !summary.contains("sad") && !summary.contains("anger") {
        summary.push_str(". Your overall tone appears quite negative");
    } else if comparative > 1.0 && !summary.contains("joy") {
        summary.push_str(". Your overall tone appears quite positive");
    }

    summary.push('.');
    summary
}
