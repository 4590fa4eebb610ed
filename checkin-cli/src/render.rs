//! Plain-text rendering for terminal output.

use checkin_core::{AnalysisResult, FacialReading, SentimentLabel, sentiment_gauge};
use checkin_store::CheckinRecord;

const BAR_WIDTH: usize = 20;

fn bar(pct: f64) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut s = String::new();

    for w in &result.warnings {
        s.push_str(&format!("warning: {}\n\n", w.message()));
    }

    s.push_str(&format!("{}\n\n", result.summary));

    let label = SentimentLabel::from_comparative(result.sentiment_score);
    s.push_str(&format!(
        "Overall sentiment: {} ({:.2})  [{}]\n\n",
        label.as_str(),
        result.sentiment_score,
        bar(sentiment_gauge(result.sentiment_score))
    ));

    for (emotion, score) in result.emotions.ranked() {
        s.push_str(&format!(
            "{} {:<9} {:>3}%  [{}]\n",
            emotion.emoji(),
            emotion.name(),
            score.round() as i64,
            bar(score)
        ));
    }

    s.push_str("\nRecommendations:\n");
    for r in &result.recommendations {
        s.push_str(&format!("- {}\n", r));
    }
    s
}

pub fn render_history(rows: &[CheckinRecord]) -> String {
    if rows.is_empty() {
        return "No check-ins yet. Run: checkin analyze \"how you feel\"\n".to_string();
    }
    let mut s = String::new();
    for r in rows {
        let dominant = r.emotions.dominant();
        let preview: String = r.text.chars().take(60).collect();
        s.push_str(&format!(
            "{} | {} {} {:.0}% | sentiment={:.2} | {}\n",
            r.created_at.format("%Y-%m-%d %H:%M"),
            dominant.emoji(),
            dominant.name(),
            r.emotions.get(dominant),
            r.sentiment_score,
            preview
        ));
    }
    s
}

pub fn render_facial(reading: &FacialReading) -> String {
    let mut s = format!("Dominant expression: {}\n\n", reading.dominant);
    for (label, pct) in &reading.expressions {
        s.push_str(&format!("{:<10} {:>3}%  [{}]\n", label, pct.round() as i64, bar(*pct)));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::EmotionEngine;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(250.0), "#".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_render_analysis_lists_all_emotions() {
        let r = EmotionEngine::with_lexicon().analyze("I am so happy and excited today!");
        let out = render_analysis(&r);
        assert!(out.starts_with(&r.summary));
        assert!(out.contains("Overall sentiment: Positive"));
        for name in ["joy", "sadness", "anger", "fear", "surprise", "disgust", "anxiety"] {
            assert!(out.contains(name), "missing {name}");
        }
        // Highest score is listed first.
        let joy = out.find("😊 joy").unwrap();
        let fear = out.find("😨 fear").unwrap();
        assert!(joy < fear);
    }

    #[test]
    fn test_render_history() {
        let r = EmotionEngine::neutral().analyze("heartbroken");
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let rec = CheckinRecord::from_analysis("ana", "heartbroken", &r, at);
        let out = render_history(&[rec]);
        assert!(out.starts_with("2026-03-01 09:30 | 😢 sadness"));
        assert!(render_history(&[]).starts_with("No check-ins yet"));
    }

    #[test]
    fn test_render_facial() {
        let out = render_facial(&FacialReading::no_face());
        assert!(out.starts_with("Dominant expression: neutral"));
        assert!(out.contains("neutral    100%"));
    }
}
