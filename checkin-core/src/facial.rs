//! Facial-expression readings.
//!
//! The classifier itself is external; this only turns its confidence map
//! into stored percentages and a dominant label.

use serde::{Deserialize, Serialize};

pub const NEUTRAL_LABEL: &str = "neutral";

/// Labels reported when no face is found, in display order.
pub const NO_FACE_LABELS: [&str; 7] =
    ["neutral", "happy", "sad", "angry", "surprised", "fearful", "disgusted"];

/// Percentages per classifier label, in classifier order.
///
/// `expressions` serializes as a `{label: percentage}` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacialReading {
    #[serde(with = "label_map")]
    pub expressions: Vec<(String, f64)>,
    pub dominant: String,
}

fn canonical_label(label: &str) -> String {
    match label {
        "disgust" => "disgusted".to_string(),
        other => other.to_string(),
    }
}

impl FacialReading {
    /// Build from classifier confidences in `0.0..=1.0`.
    ///
    /// The first label with the strictly highest percentage wins; an
    /// all-zero map falls back to `neutral`.
    pub fn from_confidences(confidences: &[(String, f64)]) -> Self {
        let mut expressions = Vec::with_capacity(confidences.len());
        let mut dominant: Option<(String, f64)> = None;

        for (label, confidence) in confidences {
            let label = canonical_label(label);
            let pct = confidence * 100.0;
            if pct > dominant.as_ref().map_or(0.0, |(_, best)| *best) {
                dominant = Some((label.clone(), pct));
            }
            expressions.push((label, pct));
        }

        Self {
            expressions,
            dominant: dominant.map_or_else(|| NEUTRAL_LABEL.to_string(), |(l, _)| l),
        }
    }

    /// Reading used when the classifier finds no face.
    pub fn no_face() -> Self {
        Self {
            expressions: NO_FACE_LABELS
                .iter()
                .map(|l| (l.to_string(), if *l == NEUTRAL_LABEL { 100.0 } else { 0.0 }))
                .collect(),
            dominant: NEUTRAL_LABEL.to_string(),
        }
    }

    pub fn percentage(&self, label: &str) -> Option<f64> {
        self.expressions.iter().find(|(l, _)| l == label).map(|(_, p)| *p)
    }
}

/// Ordered entries as a map, keeping the input order on the way back in.
mod label_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(entries: &[(String, f64)], ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_map(entries.iter().map(|(label, pct)| (label, pct)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<(String, f64)>, D::Error> {
        struct Entries;

        impl<'de> Visitor<'de> for Entries {
            type Value = Vec<(String, f64)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of expression label to percentage")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, f64>()? {
                    out.push(entry);
                }
                Ok(out)
            }
        }

        de.deserialize_map(Entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conf(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
    }

    #[test]
    fn test_percentages_and_dominant() {
        let r = FacialReading::from_confidences(&conf(&[
            ("neutral", 0.1),
            ("happy", 0.7),
            ("sad", 0.2),
        ]));
        assert_eq!(r.dominant, "happy");
        assert!((r.percentage("happy").unwrap() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_disgust_is_renamed() {
        let r = FacialReading::from_confidences(&conf(&[("happy", 0.1), ("disgust", 0.9)]));
        assert_eq!(r.dominant, "disgusted");
        assert!(r.percentage("disgust").is_none());
        assert!(r.percentage("disgusted").is_some());
    }

    #[test]
    fn test_ties_keep_first() {
        let r = FacialReading::from_confidences(&conf(&[("sad", 0.5), ("angry", 0.5)]));
        assert_eq!(r.dominant, "sad");
    }

    #[test]
    fn test_all_zero_is_neutral() {
        let r = FacialReading::from_confidences(&conf(&[("happy", 0.0)]));
        assert_eq!(r.dominant, NEUTRAL_LABEL);
    }

    #[test]
    fn test_no_face() {
        let r = FacialReading::no_face();
        assert_eq!(r.expressions.len(), 7);
        assert_eq!(r.percentage("neutral"), Some(100.0));
        assert_eq!(r.percentage("fearful"), Some(0.0));
        assert_eq!(r.dominant, NEUTRAL_LABEL);
    }

    #[test]
    fn test_expressions_serialize_as_object() {
        let r = FacialReading::from_confidences(&conf(&[("sad", 0.25), ("happy", 0.5)]));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["expressions"]["sad"], 25.0);
        assert_eq!(json["expressions"]["happy"], 50.0);
        assert_eq!(json["dominant"], "happy");

        let text = serde_json::to_string(&r).unwrap();
        assert!(text.contains(r#""expressions":{"sad":25.0,"happy":50.0}"#));
        let back: FacialReading = serde_json::from_str(&text).unwrap();
        assert_eq!(back, r);
    }
}
