use checkin_core::{AnalysisResult, EmotionVector, FacialReading};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Anything kept in a per-user, append-only history.
pub trait Record: Serialize + DeserializeOwned {
    fn user_id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

fn record_id(user_id: &str, created_at: DateTime<Utc>) -> String {
    format!("{}-{}", user_id, created_at.timestamp_millis())
}

/// A stored daily check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub emotions: EmotionVector,
    pub sentiment_score: f64,
    pub recommendations: Vec<String>,
}

impl CheckinRecord {
    pub fn from_analysis(
        user_id: impl Into<String>,
        text: impl Into<String>,
        result: &AnalysisResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        let user_id = user_id.into();
        Self {
            id: record_id(&user_id, created_at),
            user_id,
            created_at,
            text: text.into(),
            emotions: result.emotions,
            sentiment_score: result.sentiment_score,
            recommendations: result.recommendations.clone(),
        }
    }
}

impl Record for CheckinRecord {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A stored facial-expression reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacialRecord {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Always "facial"; kept so mixed exports stay self-describing.
    pub analysis_type: String,
    pub reading: FacialReading,
}

impl FacialRecord {
    pub fn new(user_id: impl Into<String>, reading: FacialReading, created_at: DateTime<Utc>) -> Self {
        let user_id = user_id.into();
        Self {
            id: record_id(&user_id, created_at),
            user_id,
            created_at,
            analysis_type: "facial".to_string(),
            reading,
        }
    }
}

impl Record for FacialRecord {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
