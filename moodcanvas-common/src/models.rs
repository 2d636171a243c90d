//! Data model shared by the catalog, the stores and the HTTP layer

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::time;

/// Session id recorded on observations that arrive without one
pub const ANONYMOUS_SESSION: &str = "anonymous";

/// Emotion labels known to the catalog, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Sad,
    Neutral,
    Angry,
    Surprised,
    Fearful,
    Disgusted,
}

impl Emotion {
    /// Every label, in the order the catalog lists them
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Neutral,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Disgusted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Neutral => "neutral",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
        }
    }

    /// Case-insensitive label lookup; `None` for labels outside the catalog
    pub fn parse(label: &str) -> Option<Emotion> {
        let key = label.to_lowercase();
        Emotion::ALL.into_iter().find(|e| e.as_str() == key)
    }
}

/// A catalogued music track
///
/// Catalog entries are compiled in and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub genre: &'static str,
    pub mood: &'static str,
    /// Energy level, 1 (calm) to 9 (intense)
    pub energy: u8,
}

/// One recorded emotion detection event
///
/// Appended to the history store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionObservation {
    pub id: Uuid,
    /// Lowercased label as reported by the caller (not restricted to [`Emotion`])
    pub emotion: String,
    /// Caller-supplied confidence; the range is not validated
    pub confidence: f64,
    /// Stored as sent; clients normally send a string, but any JSON value is kept
    pub session_id: Value,
    #[serde(with = "time::iso_micros")]
    pub timestamp: DateTime<Utc>,
}

impl EmotionObservation {
    /// Build a fresh observation stamped with the current time
    ///
    /// A missing session id is recorded as [`ANONYMOUS_SESSION`].
    pub fn new(emotion: &str, confidence: f64, session_id: Option<Value>) -> Self {
        Self {
            id: crate::uuid_utils::generate(),
            emotion: emotion.to_lowercase(),
            confidence,
            session_id: session_id.unwrap_or_else(|| Value::from(ANONYMOUS_SESSION)),
            timestamp: time::now(),
        }
    }

    /// True when recorded under the string session id `id`
    pub fn in_session(&self, id: &str) -> bool {
        self.session_id.as_str() == Some(id)
    }
}

/// Caller-scoped bookkeeping record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    #[serde(with = "time::iso_micros")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "time::iso_micros")]
    pub last_activity: DateTime<Utc>,
    /// Never populated; observations live in the history store
    pub emotion_history: Vec<EmotionObservation>,
}

impl Session {
    pub fn new(id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            last_activity: now,
            emotion_history: Vec::new(),
        }
    }

    /// Record activity at `now`; the activity timestamp never moves backwards
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = self.last_activity.max(now);
    }
}
