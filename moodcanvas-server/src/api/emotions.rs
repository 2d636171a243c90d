//! Emotion observation recording and history

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use moodcanvas_common::{EmotionObservation, Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::query::{non_empty, parse_limit, QueryParams, DEFAULT_HISTORY_LIMIT};
use crate::store::HistoryQuery;
use crate::{ApiError, ApiResult, AppState};

const MISSING_FIELDS: &str = "Missing emotion or confidence";
const STORE_FAILURE: &str = "Failed to store emotion";
const LIST_FAILURE: &str = "Failed to get emotions";

/// POST /api/emotions body
///
/// Fields stay as raw JSON until [`StoreEmotionRequest::validate`]; a JSON
/// `null` reads the same as an absent field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StoreEmotionRequest {
    pub emotion: Option<Value>,
    pub confidence: Option<Value>,
    pub session_id: Option<Value>,
}

/// Outcome of [`StoreEmotionRequest::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    Missing,
    Ready {
        emotion: String,
        confidence: f64,
        session_id: Option<Value>,
    },
}

impl StoreEmotionRequest {
    /// Decode a body that must be a JSON object
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let mut object: Map<String, Value> = serde_json::from_slice(body)
            .map_err(|e| Error::InvalidInput(format!("body: {}", e)))?;
        let mut field = |name: &str| object.remove(name).filter(|v| !v.is_null());

        Ok(Self {
            emotion: field("emotion"),
            confidence: field("confidence"),
            session_id: field("sessionId"),
        })
    }

    /// `Missing` when the emotion is absent or falsy or the confidence is absent;
    /// an error when a present value has an unusable type
    pub fn validate(self) -> Result<Validated> {
        let (emotion, confidence) = match (self.emotion, self.confidence) {
            (Some(emotion), Some(confidence)) if is_truthy(&emotion) => (emotion, confidence),
            _ => return Ok(Validated::Missing),
        };
        let emotion = match emotion {
            Value::String(label) => label,
            other => {
                return Err(Error::InvalidInput(format!("emotion {} is not a string", other)))
            }
        };

        Ok(Validated::Ready {
            emotion,
            confidence: confidence_value(&confidence)?,
            session_id: self.session_id,
        })
    }
}

/// JSON truthiness: null, false, zero and empty strings or containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Confidence as a float: numbers, booleans (1.0 / 0.0) and numeric strings
pub fn confidence_value(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::InvalidInput(format!("confidence {}", n))),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::InvalidInput(format!("confidence {:?}: {}", s, e))),
        other => Err(Error::InvalidInput(format!("confidence {}", other))),
    }
}

#[derive(Debug, Serialize)]
pub struct ObservationResponse {
    pub success: bool,
    pub data: EmotionObservation,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub data: Vec<EmotionObservation>,
}

/// POST /api/emotions
///
/// The body is read as JSON whatever its content type. Missing fields are a
/// client error; an unreadable body or an unusable field type is a server error.
pub async fn store_emotion(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ObservationResponse>> {
    let validated = StoreEmotionRequest::from_slice(&body)
        .and_then(StoreEmotionRequest::validate)
        .map_err(|e| ApiError::internal(STORE_FAILURE, e))?;

    let (emotion, confidence, session_id) = match validated {
        Validated::Ready {
            emotion,
            confidence,
            session_id,
        } => (emotion, confidence, session_id),
        Validated::Missing => {
            warn!("Rejected emotion without label or confidence");
            return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
        }
    };

    let observation = EmotionObservation::new(&emotion, confidence, session_id);
    state.history.append(observation.clone()).await;
    info!(
        "Recorded emotion {} ({}) for session {}",
        observation.emotion, observation.confidence, observation.session_id
    );

    Ok(Json(ObservationResponse {
        success: true,
        data: observation,
    }))
}

/// GET /api/emotions?sessionId=&limit=
///
/// Repeated parameters resolve to their first value.
pub async fn list_emotions(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<HistoryResponse>> {
    let limit = parse_limit(params.first("limit"), DEFAULT_HISTORY_LIMIT)
        .map_err(|e| ApiError::internal(LIST_FAILURE, e))?;
    let query = HistoryQuery {
        session_id: non_empty(params.first("sessionId")).map(str::to_string),
        limit,
    };

    let data = state.history.query(&query).await;
    debug!("Returning {} history entries", data.len());

    Ok(Json(HistoryResponse {
        success: true,
        data,
    }))
}
