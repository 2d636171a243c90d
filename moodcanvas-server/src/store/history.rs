//! Append-only emotion history

use std::sync::Arc;

use moodcanvas_common::EmotionObservation;
use tokio::sync::RwLock;

use crate::query::{take_prefix, DEFAULT_HISTORY_LIMIT};

/// Filter applied by [`EmotionHistory::query`]
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    /// Only entries recorded under this session id
    pub session_id: Option<String>,
    /// Prefix length; negative values drop entries from the end
    pub limit: i64,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            session_id: None,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Observations in arrival order; unbounded for the process lifetime
#[derive(Debug, Clone, Default)]
pub struct EmotionHistory {
    entries: Arc<RwLock<Vec<EmotionObservation>>>,
}

impl EmotionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, observation: EmotionObservation) {
        self.entries.write().await.push(observation);
    }

    /// Matching entries, newest first, truncated to `limit`
    ///
    /// Entries with equal timestamps keep their arrival order.
    pub async fn query(&self, query: &HistoryQuery) -> Vec<EmotionObservation> {
        let mut matches: Vec<EmotionObservation> = {
            let entries = self.entries.read().await;
            entries
                .iter()
                .filter(|e| query.session_id.as_deref().map_or(true, |id| e.in_session(id)))
                .cloned()
                .collect()
        };

        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let keep = take_prefix(matches.len(), query.limit);
        matches.truncate(keep);
        matches
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use moodcanvas_common::time;
    use serde_json::Value;

    fn observation(emotion: &str, session: &str, offset_secs: i64) -> EmotionObservation {
        let mut obs = EmotionObservation::new(emotion, 0.5, Some(Value::from(session)));
        obs.timestamp = time::now() + Duration::seconds(offset_secs);
        obs
    }

    #[tokio::test]
    async fn test_query_sorts_newest_first() {
        let history = EmotionHistory::new();
        history.append(observation("sad", "s", 0)).await;
        history.append(observation("happy", "s", 10)).await;
        history.append(observation("angry", "s", 5)).await;

        let emotions: Vec<String> = history
            .query(&HistoryQuery::default())
            .await
            .into_iter()
            .map(|e| e.emotion)
            .collect();
        assert_eq!(emotions, ["happy", "angry", "sad"]);
    }

    #[tokio::test]
    async fn test_query_filters_by_session() {
        let history = EmotionHistory::new();
        history.append(observation("sad", "a", 0)).await;
        history.append(observation("happy", "b", 1)).await;
        history.append(observation("angry", "a", 2)).await;

        let query = HistoryQuery {
            session_id: Some("a".to_string()),
            ..Default::default()
        };
        let result = history.query(&query).await;
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.session_id == "a"));
        assert_eq!(result[0].emotion, "angry");
    }

    #[tokio::test]
    async fn test_non_string_session_ids_never_match_a_filter() {
        let history = EmotionHistory::new();
        history
            .append(EmotionObservation::new("sad", 0.5, Some(Value::from(42))))
            .await;
        history.append(observation("happy", "42", 1)).await;

        let query = HistoryQuery {
            session_id: Some("42".to_string()),
            ..Default::default()
        };
        let result = history.query(&query).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].emotion, "happy");

        assert_eq!(history.query(&HistoryQuery::default()).await.len(), 2);
    }

    #[tokio::test]
    async fn test_query_limit() {
        let history = EmotionHistory::new();
        for i in 0..30 {
            history.append(observation("neutral", "s", i)).await;
        }

        assert_eq!(history.query(&HistoryQuery::default()).await.len(), 20);

        let query = HistoryQuery {
            limit: 3,
            ..Default::default()
        };
        let newest = history.query(&query).await;
        assert_eq!(newest.len(), 3);
        assert!(newest[0].timestamp > newest[2].timestamp);

        let query = HistoryQuery {
            limit: -28,
            ..Default::default()
        };
        assert_eq!(history.query(&query).await.len(), 2);
    }

    #[tokio::test]
    async fn test_query_does_not_mutate_history() {
        let history = EmotionHistory::new();
        history.append(observation("sad", "s", 0)).await;
        history.append(observation("happy", "s", 1)).await;

        let _ = history
            .query(&HistoryQuery {
                limit: 0,
                ..Default::default()
            })
            .await;
        assert_eq!(history.len().await, 2);
    }
}
