//! # MoodCanvas Common Library
//!
//! Shared code for the MoodCanvas Singer backend including:
//! - Data model (emotion labels, tracks, observations, sessions)
//! - Error types
//! - Configuration resolution
//! - Timestamp and identifier helpers

pub mod config;
pub mod error;
pub mod models;
pub mod time;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use models::{Emotion, EmotionObservation, Session, Track, ANONYMOUS_SESSION};
