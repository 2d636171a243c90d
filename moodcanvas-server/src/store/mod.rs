//! In-memory stores owned by the application state
//!
//! Each store wraps its data in an `Arc<RwLock<..>>` so clones share state
//! and every operation runs under a single lock acquisition.

pub mod history;
pub mod sessions;

pub use history::{EmotionHistory, HistoryQuery};
pub use sessions::SessionStore;
