//! HTTP API handlers

pub mod emotions;
pub mod index;
pub mod music;
pub mod recommendations;
pub mod session;
pub mod status;

pub use emotions::{list_emotions, store_emotion};
pub use index::api_index;
pub use music::get_track;
pub use recommendations::get_recommendations;
pub use session::get_session;
pub use status::get_status;
