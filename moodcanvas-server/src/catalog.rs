//! Static emotion → track catalog and the recommendation filter

use moodcanvas_common::{Emotion, Track};
use rand::seq::SliceRandom;

use crate::query::{take_prefix, DEFAULT_RECOMMENDATION_LIMIT};

/// Intensity at or above which only high-energy tracks are kept
pub const HIGH_INTENSITY: f64 = 0.7;
/// Intensity at or below which only low-energy tracks are kept
pub const LOW_INTENSITY: f64 = 0.3;
/// Minimum energy kept for high intensity
pub const HIGH_ENERGY_MIN: u8 = 6;
/// Maximum energy kept for low intensity
pub const LOW_ENERGY_MAX: u8 = 4;

const fn track(
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    genre: &'static str,
    mood: &'static str,
    energy: u8,
) -> Track {
    Track {
        id,
        title,
        artist,
        genre,
        mood,
        energy,
    }
}

const BUILTIN: &[(Emotion, &[Track])] = &[
    (
        Emotion::Happy,
        &[
            track("h1", "Sunshine Day", "Happy Vibes", "Pop", "uplifting", 8),
            track("h2", "Dancing Lights", "Joy Band", "Dance", "energetic", 9),
            track("h3", "Celebration Time", "Euphoria", "Rock", "triumphant", 7),
        ],
    ),
    (
        Emotion::Sad,
        &[
            track("s1", "Melancholy Rain", "Blue Mood", "Ambient", "reflective", 2),
            track("s2", "Quiet Thoughts", "Solitude", "Indie", "contemplative", 3),
            track("s3", "Gentle Tears", "Peace", "Classical", "healing", 1),
        ],
    ),
    (
        Emotion::Neutral,
        &[
            track("n1", "Calm Waters", "Tranquil", "Ambient", "peaceful", 3),
            track("n2", "Morning Coffee", "Chill", "Jazz", "relaxed", 4),
            track("n3", "Steady Flow", "Balance", "Electronic", "focused", 5),
        ],
    ),
    (
        Emotion::Angry,
        &[
            track("a1", "Storm Break", "Thunder", "Metal", "releasing", 9),
            track("a2", "Fire Storm", "Rage", "Rock", "cathartic", 8),
            track("a3", "Intense Focus", "Power", "Industrial", "channeling", 7),
        ],
    ),
    (
        Emotion::Surprised,
        &[
            track("su1", "Wonder Struck", "Amazing", "Pop", "curious", 6),
            track("su2", "Unexpected Joy", "Surprise", "Electronic", "excited", 7),
            track("su3", "Magic Moments", "Wonder", "Orchestral", "awe", 5),
        ],
    ),
    (
        Emotion::Fearful,
        &[
            track("f1", "Safe Harbor", "Comfort", "Ambient", "soothing", 2),
            track("f2", "Gentle Waves", "Calm Shore", "Nature", "grounding", 3),
            track("f3", "Peaceful Mind", "Zen", "Meditation", "protective", 1),
        ],
    ),
    (
        Emotion::Disgusted,
        &[
            track("d1", "Clean Slate", "Fresh", "Indie", "cleansing", 4),
            track("d2", "New Beginning", "Reset", "Electronic", "refreshing", 5),
            track("d3", "Pure Light", "Clarity", "Ambient", "purifying", 3),
        ],
    ),
];

/// Options accepted by [`Catalog::recommend`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    /// Prefix length; negative values drop entries from the end
    pub limit: i64,
    pub intensity: Option<f64>,
    pub shuffle: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECOMMENDATION_LIMIT,
            intensity: None,
            shuffle: false,
        }
    }
}

/// Energy band selected by a requested intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyBand {
    High,
    Low,
    Any,
}

impl EnergyBand {
    /// Intensities strictly between the two thresholds (and NaN) select every track
    pub fn for_intensity(intensity: Option<f64>) -> Self {
        match intensity {
            Some(i) if i >= HIGH_INTENSITY => EnergyBand::High,
            Some(i) if i <= LOW_INTENSITY => EnergyBand::Low,
            _ => EnergyBand::Any,
        }
    }

    pub fn admits(self, track: &Track) -> bool {
        match self {
            EnergyBand::High => track.energy >= HIGH_ENERGY_MIN,
            EnergyBand::Low => track.energy <= LOW_ENERGY_MAX,
            EnergyBand::Any => true,
        }
    }
}

/// Immutable emotion → track table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    buckets: &'static [(Emotion, &'static [Track])],
}

impl Catalog {
    /// The compiled-in catalog: seven emotions, three tracks each
    pub fn builtin() -> Self {
        Self { buckets: BUILTIN }
    }

    /// Known labels, in catalog order
    pub fn emotion_types(&self) -> Vec<&'static str> {
        self.buckets.iter().map(|(e, _)| e.as_str()).collect()
    }

    pub fn total_tracks(&self) -> usize {
        self.buckets.iter().map(|(_, tracks)| tracks.len()).sum()
    }

    fn bucket(&self, emotion: Emotion) -> Option<&'static [Track]> {
        self.buckets
            .iter()
            .find(|(e, _)| *e == emotion)
            .map(|(_, tracks)| *tracks)
    }

    /// Tracks for a label; unrecognised labels fall back to `neutral`
    pub fn tracks_for(&self, label: &str) -> &'static [Track] {
        Emotion::parse(label)
            .and_then(|e| self.bucket(e))
            .or_else(|| self.bucket(Emotion::Neutral))
            .unwrap_or(&[])
    }

    /// First track with the given id, scanning buckets in catalog order
    pub fn find_track(&self, id: &str) -> Option<&'static Track> {
        self.buckets
            .iter()
            .flat_map(|(_, tracks)| tracks.iter())
            .find(|t| t.id == id)
    }

    /// Filter by intensity, optionally shuffle, then truncate
    pub fn recommend(&self, label: &str, options: &RecommendOptions) -> Vec<Track> {
        let band = EnergyBand::for_intensity(options.intensity);
        let mut tracks: Vec<Track> = self
            .tracks_for(label)
            .iter()
            .filter(|t| band.admits(t))
            .copied()
            .collect();

        if options.shuffle {
            tracks.shuffle(&mut rand::thread_rng());
        }

        let keep = take_prefix(tracks.len(), options.limit);
        tracks.truncate(keep);
        tracks
    }
}
