//! Wire DTOs for the lead and stats endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON contract (snake_case, kebab-case
//! genre values) so serde does the mapping and no call site formats JSON by
//! hand.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker sent with every lead so the backend can attribute it to this page.
pub const LEAD_SOURCE: &str = "landing";

/// Music genre accepted by the backend's `style` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Pop,
    Rock,
    Jazz,
    Classical,
    Electronic,
    HipHop,
    Ambient,
    Cinematic,
}

impl Genre {
    /// Every genre in the order the style `<select>` lists them.
    pub const ALL: [Genre; 8] = [
        Genre::Pop,
        Genre::Rock,
        Genre::Jazz,
        Genre::Classical,
        Genre::Electronic,
        Genre::HipHop,
        Genre::Ambient,
        Genre::Cinematic,
    ];

    /// Value written into the form field and sent on the wire.
    #[must_use]
    pub fn form_value(self) -> &'static str {
        match self {
            Self::Pop => "pop",
            Self::Rock => "rock",
            Self::Jazz => "jazz",
            Self::Classical => "classical",
            Self::Electronic => "electronic",
            Self::HipHop => "hip-hop",
            Self::Ambient => "ambient",
            Self::Cinematic => "cinematic",
        }
    }

    /// Option label shown in the style `<select>`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pop => "Поп",
            Self::Rock => "Рок",
            Self::Jazz => "Джаз",
            Self::Classical => "Классика",
            Self::Electronic => "Электроника",
            Self::HipHop => "Хип-хоп",
            Self::Ambient => "Эмбиент",
            Self::Cinematic => "Кинематографичная",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

/// Returned when a form value names no known genre.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.form_value() == s)
            .ok_or_else(|| UnknownGenre(s.to_owned()))
    }
}

/// Validated lead payload for `POST /api/leads`.
///
/// Only [`crate::util::validation::validate_lead`] builds one, which keeps
/// `text_description` present exactly when `has_text` is set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub style: Genre,
    pub has_text: bool,
    pub text_description: Option<String>,
    pub message: Option<String>,
    pub source: &'static str,
}

/// Body of a successful `GET /api/stats` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub total_tracks: Option<f64>,
}

/// Error body the backend attaches to rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` field when it is a non-empty string.
    ///
    /// Validation failures from the backend put an array in `detail`; those
    /// fall through to the generic banner text.
    #[must_use]
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
