//! Best-effort field extraction from recognized text.
//!
//! The text-recognition engine is not part of this crate: it hands over a list
//! of spans and this module guesses the economy reading and the odometer from
//! unit markers and magnitude bounds. Extraction is total. When nothing
//! plausible is found the caller's fallbacks come back untouched.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A token produced by the upstream recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedSpan {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl RecognizedSpan {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            confidence: None,
        }
    }

    pub fn with_confidence(text: &str, confidence: f64) -> Self {
        Self {
            text: text.to_string(),
            confidence: Some(confidence),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtractedFields {
    pub economy: f64,
    pub odometer: u64,
}

/// Heuristic bounds. Tuned from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Economy guesses must be strictly below this.
    pub economy_ceiling: f64,
    /// Odometer guesses must be strictly above this.
    pub odometer_floor: u64,
    /// Spans reporting a lower confidence are ignored.
    pub min_confidence: Option<f64>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            economy_ceiling: 50.0,
            odometer_floor: 100,
            min_confidence: None,
        }
    }
}

static ECONOMY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"km\s*/\s*l\b|km\s*/\s*lit(?:er|re)s?\b|\bkml\b|\bkpl\b|\bmpg\b|l\s*/\s*100")
        .expect("valid economy regex")
});

static DISTANCE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z])(?:km|mi|miles?)(?:[^a-z]|$)").expect("valid distance regex")
});

static VOLUME_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-z])(?:l|liters?|litres?|gal)(?:[^a-z]|$)").expect("valid volume regex")
});

/// Guess economy and odometer with the default thresholds.
pub fn extract(spans: &[RecognizedSpan], default_economy: f64, default_odometer: u64) -> ExtractedFields {
    extract_with(spans, default_economy, default_odometer, &Thresholds::default())
}

/// Single pass over `spans`; for each field the last qualifying span wins.
pub fn extract_with(
    spans: &[RecognizedSpan],
    default_economy: f64,
    default_odometer: u64,
    thresholds: &Thresholds,
) -> ExtractedFields {
    let mut out = ExtractedFields {
        economy: default_economy,
        odometer: default_odometer,
    };

    for span in spans {
        if let (Some(min), Some(c)) = (thresholds.min_confidence, span.confidence)
            && c < min
        {
            tracing::debug!(text = %span.text, confidence = c, "span below confidence threshold");
            continue;
        }

        match classify(&span.text) {
            Candidate::Economy(v) if v > 0.0 && v < thresholds.economy_ceiling => {
                out.economy = v;
            }
            Candidate::Odometer(v) if v > thresholds.odometer_floor => {
                out.odometer = v;
            }
            Candidate::None => {}
            rejected => {
                tracing::debug!(text = %span.text, ?rejected, "implausible reading discarded");
            }
        }
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Candidate {
    Economy(f64),
    Odometer(u64),
    None,
}

fn classify(text: &str) -> Candidate {
    let lower = text.to_lowercase();
    let cleaned = clean_numeric(&lower);
    if cleaned.is_empty() || cleaned == "." {
        return Candidate::None;
    }

    let has_economy = ECONOMY_MARKER.is_match(&lower);
    let has_distance = DISTANCE_MARKER.is_match(&lower);

    if cleaned.contains('.') {
        if has_economy || !has_distance {
            return cleaned
                .parse::<f64>()
                .map(Candidate::Economy)
                .unwrap_or(Candidate::None);
        }
        return Candidate::None;
    }

    if has_distance && !has_economy && !VOLUME_MARKER.is_match(&lower) {
        return cleaned
            .parse::<u64>()
            .map(Candidate::Odometer)
            .unwrap_or(Candidate::None);
    }

    Candidate::None
}

/// Keep digits and the first `.`; everything else is dropped.
fn clean_numeric(lower: &str) -> String {
    let mut seen_dot = false;
    lower
        .chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect()
}
