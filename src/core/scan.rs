use crate::errors::{AppError, AppResult};
use crate::extract::{ExtractedFields, RecognizedSpan, Thresholds, extract_with};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Recognizers either emit `{text, confidence}` objects or bare strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpanInput {
    Full(RecognizedSpan),
    Text(String),
}

pub struct ScanLogic;

impl ScanLogic {
    /// Read a JSON array of spans produced by the text recognizer.
    pub fn load_spans(path: &Path) -> AppResult<Vec<RecognizedSpan>> {
        let content = fs::read_to_string(path)?;
        let items: Vec<SpanInput> = serde_json::from_str(&content)
            .map_err(|e| AppError::InvalidSpans(format!("{}: {}", path.display(), e)))?;

        Ok(items
            .into_iter()
            .map(|i| match i {
                SpanInput::Full(s) => s,
                SpanInput::Text(t) => RecognizedSpan::new(&t),
            })
            .collect())
    }

    pub fn run(
        spans: &[RecognizedSpan],
        default_economy: f64,
        default_odometer: u64,
        thresholds: &Thresholds,
    ) -> ExtractedFields {
        let fields = extract_with(spans, default_economy, default_odometer, thresholds);
        tracing::debug!(
            spans = spans.len(),
            economy = fields.economy,
            odometer = fields.odometer,
            "extraction finished"
        );
        fields
    }
}
