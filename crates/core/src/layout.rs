//! Line reconstruction from unordered word boxes.
//!
//! OCR engines hand back words in no particular order.  This module rebuilds
//! reading order for single-column text: words are grouped into lines by
//! quantising their vertical center, lines are emitted top to bottom, and
//! words inside a line are sorted left to right.  Every public function is a
//! pure transformation; the caller's [`WordBox`]es are never modified.
//!
//! # Pipeline
//!
//! ```text
//! WordBox[]  ->  PositionedWord[]  ->  Line[]  ->  String[]
//!                  position             sort_words   format_lines
//! ```
//!
//! # Known approximation
//!
//! Grouping uses fixed buckets (`round(y_avg / y_tol)`), not interval
//! clustering.  Two words whose centers are closer than `y_tol` can still
//! land in neighbouring buckets when a bucket boundary falls between them.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::types::WordBox;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default bucket height, in the same normalized units as the bounding boxes.
pub const DEFAULT_Y_TOL: f64 = 0.005;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid line tolerance {0}: expected a positive, finite number")]
    InvalidTolerance(f64),
    #[error("Word {index} ({text:?}) has a non-finite bounding box coordinate")]
    NonFiniteBox { index: usize, text: String },
}

/// A word together with the centers derived from its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedWord {
    pub word: WordBox,
    pub x_avg: f64,
    pub y_avg: f64,
}

impl PositionedWord {
    pub fn new(word: WordBox) -> Self {
        let x_avg = word.bbox.x_avg();
        let y_avg = word.bbox.y_avg();
        PositionedWord { word, x_avg, y_avg }
    }

    pub fn text(&self) -> &str {
        &self.word.text
    }
}

/// Words sharing one bucket key, ordered left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub key: i64,
    pub words: Vec<PositionedWord>,
}

impl Line {
    /// Concatenate all word texts with a single space separator.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Mean vertical center of the line's words.
    pub fn y_avg(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        self.words.iter().map(|w| w.y_avg).sum::<f64>() / self.words.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Quantise a vertical center into a line bucket.
///
/// The quotient `y_avg / y_tol` is rounded half to even, so `0.5` maps to
/// `0`, `1.5` to `2` and `2.5` to `2`.  Out-of-range quotients saturate at
/// the `i64` bounds.
pub fn bucket_key(y_avg: f64, y_tol: f64) -> i64 {
    (y_avg / y_tol).round_ties_even() as i64
}

/// Group word boxes into lines, top to bottom, each sorted left to right.
///
/// The input is cloned into [`PositionedWord`]s; nothing the caller owns is
/// touched.  Words with equal `x_avg` keep their input order.
pub fn sort_words(words: &[WordBox], y_tol: f64) -> Result<Vec<Line>, LayoutError> {
    if !y_tol.is_finite() || y_tol <= 0.0 {
        return Err(LayoutError::InvalidTolerance(y_tol));
    }

    let mut buckets: BTreeMap<i64, Vec<PositionedWord>> = BTreeMap::new();

    for (index, word) in words.iter().enumerate() {
        if !word.bbox.is_finite() {
            return Err(LayoutError::NonFiniteBox {
                index,
                text: word.text.clone(),
            });
        }
        let positioned = PositionedWord::new(word.clone());
        let key = bucket_key(positioned.y_avg, y_tol);
        buckets.entry(key).or_default().push(positioned);
    }

    let lines = buckets
        .into_iter()
        .map(|(key, mut words)| {
            // `sort_by` is stable, which keeps ties in input order.
            words.sort_by(|a, b| a.x_avg.total_cmp(&b.x_avg));
            Line { key, words }
        })
        .collect();

    Ok(lines)
}

/// Render each line as its space-joined text.
pub fn format_lines(lines: &[Line]) -> Vec<String> {
    lines.iter().map(Line::text).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
