//! OCR document model and the pure half of the loader.
//!
//! The shell reads the file; everything from the raw JSON text onward lives
//! here.  Word records are deserialized loosely so that a missing or
//! mistyped `text`, `bbox` or coordinate can be reported with the record's
//! position instead of a bare serde message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::layout::{self, LayoutError, Line};
use crate::types::{BoundingBox, WordBox};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No pages found in JSON file.")]
    NoPages,
    #[error("Malformed word {index}: missing field `{field}`")]
    MalformedWord { index: usize, field: &'static str },
    #[error("Malformed word {index}: field `{field}` must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub words: Vec<RawWord>,
}

/// A word record as it appears in the file, before validation.
///
/// Fields stay untyped until [`RawWord::to_word_box`] so that a missing or
/// mistyped value is reported with the word's index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWord {
    pub text: Option<Value>,
    pub bbox: Option<Value>,
}

impl RawWord {
    /// Validate this record; `index` is only used to label the error.
    pub fn to_word_box(&self, index: usize) -> Result<WordBox, DocumentError> {
        let missing = |field| DocumentError::MalformedWord { index, field };
        let invalid = |field, expected| DocumentError::InvalidField {
            index,
            field,
            expected,
        };

        let text = match self.text.as_ref().ok_or_else(|| missing("text"))? {
            Value::String(text) => text.clone(),
            _ => return Err(invalid("text", "a string")),
        };

        let bbox = self
            .bbox
            .as_ref()
            .ok_or_else(|| missing("bbox"))?
            .as_object()
            .ok_or_else(|| invalid("bbox", "an object"))?;

        let coordinate = |field: &'static str, key: &str| -> Result<f64, DocumentError> {
            bbox.get(key)
                .filter(|value| !value.is_null())
                .ok_or_else(|| missing(field))?
                .as_f64()
                .ok_or_else(|| invalid(field, "a number"))
        };

        Ok(WordBox {
            text,
            bbox: BoundingBox {
                x_min: coordinate("bbox.x_min", "x_min")?,
                x_max: coordinate("bbox.x_max", "x_max")?,
                y_min: coordinate("bbox.y_min", "y_min")?,
                y_max: coordinate("bbox.y_max", "y_max")?,
            },
        })
    }
}

impl Page {
    /// Validate every word record, stopping at the first malformed one.
    pub fn word_boxes(&self) -> Result<Vec<WordBox>, DocumentError> {
        self.words
            .iter()
            .enumerate()
            .map(|(index, word)| word.to_word_box(index))
            .collect()
    }
}

impl Document {
    /// Only the first page is ever read.
    pub fn first_page(&self) -> Result<&Page, DocumentError> {
        self.pages.first().ok_or(DocumentError::NoPages)
    }
}

/// Parse the JSON text of an OCR document.
pub fn parse_document(json: &str) -> Result<Document, DocumentError> {
    Ok(serde_json::from_str(json)?)
}

/// Reconstruct the lines of the document's first page.
pub fn document_layout(document: &Document, y_tol: f64) -> Result<Vec<Line>, DocumentError> {
    let words = document.first_page()?.word_boxes()?;
    Ok(layout::sort_words(&words, y_tol)?)
}

/// Text of each line of the document's first page, top to bottom.
///
/// A first page without words yields an empty list.
pub fn document_lines(document: &Document, y_tol: f64) -> Result<Vec<String>, DocumentError> {
    let lines = document_layout(document, y_tol)?;
    Ok(layout::format_lines(&lines))
}
