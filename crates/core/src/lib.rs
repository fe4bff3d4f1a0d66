//! Core library for namescan
//!
//! This crate implements the **Functional Core** of the namescan application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`namescan_core`** (this crate): Pure transformation functions with zero I/O
//! - **`namescan`**: File access, CLI, logging and output (the Imperative Shell)
//!
//! Every function here is deterministic and leaves its inputs untouched, so
//! the tests build fixture data in memory and assert on the result.
//!
//! # Module Organization
//!
//! - [`document`]: The OCR document model and its validation into word boxes
//! - [`layout`]: Reading-order reconstruction (word boxes to lines)
//! - [`names`]: Marker-based patient name extraction from text lines
//! - [`config`]: Scan parameters and their TOML representation
//! - [`types`]: Shared domain types
//!
//! # Example Usage
//!
//! ```rust
//! use namescan_core::{document_lines, extract_patient_name, parse_document, ScanConfig};
//!
//! let json = r#"{"pages": [{"words": [
//!     {"text": "Dupont", "bbox": {"x_min": 0.2, "x_max": 0.3, "y_min": 0.1, "y_max": 0.11}},
//!     {"text": "Monsieur", "bbox": {"x_min": 0.0, "x_max": 0.1, "y_min": 0.1, "y_max": 0.11}},
//!     {"text": "Jean", "bbox": {"x_min": 0.1, "x_max": 0.2, "y_min": 0.1, "y_max": 0.11}}
//! ]}]}"#;
//!
//! let config = ScanConfig::default();
//! let document = parse_document(json).unwrap();
//! let lines = document_lines(&document, config.y_tol).unwrap();
//! assert_eq!(lines, vec!["Monsieur Jean Dupont"]);
//!
//! let name = extract_patient_name(&lines, &config.markers).unwrap();
//! assert_eq!(name.to_string(), "Jean Dupont");
//! ```

pub mod config;
pub mod document;
pub mod layout;
pub mod names;
pub mod types;

pub use config::{ConfigError, ScanConfig};
pub use document::{document_layout, document_lines, parse_document, Document, DocumentError};
pub use layout::{bucket_key, format_lines, sort_words, LayoutError, Line, PositionedWord};
pub use names::{extract_patient_name, find_patient_name};
pub use types::{BoundingBox, NameMatch, PatientName, WordBox};
