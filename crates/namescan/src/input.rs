use std::path::Path;

use namescan_core::{document_layout, parse_document, Document, Line};

use crate::error::Error;
use crate::prelude::eprintln;

/// Document read when no path is given on the command line.
pub const DEFAULT_PATH: &str = "JSON/doc1.json";

pub fn read_document(path: &Path) -> Result<Document, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&text)?;

    log::debug!(
        "{}: {} page(s), {} word(s) on the first page",
        path.display(),
        document.pages.len(),
        document.pages.first().map_or(0, |p| p.words.len())
    );

    Ok(document)
}

/// Read `path` and rebuild the lines of its first page.
pub fn read_layout(path: &Path, y_tol: f64) -> Result<Vec<Line>, Error> {
    let document = read_document(path)?;
    let lines = document_layout(&document, y_tol)?;
    log::debug!("Reconstructed {} line(s)", lines.len());
    Ok(lines)
}

/// Report a document that could not be processed.
///
/// These failures are the user's input, not a crash: the commands print
/// this message and still exit successfully.
pub fn report(err: &Error) {
    log::debug!("{err:?}");
    eprintln!("{}", report_message(err));
}

pub fn report_message(err: &Error) -> String {
    format!("Error processing JSON file: {err}")
}
