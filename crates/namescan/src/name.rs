use std::path::{Path, PathBuf};

use namescan_core::{find_patient_name, format_lines, NameMatch, ScanConfig};

use crate::input::{read_layout, DEFAULT_PATH};
use crate::prelude::{eprintln, println, *};

const NOT_FOUND: &str = "Patient name not found.";

#[derive(Debug, clap::Parser)]
#[command(name = "name")]
#[command(about = "Extract the patient name from an OCR document")]
pub struct App {
    /// Path to the OCR JSON document
    #[clap(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Print the match (or null) as JSON
    #[clap(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let config = global.scan_config()?;
    log::info!("Scanning {} for a patient name", app.path.display());

    let found = match name_data(&app.path, &config) {
        Ok(found) => found,
        Err(err) => {
            crate::input::report(&err);
            return Ok(());
        }
    };

    match &found {
        Some(m) => {
            log::info!("Found a name after {:?} on line {}", m.marker, m.line);
            if global.verbose {
                eprintln!("Matched marker {:?} on line {}", m.marker, m.line + 1);
            }
        }
        None => log::info!("No marker is followed by two capitalized words"),
    }

    println!("{}", render(found.as_ref(), app.json)?);

    Ok(())
}

/// Read the document at `path` and look for a patient name.
pub fn name_data(
    path: &Path,
    config: &ScanConfig,
) -> std::result::Result<Option<NameMatch>, Error> {
    let lines = format_lines(&read_layout(path, config.y_tol)?);
    Ok(find_patient_name(&lines, &config.markers))
}

pub fn render(found: Option<&NameMatch>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&found)?);
    }

    Ok(match found {
        Some(m) => m.name.to_string(),
        None => NOT_FOUND.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use namescan_core::PatientName;

    use super::*;

    const DOCUMENT: &str = r#"{"pages": [{"words": [
        {"text": "le", "bbox": {"x_min": 0.03, "x_max": 0.07, "y_min": 0.198, "y_max": 0.202}},
        {"text": "Dupont", "bbox": {"x_min": 0.21, "x_max": 0.29, "y_min": 0.099, "y_max": 0.101}},
        {"text": "Monsieur", "bbox": {"x_min": 0.00, "x_max": 0.10, "y_min": 0.099, "y_max": 0.101}},
        {"text": "12/01/1980", "bbox": {"x_min": 0.10, "x_max": 0.30, "y_min": 0.198, "y_max": 0.202}},
        {"text": "Jean", "bbox": {"x_min": 0.11, "x_max": 0.19, "y_min": 0.099, "y_max": 0.101}}
    ]}]}"#;

    fn document_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn jean_dupont() -> NameMatch {
        NameMatch {
            name: PatientName::new("Jean", "Dupont"),
            line: 0,
            marker: "Monsieur".to_string(),
        }
    }

    #[test]
    fn test_name_data_finds_name() {
        let file = document_file(DOCUMENT);
        let found = name_data(file.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, Some(jean_dupont()));
    }

    #[test]
    fn test_name_data_respects_markers() {
        let file = document_file(DOCUMENT);
        let config = ScanConfig {
            markers: vec!["Madame".to_string()],
            ..ScanConfig::default()
        };
        assert_eq!(name_data(file.path(), &config).unwrap(), None);
    }

    #[test]
    fn test_name_data_empty_page() {
        let file = document_file(r#"{"pages": [{"words": []}]}"#);
        let found = name_data(file.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render(Some(&jean_dupont()), false).unwrap(), "Jean Dupont");
        assert_eq!(render(None, false).unwrap(), NOT_FOUND);
    }

    #[test]
    fn test_render_json() {
        assert_eq!(render(None, true).unwrap(), "null");

        let rendered = render(Some(&jean_dupont()), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["first_name"], "Jean");
        assert_eq!(value["last_name"], "Dupont");
        assert_eq!(value["marker"], "Monsieur");
    }

    fn app(path: PathBuf) -> App {
        App { path, json: false }
    }

    #[test]
    fn test_run_finds_name() {
        let file = document_file(DOCUMENT);
        assert!(run(app(file.path().to_path_buf()), crate::Global::default()).is_ok());
    }

    #[test]
    fn test_run_missing_file_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(app(dir.path().join("nope.json")), crate::Global::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_without_pages_still_succeeds() {
        let file = document_file(r#"{"pages": []}"#);
        let result = run(app(file.path().to_path_buf()), crate::Global::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_malformed_word_still_succeeds() {
        let file = document_file(r#"{"pages": [{"words": [{"text": "Jean"}]}]}"#);
        let result = run(app(file.path().to_path_buf()), crate::Global::default());
        assert!(result.is_ok());
    }
}
