use std::path::PathBuf;

use namescan_core::{format_lines, Line};

use crate::input::{read_layout, DEFAULT_PATH};
use crate::prelude::{println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "lines")]
#[command(about = "Print the reconstructed text lines of an OCR document")]
pub struct App {
    /// Path to the OCR JSON document
    #[clap(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Print the lines as a JSON array of strings
    #[clap(long)]
    pub json: bool,

    /// Show bucket keys and vertical positions next to each line
    #[clap(long, conflicts_with = "json")]
    pub table: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Plain,
    Json,
    Table,
}

impl App {
    fn output(&self) -> Output {
        if self.json {
            Output::Json
        } else if self.table {
            Output::Table
        } else {
            Output::Plain
        }
    }
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let config = global.scan_config()?;
    log::info!("Reconstructing lines of {}", app.path.display());

    let lines = match read_layout(&app.path, config.y_tol) {
        Ok(lines) => lines,
        Err(err) => {
            crate::input::report(&err);
            return Ok(());
        }
    };

    let rendered = render(&lines, app.output())?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

pub fn render(lines: &[Line], output: Output) -> Result<String> {
    Ok(match output {
        Output::Plain => format_lines(lines).join("\n"),
        Output::Json => serde_json::to_string_pretty(&format_lines(lines))?,
        Output::Table => render_table(lines),
    })
}

fn render_table(lines: &[Line]) -> String {
    if lines.is_empty() {
        return "No lines found.".to_string();
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Key", "y", "Words", "Text"]);

    for (index, line) in lines.iter().enumerate() {
        table.add_row(prettytable::row![
            index + 1,
            line.key,
            f!("{:.4}", line.y_avg()),
            line.words.len(),
            line.text()
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use namescan_core::{sort_words, BoundingBox, WordBox};

    use super::*;

    fn make_word(text: &str, x: f64, y: f64) -> WordBox {
        WordBox::new(
            text,
            BoundingBox {
                x_min: x - 0.02,
                x_max: x + 0.02,
                y_min: y - 0.001,
                y_max: y + 0.001,
            },
        )
    }

    fn sample_lines() -> Vec<Line> {
        let words = vec![
            make_word("le", 0.05, 0.2),
            make_word("Jean", 0.15, 0.1),
            make_word("12/01/1980", 0.20, 0.2),
            make_word("Monsieur", 0.05, 0.1),
            make_word("Dupont", 0.25, 0.1),
        ];
        sort_words(&words, 0.005).unwrap()
    }

    fn document_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn app(path: PathBuf) -> App {
        App {
            path,
            json: false,
            table: false,
        }
    }

    #[test]
    fn test_render_plain() {
        let rendered = render(&sample_lines(), Output::Plain).unwrap();
        assert_eq!(rendered, "Monsieur Jean Dupont\nle 12/01/1980");
        assert_eq!(render(&[], Output::Plain).unwrap(), "");
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&sample_lines(), Output::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec!["Monsieur Jean Dupont", "le 12/01/1980"]);

        let empty: Vec<String> = serde_json::from_str(&render(&[], Output::Json).unwrap()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_render_table() {
        let rendered = render(&sample_lines(), Output::Table).unwrap();
        assert!(rendered.contains("Key"));
        assert!(rendered.contains("Monsieur Jean Dupont"));
        assert!(rendered.contains("le 12/01/1980"));
        assert!(rendered.contains("0.1000"));
        assert!(rendered.contains("40"));
    }

    #[test]
    fn test_render_table_empty_page() {
        assert_eq!(render(&[], Output::Table).unwrap(), "No lines found.");
    }

    #[test]
    fn test_output_selection() {
        let mut a = app(PathBuf::from("doc.json"));
        assert_eq!(a.output(), Output::Plain);
        a.table = true;
        assert_eq!(a.output(), Output::Table);
        a.table = false;
        a.json = true;
        assert_eq!(a.output(), Output::Json);
    }

    #[test]
    fn test_run_missing_file_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(app(dir.path().join("absent.json")), crate::Global::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_without_pages_still_succeeds() {
        let file = document_file(r#"{"pages": []}"#);
        let result = run(app(file.path().to_path_buf()), crate::Global::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_rejects_invalid_configuration() {
        let file = document_file(r#"{"pages": [{"words": []}]}"#);
        let global = crate::Global {
            y_tol: Some(-1.0),
            ..crate::Global::default()
        };
        assert!(run(app(file.path().to_path_buf()), global).is_err());
    }
}
