use std::path::Path;

use namescan_core::ScanConfig;

use crate::error::Error;

/// Read a TOML configuration file.
pub fn load_file(path: &Path) -> Result<ScanConfig, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ScanConfig::from_toml_str(&text)?)
}

/// Layer the configuration sources and validate the result.
///
/// Precedence, lowest first: built-in defaults, the TOML file, then the
/// values clap collected from the environment or the command line.
pub fn resolve(
    file: Option<&Path>,
    y_tol: Option<f64>,
    markers: &[String],
) -> Result<ScanConfig, Error> {
    let mut config = match file {
        Some(path) => load_file(path)?,
        None => ScanConfig::default(),
    };

    if let Some(y_tol) = y_tol {
        config.y_tol = y_tol;
    }
    if !markers.is_empty() {
        config.markers = markers.to_vec();
    }

    config.validate()?;
    Ok(config)
}
