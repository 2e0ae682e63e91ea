//! Parameters read from `illumina_fields.toml`.

use anyhow::{Context, Result};
use log::{log, Level, LevelFilter};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Looked up next to the running executable when no path is given.
pub const PARAMETERS_FILENAME: &str = "illumina_fields.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Verbosity of the log written to stderr, before any `-v` flags.
    pub log_level: LevelFilter,
    /// Log every filename that is skipped while collecting, with the reason.
    pub report_rejected: bool,
}

/// Used for every key missing from the file, and when there is no file.
pub const DEFAULT_PARAMETERS: Parameters = Parameters {
    log_level: LevelFilter::Warn,
    report_rejected: false,
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

/// Parameters together with where they came from. Loading happens before
/// the logger exists, so call `report` once it does.
#[derive(Debug)]
pub struct LoadedParameters {
    /// Parameters from the file, or the defaults
    pub parameters: Parameters,
    /// The file that was read, or looked for
    pub path: PathBuf,
    /// False when `path` did not exist and the defaults are in use
    pub from_file: bool,
}

impl LoadedParameters {
    /// Log what was loaded.
    pub fn report(&self) {
        for (level, message) in self.messages() {
            log!(level, "{message}");
        }
    }

    fn messages(&self) -> Vec<(Level, String)> {
        if !self.from_file {
            return vec![(
                Level::Warn,
                format!(
                    "could not find {PARAMETERS_FILENAME} at {}, falling back to defaults",
                    self.path.display()
                ),
            )];
        }
        let mut messages = vec![(
            Level::Info,
            format!("loaded parameters from {}", self.path.display()),
        )];
        let p = &self.parameters;
        if p.log_level != DEFAULT_PARAMETERS.log_level {
            messages.push((
                Level::Warn,
                format!("using non-default log_level = {:?}", p.log_level),
            ));
        }
        if p.report_rejected != DEFAULT_PARAMETERS.report_rejected {
            messages.push((
                Level::Warn,
                format!("using non-default report_rejected = {:?}", p.report_rejected),
            ));
        }
        messages
    }
}

impl Parameters {
    /// Read `path` if given; it must exist. Otherwise try
    /// `illumina_fields.toml` next to the executable, and use the defaults
    /// if there is none.
    pub fn load(path: Option<&Path>) -> Result<LoadedParameters> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path()?, false),
        };
        if !required && !path.exists() {
            return Ok(LoadedParameters {
                parameters: DEFAULT_PARAMETERS,
                path,
                from_file: false,
            });
        }
        let parameters = Parameters::read(&path)?;
        Ok(LoadedParameters {
            parameters,
            path,
            from_file: true,
        })
    }

    pub fn read(path: &Path) -> Result<Parameters> {
        let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        toml::from_str(&s).with_context(|| path.display().to_string())
    }
}

fn default_path() -> Result<PathBuf> {
    Ok(std::env::current_exe()
        .context("Unable to locate the running executable")?
        .with_file_name(PARAMETERS_FILENAME))
}
