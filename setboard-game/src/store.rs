//! Filesystem scenario store and file naming conventions.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::ScenarioStore;
use crate::constants::TEMPLATE_PREFIX;
use crate::difficulty::Difficulty;
use crate::error::StoreError;
use crate::scenario::Scenario;

/// Reads and writes scenario documents as indented JSON files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore;

impl ScenarioStore for JsonFileStore {
    type Error = StoreError;

    fn read(&self, path: &Path) -> Result<Scenario, Self::Error> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Scenario::from_json(&raw).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(&self, scenario: &Scenario, path: &Path) -> Result<(), Self::Error> {
        let rendered = scenario.to_json_pretty().map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, rendered).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A template file and the scenario index embedded in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub scenario_ix: u32,
}

fn index_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\((\d+)\)").ok())
        .as_ref()
}

/// Extract the scenario index from a name such as `scenario_state (12).json`.
#[must_use]
pub fn parse_scenario_index(file_name: &str) -> Option<u32> {
    index_pattern()?
        .captures(file_name)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// List template files in `dir`, sorted by file name.
///
/// Files carrying the template prefix but no index are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn discover_templates(dir: &Path) -> Result<Vec<TemplateFile>, StoreError> {
    let io_err = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };
        match entry.file_name().into_string() {
            Ok(name) if name.starts_with(TEMPLATE_PREFIX) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                log::warn!("skipping {}: file name is not UTF-8", raw.to_string_lossy());
            }
        }
    }
    names.sort();

    let mut templates = Vec::with_capacity(names.len());
    for name in names {
        if let Some(scenario_ix) = parse_scenario_index(&name) {
            templates.push(TemplateFile {
                path: dir.join(&name),
                scenario_ix,
            });
        } else {
            log::warn!("skipping {name}: no scenario index in file name");
        }
    }
    Ok(templates)
}

/// File name for one generated variant.
#[must_use]
pub fn sample_file_name(scenario_ix: u32, difficulty: Difficulty, sample_ix: u32) -> String {
    format!("scenario{scenario_ix:03}_{difficulty}_sample{sample_ix:03}.json")
}

/// First `scenario{ix}_{difficulty}_sample{n}.json` path in `dir` that does
/// not exist yet, counting `n` up from one.
#[must_use]
pub fn next_sample_path(dir: &Path, scenario_ix: u32, difficulty: Difficulty) -> PathBuf {
    let mut sample_ix = 1;
    loop {
        let candidate = dir.join(sample_file_name(scenario_ix, difficulty, sample_ix));
        if !candidate.exists() {
            return candidate;
        }
        sample_ix += 1;
    }
}
