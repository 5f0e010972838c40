use anyhow::{Result, bail};
use serde::Serialize;
use std::path::{Path, PathBuf};

use setboard_game::{
    Difficulty, JsonFileStore, ProcessedTemplate, SampleRng, ScenarioSampler, TemplateFile,
};

use crate::util::split_csv;

/// A template that could not be turned into variants.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateFailure {
    pub source: PathBuf,
    pub sample_round: u64,
    pub error: String,
}

/// Everything one batch run produced.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub seed: u64,
    pub templates_found: usize,
    pub processed: Vec<ProcessedTemplate>,
    pub failures: Vec<TemplateFailure>,
}

impl BatchSummary {
    #[must_use]
    pub const fn new(seed: u64, templates_found: usize) -> Self {
        Self {
            seed,
            templates_found,
            processed: Vec::new(),
            failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn files_written(&self) -> usize {
        self.processed.iter().map(|p| p.written.len()).sum()
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse the comma-separated difficulty list, rejecting unknown labels up front.
pub fn parse_difficulties(raw: &str) -> Result<Vec<Difficulty>> {
    let mut difficulties = Vec::new();
    for label in split_csv(raw) {
        let difficulty: Difficulty = label.parse()?;
        if !difficulties.contains(&difficulty) {
            difficulties.push(difficulty);
        }
    }
    if difficulties.is_empty() {
        bail!("no difficulty levels requested");
    }
    Ok(difficulties)
}

/// Run every template `samples` times. A failing template is recorded and the
/// batch moves on to the next one.
pub fn run_batch(
    sampler: &ScenarioSampler<JsonFileStore>,
    templates: &[TemplateFile],
    out_dir: &Path,
    difficulties: &[Difficulty],
    samples: u64,
    rng: &mut SampleRng,
    summary: &mut BatchSummary,
) {
    for template in templates {
        for sample_round in 1..=samples {
            match sampler.process_template(template, out_dir, difficulties, rng) {
                Ok(processed) => {
                    log::debug!(
                        "{} round {sample_round}: {}",
                        template.path.display(),
                        processed.resolution.instructions
                    );
                    summary.processed.push(processed);
                }
                Err(err) => {
                    log::error!("{}: {err}", template.path.display());
                    summary.failures.push(TemplateFailure {
                        source: template.path.clone(),
                        sample_round,
                        error: err.to_string(),
                    });
                    break;
                }
            }
        }
    }
}
