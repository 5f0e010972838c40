//! Setboard scenario sampler
//!
//! Platform-agnostic core for turning template Set-style puzzle boards into
//! randomized, difficulty-tagged variants. Every random draw goes through an
//! explicitly passed generator so a run is reproducible from its seed.

pub mod clean;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod instructions;
pub mod properties;
pub mod resample;
pub mod scenario;
pub mod seed;
pub mod store;

use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use clean::clean_scenario;
pub use difficulty::{Difficulty, FogRange, configure, set_difficulty};
pub use error::{PipelineError, SampleError, StoreError};
pub use instructions::format_instructions;
pub use properties::{
    CardProperties, sample_card_properties, sample_card_state, sample_properties_except,
};
pub use resample::{Resolution, resample_scenario};
pub use scenario::{Card, CardId, CardState, Objective, Scenario};
pub use seed::{SampleRng, resolve_seed, rng_from_seed};
pub use store::{
    JsonFileStore, TemplateFile, discover_templates, next_sample_path, parse_scenario_index,
};

/// Trait for abstracting scenario persistence.
pub trait ScenarioStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a scenario document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed.
    fn read(&self, path: &Path) -> Result<Scenario, Self::Error>;

    /// Persist a scenario document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(&self, scenario: &Scenario, path: &Path) -> Result<(), Self::Error>;
}

/// One difficulty-tagged copy of a resampled scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioVariant {
    pub difficulty: Difficulty,
    pub scenario: Scenario,
}

/// A resampled scenario and its per-difficulty variants.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledScenario {
    pub resolution: Resolution,
    pub variants: Vec<ScenarioVariant>,
}

/// Clean and resample `template` once, then configure an independent copy per
/// requested difficulty.
///
/// # Errors
///
/// Returns an error if the template holds fewer than three cards.
pub fn sample_variants<R: Rng>(
    template: Scenario,
    difficulties: &[Difficulty],
    rng: &mut R,
) -> Result<SampledScenario, SampleError> {
    let cleaned = clean_scenario(template);
    let (base, resolution) = resample_scenario(cleaned, rng)?;
    let variants = difficulties
        .iter()
        .map(|&difficulty| ScenarioVariant {
            difficulty,
            scenario: set_difficulty(base.clone(), difficulty),
        })
        .collect();
    Ok(SampledScenario {
        resolution,
        variants,
    })
}

/// Where one variant was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenVariant {
    pub difficulty: Difficulty,
    pub path: PathBuf,
}

/// Outcome of running one template file through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedTemplate {
    pub source: PathBuf,
    pub scenario_ix: u32,
    pub resolution: Resolution,
    pub written: Vec<WrittenVariant>,
}

/// Drives templates through the pipeline against a [`ScenarioStore`].
pub struct ScenarioSampler<S>
where
    S: ScenarioStore,
{
    store: S,
}

impl<S> ScenarioSampler<S>
where
    S: ScenarioStore,
{
    /// Create a sampler backed by the provided store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read `template`, generate one variant per difficulty and save each
    /// under the next free sample index in `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be read, resampled or if a
    /// variant cannot be saved.
    pub fn process_template<R: Rng>(
        &self,
        template: &TemplateFile,
        out_dir: &Path,
        difficulties: &[Difficulty],
        rng: &mut R,
    ) -> Result<ProcessedTemplate, PipelineError<S::Error>> {
        let scenario = self
            .store
            .read(&template.path)
            .map_err(PipelineError::Store)?;
        let sampled = sample_variants(scenario, difficulties, rng)?;

        let mut written = Vec::with_capacity(sampled.variants.len());
        for variant in &sampled.variants {
            let path = next_sample_path(out_dir, template.scenario_ix, variant.difficulty);
            self.store
                .save(&variant.scenario, &path)
                .map_err(PipelineError::Store)?;
            log::info!(
                "scenario {} ({}) -> {}",
                template.scenario_ix,
                variant.difficulty,
                path.display()
            );
            written.push(WrittenVariant {
                difficulty: variant.difficulty,
                path,
            });
        }

        Ok(ProcessedTemplate {
            source: template.path.clone(),
            scenario_ix: template.scenario_ix,
            resolution: sampled.resolution,
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        docs: Rc<RefCell<HashMap<PathBuf, Scenario>>>,
    }

    impl ScenarioStore for MemoryStore {
        type Error = Infallible;

        fn read(&self, path: &Path) -> Result<Scenario, Self::Error> {
            Ok(self.docs.borrow().get(path).cloned().unwrap_or_default())
        }

        fn save(&self, scenario: &Scenario, path: &Path) -> Result<(), Self::Error> {
            self.docs
                .borrow_mut()
                .insert(path.to_path_buf(), scenario.clone());
            Ok(())
        }
    }

    fn template(n: usize) -> Scenario {
        let mut scenario = Scenario::default();
        scenario.prop_update.props = (0..n)
            .map(|i| Card {
                id: CardId::try_from(i).unwrap(),
                card_init: CardState::fresh(CardProperties::new(5, 5, 1)),
                extra: serde_json::Map::new(),
            })
            .collect();
        scenario
    }

    #[test]
    fn variants_share_resolution_but_not_fog() {
        let mut rng = rng_from_seed(8);
        let sampled = sample_variants(template(12), &Difficulty::ALL, &mut rng).unwrap();
        assert_eq!(sampled.variants.len(), 2);
        let easy = &sampled.variants[0].scenario;
        let hard = &sampled.variants[1].scenario;
        assert_eq!(easy.target_card_ids, hard.target_card_ids);
        assert_eq!(easy.cards(), hard.cards());
        assert_eq!(easy.map.fog_start, serde_json::Number::from(30));
        assert_eq!(hard.map.fog_start, serde_json::Number::from(2));
        assert_eq!(
            easy.instructions(),
            Some(sampled.resolution.instructions.as_str())
        );
    }

    #[test]
    fn sampler_saves_each_variant_through_store() {
        let store = MemoryStore::default();
        let source = PathBuf::from("src/scenario_state (3).json");
        store.docs.borrow_mut().insert(source.clone(), template(14));
        let sampler = ScenarioSampler::new(store.clone());
        let file = TemplateFile {
            path: source,
            scenario_ix: 3,
        };
        let out_dir = std::env::temp_dir().join("setboard-memory-store-unused");
        let mut rng = rng_from_seed(21);
        let processed = sampler
            .process_template(&file, &out_dir, &Difficulty::ALL, &mut rng)
            .unwrap();

        assert_eq!(processed.written.len(), 2);
        assert!(processed.written[0].path.ends_with("scenario003_easy_sample001.json"));
        assert!(processed.written[1].path.ends_with("scenario003_hard_sample001.json"));
        let saved = store.docs.borrow();
        let hard = &saved[&processed.written[1].path];
        assert_eq!(hard.cards().len(), 12);
        assert_eq!(hard.target_card_ids, processed.resolution.target_card_ids);
    }

    #[test]
    fn small_templates_fail_with_precondition_error() {
        let store = MemoryStore::default();
        let source = PathBuf::from("scenario_state (1).json");
        store.docs.borrow_mut().insert(source.clone(), template(2));
        let sampler = ScenarioSampler::new(store);
        let file = TemplateFile {
            path: source,
            scenario_ix: 1,
        };
        let mut rng = rng_from_seed(0);
        let err = sampler
            .process_template(&file, Path::new("."), &Difficulty::ALL, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Sample(SampleError::NotEnoughCards { found: 2, .. })
        ));
    }
}
