use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::batch::BatchSummary;

pub fn generate_console_report(
    out: &mut dyn Write,
    summary: &BatchSummary,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Sampling Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;
    writeln!(out, "Seed: {}", summary.seed)?;
    writeln!(out, "Templates found: {}", summary.templates_found)?;
    writeln!(
        out,
        "Variants written: {}",
        summary.files_written().to_string().green()
    )?;
    writeln!(out, "Failures: {}", summary.failures.len().to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for processed in &summary.processed {
        let resolution = &processed.resolution;
        writeln!(
            out,
            "✅ scenario {:03} {} targets {:?}",
            processed.scenario_ix,
            resolution.instructions.bold(),
            resolution.target_card_ids
        )?;
        if resolution.dropped_cards > 0 || resolution.distractors_resampled > 0 {
            writeln!(
                out,
                "   dropped {} cards, resampled {} distractors",
                resolution.dropped_cards, resolution.distractors_resampled
            )?;
        }
        for written in &processed.written {
            writeln!(out, "   {:5} -> {}", written.difficulty, written.path.display())?;
        }
    }

    for failure in &summary.failures {
        writeln!(
            out,
            "❌ {} (round {}): {}",
            failure.source.display(),
            failure.sample_round,
            failure.error.red()
        )?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, summary: &BatchSummary) -> Result<()> {
    let json_output = serde_json::to_string_pretty(summary)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use setboard_game::{CardProperties, Difficulty, ProcessedTemplate, Resolution, WrittenVariant};
    use std::path::PathBuf;

    fn summary() -> BatchSummary {
        let mut summary = BatchSummary::new(42, 1);
        summary.processed.push(ProcessedTemplate {
            source: PathBuf::from("scenarios_src/scenario_state (5).json"),
            scenario_ix: 5,
            resolution: Resolution {
                target_card_ids: vec![3, 8, 11],
                target_properties: CardProperties::new(2, 1, 2),
                instructions: "TWO BLUE PLUSSES.".to_string(),
                kept_card_ids: (1..=12).collect(),
                dropped_cards: 2,
                distractors_resampled: 1,
            },
            written: vec![WrittenVariant {
                difficulty: Difficulty::Easy,
                path: PathBuf::from("scenarios_sampled/scenario005_easy_sample001.json"),
            }],
        });
        summary
    }

    #[test]
    fn json_report_lists_written_files() {
        let mut buffer = Vec::new();
        generate_json_report(&mut buffer, &summary()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(
            value["processed"][0]["written"][0]["difficulty"],
            serde_json::json!("easy")
        );
        assert_eq!(
            value["processed"][0]["resolution"]["instructions"],
            serde_json::json!("TWO BLUE PLUSSES.")
        );
    }

    #[test]
    fn console_report_mentions_instructions_and_paths() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        generate_console_report(&mut buffer, &summary(), Duration::from_millis(5)).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("TWO BLUE PLUSSES."));
        assert!(text.contains("scenario005_easy_sample001.json"));
        assert!(text.contains("resampled 1 distractors"));
    }
}
