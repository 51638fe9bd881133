//! Samples command: list the built-in example prompts with their live scores.

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use prompt_score_core::config::Config;
use prompt_score_core::samples::{SAMPLES, Sample};
use prompt_score_core::{Assessment, ScoringEngine};

use super::score::paint_score;

/// Arguments for the `samples` subcommand.
#[derive(Args, Debug, Default)]
pub struct SamplesArgs {
    /// Show only the sample with this number (1-based).
    #[arg(value_name = "N")]
    pub number: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ScoredSample {
    number: usize,
    #[serde(flatten)]
    sample: Sample,
    assessment: Assessment,
}

fn score_samples(engine: &ScoringEngine) -> Vec<ScoredSample> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(idx, sample)| ScoredSample {
            number: idx + 1,
            sample: *sample,
            assessment: engine.assess(sample.text),
        })
        .collect()
}

/// Print the sample prompts, scored with the configured lexicon.
#[instrument(name = "cmd_samples", skip_all, fields(number = ?args.number))]
pub fn cmd_samples(args: SamplesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing samples command");

    let engine = config
        .scoring_engine()
        .context("failed to build lexicon from configuration")?;
    let mut scored = score_samples(&engine);

    if let Some(n) = args.number {
        if n == 0 || n > scored.len() {
            bail!("no sample {n} (choose 1-{})", scored.len());
        }
        scored = vec![scored.swap_remove(n - 1)];
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    for (i, s) in scored.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}  {} {}",
            format!("{}.", s.number).bold(),
            s.sample.title.bold(),
            paint_score(s.assessment.report.total, s.assessment.class),
            format!("(advertised {})", s.sample.advertised_score).dimmed(),
        );
        println!("   {}", s.sample.text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_is_scored() {
        let scored = score_samples(ScoringEngine::builtin());
        assert_eq!(scored.len(), SAMPLES.len());
        assert_eq!(scored[0].number, 1);
        assert_eq!(scored[0].assessment.report.total, 85);
    }

    #[test]
    fn json_flattens_sample_fields() {
        let scored = score_samples(ScoringEngine::builtin());
        let json = serde_json::to_value(&scored[2]).unwrap();
        assert_eq!(json["number"], 3);
        assert_eq!(json["advertised_score"], 85);
        assert_eq!(json["assessment"]["report"]["total"], 91);
    }

    #[test]
    fn out_of_range_number_fails() {
        let args = SamplesArgs { number: Some(9) };
        assert!(cmd_samples(args, false, &Config::default()).is_err());
        let args = SamplesArgs { number: Some(0) };
        assert!(cmd_samples(args, true, &Config::default()).is_err());
    }

    #[test]
    fn single_sample_succeeds() {
        let args = SamplesArgs { number: Some(2) };
        assert!(cmd_samples(args, true, &Config::default()).is_ok());
    }
}
