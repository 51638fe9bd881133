//! Batch command: score every non-empty line of one or more files.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use prompt_score_core::config::Config;
use prompt_score_core::{Assessment, ScoreClass, validate_prompt};

use super::read_input_file;
use super::score::paint_score;

/// Characters of prompt text shown per line in text output.
const PREVIEW_CHARS: usize = 60;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Files with one prompt per line.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Only list prompts in these bands (repeatable).
    #[arg(long, value_enum)]
    pub class: Vec<ScoreClass>,

    /// Fail when any prompt scores below this value.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
}

/// One line of input and what happened to it.
#[derive(Debug, Serialize)]
struct BatchEntry {
    file: String,
    line: usize,
    text: String,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Outcome {
    Scored { assessment: Box<Assessment> },
    Skipped { reason: String },
}

/// Aggregate statistics over the scored prompts.
#[derive(Debug, Default, Serialize)]
struct BatchSummary {
    scored: usize,
    skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<u8>,
}

impl BatchSummary {
    fn from_entries(entries: &[BatchEntry]) -> Self {
        let totals: Vec<u8> = entries
            .iter()
            .filter_map(|e| match e.outcome {
                Outcome::Scored { ref assessment } => Some(assessment.report.total),
                Outcome::Skipped { .. } => None,
            })
            .collect();
        let mean = (!totals.is_empty()).then(|| {
            let sum: u32 = totals.iter().map(|&t| u32::from(t)).sum();
            (f64::from(sum) / totals.len() as f64 * 10.0).round() / 10.0
        });
        Self {
            scored: totals.len(),
            skipped: entries.len() - totals.len(),
            mean,
            min: totals.iter().copied().min(),
            max: totals.iter().copied().max(),
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    entries: Vec<&'a BatchEntry>,
    summary: &'a BatchSummary,
}

/// Score each prompt line in the given files.
#[instrument(name = "cmd_batch", skip_all, fields(files = args.files.len()))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, classes = ?args.class, "executing batch command");

    let policy = config.input_policy();
    let engine = config
        .scoring_engine()
        .context("failed to build lexicon from configuration")?;

    let mut lines = Vec::new();
    for path in &args.files {
        let content = read_input_file(path, policy.max_bytes)?;
        lines.extend(
            content
                .lines()
                .enumerate()
                .filter(|(_, l)| !l.trim().is_empty())
                .map(|(idx, l)| (path.to_string(), idx + 1, l.to_string())),
        );
    }

    let progress = if global_json || quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                .context("invalid progress bar template")?
                .progress_chars("=> "),
        );
        pb
    };

    let mut entries = Vec::with_capacity(lines.len());
    for (file, line, text) in lines {
        progress.set_message(format!("{file}:{line}"));
        let outcome = match validate_prompt(&text, &policy) {
            Ok(prompt) => Outcome::Scored {
                assessment: Box::new(engine.assess(prompt)),
            },
            Err(e) => {
                warn!(file = %file, line, reason = %e, "skipping prompt");
                Outcome::Skipped {
                    reason: e.to_string(),
                }
            }
        };
        entries.push(BatchEntry {
            file,
            line,
            text,
            outcome,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    let summary = BatchSummary::from_entries(&entries);
    let listed: Vec<&BatchEntry> = entries
        .iter()
        .filter(|e| match e.outcome {
            Outcome::Scored { ref assessment } => {
                args.class.is_empty() || args.class.contains(&assessment.class)
            }
            Outcome::Skipped { .. } => args.class.is_empty(),
        })
        .collect();

    if global_json {
        let report = BatchReport {
            entries: listed,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&listed, &summary);
    }

    let fail_under = args.fail_under.or(config.fail_under);
    if let (Some(min), Some(lowest)) = (fail_under, summary.min)
        && lowest < min
    {
        bail!("lowest score {lowest} is below minimum {min}");
    }

    Ok(())
}

fn print_text(entries: &[&BatchEntry], summary: &BatchSummary) {
    for entry in entries {
        let location = format!("{}:{}", entry.file, entry.line);
        match entry.outcome {
            Outcome::Scored { ref assessment } => println!(
                "{:>3}  {:<18} {}  {}",
                paint_score(assessment.report.total, assessment.class),
                assessment.class.as_str(),
                location.dimmed(),
                preview(&entry.text),
            ),
            Outcome::Skipped { ref reason } => println!(
                "{}  {}  {}",
                "SKIP".yellow(),
                location.dimmed(),
                reason,
            ),
        }
    }

    println!();
    match (summary.mean, summary.min, summary.max) {
        (Some(mean), Some(min), Some(max)) => println!(
            "{} {} scored, {} skipped, mean {:.1}, min {}, max {}",
            "Summary:".bold(),
            summary.scored,
            summary.skipped,
            mean,
            min,
            max,
        ),
        _ => println!(
            "{} 0 scored, {} skipped",
            "Summary:".bold(),
            summary.skipped
        ),
    }
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= PREVIEW_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    }
}
