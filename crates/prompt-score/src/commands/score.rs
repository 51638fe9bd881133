//! Score command: rate a single prompt and suggest improvements.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prompt_score_core::config::Config;
use prompt_score_core::{Assessment, Criterion, ScoreClass, validate_prompt};

use super::{read_input_file, read_stdin};

/// Width of the total-score bar, in cells.
const BAR_WIDTH: usize = 20;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// File containing the prompt (`-` or omitted reads stdin).
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Prompt text to score.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Fail when the total score is below this value.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,

    /// Hide suggestions and the improved prompt in text output.
    #[arg(long)]
    pub no_suggestions: bool,
}

/// Score a prompt from `--text`, a file, or stdin.
#[instrument(name = "cmd_score", skip_all, fields(file = ?args.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, inline = args.text.is_some(), "executing score command");

    let policy = config.input_policy();
    let (source, raw) = match (args.text, args.file) {
        (Some(text), _) => ("--text".to_string(), text),
        (None, Some(path)) if path.as_str() != "-" => {
            let content = read_input_file(&path, policy.max_bytes)?;
            (path.to_string(), content)
        }
        (None, _) => ("stdin".to_string(), read_stdin(policy.max_bytes)?),
    };

    let prompt =
        validate_prompt(&raw, &policy).with_context(|| format!("cannot score {source}"))?;

    let engine = config
        .scoring_engine()
        .context("failed to build lexicon from configuration")?;
    let assessment = engine.assess(prompt);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_assessment(&assessment, !args.no_suggestions);
    }

    let fail_under = args.fail_under.or(config.fail_under);
    if let Some(min) = fail_under
        && assessment.report.total < min
    {
        bail!(
            "{source} scored {} (minimum: {min}). Follow the suggestions and try again.",
            assessment.report.total,
        );
    }

    Ok(())
}

/// Colorize a score according to its band.
pub(crate) fn paint_score(score: u8, class: ScoreClass) -> String {
    let text = score.to_string();
    match class {
        ScoreClass::Excellent => text.green().to_string(),
        ScoreClass::Good => text.cyan().to_string(),
        ScoreClass::Fair => text.yellow().to_string(),
        ScoreClass::NeedsImprovement => text.red().to_string(),
    }
}

fn star_string(stars: u8) -> String {
    (1..=5)
        .map(|i| if i <= stars { '★' } else { '☆' })
        .collect()
}

fn label(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Context => "Context",
        Criterion::Specificity => "Specificity",
        Criterion::Clarity => "Clarity",
        Criterion::Objective => "Objective",
        Criterion::Completeness => "Completeness",
    }
}

fn print_assessment(assessment: &Assessment, show_suggestions: bool) {
    let report = &assessment.report;

    for (criterion, score) in report.iter() {
        let stars = prompt_score_core::stars(score);
        println!(
            "  {:<13} {} {:>3}",
            format!("{}:", label(criterion)).cyan(),
            star_string(stars).yellow(),
            score,
        );
    }

    let filled = usize::from(report.total) * BAR_WIDTH / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    );
    println!(
        "\n  {} [{}] {}/100",
        "Total:".bold(),
        bar,
        paint_score(report.total, assessment.class),
    );
    println!("  {}", assessment.message);

    if !show_suggestions || assessment.suggestions.is_empty() {
        return;
    }

    if !assessment.suggestions.suggestions.is_empty() {
        println!("\n  {}", "Suggestions:".bold());
        for s in &assessment.suggestions.suggestions {
            println!("    - {}", s.text);
        }
    }

    if let Some(ref template) = assessment.suggestions.improved_template {
        println!("\n  {}", "Improved prompt:".bold());
        println!("    {}", template.dimmed());
    }
}
