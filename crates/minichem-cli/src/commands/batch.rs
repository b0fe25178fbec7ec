use super::equate::{equate_half, equate_scheme};
use super::has_arrow;
use super::predict::predict_equation;
use crate::cli::{BatchArgs, PredictionOptions};
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use minichemistry::engine::context::Chemistry;
use minichemistry::engine::error::ChemistryError;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of a single line of a batch file.
#[derive(Debug)]
pub struct LineReport {
    pub line: usize,
    pub text: String,
    pub outcome: std::result::Result<String, ChemistryError>,
}

pub fn run(args: BatchArgs, chemistry: &Chemistry, show_progress: bool) -> Result<()> {
    let lines = read_reactions(&args.input)?;
    info!(count = lines.len(), path = ?args.input, "Processing batch file.");

    let pb = ProgressBar::new(lines.len() as u64).with_style(bar_style()?);
    if !show_progress {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    let mut failed = 0_usize;
    for (line, text) in &lines {
        pb.set_message(text.clone());
        let report = LineReport {
            line: *line,
            text: text.clone(),
            outcome: process(chemistry, text, args.options),
        };
        match &report.outcome {
            Ok(equation) => pb.suspend(|| println!("{:>4}: {equation}", report.line)),
            Err(e) => {
                failed += 1;
                warn!(line = report.line, reaction = %report.text, "{e}");
                pb.suspend(|| println!("{:>4}: {} -> error: {e}", report.line, report.text));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "Processed {} reaction(s): {} balanced, {} failed.",
        lines.len(),
        lines.len() - failed,
        failed
    );
    Ok(())
}

/// Non-empty, non-comment lines with their 1-based line numbers.
pub fn read_reactions(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ReactionList {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| (i, line.to_string()))
        .collect())
}

/// Balances a full scheme, or predicts the products when the line lists only reagents.
pub fn process(
    chemistry: &Chemistry,
    text: &str,
    options: PredictionOptions,
) -> std::result::Result<String, ChemistryError> {
    if !has_arrow(text) {
        return predict_equation(chemistry, text, options);
    }
    if has_elementary_term(text) {
        return equate_half(chemistry, text);
    }
    equate_scheme(chemistry, text, options.ionic)
}

fn has_elementary_term(text: &str) -> bool {
    text.replace("->", "=")
        .split(['+', '='])
        .map(str::trim)
        .any(|term| ["e(", "p(", "n("].iter().any(|prefix| term.starts_with(prefix)))
}

fn bar_style() -> Result<ProgressStyle> {
    ProgressStyle::with_template("{msg:<30} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .map(|style| style.progress_chars("##-"))
        .map_err(|e| CliError::Terminal(anyhow::anyhow!("Invalid progress template: {e}")))
}
