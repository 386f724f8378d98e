use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Band, Cue, Factor, ScoreInputs, ScoreResult, SCORE_MAX, SCORE_MIN};

const DEFAULT_BAR_WIDTH: usize = 30;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Range bar width: fits the terminal, never wider than 40 columns
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(w) => w.saturating_sub(12).clamp(10, 40),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Text range bar "300 [██████░░░░] 850" for a fill fraction in [0, 1]
pub fn format_range_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!(
        "{} [{}{}] {}",
        SCORE_MIN,
        "█".repeat(filled),
        "░".repeat(empty),
        SCORE_MAX
    )
}

fn paint_band(band: Band, text: &str) -> String {
    match band.cue() {
        Cue::Strong => text.green().bold().to_string(),
        Cue::Positive => text.green().to_string(),
        Cue::Caution => text.yellow().to_string(),
        Cue::Alert => text.red().to_string(),
    }
}

/// Format a single result as multi-line text.
///
/// ```text
/// Score: 690 (Good)
///   300 [███████████████░░░░░░░░░░░░░░░] 850
///
/// Factors:
///   Payment History (35%)      60%
///   ...
///
/// Recommendations:
///   1. Improve payment consistency
/// ```
pub fn format_result_text(inputs: &ScoreInputs, result: &ScoreResult, use_colors: bool) -> String {
    let score = result.score.to_string();
    let label = result.band.label();
    let headline = if use_colors {
        format!(
            "Score: {} ({})",
            paint_band(result.band, &score),
            paint_band(result.band, label)
        )
    } else {
        format!("Score: {} ({})", score, label)
    };

    let mut lines = vec![
        headline,
        format!("  {}", format_range_bar(result.fill_fraction(), bar_width())),
    ];

    if result.breakdown.clamped {
        let note = format!(
            "  weighted total {:.1} capped to {}..={}",
            result.breakdown.raw_total, SCORE_MIN, SCORE_MAX
        );
        lines.push(if use_colors { note.dimmed().to_string() } else { note });
    }

    lines.push(String::new());
    lines.push("Factors:".to_string());
    for factor in Factor::ALL {
        lines.push(format!(
            "  {:<26}{:>9}",
            factor.label(),
            factor.format_value(inputs.get(factor))
        ));
    }

    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    for (idx, advice) in result.advice.iter().enumerate() {
        let index = format!("{}.", idx + 1);
        if use_colors {
            lines.push(format!("  {} {}", index.cyan(), advice));
        } else {
            lines.push(format!("  {} {}", index, advice));
        }
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a ScoreInputs,
    score: u16,
    band: Band,
    cue: Cue,
    fill_fraction: f64,
    advice: &'a [&'static str],
    breakdown: &'a crate::scoring::ScoreBreakdown,
}

/// Format a single result as pretty-printed JSON for scripting
pub fn format_result_json(inputs: &ScoreInputs, result: &ScoreResult) -> Result<String> {
    let report = JsonReport {
        inputs,
        score: result.score,
        band: result.band,
        cue: result.cue(),
        fill_fraction: result.fill_fraction(),
        advice: &result.advice,
        breakdown: &result.breakdown,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize score result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;

    #[test]
    fn test_range_bar_endpoints() {
        assert_eq!(format_range_bar(0.0, 4), "300 [░░░░] 850");
        assert_eq!(format_range_bar(1.0, 4), "300 [████] 850");
        assert_eq!(format_range_bar(0.5, 4), "300 [██░░] 850");
    }

    #[test]
    fn test_text_output_without_colors() {
        let inputs = ScoreInputs::new(60, 70, 5, 2).unwrap();
        let result = calculate_score(&inputs);
        let text = format_result_text(&inputs, &result, false);

        assert!(text.starts_with("Score: 690 (Good)\n"));
        assert!(text.contains("Payment History (35%)"));
        assert!(text.contains("5 yrs"));
        assert!(text.contains("  1. Improve payment consistency"));
        assert!(text.contains("  2. Reduce credit utilization below 30%"));
        assert!(text.contains("  3. Diversify credit types"));
        assert!(!text.contains("capped"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_text_output_notes_clamp() {
        let inputs = ScoreInputs::default();
        let result = calculate_score(&inputs);
        let text = format_result_text(&inputs, &result, false);
        assert!(text.starts_with("Score: 850 (Excellent)"));
        assert!(text.contains("weighted total 972.5 capped to 300..=850"));
        assert!(text.contains("1. Great job! Maintain current habits"));
    }

    #[test]
    fn test_text_output_with_colors_has_ansi() {
        let inputs = ScoreInputs::default();
        let result = calculate_score(&inputs);
        let text = format_result_text(&inputs, &result, true);
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output() {
        let inputs = ScoreInputs::new(50, 100, 0, 1).unwrap();
        let result = calculate_score(&inputs);
        let json = format_result_json(&inputs, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["score"], 495);
        assert_eq!(value["band"], "poor");
        assert_eq!(value["cue"], "alert");
        assert_eq!(value["inputs"]["payment_history"], 50);
        assert_eq!(value["advice"].as_array().unwrap().len(), 4);
        assert_eq!(value["breakdown"]["factors"][0]["factor"], "payment_history");
        assert_eq!(value["breakdown"]["clamped"], false);
    }
}
