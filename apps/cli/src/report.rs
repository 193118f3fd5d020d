//! Output formatting for contrast reports.
//!
//! Renders the human-readable summary (swatches, ratio, AA/AAA pass/fail)
//! and the machine-readable `--json` report.

use colored::Colorize;
use lumen_core::contrast::{AA_LARGE, AA_NORMAL, AAA_LARGE, AAA_NORMAL};
use lumen_core::{Grade, Rgb};
use serde::Serialize;

/// Machine-readable contrast report for `--json` output.
#[derive(Debug, Serialize)]
struct ContrastReport {
    colors: [String; 2],
    ratio: f64,
    #[serde(flatten)]
    grade: Grade,
}

/// Print the JSON report to stdout.
pub fn print_json(color1: Rgb, color2: Rgb, ratio: f64, grade: Grade) -> anyhow::Result<()> {
    let report = ContrastReport {
        colors: [color1.to_string(), color2.to_string()],
        ratio,
        grade,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print the human-readable report to stdout.
pub fn print_human(color1: Rgb, color2: Rgb, ratio: f64, grade: Grade, large_text: bool) {
    println!("{} {}  on  {} {}", swatch(color1), color1, swatch(color2), color2);
    println!();
    println!("Contrast ratio: {}", format!("{ratio:.2}:1").bold());
    println!();
    println!("  AA  normal text ({AA_NORMAL}:1)  {}", check(grade.aa));
    println!("  AA  large text  ({AA_LARGE}:1)    {}", check(grade.aa_large));
    println!("  AAA normal text ({AAA_NORMAL}:1)    {}", check(grade.aaa));
    println!("  AAA large text  ({AAA_LARGE}:1)  {}", check(grade.aaa_large));
    println!();

    let (passes_aa, passes_aaa) = if large_text {
        (grade.aa_large, grade.aaa_large)
    } else {
        (grade.aa, grade.aaa)
    };
    let text_kind = if large_text { "large text" } else { "normal text" };
    let verdict = if passes_aaa {
        format!("passes AAA for {text_kind}").green().bold()
    } else if passes_aa {
        format!("passes AA for {text_kind}").green()
    } else {
        format!("fails AA for {text_kind}").red().bold()
    };
    println!("WCAG: {verdict}");
}

/// A truecolor background sample for one color.
fn swatch(color: Rgb) -> colored::ColoredString {
    "   ".on_truecolor(color.r, color.g, color.b)
}

/// Pass/fail marker.
fn check(pass: bool) -> colored::ColoredString {
    if pass { "✓".green() } else { "✗".red() }
}
