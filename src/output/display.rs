//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{DistributionRow, SampleSummary, SimulateSummary};
use crate::metrics::{Extreme, MetricReport};
use crate::simulation::ResultHistogram;
use colored::Colorize;

/// Words shown before a list is elided
const WORD_LIST_LIMIT: usize = 8;

/// Join words, eliding the tail of long lists
#[must_use]
pub fn word_list(words: &[String], limit: usize) -> String {
    if words.len() <= limit {
        return words.join(" ");
    }
    format!(
        "{} (+{} more)",
        words[..limit].join(" "),
        words.len() - limit
    )
}

fn format_extreme(extreme: &Extreme) -> String {
    format!(
        "{} ({})",
        extreme.value,
        word_list(&extreme.words, WORD_LIST_LIMIT)
    )
}

/// One line per metric: hardest target, easiest target, pooled value
#[must_use]
pub fn format_metric_report(report: &MetricReport) -> String {
    format!(
        "{:<9} hardest {}  easiest {}  overall {}",
        report.metric.name(),
        format_extreme(&report.hardest),
        format_extreme(&report.easiest),
        report.overall
    )
}

/// Format one distribution row with padded counts
#[must_use]
pub fn format_distribution_row(row: &DistributionRow, total: u64) -> String {
    let width = total.to_string().len();
    let label = row
        .guesses
        .map_or_else(|| "gave up".to_string(), |g| g.to_string());
    let mut line = format!(
        "{label:>width$}: {:>width$}/{total} (cum. {:>width$}/{total})",
        row.count, row.cumulative
    );
    // Name the targets only for rare outcomes
    if row.count <= total / 100 {
        line.push(' ');
        line.push_str(&row.words.join(" "));
    }
    line
}

fn print_histogram_bars(histogram: &ResultHistogram) {
    let max = histogram.occupied().map(|(_, c)| c).max().unwrap_or(0);
    for (guesses, count) in histogram.occupied() {
        let pct = count as f64 / histogram.trials() as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max as f64, 40);
        println!("  {guesses:>3}: {} {count:8} ({pct:5.1}%)", bar.green());
    }
    if histogram.abandoned() > 0 {
        println!(
            "  {}: {}",
            "gave up".red(),
            histogram.abandoned().to_string().red()
        );
    }
}

/// Print the result of a full simulation
pub fn print_simulate_summary(summary: &SimulateSummary) {
    let pooled = summary.results.pooled();

    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!("\n📊 {}", "Run".bright_cyan().bold());
    println!("   Targets:          {}", summary.targets);
    println!("   Trials/target:    {}", summary.trials);
    println!("   Games played:     {}", pooled.trials());
    if pooled.abandoned() > 0 {
        println!(
            "   Abandoned:        {}",
            pooled.abandoned().to_string().red()
        );
    }
    println!(
        "   Time taken:       {:.2}s",
        summary.duration.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_histogram_bars(&pooled);

    println!("\n🧮 {}", "Metrics".bright_cyan().bold());
    for report in &summary.reports {
        println!("  {}", format_metric_report(report));
    }
}

/// Print the result of a sampled simulation
pub fn print_sample_summary(summary: &SampleSummary) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "SAMPLED RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!(
        "   {} games over {} distinct targets in {:.2}s\n",
        summary.total,
        summary.results.len(),
        summary.duration.as_secs_f64()
    );

    for row in &summary.rows {
        println!("{}", format_distribution_row(row, summary.total));
    }
}
