use std::fmt::Write;

use chrono::Utc;

use crate::chart::{self, BarRow};
use crate::models::{BucketShare, DistributionSummary, ExtremesSummary, RankingEntry};

fn heading(output: &mut String, title: &str) {
    let _ = writeln!(output, "# {title}");
    let _ = writeln!(output, "Generated {}", Utc::now().date_naive());
    let _ = writeln!(output);
}

fn bucket_lines(output: &mut String, buckets: &[BucketShare]) {
    for share in buckets {
        let _ = writeln!(
            output,
            "- {}: {} students ({:.2}%)",
            share.bucket, share.count, share.percent
        );
    }
}

fn bucket_chart(buckets: &[BucketShare]) -> String {
    let rows: Vec<BarRow> = buckets
        .iter()
        .map(|share| {
            BarRow::new(
                share.bucket.label(),
                share.count as f64,
                format!("{:.1}%", share.percent),
            )
        })
        .collect();
    chart::render_bars(&rows)
}

pub fn professor_summary(summary: &DistributionSummary) -> String {
    let mut output = String::new();
    heading(&mut output, &format!("{} Summary", summary.key));
    let _ = writeln!(output, "Total students: {}", summary.total);
    let _ = writeln!(output);
    bucket_lines(&mut output, &summary.buckets);
    let _ = writeln!(output);
    output.push_str(&bucket_chart(&summary.buckets));
    output
}

pub fn overall_distribution(summary: &DistributionSummary) -> String {
    let mut output = String::new();
    heading(&mut output, "Overall Grade Distribution");
    bucket_lines(&mut output, &summary.buckets);
    let _ = writeln!(output);
    let _ = writeln!(output, "Total students: {}", summary.total);
    let _ = writeln!(output);
    output.push_str(&bucket_chart(&summary.buckets));
    output
}

pub fn course_averages(ranked: &[RankingEntry]) -> String {
    let mut output = String::new();
    heading(&mut output, "Average A Ratio by Course");

    if ranked.is_empty() {
        let _ = writeln!(output, "No courses with graded students.");
        return output;
    }

    for entry in ranked {
        let _ = writeln!(
            output,
            "- {}: {:.2}% ({} students)",
            entry.key, entry.a_ratio, entry.total
        );
    }

    let rows: Vec<BarRow> = ranked
        .iter()
        .map(|entry| {
            BarRow::new(
                entry.key.clone(),
                entry.a_ratio,
                format!("{:.1}%", entry.a_ratio),
            )
        })
        .collect();
    let _ = writeln!(output);
    output.push_str(&chart::render_bars(&rows));
    output
}

pub fn extremes_summary(extremes: &ExtremesSummary) -> String {
    let mut output = String::new();
    heading(&mut output, "Best and Worst Professors by A Ratio");
    let _ = writeln!(
        output,
        "Best: {} with {:.2}% ({} A's out of {} students)",
        extremes.best.key, extremes.best.a_ratio, extremes.best.a_count, extremes.best.total
    );
    let _ = writeln!(
        output,
        "Worst: {} with {:.2}% ({} A's out of {} students)",
        extremes.worst.key, extremes.worst.a_ratio, extremes.worst.a_count, extremes.worst.total
    );
    output
}

pub fn full_ranking(ranked: &[RankingEntry], chart_top: usize) -> String {
    let mut output = String::new();
    heading(&mut output, "Professor A Ratio Ranking");

    if ranked.is_empty() {
        let _ = writeln!(output, "No professors with graded students.");
        return output;
    }

    for (position, entry) in ranked.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {}: {:.2}% ({} students)",
            position + 1,
            entry.key,
            entry.a_ratio,
            entry.total
        );
    }

    let top = chart_top.min(ranked.len());
    if top > 0 {
        let rows: Vec<BarRow> = ranked[..top]
            .iter()
            .map(|entry| {
                BarRow::new(
                    entry.key.clone(),
                    entry.a_ratio,
                    format!("{:.1}%", entry.a_ratio),
                )
            })
            .collect();
        let _ = writeln!(output);
        let _ = writeln!(output, "Top {top} chart:");
        output.push_str(&chart::render_bars(&rows));
    }

    output
}
