use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod aggregate;
mod chart;
mod error;
mod ingest;
mod models;
mod normalize;
mod ranking;
mod report;

use aggregate::GroupBy;
use error::EngineError;
use models::{DistributionSummary, ExtremesSummary, SectionRecord};

#[derive(Parser)]
#[command(name = "grade-analyzer")]
#[command(about = "Grade distribution and A ratio analyzer for course section data", long_about = None)]
struct Cli {
    /// CSV file of per-section grade counts
    #[arg(long)]
    csv: PathBuf,

    /// Abort ingestion on the first malformed row instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Emit the query result as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Write the output to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade breakdown for one professor
    Summary {
        /// Professor's last name
        #[arg(long)]
        professor: String,
    },
    /// Average A ratio per course, best first
    Courses,
    /// Grade distribution across the whole data set
    Overall,
    /// Best and worst professors by A ratio
    Extremes,
    /// Full professor ranking by A ratio
    Ranking {
        /// How many leading entries to chart
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let records = ingest::load_records(&cli.csv, cli.strict)?;

    let rendered = match build_output(&cli.command, &records, cli.json) {
        Ok(text) => text,
        Err(err) => match err.downcast_ref::<EngineError>() {
            Some(EngineError::GroupNotFound(_)) | Some(EngineError::InsufficientData) => {
                println!("{err}");
                return Ok(());
            }
            _ => return Err(err),
        },
    };

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Report written to {}.", path.display());
        }
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

fn build_output(
    command: &Commands,
    records: &[SectionRecord],
    json: bool,
) -> anyhow::Result<String> {
    match command {
        Commands::Summary { professor } => {
            let wanted = normalize::professor_key(professor)
                .ok_or_else(|| EngineError::GroupNotFound(professor.clone()))?;
            let group = aggregate::aggregate(records, GroupBy::Professor, Some(&wanted))
                .into_iter()
                .next()
                .ok_or(EngineError::GroupNotFound(wanted))?;
            let summary = DistributionSummary {
                key: group.key.clone(),
                total: group.total(),
                buckets: ranking::distribution(&group.tally),
            };
            if json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(report::professor_summary(&summary))
            }
        }
        Commands::Courses => {
            let ranked = ranking::rank(&aggregate::aggregate(records, GroupBy::Course, None));
            if json {
                Ok(serde_json::to_string_pretty(&ranked)?)
            } else {
                Ok(report::course_averages(&ranked))
            }
        }
        Commands::Overall => {
            let tally = aggregate::overall(records);
            let summary = DistributionSummary {
                key: "overall".to_string(),
                total: tally.total(),
                buckets: ranking::distribution(&tally),
            };
            if json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(report::overall_distribution(&summary))
            }
        }
        Commands::Extremes => {
            let ranked = ranking::rank(&aggregate::aggregate(records, GroupBy::Professor, None));
            let (best, worst) = ranking::extremes(&ranked)?;
            let summary = ExtremesSummary { best, worst };
            if json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(report::extremes_summary(&summary))
            }
        }
        Commands::Ranking { top } => {
            let ranked = ranking::rank(&aggregate::aggregate(records, GroupBy::Professor, None));
            if json {
                Ok(serde_json::to_string_pretty(&ranked)?)
            } else {
                Ok(report::full_ranking(&ranked, *top))
            }
        }
    }
}
