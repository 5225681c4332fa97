use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use skill_match::config::Config;
use skill_match::models::{CandidateRecord, SkillGapReport};
use skill_match::{db, input, report, skills};

#[derive(Parser)]
#[command(name = "skill-match")]
#[command(about = "Candidate skill matching and talent pool gap analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Match one candidate's skills against a requirement list
    Match {
        /// Comma-separated candidate skills
        #[arg(long, default_value = "")]
        candidate: String,
        /// Comma-separated required skills
        #[arg(long, default_value = "")]
        required: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the label for a match percentage
    Label { percentage: u32 },
    /// Analyze a candidate pool loaded from CSV
    Analyze {
        #[arg(long)]
        candidates: PathBuf,
        /// Comma-separated required skills
        #[arg(long)]
        required: String,
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Analyze the candidate database against a stored job order
    AnalyzeJob {
        #[arg(long)]
        job_id: String,
        #[arg(long, default_value_t = 500)]
        limit: i64,
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Suggest predefined skills for autocomplete
    Suggest {
        query: String,
        #[arg(long, default_value_t = 8)]
        limit: usize,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisOutput<'a> {
    job: Option<&'a str>,
    required_skills: &'a [String],
    #[serde(flatten)]
    report: &'a SkillGapReport,
    ranked: &'a [skill_match::RankedCandidate],
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("skill_match=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            candidate,
            required,
            json,
        } => {
            let candidate = input::parse_skill_list(&candidate);
            let required = input::parse_skill_list(&required);
            let result = skill_match::calculate_skill_match(&candidate, &required);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{}% ({})",
                    result.match_percentage,
                    skill_match::get_match_label(result.match_percentage)
                );
                println!("Matched: {}", result.matched_skills.join(", "));
                println!("Missing: {}", result.missing_skills.join(", "));
                println!("Extra: {}", result.extra_skills.join(", "));
            }
        }
        Commands::Label { percentage } => {
            println!("{}", skill_match::get_match_label(percentage));
        }
        Commands::Analyze {
            candidates,
            required,
            format,
            out,
            top,
        } => {
            let pool = input::load_candidates_csv(&candidates)?;
            let required = input::parse_skill_list(&required);
            info!(candidates = pool.len(), required = required.len(), "analyzing pool");
            emit_analysis(None, &pool, &required, format, out.as_deref(), top)?;
        }
        Commands::AnalyzeJob {
            job_id,
            limit,
            format,
            out,
            top,
        } => {
            let job_id = Uuid::parse_str(&job_id)
                .with_context(|| format!("invalid job order id {job_id}"))?;
            let config = Config::from_env()?;
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(config.require_database_url()?)
                .await
                .context("failed to connect to Postgres")?;

            let job = db::fetch_job_order(&pool, job_id).await?;
            let candidates = db::fetch_candidates(&pool, limit).await?;
            if job.required_skills().is_empty() {
                tracing::warn!(job = %job.id, "job order has no required skills");
            }
            info!(job = %job.id, candidates = candidates.len(), "analyzing job order");
            emit_analysis(
                Some(&job.title),
                &candidates,
                job.required_skills(),
                format,
                out.as_deref(),
                top,
            )?;
        }
        Commands::Suggest { query, limit } => {
            for skill in skills::suggest_skills(&query, limit) {
                println!("{skill}");
            }
        }
    }

    Ok(())
}

fn emit_analysis(
    job: Option<&str>,
    candidates: &[CandidateRecord],
    required: &[String],
    format: Format,
    out: Option<&Path>,
    top: usize,
) -> anyhow::Result<()> {
    let gap_report = skill_match::analyze_skill_gaps(candidates, required);
    let ranked = skill_match::rank_candidates(candidates, required);

    let rendered = match format {
        Format::Markdown => report::build_report(
            job,
            chrono::Utc::now().date_naive(),
            &gap_report,
            &ranked,
            top,
        ),
        Format::Json => {
            let top = top.min(ranked.len());
            let json = serde_json::to_string_pretty(&AnalysisOutput {
                job,
                required_skills: required,
                report: &gap_report,
                ranked: &ranked[..top],
            })?;
            format!("{json}\n")
        }
    };

    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Report written to {}.", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
