use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clearance_core::{
    config::Config,
    models::request::{sort_newest_first, Request},
    services::{
        queue::{QueueCounts, QueueKind, SignatoryQueue},
        summary::{summarize, DashboardTiles, StatusCounts},
    },
    utils::{badge::student_badge_tone, input::read_envelope},
    EffectiveStatus,
};

/// Inspect request payloads the way the dashboards present them
#[derive(Parser)]
#[command(name = "clearance-status")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Effective status of every request in a student request list
    Student {
        /// JSON file with the `/api/student/requests` response, or `-` for stdin
        input: PathBuf,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rows and counts of a signatory queue
    Queue {
        /// JSON file with the queue response, or `-` for stdin
        input: PathBuf,
        /// Queue tab the rows were loaded for
        #[arg(short, long, default_value_t = QueueKind::Pending)]
        kind: QueueKind,
        /// Only show rows whose visible text contains this
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(Serialize)]
struct StudentLine<'a> {
    id: &'a str,
    raw_status: &'a str,
    effective_status: EffectiveStatus,
}

#[derive(Serialize)]
struct StudentReport<'a> {
    requests: Vec<StudentLine<'a>>,
    counts: StatusCounts,
    tiles: DashboardTiles,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clearance_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Student { input, json } => run_student(&input, json),
        Commands::Queue {
            input,
            kind,
            search,
        } => run_queue(&input, kind, &search),
    }
}

fn run_student(input: &Path, json: bool) -> anyhow::Result<()> {
    let envelope = read_envelope(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let mut requests: Vec<Request> = envelope.into_student_requests()?;
    sort_newest_first(&mut requests);

    let counts = summarize(&requests);
    let lines: Vec<StudentLine<'_>> = requests
        .iter()
        .map(|r| StudentLine {
            id: &r.id,
            raw_status: &r.status,
            effective_status: r.effective_status(),
        })
        .collect();

    if json {
        let report = StudentReport {
            requests: lines,
            counts,
            tiles: counts.tiles(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for line in &lines {
        println!(
            "#{:<8} {:<12} {:<10} [{:?}]",
            line.id,
            line.raw_status,
            line.effective_status.label(),
            student_badge_tone(line.raw_status)
        );
    }
    let tiles = counts.tiles();
    println!(
        "pending={} processing={} completed={}",
        tiles.pending, tiles.processing, tiles.completed
    );
    Ok(())
}

fn run_queue(input: &Path, kind: QueueKind, search: &str) -> anyhow::Result<()> {
    let config = Config::load();
    tracing::info!(
        office = %config.signatory_office,
        dean_key = %config.dean_key,
        title = %config.title(),
        "Loaded configuration from environment/.env"
    );

    let envelope = read_envelope(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let queue = SignatoryQueue::from_envelope(config.scope(), kind, envelope);

    println!("{}", config.title());
    match queue.endpoint() {
        Some(endpoint) => println!("endpoint: {}", endpoint),
        None => println!("endpoint: (none for this view)"),
    }

    let dean_view = queue.scope.is_dean_view();
    for row in queue.search(search) {
        let year = if dean_view { row.year.as_str() } else { "" };
        println!(
            "{:<28} {:<10} {:<6} {:<10} {}",
            row.student_name,
            row.course,
            year,
            row.badge().label,
            row.updated
        );
    }

    let counts: QueueCounts = queue.counts();
    println!(
        "pending={} processing={} approved={} rejected={}",
        counts.pending, counts.processing, counts.approved, counts.rejected
    );
    Ok(())
}
