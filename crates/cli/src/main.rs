//! SprintCast CLI - effort estimation and schedule forecasting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sprintcast_core::{epoch_day, Project, ProjectId, SettingsUpdate};
use sprintcast_forecast::{
    forecast_project, Forecast, Outlook, ProjectStatus, ProjectionBasis, SizeEstimator,
};
use sprintcast_storage::{JsonStorage, ProjectStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sprintcast")]
#[command(about = "Effort estimation and schedule forecasting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage path for SprintCast data
    #[arg(short, long, default_value = ".sprintcast", env = "SPRINTCAST_STORAGE", global = true)]
    storage: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project with default settings
    Init {
        /// Project name
        name: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Import a project from a JSON file
    Import {
        /// File to import
        file: PathBuf,
    },
    /// List projects
    List,
    /// Show the scenario forecast of every epic
    Forecast {
        /// Project ID
        id: String,
        /// Leave completed tasks out of the estimate
        #[arg(long)]
        exclude_completed: bool,
        /// Project scenarios from the full estimate even when excluding completed tasks
        #[arg(long)]
        full_basis: bool,
        /// Print every epic's outlook and the project status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show project schedule health
    Status {
        /// Project ID
        id: String,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the size to points mapping
    Sizes {
        /// Project ID
        id: String,
    },
    /// Update project settings
    Settings {
        /// Project ID
        id: String,
        /// Sprint length in weeks
        #[arg(long)]
        sprint_length: Option<u32>,
        /// Default estimate buffer in points
        #[arg(long)]
        buffer: Option<u32>,
        /// Number of the first epic
        #[arg(long)]
        epic_start: Option<u32>,
        /// Size mapping override, e.g. `--size XL=21`
        #[arg(long = "size", value_parser = parse_size_assignment)]
        sizes: Vec<(String, u32)>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut storage = JsonStorage::new(&cli.storage)
        .await
        .with_context(|| format!("failed to open storage at {}", cli.storage.display()))?;

    match cli.command {
        Commands::Init { name, start, end } => {
            let project = Project::new(name).with_schedule(start, end);
            storage.save_project(&project).await?;
            info!(id = %project.id, "created project");
            println!("Created project: {} - {}", project.id, project.name);
        }
        Commands::Import { file } => {
            let project = JsonStorage::read_file(&file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            storage.save_project(&project).await?;
            println!("Imported project: {} - {}", project.id, project.name);
        }
        Commands::List => {
            let projects = storage.list_projects().await?;
            println!("Projects ({})", projects.len());
            for project in projects {
                println!("  {} | {} epics | {}", project.id, project.epics.len(), project.name);
            }
        }
        Commands::Forecast { id, exclude_completed, full_basis, json } => {
            let project = load(&storage, &id).await?;
            let basis = if full_basis { ProjectionBasis::Full } else { ProjectionBasis::Remaining };

            if json {
                let today = epoch_day(chrono::Utc::now().date_naive());
                let forecast = forecast_project(&project, exclude_completed, basis, today);
                println!("{}", serde_json::to_string_pretty(&forecast)?);
                return Ok(());
            }

            println!("Forecast: {}", project.name);
            for (number, epic) in project.numbered_epics() {
                let outlook = Forecast::new(epic, &project.settings).recompute_with(exclude_completed, basis);
                println!();
                println!("Epic {} - {}", number, epic.name);
                print_outlook(&outlook);
            }
        }
        Commands::Status { id, today, json } => {
            let project = load(&storage, &id).await?;
            let today = epoch_day(today.unwrap_or_else(|| chrono::Utc::now().date_naive()));

            if json {
                println!("{}", status_json(&project, today)?);
                return Ok(());
            }

            let status = ProjectStatus::for_project(&project, today);
            println!("Status: {}", project.name);
            println!("  Tracking: {}", status.summary());
            println!("  Weeks: {} of {}", status.weeks_elapsed(), status.total_weeks());
            println!("  Sprints: {} of {}", status.sprints_elapsed(), status.total_sprints());
            println!(
                "  Points: {} of {} ({}%)",
                status.completed_points(),
                status.total_points(),
                status.percent_complete()
            );
            println!("  Velocity: {} per sprint", status.points_per_sprint());
            println!("  Needed: {} per sprint", status.ideal_points_per_sprint());
            println!("  Capacity: {} points", status.available_points());
            if status.is_over_committed() {
                println!(
                    "  Warning: {} points planned but only {} available",
                    status.total_points(),
                    status.available_points()
                );
            }
        }
        Commands::Sizes { id } => {
            let project = load(&storage, &id).await?;
            let estimator = SizeEstimator::from_settings(&project.settings);
            println!("Sizes: {}", project.name);
            for (size, _) in project.settings.sizes.iter() {
                println!("  {:<4} {}", size.as_str(), estimator.points_for(size));
            }
        }
        Commands::Settings { id, sprint_length, buffer, epic_start, sizes } => {
            let mut project = load(&storage, &id).await?;
            project.settings.apply(SettingsUpdate {
                sprint_length_weeks: sprint_length,
                estimate_buffer_points: buffer,
                epic_start_number: epic_start,
                sizes,
                reference_sprints: None,
            })?;
            storage.save_project(&project).await?;
            println!("Updated settings for {}", project.name);
        }
    }

    Ok(())
}

async fn load(storage: &JsonStorage, id: &str) -> Result<Project> {
    let project_id: ProjectId = id.parse().map_err(|_| anyhow::anyhow!("Invalid project ID: {}", id))?;
    storage
        .load_project(project_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Project not found: {}", id))
}

fn status_json(project: &Project, today: i64) -> Result<String> {
    let report = ProjectStatus::for_project(project, today).report();
    Ok(serde_json::to_string_pretty(&report)?)
}

fn print_outlook(outlook: &Outlook) {
    println!("  Estimate: {} ({} with buffer)", outlook.estimate, outlook.estimate_with_buffer);
    println!("  Average velocity: {}", outlook.average_points);
    println!("  {:<6} {:>8} {:>8} {:>6}", "", "pts/spr", "sprints", "weeks");
    for projection in &outlook.projections {
        println!(
            "  {:<6} {:>8} {:>8} {:>6}",
            projection.name(),
            projection.points_per_sprint(),
            projection.sprints(),
            projection.weeks()
        );
    }
}

fn parse_size_assignment(s: &str) -> std::result::Result<(String, u32), String> {
    let (size, points) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SIZE=POINTS, got {}", s))?;
    let points = points
        .trim()
        .parse()
        .map_err(|_| format!("invalid point value: {}", points))?;
    Ok((size.trim().to_string(), points))
}
