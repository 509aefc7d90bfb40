use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

mod api;
mod config;
mod format;
mod models;
mod profile;
mod progress;
mod report;
mod summary;

use api::{Latency, MockFitnessApi};
use format::{date_heading, format_count, format_distance, weekday_labels};
use profile::ProfileEdit;

#[derive(Parser)]
#[command(name = "fitness-progress")]
#[command(
    about = "Daily activity, weekly history and profile goals from mock fitness data",
    long_about = None
)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Skip the simulated API latency
    #[arg(long, global = true)]
    no_delay: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute progress of a counter against a goal
    Progress {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        goal: f64,
    },
    /// Show today's activity, ring and goal bars
    Daily,
    /// Show the last seven days
    Weekly {
        /// Read the week from a CSV file instead of the mock API
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show or update the user profile
    Profile(ProfileArgs),
    /// Generate a markdown report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    age: Option<String>,
    /// Kilograms
    #[arg(long)]
    weight: Option<String>,
    /// Centimetres
    #[arg(long)]
    height: Option<String>,
    #[arg(long)]
    step_goal: Option<String>,
    #[arg(long)]
    calorie_goal: Option<String>,
}

impl From<ProfileArgs> for ProfileEdit {
    fn from(args: ProfileArgs) -> Self {
        ProfileEdit {
            name: args.name,
            age: args.age,
            weight: args.weight,
            height: args.height,
            step_goal: args.step_goal,
            calorie_goal: args.calorie_goal,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let latency = if cli.no_delay {
        Latency::Disabled
    } else {
        config.latency
    };
    let api = MockFitnessApi::new(latency);

    match cli.command {
        Commands::Progress { current, goal } => {
            let result = progress::compute_progress(current, goal)?;
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}% ({:.4})", result.percentage, result.fraction);
            }
        }
        Commands::Daily => {
            let daily = api.fetch_daily_activity().await;
            let ring =
                progress::compute_progress(f64::from(daily.steps), f64::from(daily.goals.steps))?;
            let goals = progress::daily_goal_progress(&daily)?;

            if cli.json {
                #[derive(Serialize)]
                #[serde(rename_all = "camelCase")]
                struct DailyView<'a> {
                    activity: &'a models::ActivityData,
                    ring: models::RingGeometry,
                    goals: &'a [models::GoalProgress],
                }
                print_json(&DailyView {
                    activity: &daily,
                    ring: progress::ring_geometry(&ring, 100.0, 20.0),
                    goals: &goals,
                })?;
                return Ok(());
            }

            println!("{}", date_heading(daily.date));
            println!("Daily Activity");
            println!(
                "{} steps, {}% of goal",
                format_count(u64::from(daily.steps)),
                ring.percentage
            );
            println!();
            println!("Steps       {}", format_count(u64::from(daily.steps)));
            println!("Calories    {}", format_count(u64::from(daily.calories)));
            println!("Distance    {}", format_distance(daily.distance));
            println!("Active Min  {}", daily.active_minutes);
            println!();
            println!("Daily Goals");
            for goal in goals.iter() {
                println!(
                    "- {}: {} / {} {} ({}% completed)",
                    goal.metric.label(),
                    format_count(u64::from(goal.current)),
                    format_count(u64::from(goal.goal)),
                    goal.metric.unit(),
                    goal.progress.percentage
                );
            }
        }
        Commands::Weekly { csv } => {
            let weekly = match csv {
                Some(path) => api::import_weekly_csv(&path)?,
                None => api.fetch_weekly_activity().await,
            };
            let profile = api.fetch_user_profile().await;
            let summary = summary::summarize_week(&weekly, &profile.goals)?;

            if cli.json {
                #[derive(Serialize)]
                struct WeeklyView<'a> {
                    week: &'a models::WeeklyActivityData,
                    summary: &'a models::WeeklySummary,
                }
                print_json(&WeeklyView {
                    week: &weekly,
                    summary: &summary,
                })?;
                return Ok(());
            }

            let labels = weekday_labels(weekly.end_date);
            let offset = labels.len().saturating_sub(weekly.daily_steps.len());
            println!("Weekly Activity");
            for (index, steps) in weekly.daily_steps.iter().enumerate() {
                println!(
                    "{:>4} {:>8} steps {:>7} kcal {:>4} min",
                    labels.get(index + offset).map(String::as_str).unwrap_or("-"),
                    format_count(u64::from(*steps)),
                    format_count(u64::from(weekly.daily_calories.get(index).copied().unwrap_or(0))),
                    weekly.daily_active_minutes.get(index).copied().unwrap_or(0)
                );
            }
            println!();
            println!("Total Steps          {}", format_count(summary.total_steps));
            println!("Total Calories       {}", format_count(summary.total_calories));
            println!("Avg. Active Minutes  {}", summary.avg_active_minutes);
            if let Some(best) = summary.best_day {
                println!(
                    "Best day             {}",
                    labels.get(best + offset).map(String::as_str).unwrap_or("-")
                );
            }
        }
        Commands::Profile(args) => {
            let edit = ProfileEdit::from(args);
            let current = api.fetch_user_profile().await;
            let profile = if edit.is_empty() {
                current
            } else {
                let updated = edit.apply(&current)?;
                let saved = api.update_user_profile(updated).await?;
                if !cli.json {
                    println!("Profile updated successfully!");
                }
                saved
            };

            if cli.json {
                print_json(&profile)?;
            } else {
                println!("{}", profile.name);
                println!("Age     {} years", profile.age);
                println!("Weight  {} kg", profile.weight);
                println!("Height  {} cm", profile.height);
                println!("Step goal           {}", format_count(u64::from(profile.goals.steps)));
                println!("Calorie goal        {}", format_count(u64::from(profile.goals.calories)));
                println!("Active minutes goal {}", profile.goals.active_minutes);
            }
        }
        Commands::Report { out } => {
            let (daily, weekly, profile) = tokio::join!(
                api.fetch_daily_activity(),
                api.fetch_weekly_activity(),
                api.fetch_user_profile()
            );
            let report = report::build_report(&daily, &weekly, &profile)?;
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            tracing::info!(path = %out.display(), "report written");
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
