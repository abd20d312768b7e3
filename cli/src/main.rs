//! CLI for the Tourism Market Agent.
//!
//! This tool researches budget tourism investment opportunities through a
//! rate-governed chat-completion API and saves the reports as text, JSON
//! and spreadsheet files.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use tourism_market_agent::{
    save_all_formats, AgentConfig, AnalysisResults, ExportFormat, ReportEntry, ResearchAgent,
    ResearchError,
};
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tourism Market Agent - Generate budget tourism investment reports within API quotas.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// API key for the chat-completion service.
    ///
    /// Falls back to `[api] api-key` in the config file, then `GROQ_API_KEY`.
    #[arg(long)]
    api_key: Option<String>,

    /// Country to research, overriding the config file.
    #[arg(long)]
    country: Option<String>,

    /// Per-minute request cap, overriding the config file.
    #[arg(long)]
    requests_per_minute: Option<NonZeroU32>,

    /// Per-day request cap, overriding the config file.
    #[arg(long)]
    requests_per_day: Option<NonZeroU32>,

    /// Directory the reports are written to.
    #[arg(long, default_value = "reports/")]
    output_dir: PathBuf,

    /// Base file name for the reports (defaults to country and timestamp).
    #[arg(long)]
    base_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run trends, market report, location analyses, comparison and competition.
    Comprehensive {
        /// Comma-separated locations (defaults to the configured hotspots).
        #[arg(long, value_delimiter = ',')]
        locations: Vec<String>,
    },

    /// Research budget tourism trends.
    Trends,

    /// Generate the comprehensive market report.
    MarketReport,

    /// Analyse one location's investment potential.
    Location {
        /// Location to analyse.
        location: String,
    },

    /// Compare several locations.
    Compare {
        /// Locations to compare.
        #[arg(required = true, num_args = 1..)]
        locations: Vec<String>,
    },

    /// Research competition in one location.
    Competition {
        /// Location to research.
        location: String,
    },

    /// Generate an investment recommendation.
    Recommend {
        /// Investment budget in USD.
        #[arg(long)]
        budget: f64,

        /// Preferences as a JSON object, e.g. '{"type": "hostel"}'.
        #[arg(long, value_parser = parse_json)]
        preferences: Option<Value>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let output_dir = args.output_dir.clone();
    let base_name = args.base_name.clone();

    match run(args).await {
        Ok((results, agent)) => {
            let written = save_all_formats(&results, &output_dir, base_name.as_deref());
            print_summary(&results, &agent, &written);

            if results.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Uses compact single-line output and reads the filter from `RUST_LOG`,
/// falling back to `info`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(AnalysisResults, ResearchAgent), ResearchError> {
    let mut config = AgentConfig::load(&args.config)?;
    if let Some(country) = args.country {
        config.research.country = country;
    }
    if let Some(limit) = args.requests_per_minute {
        config.quota.requests_per_minute = limit;
    }
    if let Some(limit) = args.requests_per_day {
        config.quota.requests_per_day = limit;
    }
    config.validate()?;

    let agent = ResearchAgent::from_config(&config, args.api_key.as_deref())?;
    let country = agent.settings().country.clone();

    let results = match args.command {
        Command::Comprehensive { locations } => {
            let locations = (!locations.is_empty()).then_some(locations);
            agent
                .run_comprehensive_analysis(locations.as_deref())
                .await?
        }
        Command::Trends => single(&country, &[], agent.research_trends().await?),
        Command::MarketReport => single(&country, &[], agent.market_report().await?),
        Command::Location { location } => {
            let entry = agent.analyze_location(&location).await?;
            single(&country, &[location], entry)
        }
        Command::Compare { locations } => {
            let entry = agent.compare_locations(&locations).await?;
            single(&country, &locations, entry)
        }
        Command::Competition { location } => {
            let entry = agent.research_competition(&location).await?;
            single(&country, &[location], entry)
        }
        Command::Recommend {
            budget,
            preferences,
        } => {
            let preferences = preferences.unwrap_or_else(|| Value::Object(Default::default()));
            let entry = agent.investment_recommendation(budget, preferences).await?;
            single(&country, &[], entry)
        }
    };

    Ok((results, agent))
}

/// Wraps a single report in a results set so it can be exported.
fn single(country: &str, locations: &[String], entry: ReportEntry) -> AnalysisResults {
    let mut results = AnalysisResults::new(country, locations);
    results.reports.insert(entry);
    results
}

fn parse_json(raw: &str) -> Result<Value, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if value.is_object() {
        Ok(value)
    } else {
        Err("preferences must be a JSON object".to_string())
    }
}

/// Prints the final run summary.
fn print_summary(
    results: &AnalysisResults,
    agent: &ResearchAgent,
    written: &[(ExportFormat, PathBuf)],
) {
    let governor = agent.governor();
    let quota = governor.quota_snapshot();

    println!("\nSummary:");
    println!("  Country: {}", results.country);
    if !results.locations_analyzed.is_empty() {
        println!("  Locations: {}", results.locations_analyzed.join(", "));
    }
    println!("  Reports generated: {}", results.report_count());
    println!("  Failed calls: {}", results.failed_calls());
    if let Some(reason) = &results.error {
        println!("  Stopped early: {reason}");
    }
    println!(
        "  Quota: {}/{} this minute, {}/{} today",
        quota.minute_used,
        governor.requests_per_minute(),
        quota.daily_used,
        governor.requests_per_day()
    );

    if written.is_empty() {
        warn!("No report files were written");
    }
    for (format, path) in written {
        println!("  Saved {format} report: {}", path.display());
    }
}
