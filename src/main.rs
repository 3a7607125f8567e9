#[macro_use]
extern crate log;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use games_config_rs::admin::{self, ScoreQuery, DEFAULT_MAX_RESULTS};
use games_config_rs::catalog::Catalog;
use games_config_rs::config::AppConfig;
use games_config_rs::facade::{ConfigurationFacade, LogListener};
use games_config_rs::http::GamesApi;
use games_config_rs::models::player::{ScoreCollection, TimeSpan};
use games_config_rs::reconcile::{AchievementEndpoint, LeaderboardEndpoint};
use games_config_rs::util::error::ConfigError;
use games_config_rs::util::logging::setup_logger;
use games_config_rs::xml::wrap_resources;

#[derive(Parser)]
#[command(name = "games-config")]
#[command(about = "Configure achievements and leaderboards, and moderate players, for a Play Games application")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to games-config.yml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Application id to operate on
    #[arg(short, long, global = true)]
    app_id: Option<String>,

    /// Sample whose achievements and leaderboards are configured
    #[arg(short, long, global = true)]
    sample: Option<String>,

    /// YAML catalog replacing the built-in samples
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert every missing achievement and leaderboard of the selected sample
    Configure {
        /// Write a complete resources document instead of printing the fragment
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the current configuration as string resources
    List {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every achievement and leaderboard of the application
    Reset {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the samples known to the catalog
    Samples,

    /// Hide a player from the application's leaderboards
    Hide { player_id: String },

    /// Make a hidden player visible again
    Unhide { player_id: String },

    /// Show the top scores of a leaderboard
    Scores {
        leaderboard_id: String,
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: u32,
        /// PUBLIC or SOCIAL
        #[arg(long, default_value = "PUBLIC")]
        collection: ScoreCollection,
        /// ALL_TIME, WEEKLY or DAILY
        #[arg(long, default_value = "ALL_TIME")]
        time_span: TimeSpan,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(application_id) = cli.app_id {
        config.application_id = Some(application_id);
    }
    if let Some(sample) = cli.sample {
        config.sample = Some(sample);
    }
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }

    let level = if cli.verbose { LevelFilter::Debug } else { config.level_filter() };
    setup_logger(level).context("Could not initialize logging")?;

    let catalog = match &config.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin()?,
    };
    let api = config.build_api().context("Invalid endpoint configuration")?;
    if config.access_token.is_none() && !matches!(cli.command, Commands::Samples) {
        warn!("No access token configured; requests will be sent unauthenticated");
    }
    let application_id = config.application_id.clone().unwrap_or_default();

    match cli.command {
        Commands::Configure { output } => {
            let sample_id = config
                .sample
                .as_deref()
                .ok_or_else(|| ConfigError::Validation(String::from("No sample selected")))?;
            let sample = catalog.sample(sample_id)?;
            let xml = facade(&api, &application_id).configure(sample).await?;
            emit(&xml, output.as_deref()).await?;
        }
        Commands::List { output } => {
            let xml = facade(&api, &application_id).list().await?;
            emit(&xml, output.as_deref()).await?;
        }
        Commands::Reset { output } => {
            let xml = facade(&api, &application_id).reset().await?;
            emit(&xml, output.as_deref()).await?;
        }
        Commands::Samples => {
            for id in catalog.sample_ids() {
                let sample = catalog.sample(id)?;
                println!(
                    "{}: {} achievement(s), {} leaderboard(s)",
                    id,
                    sample.achievements.len(),
                    sample.leaderboards.len()
                );
            }
        }
        Commands::Hide { player_id } => {
            let outcome = admin::hide_player(&api, &application_id, &player_id).await?;
            println!("{}", outcome);
        }
        Commands::Unhide { player_id } => {
            let outcome = admin::unhide_player(&api, &application_id, &player_id).await?;
            println!("{}", outcome);
        }
        Commands::Scores { leaderboard_id, max_results, collection, time_span } => {
            let query = ScoreQuery { collection, time_span, max_results };
            let scores = admin::top_scores(&api, &leaderboard_id, query).await?;
            print!("{}", admin::render_score_table(&scores));
        }
    }

    Ok(())
}

static LISTENER: LogListener = LogListener;

type HttpFacade<'a> = ConfigurationFacade<'static, AchievementEndpoint<'a>, LeaderboardEndpoint<'a>>;

fn facade<'a>(api: &'a GamesApi, application_id: &str) -> HttpFacade<'a> {
    ConfigurationFacade::over_http(api, application_id, &LISTENER)
}

async fn emit(xml: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, wrap_resources(xml))
                .await
                .with_context(|| format!("Could not write {}", path.display()))?;
            info!("Resources written to {}", path.display());
        }
        None => println!("{}", xml),
    }
    Ok(())
}
