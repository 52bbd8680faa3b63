use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movielens_dashboard::check::check_assets;
use movielens_dashboard::config::{AppConfig, CliConfig, FileConfig};
use movielens_dashboard::editorial::Editorial;
use movielens_dashboard::{run_server, AssetsLayout, DashboardCache, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding data/summary/*.csv and visualizations/.
    #[clap(value_parser = parse_path)]
    pub assets_dir: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8501)]
    pub port: u16,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of pages and downloads in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to a TOML config file. Its values override the CLI ones.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to a TOML file replacing the built-in insight and persona copy.
    #[clap(long, value_parser = parse_path)]
    pub editorial: Option<PathBuf>,

    /// Load every dataset and visualization, print the problems found and exit.
    #[clap(long)]
    pub check_only: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            assets_dir: self.assets_dir.clone(),
            port: self.port,
            bind_address: self.bind_address.clone(),
            logging_level: self.logging_level.clone(),
            content_cache_age_sec: self.content_cache_age_sec,
            editorial_path: self.editorial.clone(),
        }
    }
}

fn run_check(cache: &DashboardCache) {
    let problems = check_assets(cache);
    if problems.is_empty() {
        println!("Assets checked, no issues found.");
        return;
    }

    println!("Found {} problems:", problems.len());
    for problem in problems.iter() {
        println!("- {}", problem);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let editorial = match &app_config.editorial_path {
        Some(path) => {
            info!("Loading editorial content from {:?}", path);
            Editorial::load(path)?
        }
        None => Editorial::default(),
    };

    info!("Serving assets from {:?}", app_config.assets_dir);
    let cache = DashboardCache::new(AssetsLayout::new(app_config.assets_dir.clone()));

    if cli_args.check_only {
        run_check(&cache);
        return Ok(());
    }

    run_server(
        app_config.server_config(),
        Arc::new(cache),
        Arc::new(editorial),
    )
    .await
}
