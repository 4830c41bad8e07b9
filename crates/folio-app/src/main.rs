mod assistant;
mod cli;
mod shell;

use std::process::ExitCode;

use folio_common::FolioError;
use folio_config::FolioConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

const CRATE_TARGETS: [&str; 4] = ["folio_app", "folio_ai", "folio_config", "folio_profile"];

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/folio-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim();
            let key = key.strip_prefix("export ").unwrap_or(key).trim();
            (key, value.trim().trim_matches('"').trim_matches('\''))
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Filter directives giving every Folio crate the same level.
fn log_directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.to_lowercase()))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new(log_directives("info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<(), FolioError> {
    let loaded = folio_config::load_config(args.config.as_deref());

    let level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".to_string());
    init_logging(&level);

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match (loaded, &args.config) {
        (Ok(config), _) => config,
        // An explicit --config that cannot be used is fatal.
        (Err(e), Some(_)) => return Err(e.into()),
        (Err(e), None) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FolioConfig::default()
        }
    };

    let portfolio = folio_profile::load_portfolio(config.content.path.as_deref())?;
    tracing::info!(owner = %portfolio.profile.name, "Portfolio content loaded");

    match args.command() {
        Command::Config => {
            println!("{}", folio_config::config_to_json(&config));
        }
        Command::Prompt => {
            print!("{}", folio_profile::compose_system_instruction(&portfolio));
        }
        Command::Ask { question } => {
            let mut panel = assistant::build_panel(&config.assistant, &portfolio)?;
            let question = question.join(" ");
            match panel.send(&question).await {
                Some(reply) => println!("{}", reply.text),
                None => return Err(FolioError::Other("question is empty".into())),
            }
        }
        Command::Chat => {
            let mut panel = assistant::build_panel(&config.assistant, &portfolio)?;
            shell::run_chat(&mut panel).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the API key
    load_dotenv();

    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}
