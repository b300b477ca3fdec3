use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nutrichat_client::WebhookClient;
use nutrichat_controller::{SubmitOutcome, TurnController};
use nutrichat_core::logging::LogFormat;
use nutrichat_core::{Config, Speaker};
use nutrichat_ui::{App, AppState};

/// NutriChat - a terminal chat client for the NutriBot nutrition assistant
#[derive(Parser, Debug)]
#[command(name = "nutrichat")]
#[command(about = "Chat with the NutriBot nutrition assistant from your terminal", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to nutrichat.toml (default: ./nutrichat.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive chat TUI
    Start,
    /// Send a single utterance and print the replies (non-interactive mode)
    Ask {
        /// The message to send
        #[arg(required = true, value_name = "UTTERANCE")]
        utterance: Vec<String>,
    },
    /// Show the resolved configuration
    Status,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(|| PathBuf::from("nutrichat.toml"));
    let config = load_or_create_config(&config_path)?;

    nutrichat_core::logging::init_logging(Some(config.logging.clone()))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if cli.verbose {
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
        println!("{} Endpoint: {}", "Info:".blue().bold(), config.endpoint.cyan());
    }

    match cli.command {
        Commands::Start => cmd_start(config).await?,
        Commands::Ask { utterance } => cmd_ask(config, utterance.join(" ")).await?,
        Commands::Status => cmd_status(config, &config_path),
    }

    Ok(())
}

/// Load config from file or create from example
fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    } else {
        println!("{} Config not found at {}", "Warning:".yellow().bold(), path.display());
        println!("{} Creating config from example...", "Info:".blue().bold());

        std::fs::write(path, Config::example()).context("Failed to create config")?;

        println!(
            "{} Created config at {}. Edit it if you need a different endpoint.",
            "Success:".green().bold(),
            path.display()
        );

        Config::from_toml_str(Config::example()).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

/// Start the interactive chat TUI
async fn cmd_start(config: Config) -> Result<()> {
    let service = Arc::new(WebhookClient::new(&config.endpoint));
    let state = AppState::new(&config.endpoint);

    let mut app = App::new(state, service);
    app.run().await.context("TUI session failed")?;

    Ok(())
}

/// Send one utterance and print the bot replies
async fn cmd_ask(config: Config, utterance: String) -> Result<()> {
    let service = Arc::new(WebhookClient::new(&config.endpoint));
    let mut controller = TurnController::new(service);

    let outcome = controller.submit(&utterance).await;
    if outcome == SubmitOutcome::Ignored {
        anyhow::bail!("nothing to send: the message is empty");
    }

    for turn in controller.session().transcript().turns() {
        match turn.speaker {
            Speaker::User => println!("{} {}", "You:".blue().bold(), turn.text),
            Speaker::Bot => {
                if turn.text.starts_with("Error: ") {
                    println!("{} {}", "Bot:".red().bold(), turn.text);
                } else {
                    print!("{}", format_bot_reply(&turn.text));
                }
            }
        }
    }

    Ok(())
}

/// Render one bot reply for the terminal, bulleting multi-line replies
fn format_bot_reply(text: &str) -> String {
    let mut out = String::new();
    if text.contains('\n') {
        out.push_str(&format!("{}\n", "Bot:".green().bold()));
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            out.push_str(&format!("  • {}\n", line));
        }
    } else {
        out.push_str(&format!("{} {}\n", "Bot:".green().bold(), text));
    }
    out
}

/// Show the resolved configuration
fn cmd_status(config: Config, config_path: &Path) {
    println!("{}", "NutriChat Status".green().bold().underline());
    println!();

    println!("{} Configuration", "Info:".blue().bold());
    println!("  Config file: {}", config_path.display().cyan());
    println!("  Endpoint: {}", config.endpoint.cyan());
    let format = LogFormat::parse_str(&config.logging.format).unwrap_or_default();
    println!("  Log level: {}", config.logging.level.cyan());
    println!("  Log format: {}", format.as_str().cyan());
    println!(
        "  File logging: {}",
        if config.logging.file.enabled { "enabled".cyan().to_string() } else { "disabled".cyan().to_string() }
    );
}
