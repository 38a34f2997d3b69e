use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use wqi_cli::{Inspector, Panel, Session, display_banner, print_help, read_line_with_history};
use wqi_client::HttpQualityService;
use wqi_core::Purpose;

#[derive(Parser)]
#[command(name = "wqi")]
#[command(about = "Writing quality inspector: score and rewrite drafts from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a draft against the service's quality rubrics
    Analyze {
        /// Text to analyze; reads stdin when neither --text nor --file is given
        #[arg(short, long)]
        text: Option<String>,
        /// Read the draft from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Intended purpose: general, academic, email, blog or casual
        #[arg(short, long, default_value = "general")]
        purpose: String,
        /// Apply stricter scoring criteria
        #[arg(short, long)]
        strict: bool,
    },
    /// Rewrite a draft, guided by one or more focus areas
    Improve {
        /// Text to improve; reads stdin when neither --text nor --file is given
        #[arg(short, long)]
        text: Option<String>,
        /// Read the draft from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Focus area to prioritize (repeatable; order is kept)
        #[arg(short = 'F', long = "focus", value_delimiter = ',')]
        focus: Vec<String>,
    },
    /// Check whether the service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let inspector = Inspector::new(HttpQualityService::from_env()?);

    match cli.command {
        Some(Commands::Analyze {
            text,
            file,
            purpose,
            strict,
        }) => {
            let purpose: Purpose = purpose.parse()?;
            let text = gather_text(text, file)?;
            println!("{}", inspector.analyze(&text, purpose, strict).await?);
        }
        Some(Commands::Improve { text, file, focus }) => {
            let text = gather_text(text, file)?;
            println!("{}", inspector.improve(&text, &focus).await?);
        }
        Some(Commands::Health) => {
            println!("{}", inspector.health().await?);
        }
        None => interactive(inspector).await?,
    }

    Ok(())
}

fn gather_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    Ok(std::io::read_to_string(std::io::stdin())?)
}

async fn interactive(inspector: Inspector<HttpQualityService>) -> Result<()> {
    display_banner();

    let mut session = Session::default();
    let mut history = Vec::new();

    loop {
        let prompt = format!("wqi[{}]>", session.active());
        let input = read_line_with_history(&prompt, &mut history).await?;

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "👋 Goodbye!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            continue;
        }

        if input_lower == "show" {
            println!("{}", session.describe_active());
            continue;
        }

        if input_lower == "health" {
            match inspector.health().await {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => println!("{} {}", "❌".red(), e),
            }
            continue;
        }

        if let Some(name) = input_lower.strip_prefix("use ") {
            match name.parse::<Panel>() {
                Ok(panel) => {
                    session.switch(panel);
                    println!("{} Switched to the {} panel", "✅".green(), panel);
                }
                Err(e) => println!("{} {}", "❌".red(), e),
            }
            continue;
        }

        if let Some(value) = input_lower.strip_prefix("purpose ") {
            match value.parse::<Purpose>() {
                Ok(purpose) => {
                    session.analyze.purpose = purpose;
                    println!("{} Purpose set to {}", "✅".green(), purpose);
                }
                Err(e) => println!("{} {}", "❌".red(), e),
            }
            continue;
        }

        if let Some(value) = input_lower.strip_prefix("strict ") {
            match value.trim() {
                "on" => {
                    session.analyze.strict = true;
                    println!("{} Strict scoring on", "✅".green());
                }
                "off" => {
                    session.analyze.strict = false;
                    println!("{} Strict scoring off", "✅".green());
                }
                other => println!(
                    "{} Expected 'strict on' or 'strict off', got '{}'",
                    "❌".red(),
                    other
                ),
            }
            continue;
        }

        if input_lower == "focus" {
            if session.improve.focus.is_empty() {
                println!("No focus areas selected.");
            } else {
                println!("Focus areas: {}", session.improve.focus.join(", "));
            }
            continue;
        }

        if input_lower.starts_with("focus ") {
            let areas: Vec<String> = input["focus ".len()..]
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if areas.is_empty() {
                println!("{} No focus areas given", "❌".red());
            } else {
                println!("{} Focus set to {}", "✅".green(), areas.join(", "));
                session.improve.focus = areas;
            }
            continue;
        }

        // Anything else is text for the active panel.
        let outcome = match session.active() {
            Panel::Analyze => {
                inspector
                    .analyze(&input, session.analyze.purpose, session.analyze.strict)
                    .await
            }
            Panel::Improve => inspector.improve(&input, &session.improve.focus).await,
        };

        match outcome {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => println!("{} {}", "❌".red(), e),
        }
    }

    Ok(())
}
