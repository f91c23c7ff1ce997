//! HR.360 CLI
//!
//! Command-line interface for HR.360 operations:
//! - Inspect the link table and route table
//! - Render a chart style block from a config file
//! - Check a running server
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hr360::chart::{ChartConfig, ChartScope};
use hr360::config::generate_default_config;
use hr360::nav::links;
use hr360::routing::{route_table, Page};

#[derive(Parser)]
#[command(name = "hr360")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "HR.360 application shell tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the sidebar navigation links
    Links,

    /// List the router table
    Routes,

    /// Resolve a path against the router table
    Resolve {
        /// Path to match, e.g. /about
        path: String,
    },

    /// Render the theme style block for a chart config (JSON)
    Style {
        /// Path to the chart config JSON file
        config: PathBuf,
        /// Chart id (default: generated)
        #[arg(long)]
        id: Option<String>,
    },

    /// Check a running server's health
    Status {
        /// Server URL
        #[arg(long, default_value = "http://localhost:8084")]
        api_url: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json = cli.format == "json";

    match cli.command {
        Commands::Links => {
            if json {
                println!("{}", serde_json::to_string_pretty(links())?);
            } else {
                println!("{:<12} {:<10} {:<10} {}", "VALUE", "NAME", "PATH", "ICON");
                for link in links() {
                    println!("{:<12} {:<10} {:<10} {}", link.value, link.name, link.to, link.icon);
                }
            }
        }

        Commands::Routes => {
            let table = route_table();
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("{:<12} {}", "PATH", "CONTENT");
                for entry in table {
                    println!("{:<12} {}", entry.path, entry.placeholder);
                }
            }
        }

        Commands::Resolve { path } => match Page::resolve(&path) {
            Some(page) if json => println!(
                "{}",
                serde_json::json!({"path": path, "page": page, "placeholder": page.placeholder()})
            ),
            Some(page) => println!("{} -> {}", path, page.placeholder()),
            None if json => println!("{}", serde_json::json!({"path": path, "page": null})),
            None => {
                eprintln!("No route matches {}", path);
                std::process::exit(1);
            }
        },

        Commands::Style { config, id } => {
            let content = std::fs::read_to_string(&config)
                .with_context(|| format!("Failed to read {}", config.display()))?;
            let chart_config = ChartConfig::from_json(&content)
                .with_context(|| format!("Invalid chart config in {}", config.display()))?;

            let scope = ChartScope::new(id.as_deref(), chart_config);
            match scope.style() {
                Some(css) => print!("{}", css),
                None => eprintln!("No series in {} declares a color", config.display()),
            }
        }

        Commands::Status { api_url } => {
            let client = reqwest::Client::new();
            let url = format!("{}/health", api_url.trim_end_matches('/'));
            let response = client
                .get(&url)
                .send()
                .await
                .with_context(|| format!("Failed to reach {}", url))?;

            if !response.status().is_success() {
                anyhow::bail!("Health check failed: {}", response.status());
            }

            let health: serde_json::Value = response.json().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!("HR.360 Status");
                println!("=============");
                println!("Status:  {}", health["status"].as_str().unwrap_or("unknown"));
                println!("Assets:  {}", health["assets"].as_str().unwrap_or("unknown"));
                println!("Version: {}", health["version"].as_str().unwrap_or("unknown"));
                println!("Uptime:  {}s", health["uptime_seconds"].as_u64().unwrap_or(0));
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
