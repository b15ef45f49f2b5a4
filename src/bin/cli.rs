//! equipdesk CLI
//!
//! Ask the equipment assistant, run tools directly, serve the web form and
//! manage configuration.

use clap::{Parser, Subcommand};
use console::style;
use equipdesk::agent::{Assistant, OllamaAgent};
use equipdesk::config::{self, Config, ConfigSnapshot};
use equipdesk::tools::{ToolCall, ToolRegistry};
use equipdesk::web::{self, WebState};
use equipdesk::{logging, Error, VERSION};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "equipdesk",
    version = VERSION,
    about = "equipdesk - equipment support assistant on a local Ollama model",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/equipdesk/config.toml)
    #[arg(long, short, global = true, env = "EQUIPDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the agent a question
    Ask {
        /// The question, e.g. "History EQ12345"
        question: String,
        /// Ollama model to use instead of the configured one
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Run a tool directly, without the model
    Tool {
        /// Tool name (see `equipdesk tools`)
        name: String,
        /// Tool input text
        input: String,
    },

    /// List available tools
    Tools,

    /// Serve the question form over HTTP
    Serve {
        /// Bind address
        #[arg(long)]
        bind: Option<String>,
        /// Port
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },

    /// Show the effective configuration and validation issues
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);

    match cli.command {
        Commands::InitConfig { force } => init_config(&config_path, force),
        Commands::Config => {
            let (config, snapshot) = config::effective_config(&config_path);
            show_config(&config, &snapshot)
        }
        command => {
            let config = config::load_config_at(&config_path)?;
            logging::init_logging(&config.log)?;
            run(command, config).await
        }
    }
}

/// Parse arguments after loading `.env`, so `EQUIPDESK_CONFIG` set there is seen
fn parse_cli() -> Cli {
    dotenvy::dotenv().ok();
    Cli::parse()
}

async fn run(command: Commands, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Ask { question, model } => ask(config, &question, model).await,
        Commands::Tool { name, input } => run_tool(&name, &input).await,
        Commands::Tools => {
            list_tools();
            Ok(())
        }
        Commands::Serve { bind, port } => serve(config, bind, port).await,
        Commands::InitConfig { .. } | Commands::Config => Ok(()),
    }
}

async fn ask(mut config: Config, question: &str, model: Option<String>) -> anyhow::Result<()> {
    if let Some(model) = model {
        config.ollama.model = model;
    }

    let registry = ToolRegistry::with_equipment_tools();
    let agent = OllamaAgent::new(&config, &registry)?;

    let answer = agent.ask(question).await?;
    println!("{} {}", style("Response:").bold(), answer);
    Ok(())
}

async fn run_tool(name: &str, input: &str) -> anyhow::Result<()> {
    let registry = ToolRegistry::with_equipment_tools();
    let call = ToolCall::new(name, serde_json::json!({ "input": input }));

    match registry.execute(&call).await {
        Ok(result) => {
            println!("{}", result.to_output());
            Ok(())
        }
        Err(Error::NotFound(msg)) => {
            eprintln!("{} {}", style("✗").red(), msg);
            eprintln!("Available tools: {}", registry.names().join(", "));
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

fn list_tools() {
    let registry = ToolRegistry::with_equipment_tools();
    for def in registry.definitions() {
        println!("{}", style(&def.name).cyan().bold());
        println!("  {}\n", def.description);
    }
}

async fn serve(mut config: Config, bind: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    for warning in config::validate_config(&config).warnings {
        tracing::warn!(path = %warning.path, "{}", warning.message);
    }

    info!("Starting equipdesk v{}", VERSION);
    let registry = ToolRegistry::with_equipment_tools();
    let agent = OllamaAgent::new(&config, &registry)?;
    let state = WebState::new(Arc::new(agent), registry)?;

    web::serve(state, &config.server).await?;
    Ok(())
}

fn init_config(path: &std::path::Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config::save_config(&Config::default(), path)?;
    println!("{} Wrote {}", style("✓").green(), path.display());
    Ok(())
}

fn show_config(config: &Config, snapshot: &ConfigSnapshot) -> anyhow::Result<()> {
    let source = if snapshot.exists {
        snapshot.path.display().to_string()
    } else {
        "defaults (no config file)".to_string()
    };
    println!("{} {}\n", style("Config:").bold(), source);
    if snapshot.exists {
        for issue in &snapshot.issues {
            println!("{} {}", style("!").yellow(), issue);
        }
    }

    println!("{}", toml::to_string_pretty(config)?);

    let result = config::validate_config(config);
    for issue in &result.errors {
        println!("{} {}: {}", style("✗").red(), issue.path, issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("    {}", style(suggestion).dim());
        }
    }
    for issue in &result.warnings {
        println!("{} {}: {}", style("!").yellow(), issue.path, issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("    {}", style(suggestion).dim());
        }
    }
    if result.valid {
        println!("{} Configuration is valid", style("✓").green());
    }
    Ok(())
}
