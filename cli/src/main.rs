//! MEDIBOT command line.
//!
//! Usage:
//!   medibot ask --intent ask_symptoms --disease malaria
//!   medibot diseases
//!   medibot intents
//!   medibot serve --config medibot.toml --port 5055

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medibot_contracts::{
    error::{MedibotError, MedibotResult},
    intent::Intent,
};
use medibot_core::Responder;
use medibot_knowledge::KnowledgeTable;
use medibot_server::ServerConfig;

// ── CLI definition ────────────────────────────────────────────────────────────

/// MEDIBOT: disease information for conversational assistants.
#[derive(Parser)]
#[command(
    name = "medibot",
    about = "Disease information action server",
    long_about = "Answers disease questions (symptoms, prevention, treatment, more info,\n\
                  emergency tips) for a conversational framework, either offline from\n\
                  the command line or as an HTTP custom-action webhook."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer one turn offline and print the reply.
    Ask {
        /// Intent name, e.g. ask_symptoms, greet, deny.
        #[arg(long)]
        intent: String,
        /// Value of the disease slot. Omit to simulate an empty slot.
        #[arg(long)]
        disease: Option<String>,
        /// TOML knowledge file to use instead of the built-in table.
        #[arg(long)]
        knowledge: Option<PathBuf>,
    },
    /// List the diseases in the knowledge table.
    Diseases {
        #[arg(long)]
        knowledge: Option<PathBuf>,
    },
    /// List the intent names the dispatcher recognizes.
    Intents,
    /// Run the HTTP action server.
    Serve {
        /// TOML server configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        #[arg(long)]
        knowledge: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Set RUST_LOG=debug for verbose output.
    let default_filter = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    let result = match cli.command {
        Command::Ask { intent, disease, knowledge } => {
            run_ask(&intent, disease.as_deref(), knowledge.as_deref())
        }
        Command::Diseases { knowledge } => run_diseases(knowledge.as_deref()),
        Command::Intents => {
            run_intents();
            Ok(())
        }
        Command::Serve { config, host, port, knowledge } => {
            run_serve(config.as_deref(), host, port, knowledge)
        }
    };

    if let Err(e) = result {
        eprintln!("medibot error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn load_table(path: Option<&Path>) -> MedibotResult<Arc<KnowledgeTable>> {
    match path {
        Some(path) => Ok(Arc::new(KnowledgeTable::from_file(path)?)),
        None => Ok(Arc::new(KnowledgeTable::builtin().clone())),
    }
}

fn run_ask(intent: &str, disease: Option<&str>, knowledge: Option<&Path>) -> MedibotResult<()> {
    let table = load_table(knowledge)?;
    let reply = Responder::new(&table).respond(&Intent::from_name(intent), disease);
    println!("{}", reply);
    Ok(())
}

fn run_diseases(knowledge: Option<&Path>) -> MedibotResult<()> {
    let table = load_table(knowledge)?;
    for name in table.names() {
        println!("{}", name);
    }
    Ok(())
}

fn run_intents() {
    for intent in Intent::KNOWN {
        let answers = match intent.info_field() {
            Some(field) => field.as_str(),
            None => match intent {
                Intent::Greet | Intent::Goodbye | Intent::Affirm | Intent::Deny => "fixed reply",
                _ => "general_info",
            },
        };
        println!("{:<18} {}", intent.as_str(), answers);
    }
    println!("{:<18} {}", "<anything else>", "general_info");
}

fn run_serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    knowledge: Option<PathBuf>,
) -> MedibotResult<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if knowledge.is_some() {
        config.knowledge_path = knowledge;
    }

    let runtime = tokio::runtime::Runtime::new().map_err(|e| MedibotError::Io {
        reason: format!("failed to start async runtime: {}", e),
    })?;
    runtime.block_on(medibot_server::serve(config))
}
