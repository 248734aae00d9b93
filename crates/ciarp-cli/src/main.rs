mod cmd_ask;
mod cmd_list;
mod cmd_serve;
mod cmd_show;
mod cmd_summary;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ciarp_assist::{AssistConfig, CannedGenerator, OpenAiGenerator, TextGenerator};
use ciarp_store::ConversationStore;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ciarp", version, about = "Conversation intelligence analytics")]
struct Cli {
    /// JSON file holding an array of conversation records (defaults to the built-in set)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 7433)]
        port: u16,
        /// Live monitor tick interval in milliseconds
        #[arg(long, default_value_t = 3000)]
        tick_ms: u64,
        /// Use canned assistant replies instead of the upstream provider
        #[arg(long)]
        offline: bool,
    },
    /// List conversations, optionally filtered
    List {
        /// Day of month, e.g. 18
        #[arg(long)]
        day: Option<String>,
        /// calm, frustrated, excited, or confused
        #[arg(long)]
        emotion: Option<String>,
        /// Exact intent label, e.g. "Technical Support"
        #[arg(long)]
        intent: Option<String>,
        /// resolved, escalated, or pending
        #[arg(long)]
        resolution: Option<String>,
        /// Case-insensitive text search over names, intent, and transcript
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one conversation with its transcript
    Show {
        /// Conversation ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show aggregate counts by day, emotion, intent, and resolution
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show headline rates and averages
    Analytics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show auto-resolution rates by category and the response templates
    AutoResolution {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the AI assistant a question
    Ask {
        /// Question text
        message: String,
        /// Business domain the question is about
        #[arg(long, default_value = "yacht-brokerage")]
        domain: String,
        /// Attach this conversation as context
        #[arg(long)]
        context_id: Option<String>,
        /// Use canned replies instead of the upstream provider
        #[arg(long)]
        offline: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = open_store(cli.data.as_deref())?;

    match cli.cmd {
        Command::Serve {
            bind,
            port,
            tick_ms,
            offline,
        } => cmd_serve::execute(store, build_generator(offline), &bind, port, tick_ms),
        Command::List {
            day,
            emotion,
            intent,
            resolution,
            search,
            json,
        } => {
            let criteria = ciarp_store::FilterCriteria {
                day,
                emotion,
                intent,
                resolution,
                search_term: search,
            };
            cmd_list::execute(&store, &criteria, json)
        }
        Command::Show { id, json } => cmd_show::execute(&store, &id, json),
        Command::Summary { json } => cmd_summary::summary(&store, json),
        Command::Analytics { json } => cmd_summary::analytics(&store, json),
        Command::AutoResolution { json } => cmd_summary::auto_resolution(json),
        Command::Ask {
            message,
            domain,
            context_id,
            offline,
        } => cmd_ask::execute(
            &store,
            build_generator(offline).as_ref(),
            &message,
            &domain,
            context_id.as_deref(),
        ),
    }
}

fn open_store(data: Option<&Path>) -> anyhow::Result<ConversationStore> {
    match data {
        Some(path) => Ok(ConversationStore::from_json_file(path)?),
        None => Ok(ConversationStore::seeded()),
    }
}

/// Upstream provider when a key is configured, canned replies otherwise.
fn build_generator(offline: bool) -> Arc<dyn TextGenerator> {
    if offline {
        return Arc::new(CannedGenerator);
    }
    let config = AssistConfig::from_env();
    match OpenAiGenerator::new(&config) {
        Ok(g) => {
            tracing::info!(model = g.model(), url = g.url(), "using upstream provider");
            Arc::new(g)
        }
        Err(e) => {
            tracing::warn!(error = %e, "falling back to canned assistant replies");
            Arc::new(CannedGenerator)
        }
    }
}
