//! Docshare CLI: inspect an exported document tree.
//!
//! Reads DOCSHARE_TREE_PATH, DOCSHARE_DOCUMENTS_DIR, DOCSHARE_RECENT_LIMIT and
//! DOCSHARE_WATCH_INTERVAL_MS from the environment (or a `.env` file).

use anyhow::Context;
use clap::{Parser, Subcommand};
use docshare_cli::render::{
    write_document_table, write_json, write_open_target, write_stats_table, DocumentList,
    StatsReport,
};
use docshare_cli::{
    init_tracing, load_snapshot, open_document, recent_documents, resolve_config, watch_stats,
    ConfigOverrides, ConfigUsage, OutputFormat,
};
use docshare_core::{
    aggregate_with_probe, env_lookup, home_feed, run_feed, DocumentCategory, DocumentQuery,
    DocumentRecord, DocumentStore, Snapshot,
};
use docshare_storage::{JsonFileSource, LocalFileProbe};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docshare", about = "Docshare document index CLI")]
struct Cli {
    /// Exported document tree (defaults to DOCSHARE_TREE_PATH)
    #[arg(long, global = true)]
    tree: Option<PathBuf>,
    /// Directory relative local paths are resolved against
    #[arg(long, global = true)]
    documents_dir: Option<PathBuf>,
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List documents filtered by name and type
    List {
        /// Case-insensitive substring of the file name
        #[arg(long, default_value = "")]
        query: String,
        /// Type filter: all, pdf, doc, xls, ppt, img, other
        #[arg(long, default_value = "all")]
        category: DocumentCategory,
    },
    /// Most recently uploaded documents
    Recent {
        /// Number of documents (defaults to DOCSHARE_RECENT_LIMIT)
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Home screen view: latest uploads, or every match when searching
    Home {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Document count and storage used on disk
    Stats,
    /// Print the MIME type and path needed to open a document
    Open {
        /// Exact file name; the newest upload wins when several share it
        file_name: String,
    },
    /// Follow the tree file and report stats on every change
    Watch {
        /// Poll interval in milliseconds (defaults to DOCSHARE_WATCH_INTERVAL_MS)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

impl Commands {
    fn config_usage(&self) -> ConfigUsage {
        match self {
            Commands::Recent { limit } => ConfigUsage {
                recent_limit: limit.is_none(),
                ..ConfigUsage::default()
            },
            Commands::Home { .. } => ConfigUsage {
                recent_limit: true,
                ..ConfigUsage::default()
            },
            Commands::Watch { .. } => ConfigUsage {
                watch_interval: true,
                ..ConfigUsage::default()
            },
            Commands::List { .. } | Commands::Stats | Commands::Open { .. } => {
                ConfigUsage::default()
            }
        }
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    write_json(&mut io::stdout().lock(), value).context("Write JSON output")
}

fn print_documents(
    format: OutputFormat,
    title: &str,
    shown: &[&DocumentRecord],
    snapshot: &Snapshot,
) -> anyhow::Result<()> {
    let list = DocumentList::new(shown, snapshot.len());
    match format {
        OutputFormat::Json => print_json(&list),
        OutputFormat::Table => {
            write_document_table(&mut io::stdout().lock(), title, &list).context("Write table")
        }
    }
}

fn print_stats(format: OutputFormat, report: &StatsReport) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            write_stats_table(&mut io::stdout().lock(), report).context("Write stats")
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let overrides = ConfigOverrides {
        tree: cli.tree,
        documents_dir: cli.documents_dir,
        watch_interval_ms: match &cli.command {
            Commands::Watch { interval_ms } => *interval_ms,
            _ => None,
        },
    };
    let config = resolve_config(&overrides, cli.command.config_usage(), env_lookup())?;

    let tree_path = config
        .tree_path()
        .map(PathBuf::from)
        .context("No document tree given. Pass --tree or set DOCSHARE_TREE_PATH")?;
    let probe = LocalFileProbe::with_base_path(&config.documents_dir);
    let format = cli.format;

    match cli.command {
        Commands::List { query, category } => {
            let snapshot = load_snapshot(&tree_path).await?;
            let outcome = DocumentQuery::new(query, category).run(snapshot.records());
            if outcome.no_matches() {
                tracing::debug!(category = %category, "No documents match the current filter");
            }
            print_documents(format, "Documents", &outcome.matches, &snapshot)?;
        }
        Commands::Recent { limit } => {
            let snapshot = load_snapshot(&tree_path).await?;
            let shown = recent_documents(snapshot.records(), limit, config.recent_limit);
            print_documents(format, "Recent Documents", &shown, &snapshot)?;
        }
        Commands::Home { query } => {
            let snapshot = load_snapshot(&tree_path).await?;
            let shown = home_feed(snapshot.records(), &query, config.recent_limit);
            let title = if query.is_empty() {
                "Recent Documents"
            } else {
                "Search Results"
            };
            print_documents(format, title, &shown, &snapshot)?;
        }
        Commands::Stats => {
            let snapshot = load_snapshot(&tree_path).await?;
            let stats = aggregate_with_probe(snapshot.records(), &probe);
            print_stats(format, &StatsReport::from(stats))?;
        }
        Commands::Open { file_name } => {
            let snapshot = load_snapshot(&tree_path).await?;
            let target = open_document(snapshot.records(), &file_name, &probe)?;
            match format {
                OutputFormat::Json => print_json(&target)?,
                OutputFormat::Table => write_open_target(&mut io::stdout().lock(), &target)
                    .context("Write open target")?,
            }
        }
        Commands::Watch { .. } => {
            watch(tree_path, config.watch_interval(), &probe, format).await?;
        }
    }

    Ok(())
}

async fn watch(
    tree_path: PathBuf,
    poll_interval: Duration,
    probe: &LocalFileProbe,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let store = DocumentStore::new();
    let updates = store.subscribe();
    let mut source = JsonFileSource::new(&tree_path, poll_interval);

    tracing::info!(
        path = %tree_path.display(),
        interval_ms = poll_interval.as_millis() as u64,
        "Watching document tree"
    );

    let report_changes = watch_stats(updates, probe, |_, stats| {
        print_stats(format, &StatsReport::from(stats))?;
        io::stdout().flush().context("Flush stdout")
    });

    tokio::select! {
        summary = run_feed(&mut source, &store) => {
            tracing::info!(applied = summary.applied, rejected = summary.rejected, "Feed stopped");
        }
        result = report_changes => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, stopping watch");
        }
    }

    Ok(())
}
