//! Command-line surface over `voxnote_core`.
//!
//! # Responsibility
//! - Map add/list/search/show/delete subcommands onto the note store.
//! - Resolve the data directory and bootstrap logging.

use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use uuid::Uuid;
use voxnote_core::{
    default_log_level, init_logging, view, FileStorage, NoteStore, Notification, StoreError,
};

#[derive(Parser)]
#[command(
    name = "voxnote",
    about = "Notes from text or speech, searched and kept locally",
    version = voxnote_core::core_version()
)]
struct Cli {
    /// Directory holding notes and logs (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Create a note (use "-" to read content from stdin)
    Add {
        /// Note text
        content: String,
    },

    /// List all notes, most recent first
    List,

    /// List notes whose content contains the query (case-insensitive)
    Search {
        query: String,
    },

    /// Show one note in full
    Show {
        /// Note identifier
        id: String,
    },

    /// Delete a note by identifier
    Delete {
        /// Note identifier
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;

    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let storage = FileStorage::open(&data_dir)
        .with_context(|| format!("cannot open data directory {}", data_dir.display()))?;
    let mut store = NoteStore::load(storage);

    match cli.command {
        Command::Add { content } => add(&mut store, content, &cli.format),
        Command::List => list(&store, "", &cli.format),
        Command::Search { query } => list(&store, &query, &cli.format),
        Command::Show { id } => show(&store, &id, &cli.format),
        Command::Delete { id } => delete(&mut store, &id, &cli.format),
    }
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|base| base.join("voxnote"))
        .ok_or_else(|| anyhow!("no platform data directory; pass --data-dir"))
}

fn add(
    store: &mut NoteStore<FileStorage>,
    content: String,
    format: &OutputFormat,
) -> Result<()> {
    let content = if content == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read note content from stdin")?;
        buffer
    } else {
        content
    };

    let note = match store.create(content) {
        Ok(note) => note,
        Err(err) => {
            if let Some(notification) = rejection_notification(&err) {
                eprintln!("{}", notification.message());
            }
            bail!("{err}");
        }
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "identifier": note.id.to_string(),
                "content": note.content,
                "createdAt": note.created_at,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{} ({})", Notification::NoteCreated.message(), note.id);
        }
    }
    Ok(())
}

fn list(store: &NoteStore<FileStorage>, query: &str, format: &OutputFormat) -> Result<()> {
    let items = view(store, query, Utc::now());

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = items
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "identifier": item.id.to_string(),
                        "content": item.content,
                        "created": item.created_label,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                if query.is_empty() {
                    println!("No notes yet. Create one with `voxnote add`.");
                } else {
                    println!("No notes match \"{query}\".");
                }
                return Ok(());
            }
            for item in items {
                println!("{}  {}", item.id, item.created_label);
                println!("  {}", first_line(&item.content));
            }
        }
    }
    Ok(())
}

fn show(store: &NoteStore<FileStorage>, id: &str, format: &OutputFormat) -> Result<()> {
    let id = parse_id(id)?;
    let note = store
        .get(id)
        .ok_or_else(|| anyhow!("no note with identifier {id}"))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "identifier": note.id.to_string(),
                "content": note.content,
                "createdAt": note.created_at,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{}  {}",
                note.id,
                voxnote_core::relative_label(note.created_at, Utc::now())
            );
            println!("{}", note.content);
        }
    }
    Ok(())
}

fn delete(store: &mut NoteStore<FileStorage>, id: &str, format: &OutputFormat) -> Result<()> {
    let id = parse_id(id)?;
    let removed = store.delete(id)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "identifier": id.to_string(),
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if removed {
                println!("{}", Notification::NoteDeleted.message());
            } else {
                println!("No note with identifier {id}; nothing removed.");
            }
        }
    }
    Ok(())
}

/// Maps a create failure to its user-facing notification, if any.
///
/// Only input validation earns the empty-note toast; storage and encoding
/// failures surface as plain errors.
fn rejection_notification(err: &StoreError) -> Option<Notification> {
    match err {
        StoreError::Validation(_) => Some(Notification::EmptyNote),
        StoreError::Storage(_) | StoreError::Serialize(_) => None,
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| anyhow!("`{raw}` is not a valid note identifier"))
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}
