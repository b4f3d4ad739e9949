//! inboxer: file entries under the inbox or timeline heading of a markdown document.
#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use inboxer::buffer::{EditSurface, TextBuffer};
use inboxer::commands::{self, EntryReport, Section};
use inboxer::config::{Config, DEFAULT_CONFIG_FILE};
use inboxer::edit_plan::EditPlan;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inboxer")]
#[command(about = "Keep an inbox and a timeline section in a markdown document", long_about = None)]
struct Cli {
    /// Log what is being located and inserted
    #[arg(long, global = true)]
    verbose: bool,

    /// Configuration file holding the heading labels [default: inboxer.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an entry under the inbox heading
    Inbox(EntryArgs),

    /// Add a timestamped entry under the timeline heading
    Timeline(TimelineArgs),

    /// Show or persist the heading labels
    Config(ConfigArgs),

    /// Replay a saved edit plan
    Apply {
        /// Edit plan JSON written by --save-plan
        plan: PathBuf,
    },
}

#[derive(Args)]
struct EntryArgs {
    /// Document to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Heading label to file under, overriding the configured one
    #[arg(long)]
    heading: Option<String>,

    /// Entry text to type at the cursor
    #[arg(long, short = 't')]
    title: Option<String>,

    /// Print the report without writing the document
    #[arg(long)]
    dry_run: bool,

    /// Save the edits as a JSON edit plan
    #[arg(long, value_name = "PATH")]
    save_plan: Option<PathBuf>,
}

#[derive(Args)]
struct TimelineArgs {
    #[command(flatten)]
    entry: EntryArgs,

    /// Instant to use instead of now (RFC 3339, e.g. 2023-01-15T10:30:00Z), shown in local time
    #[arg(long)]
    at: Option<DateTime<FixedOffset>>,
}

#[derive(Args)]
struct ConfigArgs {
    /// New inbox heading label
    #[arg(long)]
    inbox: Option<String>,

    /// New timeline heading label
    #[arg(long)]
    timeline: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = cli.config.as_deref().map_or_else(Config::load, Config::load_from);

    match cli.command {
        Commands::Inbox(args) => {
            if let Some(label) = &args.heading {
                cfg.inbox_heading.clone_from(label);
            }
            run_entry(&args, &cfg, Section::Inbox, |buffer, label| {
                commands::add_to_inbox(buffer, label)
            })
        }
        Commands::Timeline(TimelineArgs { entry, at }) => {
            if let Some(label) = &entry.heading {
                cfg.timeline_heading.clone_from(label);
            }
            let at = commands::timeline_instant(at);
            run_entry(&entry, &cfg, Section::Timeline, |buffer, label| {
                commands::add_to_timeline(buffer, label, &at)
            })
        }
        Commands::Config(args) => {
            let path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            run_config(&path, cfg, args)
        }
        Commands::Apply { plan } => {
            let plan = EditPlan::load(&plan)?;
            plan.apply()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_entry(
    args: &EntryArgs,
    cfg: &Config,
    section: Section,
    add: impl FnOnce(&mut TextBuffer, &str) -> EntryReport,
) -> io::Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let mut buffer = TextBuffer::new(content);
    let label = section.label(cfg);
    debug!(%section, label, file = %args.file.display(), "adding entry");

    let mut report = add(&mut buffer, label);
    if let Some(title) = &args.title {
        commands::type_at_cursor(&mut buffer, &mut report, title);
    }

    let file_name = args.file.to_string_lossy();
    if let Some(plan_path) = &args.save_plan {
        EditPlan::from_report(&file_name, &report).save(plan_path)?;
    }
    if !args.dry_run {
        fs::write(&args.file, buffer.as_str())?;
        info!(%section, line = buffer.cursor().line, "entry added");
    }

    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_config(path: &Path, mut cfg: Config, args: ConfigArgs) -> io::Result<()> {
    let ConfigArgs { inbox, timeline } = args;
    let changed = inbox.is_some() || timeline.is_some();

    if let Some(label) = inbox {
        cfg.inbox_heading = label;
    }
    if let Some(label) = timeline {
        cfg.timeline_heading = label;
    }
    if changed {
        cfg.save_to(path)?;
    }

    println!("inbox_heading = {:?}", cfg.inbox_heading);
    println!("timeline_heading = {:?}", cfg.timeline_heading);
    Ok(())
}
