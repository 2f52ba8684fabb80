mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "timeblock")]
#[command(about = "Manage your schedule and resolve calendar conflicts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Operate on this user's events instead of the configured one
    #[arg(long, global = true)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event, then report any conflicts it introduces
    Add {
        title: String,

        /// Start date/time (e.g., "2025-03-20T15:00")
        #[arg(short, long)]
        start: String,

        /// End date/time; defaults to one hour after start
        #[arg(short, long)]
        end: Option<String>,

        /// Duration in minutes, as an alternative to --end
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<i64>,

        /// Event type: meeting, task, break, focus, other
        #[arg(short = 't', long = "type", default_value = "other")]
        event_type: String,

        /// Priority: low, medium, high, critical
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Project this event belongs to
        #[arg(long)]
        project: Option<String>,
    },
    /// List a day's events
    List {
        /// Day to list (YYYY-MM-DD, "today", "tomorrow")
        #[arg(long, default_value = "today")]
        day: String,
    },
    /// Delete an event by id (or unambiguous id prefix)
    Delete { id: String },
    /// Detect conflicts in a day's schedule
    Conflicts {
        #[arg(long, default_value = "today")]
        day: String,
    },
    /// Resolve one detected conflict
    Resolve {
        /// Conflict number as printed by `timeblock conflicts`
        index: usize,

        /// Strategy: "shift:<minutes>", "next-day", or "shorten:<factor>"
        #[arg(short, long, conflicts_with = "auto")]
        strategy: Option<String>,

        /// Shift the later event past the overlap, moving it to the next
        /// day if the shift would cross midnight
        #[arg(long)]
        auto: bool,

        #[arg(long, default_value = "today")]
        day: String,
    },
    /// Ask an external optimizer to rearrange a day, then merge its suggestions
    Optimize {
        /// Optimizer name (binary `timeblock-optimizer-<name>` on PATH)
        #[arg(long, default_value = "default")]
        name: String,

        #[arg(long, default_value = "today")]
        day: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;
    let user = cli.user.unwrap_or_else(|| config.user.clone());
    let mut store = store::JsonStore::open(config.events_dir()?)?;

    match cli.command {
        Commands::Add {
            title,
            start,
            end,
            duration,
            event_type,
            priority,
            project,
        } => commands::add::run(
            &mut store,
            &user,
            commands::add::AddArgs {
                title,
                start,
                end,
                duration,
                event_type,
                priority,
                project,
            },
        ),
        Commands::List { day } => commands::list::run(&store, &user, &day),
        Commands::Delete { id } => commands::delete::run(&mut store, &id),
        Commands::Conflicts { day } => commands::conflicts::run(&store, &user, &day),
        Commands::Resolve {
            index,
            strategy,
            auto,
            day,
        } => commands::resolve::run(&mut store, &user, &day, index, strategy.as_deref(), auto),
        Commands::Optimize { name, day } => {
            commands::optimize::run(&mut store, &user, &name, &day).await
        }
    }
}
