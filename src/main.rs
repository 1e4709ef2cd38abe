mod commands;
mod editor;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use gridcal_core::state::ViewMode;

#[derive(Parser)]
#[command(name = "gridcal")]
#[command(about = "Calendar and to-do client for a hosted event store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Anchor date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show one week row
    Week {
        /// Anchor date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List upcoming events grouped by day
    Agenda {
        /// First date to include (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// How many days ahead to include
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
    /// Create an event
    New {
        title: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, defaults to the start date)
        #[arg(short, long)]
        end: Option<String>,

        /// Mark as an all-day event
        #[arg(long)]
        all_day: bool,
    },
    /// Edit an event's title, dates, or all-day flag
    Edit { id: i64 },
    /// Delete an event
    Rm {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the to-do list (preview, not yet synced to the store)
    Todo,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        // Bare `gridcal` shows the configured default view.
        None => commands::show::run(None, today, today).await,
        Some(Commands::Month { date }) => {
            commands::show::run(Some(ViewMode::Month), anchor(date.as_deref(), today)?, today).await
        }
        Some(Commands::Week { date }) => {
            commands::show::run(Some(ViewMode::Week), anchor(date.as_deref(), today)?, today).await
        }
        Some(Commands::Agenda { date, days }) => {
            commands::agenda::run(anchor(date.as_deref(), today)?, days, today).await
        }
        Some(Commands::New {
            title,
            start,
            end,
            all_day,
        }) => commands::new::run(title, start, end, all_day, today).await,
        Some(Commands::Edit { id }) => commands::edit::run(id, today).await,
        Some(Commands::Rm { id, yes }) => commands::rm::run(id, yes, today).await,
        Some(Commands::Todo) => commands::todo::run(today),
    }
}

fn anchor(arg: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match arg {
        Some(s) => editor::parse_date(s),
        None => Ok(today),
    }
}
