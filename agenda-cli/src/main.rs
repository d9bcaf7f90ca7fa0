mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage single and recurring calendar events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event
    Add {
        title: String,

        /// Start date/time (YYYY-MM-DD HH:MM)
        #[arg(short, long)]
        start: String,

        /// End date/time (defaults to one hour after start)
        #[arg(short, long)]
        end: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Repeat unit: daily, weekly or monthly
        #[arg(long)]
        every: Option<String>,

        /// Repeat every N units (with --every)
        #[arg(long, default_value_t = 1)]
        interval: u32,

        /// Stop after this many occurrences
        #[arg(long)]
        count: Option<u32>,

        /// Last date an occurrence may start on (YYYY-MM-DD, inclusive)
        #[arg(long)]
        until: Option<String>,
    },

    /// List all events
    List {
        /// Emit events as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one event in detail
    Show { id: u32 },

    /// Delete an event by id
    Delete { id: u32 },

    /// Expand a recurring event into its occurrences
    Expand {
        id: u32,

        /// Emit occurrences as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find events by title or description
    Search { query: String },

    /// Show events starting soon
    Upcoming {
        /// Look-ahead window in minutes
        #[arg(long, default_value_t = 60)]
        within: i64,
    },

    /// Show or change configuration
    Config {
        /// Store events in this file from now on
        #[arg(long)]
        data_file: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            start,
            end,
            description,
            every,
            interval,
            count,
            until,
        } => commands::add::run(title, start, end, description, every, interval, count, until),
        Commands::List { json } => commands::list::run(json),
        Commands::Show { id } => commands::show::run(id),
        Commands::Delete { id } => commands::delete::run(id),
        Commands::Expand { id, json } => commands::expand::run(id, json),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Upcoming { within } => commands::upcoming::run(within),
        Commands::Config { data_file } => commands::config::run(data_file),
    }
}
