use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "royaledata")]
#[command(about = "Card catalog seeding and player data fetches for the Clash Royale API", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Convert a card catalog file into SQL insert statements.
    Export {
        /// Catalog JSON file (as downloaded by `cards`)
        input: PathBuf,
        /// Write the SQL script here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Target table name
        #[arg(long, default_value = "cards")]
        table: String,
        /// Apply the rows to a SQLite database as well
        #[arg(long)]
        apply: Option<PathBuf>,
        /// Output JSON summary
        #[arg(long)]
        json: bool,
    },

    /// Download the card catalog.
    Cards {
        /// Output file (default: cards.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// API token (overrides ROYALE_API_TOKEN and the config file)
        #[arg(long)]
        token: Option<String>,
        /// Config file path (default: ./royaledata.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Download a player profile by tag (e.g. #9VVPG29).
    Player {
        tag: String,
        /// Output file (default: player_<TAG>.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// API token (overrides ROYALE_API_TOKEN and the config file)
        #[arg(long)]
        token: Option<String>,
        /// Config file path (default: ./royaledata.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Download a player battle log by tag.
    Battlelog {
        tag: String,
        /// Output file (default: battlelog_<TAG>.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// API token (overrides ROYALE_API_TOKEN and the config file)
        #[arg(long)]
        token: Option<String>,
        /// Config file path (default: ./royaledata.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Manage the local config file.
    Config {
        /// Config file path (default: ./royaledata.json)
        #[arg(long)]
        config: Option<PathBuf>,
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommand {
    /// Store API settings.
    Set {
        /// API token
        #[arg(long)]
        token: Option<String>,
        /// API base URL override
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print the stored settings (token redacted).
    Show {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}
