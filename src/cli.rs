//! Command-line definitions for the vendor catalog

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Asc,
    Desc,
}

/// Read-only vendor catalog: search, filter, sort and page through vendors
#[derive(Parser, Debug)]
#[command(name = "vendor-catalog")]
#[command(version)]
pub struct Cli {
    /// Vendor CSV to serve instead of the built-in table
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn level_filter(&self) -> log::LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level.to_level_filter(),
            (None, true) => log::LevelFilter::Debug,
            (None, false) => log::LevelFilter::Warn,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show identity, columns, filters and defaults
    Info,

    /// List one page of vendors
    List {
        /// Case-insensitive text matched against name, country and category
        #[arg(short, long)]
        search: Option<String>,

        /// Column filter as column=value (repeatable)
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,

        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction
        #[arg(short, long, value_enum)]
        direction: Option<Direction>,

        /// 1-based page number
        #[arg(short, long)]
        page: Option<usize>,

        /// Items per page
        #[arg(long)]
        per_page: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show a single vendor by id
    Show {
        id: i64,
    },

    /// Report whether an action (index, show, create, edit, delete, batch_delete) is offered
    Supports {
        action: String,
    },
}

fn parse_filter(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((column, raw)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), raw.to_string()))
        }
        _ => Err(format!("expected column=value, got: {value}")),
    }
}
