use crate::export::{DataFormat, ReportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for callreport
#[derive(Parser)]
#[command(
    name = "callreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Call-center reporting CLI: weekly queue breakdowns, cross-queue summaries and agent compliance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Daily rows of one queue with peak/trough windows (all queues combined without --queue)
    Queue {
        #[arg(long = "queue", short = 'q', help = "Queue code, e.g. 9008")]
        queue: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same shape"
        )]
        range: String,

        #[arg(long, value_enum, default_value = "json")]
        format: DataFormat,

        #[arg(long, value_name = "FILE", help = "Write to FILE instead of stdout")]
        file: Option<String>,
    },

    /// Per-queue counters and totals for one day
    Dashboard {
        #[arg(long = "date", help = "Day to show (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Agent logged/active/break times with compliance status
    Agents {
        #[arg(long, value_name = "RANGE")]
        range: String,

        #[arg(long, value_enum, default_value = "json")]
        format: DataFormat,

        #[arg(long, value_name = "FILE", help = "Write to FILE instead of stdout")]
        file: Option<String>,
    },

    /// Render an XLSX workbook
    Export {
        #[arg(long, value_enum, default_value = "callcenter")]
        kind: ReportKind,

        #[arg(long, value_name = "RANGE")]
        range: String,

        #[arg(long, value_name = "FILE", help = "Absolute path of the .xlsx to write")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
