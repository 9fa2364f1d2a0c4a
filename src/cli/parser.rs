use crate::core::dates::DEFAULT_DATE_FORMAT;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStatusLog
/// CLI application to report status history and delays of Word service tickets
#[derive(Parser)]
#[command(
    name = "rstatuslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract status-change history from Word service tickets and report duty-day aware delays",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-team calendars)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, validate or edit)
    Config {
        #[arg(long = "print", help = "Print the configuration in use")]
        print_config: bool,

        #[arg(long = "check", help = "Validate duty day window, holidays and priorities")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Extract the status history of a ticket and write a report
    Report {
        /// Ticket document (.docx)
        file: String,

        #[arg(long, value_enum, help = "Report format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Output file (default: input path with the format extension)"
        )]
        out: Option<String>,

        #[arg(long, short = 'p', help = "Priority label, overrides the Details table")]
        priority: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Print the status history of a ticket
    Show {
        /// Ticket document (.docx)
        file: String,

        #[arg(long, short = 'p', help = "Priority label, overrides the Details table")]
        priority: Option<String>,
    },

    /// Compute the delay between two timestamps (MM/DD/YY hh:mm AM|PM)
    Delay {
        #[arg(long, value_name = "TIMESTAMP")]
        start: String,

        #[arg(long, value_name = "TIMESTAMP")]
        end: String,

        #[arg(long, short = 'p')]
        priority: String,
    },

    /// Scan the document text for "from A to B" status clauses
    Scan {
        /// Ticket document (.docx)
        file: String,

        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Sort date strings chronologically
    SortDates {
        /// chrono format of the dates
        #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
        format: String,

        #[arg(required = true)]
        dates: Vec<String>,
    },
}
