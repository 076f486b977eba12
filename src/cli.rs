use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Khmer lunisolar calendar (Chhankitek) converter.
#[derive(Parser)]
#[command(
    name = "chhankitek",
    version,
    about = "Convert Gregorian dates to the Khmer lunisolar calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML calendar configuration.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Lunar date and year labels of a Gregorian date.
    Lunar {
        /// `YYYY-MM-DD`, optionally followed by ` HH:MM`.
        date: String,
    },
    /// Moment of Khmer New Year.
    NewYear {
        /// Gregorian year.
        year: i32,
        /// Also print the Soriyatra Lerng Sak details.
        #[arg(long)]
        details: bool,
    },
    /// Date of Visakha Bochea.
    Visakha {
        /// Gregorian year.
        year: i32,
    },
    /// Leap status and length of a Buddhist-Era year.
    Leap {
        /// Buddhist-Era year.
        be_year: i64,
    },
    /// Render a date with a Khmer format pattern.
    Format {
        /// `YYYY-MM-DD`, optionally followed by ` HH:MM`.
        date: String,
        /// Token pattern; the long Khmer format if omitted.
        pattern: Option<String>,
    },
}
