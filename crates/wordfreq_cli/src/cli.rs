use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use wordfreq_engine::{CountSettings, OutputFormat, OverlongPolicy};
use wordfreq_logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about = "Count word frequencies in text")]
pub struct Cli {
    /// Input files. Reads stdin when none are given or for `-`
    pub files: Vec<PathBuf>,

    /// Print only the total number of words
    #[arg(short, long, conflicts_with = "format")]
    pub total: bool,

    /// Output format for the word counts
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Reject words longer than this many letters (at least 1)
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    pub max_word_len: Option<NonZeroUsize>,

    /// Accept words of any length
    #[arg(long)]
    pub unbounded: bool,

    /// Skip over-long words instead of failing
    #[arg(long)]
    pub skip_overlong: bool,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// RON file with default settings; flags override it
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Also write logs to ./wordfreq.log
    #[arg(long)]
    pub log_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Tsv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        if self.log_file {
            LogDestination::Both
        } else {
            LogDestination::Terminal
        }
    }

    /// Layer command-line flags over settings loaded from a config file.
    pub fn apply(&self, mut settings: CountSettings) -> CountSettings {
        if self.unbounded {
            settings.max_word_len = None;
        } else if let Some(max) = self.max_word_len {
            settings.max_word_len = Some(max);
        }
        if self.skip_overlong {
            settings.overlong = OverlongPolicy::Skip;
        }
        if self.total {
            settings.format = OutputFormat::Total;
        } else if let Some(format) = self.format {
            settings.format = match format {
                FormatArg::Tsv => OutputFormat::Tsv,
                FormatArg::Json => OutputFormat::Json,
            };
        }
        settings
    }
}
