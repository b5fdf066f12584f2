use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Interprets CREATE, MOVE, DELETE and LIST commands against an in-memory
/// directory tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Script of commands, one per line. Reads stdin when omitted
    pub input: Option<PathBuf>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
    /// Colorize diagnostic lines
    #[clap(long, short, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
