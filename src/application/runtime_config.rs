use std::path::PathBuf;

use crate::application::data::ColorChoice;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Script to read commands from; stdin when absent
    pub input: Option<PathBuf>,
    pub color: ColorChoice,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            color: cli.color,
        }
    }
}
