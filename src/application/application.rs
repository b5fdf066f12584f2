use std::io::{Cursor, Write};
use std::path::PathBuf;

use compio::fs::File;
use compio::io::compat::AsyncStream;
use futures::io::BufReader;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::data::ColorChoice;
use crate::application::session::{Session, SessionError};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        if app_config.color == ColorChoice::Always {
            colored::control::set_override(true);
        }
        let colorize = app_config.color.should_colorize();

        let mut session = Session::new(std::io::stdout(), colorize);
        let lines = Self::run_session(&app_config, &mut session).await?;
        info!("Session finished after {} lines", lines);

        Ok(())
    }

    /// Feeds the configured input, a script file or stdin, into `session`.
    pub async fn run_session<W: Write>(
        app_config: &RuntimeConfig,
        session: &mut Session<W>,
    ) -> Result<usize, ApplicationError> {
        let lines = match &app_config.input {
            Some(path) => {
                info!("Reading commands from {}", path.display());
                let file = File::open(path).await.context(InputOpenSnafu {
                    path: path.clone(),
                })?;
                let stream = AsyncStream::new(Cursor::new(file));
                session.consume(BufReader::new(stream)).await
            }
            None => {
                info!("Reading commands from stdin");
                let stream = AsyncStream::new(compio::fs::stdin());
                session.consume(BufReader::new(stream)).await
            }
        }
        .context(SessionSnafu)?;

        Ok(lines)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to open input file {}", path.display()))]
    InputOpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Critical failure encountered while running the session"))]
    SessionError { source: SessionError },
}
