use snafu::{OptionExt, ResultExt, Snafu};

use crate::filesystem::{DirPath, InvalidPathError};

/// A single parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(DirPath),
    List,
    Move { src: DirPath, dest: DirPath },
    Delete(DirPath),
}

impl Command {
    /// Parses one line of input. Blank lines carry no command and yield `None`.
    ///
    /// The verb is matched case-insensitively and must be followed by exactly
    /// the number of arguments it takes.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandParseError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let args = tokens.collect::<Vec<_>>();

        let command = match verb.to_uppercase().as_str() {
            "CREATE" => {
                let [path] = Self::expect_args::<1>("CREATE", &args)?;
                Command::Create(Self::parse_path(path)?)
            }
            "LIST" => {
                Self::expect_args::<0>("LIST", &args)?;
                Command::List
            }
            "MOVE" => {
                let [src, dest] = Self::expect_args::<2>("MOVE", &args)?;
                Command::Move {
                    src: Self::parse_path(src)?,
                    dest: Self::parse_path(dest)?,
                }
            }
            "DELETE" => {
                let [path] = Self::expect_args::<1>("DELETE", &args)?;
                Command::Delete(Self::parse_path(path)?)
            }
            _ => return UnknownVerbSnafu { verb }.fail(),
        };

        Ok(Some(command))
    }

    fn expect_args<'a, const N: usize>(
        verb: &'static str,
        args: &[&'a str],
    ) -> Result<[&'a str; N], CommandParseError> {
        <[&'a str; N]>::try_from(args).ok().context(WrongAritySnafu {
            verb,
            expected: N,
            found: args.len(),
        })
    }

    fn parse_path(raw: &str) -> Result<DirPath, CommandParseError> {
        DirPath::try_from(raw).context(InvalidPathSnafu)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandParseError {
    #[snafu(display("Unknown command '{}'", verb))]
    UnknownVerb { verb: String },
    #[snafu(display("{} takes {} argument(s) but got {}", verb, expected, found))]
    WrongArity {
        verb: &'static str,
        expected: usize,
        found: usize,
    },
    #[snafu(display("Invalid path argument"))]
    InvalidPath { source: InvalidPathError },
}
