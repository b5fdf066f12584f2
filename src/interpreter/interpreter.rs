use tracing::debug;

use crate::filesystem::{DirPath, TreeStore};
use crate::interpreter::{Command, Message};

/// Runs commands against a single [`TreeStore`], one line at a time.
#[derive(Debug, Default)]
pub struct Interpreter {
    store: TreeStore,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and runs one input line, returning the lines it prints.
    ///
    /// Lines that do not form a valid command are reported back as a single
    /// `Ignoring:` message and leave the tree untouched.
    pub fn process_line(&mut self, line: &str) -> Vec<Message> {
        match Command::parse(line) {
            Ok(Some(command)) => {
                debug!("Parsed command: {:?}", command);
                self.execute(command)
            }
            Ok(None) => Vec::new(),
            Err(error) => {
                debug!("Ignoring line '{}': {}", line.trim(), error);
                vec![Message::Ignored(line.trim().to_string())]
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Vec<Message> {
        match command {
            Command::Create(path) => self.create(path),
            Command::List => self.list(),
            Command::Move { src, dest } => self.move_into(src, dest),
            Command::Delete(path) => self.delete(path),
        }
    }

    fn create(&mut self, path: DirPath) -> Vec<Message> {
        self.store.create(&path);
        vec![Message::Created(path)]
    }

    fn list(&self) -> Vec<Message> {
        std::iter::once(Message::ListHeader)
            .chain(self.store.list().map(Message::from))
            .collect()
    }

    fn move_into(&mut self, src: DirPath, dest: DirPath) -> Vec<Message> {
        match self.store.move_into(&src, &dest) {
            Ok(()) => vec![Message::Moved { src, dest }],
            Err(error) => {
                debug!("Move of '{}' into '{}' failed: {}", src, dest, error);
                vec![Message::MoveFailed {
                    path: src,
                    reason: error.to_string(),
                }]
            }
        }
    }

    // The DELETE line is announced before the lookup, so a failed delete
    // prints two lines.
    fn delete(&mut self, path: DirPath) -> Vec<Message> {
        let announcement = Message::Deleting(path.clone());
        match self.store.delete(&path) {
            Ok(_) => vec![announcement],
            Err(error) => {
                debug!("Delete of '{}' failed: {}", path, error);
                vec![
                    announcement,
                    Message::DeleteFailed {
                        path,
                        reason: error.to_string(),
                    },
                ]
            }
        }
    }
}

#[cfg(test)]
impl Interpreter {
    pub fn store(&self) -> &TreeStore {
        &self.store
    }
}
