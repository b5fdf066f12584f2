use derive_more::{Display, From};

use crate::filesystem::{DirPath, ListEntry};

/// One line of interpreter output.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum Message {
    #[display("CREATE {_0}")]
    Created(DirPath),
    #[display("LIST")]
    ListHeader,
    #[display("{_0}")]
    #[from]
    ListEntry(ListEntry),
    #[display("MOVE {src} {dest}")]
    Moved { src: DirPath, dest: DirPath },
    #[display("DELETE {_0}")]
    Deleting(DirPath),
    #[display("Cannot delete {path} - {reason}")]
    DeleteFailed { path: DirPath, reason: String },
    #[display("Cannot move {path} - {reason}")]
    MoveFailed { path: DirPath, reason: String },
    #[display("Ignoring: {_0}")]
    Ignored(String),
}

impl Message {
    /// Whether this line reports a command that did not take effect.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Message::DeleteFailed { .. } | Message::MoveFailed { .. } | Message::Ignored(_)
        )
    }
}
