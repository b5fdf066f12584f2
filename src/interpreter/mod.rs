mod command;
mod interpreter;
mod message;

pub use command::Command;
pub use interpreter::Interpreter;
pub use message::Message;
