pub mod session;

pub use session::{parse_command, Command, Session};
