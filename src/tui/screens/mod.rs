//! TUI screen implementations.

pub mod entry;
pub mod help;
pub mod login;

pub use entry::{EntryState, SubmitStatus, draw_entry};
pub use help::{HelpState, draw_help};
pub use login::{LoginState, draw_login};
