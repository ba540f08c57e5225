//! One module per subcommand.  Each exposes an `execute` function.

pub mod get;
pub mod has;
pub mod init;
pub mod list;
pub mod read;
pub mod remove;
pub mod set;
pub mod write;
