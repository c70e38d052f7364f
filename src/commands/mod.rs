//! CLI subcommand implementations

pub mod completions;
pub mod init;
