//! CLI subcommands.

pub mod filter;
pub mod info;
