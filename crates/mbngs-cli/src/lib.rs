#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! `mbngs`: query MusicBrainz and the Cover Art Archive from the shell.

// Used by the binary only
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{ClientSettings, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
