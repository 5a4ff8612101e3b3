//! Main CLI parser and top-level argument handling.
//!
//! Global options describe how to reach the web service; every one of them
//! can also come from the environment (or a `.env` file).

use clap::Parser;
use mbngs_ws::DEFAULT_HOSTNAME;

use crate::commands::Commands;

/// Command-line interface for the MusicBrainz web service.
#[derive(Debug, Parser)]
#[command(name = "mbngs")]
#[command(about = "Query the MusicBrainz web service and the Cover Art Archive")]
#[command(version)]
pub struct Cli {
    /// Application name sent in the User-Agent
    #[arg(long, env = "MBNGS_APP", default_value = "mbngs", global = true)]
    pub app: String,

    /// Application version sent in the User-Agent
    #[arg(
        long = "app-version",
        env = "MBNGS_APP_VERSION",
        default_value = env!("CARGO_PKG_VERSION"),
        global = true
    )]
    pub app_version: String,

    /// Contact (e-mail or URL) sent in the User-Agent
    #[arg(long, env = "MBNGS_CONTACT", global = true)]
    pub contact: Option<String>,

    /// MusicBrainz server, optionally with a port
    #[arg(long, env = "MBNGS_HOST", default_value = DEFAULT_HOSTNAME, global = true)]
    pub host: String,

    /// Talk plain http to the server
    #[arg(long = "no-https", global = true)]
    pub no_https: bool,

    /// MusicBrainz account for authenticated requests
    #[arg(long, env = "MBNGS_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password of the MusicBrainz account
    #[arg(long, env = "MBNGS_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Don't throttle requests (only for your own server)
    #[arg(long = "no-rate-limit", global = true)]
    pub no_rate_limit: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
