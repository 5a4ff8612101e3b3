//! CLI bootstrap - the composition root.
//!
//! Turns the global options into a [`ClientConfig`] and builds the one
//! client every command handler shares.

use mbngs_ws::{ClientConfig, Credentials, DefaultMusicBrainzClient, RateLimit, UserAgent};

use crate::error::CliError;
use crate::parser::Cli;

/// Connection settings taken from the global options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub app: String,
    pub app_version: String,
    pub contact: Option<String>,
    pub host: String,
    pub use_https: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub rate_limited: bool,
}

impl ClientSettings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            app: cli.app.clone(),
            app_version: cli.app_version.clone(),
            contact: cli.contact.clone(),
            host: cli.host.clone(),
            use_https: !cli.no_https,
            username: cli.username.clone(),
            password: cli.password.clone(),
            rate_limited: !cli.no_rate_limit,
        }
    }

    /// Credentials, when both username and password are given.
    fn credentials(&self) -> Result<Option<Credentials>, CliError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Some(Credentials::new(username, password))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(CliError::Config(
                "a password is required with --username (or MBNGS_PASSWORD)".to_string(),
            )),
            (None, Some(_)) => Err(CliError::Config(
                "a username is required with --password (or MBNGS_USERNAME)".to_string(),
            )),
        }
    }

    pub fn to_config(&self) -> Result<ClientConfig, CliError> {
        let user_agent = UserAgent::new(&self.app, &self.app_version, self.contact.clone())?;
        let mut config = ClientConfig::new()
            .with_user_agent(user_agent)
            .with_hostname(&self.host, self.use_https)
            .with_optional_credentials(self.credentials()?);
        if !self.rate_limited {
            config = config.with_rate_limit(RateLimit::Disabled);
        }
        Ok(config)
    }
}

/// Build the client for this invocation.
pub fn bootstrap(settings: &ClientSettings) -> Result<DefaultMusicBrainzClient, CliError> {
    let config = settings.to_config()?;
    tracing::debug!(
        host = %settings.host,
        https = settings.use_https,
        authenticated = settings.username.is_some(),
        rate_limited = settings.rate_limited,
        "configured MusicBrainz client"
    );
    Ok(DefaultMusicBrainzClient::new(config)?)
}
