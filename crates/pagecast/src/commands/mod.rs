//! CLI command implementations.

mod resolve;
mod sitemap;

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use pagecast_api::CmsClient;
use pagecast_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use resolve::ResolveArgs;
pub(crate) use sitemap::SitemapArgs;

/// Options shared by all commands.
#[derive(Args)]
pub(crate) struct CommonOpts {
    /// Path to pagecast.toml (discovered in parent directories by default).
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Override the CMS API base URL.
    #[arg(long, env = "PAGECAST_BASE_URL")]
    pub(crate) base_url: Option<String>,

    /// Override the request timeout in seconds.
    #[arg(long)]
    pub(crate) timeout: Option<u64>,

    /// Override the sitemap root id.
    #[arg(long)]
    pub(crate) id: Option<String>,

    /// Enable verbose output.
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl CommonOpts {
    /// Load configuration with these options applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let settings = CliSettings {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            sitemap_id: self.id.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }

    /// Build the API client for a loaded configuration.
    pub(crate) fn client(config: &Config) -> CmsClient {
        CmsClient::with_timeout(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
    }
}
