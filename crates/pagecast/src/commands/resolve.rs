//! `resolve` command - resolve a navigation path to its content model.

use std::sync::{Arc, Mutex};

use clap::Args;

use pagecast_api::ContentFetcher;
use pagecast_resolver::{ContentResolver, RedirectExecutor, ViewGate};
use pagecast_sitemap::RouteId;

use crate::error::CliError;
use crate::output::Output;

use super::CommonOpts;

/// Arguments for the `resolve` command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Navigation path to resolve (e.g. `/blog/first-post`).
    pub(crate) path: String,

    #[command(flatten)]
    pub(crate) common: CommonOpts,
}

/// Redirect executor that records the target instead of navigating.
#[derive(Default)]
struct CollectingRedirect {
    url: Mutex<Option<String>>,
}

impl RedirectExecutor for CollectingRedirect {
    fn replace(&self, url: &str) {
        *self.url.lock().unwrap() = Some(url.to_owned());
    }
}

impl ResolveArgs {
    /// Load the sitemap, resolve `path` and print the outcome.
    pub(crate) async fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.common.load_config()?;
        let client = CommonOpts::client(&config);

        let redirect = Arc::new(CollectingRedirect::default());
        let resolver = ContentResolver::new(Arc::new(client) as Arc<dyn ContentFetcher>)
            .with_redirect_executor(
                Arc::clone(&redirect) as Arc<dyn RedirectExecutor>
            )
            .with_view_gate(ViewGate::detached());

        let mut models = resolver.events().model_changed();

        let root_id = config.api.sitemap_id.as_deref().map(RouteId::from);
        let sitemap = resolver.load_sitemap(root_id.as_ref()).await?;
        output.info(&format!("sitemap loaded: {} nodes", sitemap.node_count()));

        resolver.navigate(&self.path).await;

        if let Some(url) = redirect.url.lock().unwrap().as_deref() {
            output.warning(&format!("{} redirects to {url}", self.path));
            return Ok(());
        }

        match models.try_recv() {
            Ok(model) => {
                output.success(&format!("resolved {}", self.path));
                output.highlight(&model.title);
                output.info(&serde_json::to_string_pretty(model.as_ref())?);
            }
            Err(_) => {
                output.warning(&format!(
                    "{} did not resolve to a content model (unknown page type or fetch failure)",
                    self.path
                ));
            }
        }

        Ok(())
    }
}
