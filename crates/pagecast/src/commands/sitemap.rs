//! `sitemap` command - fetch and print the site hierarchy.

use clap::Args;

use pagecast_api::ContentFetcher;
use pagecast_sitemap::{RouteId, RouteNode};

use crate::error::CliError;
use crate::output::Output;

use super::CommonOpts;

/// Arguments for the `sitemap` command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[command(flatten)]
    pub(crate) common: CommonOpts,
}

impl SitemapArgs {
    /// Fetch the hierarchy and print it as an indented tree.
    pub(crate) async fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.common.load_config()?;
        let client = CommonOpts::client(&config);

        let root_id = config.api.sitemap_id.as_deref().map(RouteId::from);
        let forest = client.fetch_sitemap(root_id.as_ref()).await?;

        let total: usize = forest.iter().map(count_nodes).sum();
        output.highlight(&format!("{} ({total} nodes)", config.api.base_url));
        print_tree(output, &forest, 0);

        Ok(())
    }
}

fn count_nodes(node: &RouteNode) -> usize {
    1 + node.items.iter().map(count_nodes).sum::<usize>()
}

/// Print nodes depth-first with two-space indentation per level.
fn print_tree(output: &Output, nodes: &[RouteNode], depth: usize) {
    for node in nodes {
        output.info(&format!(
            "{:indent$}{}  [{}]  id={}",
            "",
            node.permalink,
            node.page_type,
            node.id,
            indent = depth * 2
        ));
        print_tree(output, &node.items, depth + 1);
    }
}
