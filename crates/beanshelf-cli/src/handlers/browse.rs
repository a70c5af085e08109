use crate::presentation::tui;
use anyhow::Result;
use beanshelf_providers::{SourceFetcher, Transport};
use beanshelf_runtime::Navigation;
use tracing::info;

pub async fn handle<T: Transport + 'static>(fetcher: SourceFetcher<T>, route: &str) -> Result<()> {
    let start = Navigation::parse(route);
    info!(route = %start.route, "starting browser");
    tui::run(fetcher, start).await
}
