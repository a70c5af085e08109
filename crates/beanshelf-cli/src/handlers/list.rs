use crate::presentation::console;
use crate::types::OutputFormat;
use anyhow::Result;
use beanshelf_providers::{SourceFetcher, Transport};
use beanshelf_runtime::{ListView, SortDirection, SortKey};
use std::io::Write;
use tracing::info;

pub struct ListOptions {
    pub search: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub format: OutputFormat,
    pub color: bool,
}

pub async fn handle<T: Transport, W: Write>(
    fetcher: &SourceFetcher<T>,
    options: ListOptions,
    out: &mut W,
) -> Result<()> {
    let catalog = fetcher.fetch_collection_or_bundled().await;
    let source = catalog.source;
    info!(source = %source, count = catalog.beans.len(), "catalog loaded");

    let mut view = ListView::new();
    view.search = options.search.unwrap_or_default();
    view.sort_key = options.sort;
    view.sort_dir = options.direction;
    view.on_loaded(catalog);

    console::render_listing(out, source, &view.visible(), options.format, options.color)
}
