use crate::presentation::console;
use crate::types::OutputFormat;
use anyhow::Result;
use beanshelf_providers::{SourceFetcher, Transport};
use beanshelf_runtime::GalleryView;
use std::io::Write;
use tracing::info;

pub async fn handle<T: Transport, W: Write>(
    fetcher: &SourceFetcher<T>,
    buckets: Vec<String>,
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let catalog = fetcher.fetch_collection_or_bundled().await;
    info!(source = %catalog.source, count = catalog.beans.len(), "catalog loaded");

    let mut view = GalleryView::new();
    // An explicit selection suppresses the first-load auto-selection
    view.select(buckets);
    view.on_loaded(catalog);

    console::render_gallery(out, &view, format, color)
}
