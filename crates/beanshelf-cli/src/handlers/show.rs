use crate::presentation::console;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use beanshelf_providers::{SourceFetcher, Transport};
use beanshelf_runtime::effects::perform_all;
use beanshelf_runtime::{DetailState, DetailView, Outcome};
use std::io::Write;
use tracing::debug;

/// Resolve `id` the way a directly entered detail route does: no carried
/// collection, so the record and the id list are both fetched.
pub async fn handle<T: Transport, W: Write>(
    fetcher: &SourceFetcher<T>,
    id: &str,
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let (mut view, effects) = DetailView::enter(id, None);

    for outcome in perform_all(fetcher, effects).await {
        match outcome {
            Outcome::Single(record) => view.on_record(record),
            Outcome::Identifiers(result) => view.on_identifiers(result),
            Outcome::Collection(_) => {}
        }
    }

    if let DetailState::Failed(reason) = view.state() {
        debug!(id, reason = %reason, "could not load identifier list");
    }
    if let Some(message) = view.message() {
        bail!("{}: {}", message, id);
    }

    console::render_detail(out, &view, format, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanshelf_testing::StubTransport;
    use beanshelf_testing::fixtures::{
        self, bean_json, fruit_payload, primary_collection_url, primary_single_url,
    };

    #[tokio::test]
    async fn test_deep_link_reports_neighbours() {
        let stub = StubTransport::new()
            .with_json(primary_single_url("f2"), bean_json("f2", "Banana", "Tropical"))
            .with_json(primary_collection_url(), fruit_payload());
        let fetcher = fixtures::fetcher(stub);

        let mut buf = Vec::new();
        handle(&fetcher, "f2", OutputFormat::Json, false, &mut buf)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["bean"]["name"], "Banana");
        assert_eq!(json["position"], 1);
        assert_eq!(json["total"], 5);
        assert_eq!(json["prev"], "f1");
        assert_eq!(json["next"], "f3");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let stub = StubTransport::new().with_json(primary_collection_url(), fruit_payload());
        let fetcher = fixtures::fetcher(stub);

        let mut buf = Vec::new();
        let err = handle(&fetcher, "xyz", OutputFormat::Plain, false, &mut buf)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not found: xyz");
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_sources_report_not_found() {
        let fetcher = fixtures::fetcher(StubTransport::new());

        let mut buf = Vec::new();
        let err = handle(&fetcher, "xyz", OutputFormat::Plain, false, &mut buf)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not found: xyz");
    }

    #[tokio::test]
    async fn test_identifier_failure_is_reported() {
        let stub = StubTransport::new()
            .with_json(primary_single_url("f1"), bean_json("f1", "Apple", "Orchard"));
        let fetcher = fixtures::fetcher(stub);

        let mut buf = Vec::new();
        let err = handle(&fetcher, "f1", OutputFormat::Plain, false, &mut buf)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to load: f1");
    }
}
