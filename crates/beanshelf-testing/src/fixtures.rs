//! Raw payload builders and fetcher wiring shared by tests.

use crate::StubTransport;
use beanshelf_providers::{BundledDataset, Endpoints, SourceFetcher};
use serde_json::{Value, json};
use std::sync::Arc;

pub const PRIMARY: &str = "http://primary.test";
pub const SECONDARY: &str = "http://secondary.test";

/// Endpoints pointing at the stub hosts.
pub fn endpoints() -> Endpoints {
    Endpoints::new(PRIMARY, SECONDARY)
}

pub fn primary_collection_url() -> String {
    endpoints().collection_url()
}

pub fn primary_single_url(id: &str) -> String {
    endpoints().single_url(id)
}

pub fn secondary_collection_url() -> String {
    endpoints().secondary_url()
}

/// Raw record in the current field-naming scheme.
pub fn bean_json(id: &str, name: &str, group: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "group": group,
        "description": format!("{} bean", name),
    })
}

/// Raw record in the legacy field-naming scheme.
pub fn legacy_bean_json(id: &str, flavor: &str, category: &str) -> Value {
    json!({
        "_id": id,
        "flavor": flavor,
        "category": category,
    })
}

/// Five complete beans named after fruits, already in name order.
pub fn fruit_payload() -> Value {
    json!([
        bean_json("f1", "Apple", "Orchard"),
        bean_json("f2", "Banana", "Tropical"),
        bean_json("f3", "Cherry", "Berry"),
        bean_json("f4", "Date", "Desert"),
        bean_json("f5", "Elderberry", "Berry"),
    ])
}

/// Small bundled dataset used instead of the built-in one.
pub fn bundled() -> Arc<BundledDataset> {
    Arc::new(BundledDataset::from_values(vec![
        bean_json("local-1", "Local Licorice", "Spice"),
        json!({ "name": "Local Lime" }),
    ]))
}

/// Fetcher over `stub` with the stub hosts and the small bundled dataset.
pub fn fetcher(stub: StubTransport) -> SourceFetcher<StubTransport> {
    SourceFetcher::new(stub, endpoints(), bundled())
}
