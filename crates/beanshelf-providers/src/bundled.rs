//! Bundled fallback dataset.
//!
//! Compiled into the binary and parsed once per process. It is shown when
//! neither catalog endpoint yields any usable record, and it is trusted:
//! records are normalized but never filtered for missing ids or names.

use crate::{Result, normalize_bean, unwrap_collection};
use beanshelf_types::Bean;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

const BUILTIN_JSON: &str = include_str!("../data/fallback_beans.json");

static BUILTIN: Lazy<Arc<BundledDataset>> = Lazy::new(|| {
    let dataset = BundledDataset::from_json(BUILTIN_JSON).unwrap_or_else(|err| {
        tracing::error!(error = %err, "bundled dataset is unreadable, using an empty one");
        BundledDataset::default()
    });
    Arc::new(dataset)
});

/// Read-only collection of raw records in the same untyped shape the
/// endpoints serve
#[derive(Debug, Clone, Default)]
pub struct BundledDataset {
    records: Vec<Value>,
}

impl BundledDataset {
    /// Process-wide dataset shipped with the crate
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_values(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Parse a dataset document; both collection shapes are accepted
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(json)?;
        Ok(Self::from_values(unwrap_collection(payload)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Normalized records, in bundled order, without completeness filtering
    pub fn beans(&self) -> Vec<Bean> {
        self.records.iter().map(normalize_bean).collect()
    }
}
