//! Assertions over bean collections and CLI JSON output.

use anyhow::{Context, Result};
use beanshelf_types::Bean;
use serde_json::Value;

/// Names of `beans`, in order.
pub fn names(beans: &[Bean]) -> Vec<&str> {
    beans.iter().map(|bean| bean.name.as_str()).collect()
}

/// Assert that `beans` carry exactly `expected` names, in order.
pub fn assert_names(beans: &[Bean], expected: &[&str]) {
    assert_eq!(names(beans), expected, "unexpected bean order");
}

/// Assert the `source` and bean count of `list --format json` output.
pub fn assert_listing(json: &Value, source: &str, expected: usize) -> Result<()> {
    let actual_source = json["source"]
        .as_str()
        .context("Expected 'source' string in JSON")?;
    if actual_source != source {
        anyhow::bail!("Expected source {} but got {}", source, actual_source);
    }

    let beans = json["beans"]
        .as_array()
        .context("Expected 'beans' array in JSON")?;
    if beans.len() != expected {
        anyhow::bail!("Expected {} beans, got {}", expected, beans.len());
    }

    Ok(())
}
