// Fallback-chained catalog fetching
//
// Collection: primary -> secondary on any failure. An empty or failed result
// is the caller's cue to show the bundled dataset.
// Single record: primary single endpoint -> primary collection search ->
// secondary collection search. Every stage failure is absorbed; the caller
// only learns whether the record was found.

use crate::{
    BundledDataset, Endpoints, Result, SinglePayload, Transport, normalize_bean,
    unwrap_collection, unwrap_single,
};
use beanshelf_types::Bean;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Where a loaded collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Primary,
    Secondary,
    Bundled,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Primary => write!(f, "primary"),
            CatalogSource::Secondary => write!(f, "secondary"),
            CatalogSource::Bundled => write!(f, "bundled"),
        }
    }
}

/// A loaded collection and its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub source: CatalogSource,
    pub beans: Vec<Bean>,
}

pub struct SourceFetcher<T> {
    transport: T,
    endpoints: Endpoints,
    bundled: Arc<BundledDataset>,
}

impl<T: Transport> SourceFetcher<T> {
    pub fn new(transport: T, endpoints: Endpoints, bundled: Arc<BundledDataset>) -> Self {
        Self {
            transport,
            endpoints,
            bundled,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Complete records from the primary collection, or from the secondary
    /// when the primary fails. An empty `Ok` is not a failure here.
    pub async fn fetch_collection(&self) -> Result<Vec<Bean>> {
        self.fetch_collection_tagged().await.map(|catalog| catalog.beans)
    }

    /// Collection with the bundled dataset substituted for failures and
    /// empty results. Never fails.
    pub async fn fetch_collection_or_bundled(&self) -> Catalog {
        match self.fetch_collection_tagged().await {
            Ok(catalog) if !catalog.beans.is_empty() => catalog,
            Ok(_) => {
                info!("catalog endpoints returned no usable records, using bundled dataset");
                self.bundled_catalog()
            }
            Err(err) => {
                info!(error = %err, "catalog endpoints unavailable, using bundled dataset");
                self.bundled_catalog()
            }
        }
    }

    /// Locate one record by its normalized id, trying every source in turn.
    /// Fetch errors are treated as "not found".
    pub async fn fetch_single(&self, id: &str) -> Option<Bean> {
        let wanted = id.trim();

        match self.fetch_single_direct(wanted).await {
            Ok(Some(bean)) => return Some(bean),
            Ok(None) => debug!(id = wanted, "single endpoint did not return the record"),
            Err(err) => debug!(id = wanted, error = %err, "single endpoint failed"),
        }

        let primary_url = self.endpoints.collection_url();
        match self.fetch_from(&primary_url).await {
            Ok(beans) => {
                if let Some(bean) = find_by_id(beans, wanted) {
                    return Some(bean);
                }
            }
            Err(err) => debug!(id = wanted, error = %err, "primary collection search failed"),
        }

        let secondary_url = self.endpoints.secondary_url();
        match self.fetch_from(&secondary_url).await {
            Ok(beans) => {
                if let Some(bean) = find_by_id(beans, wanted) {
                    return Some(bean);
                }
            }
            Err(err) => debug!(id = wanted, error = %err, "secondary collection search failed"),
        }

        info!(id = wanted, "record not found in any source");
        None
    }

    /// Raw server ids of the primary (or secondary) collection.
    ///
    /// Synthetic name-based identifiers are never produced here, so records
    /// without a server id cannot be matched against this list.
    pub async fn fetch_identifier_list(&self) -> Result<Vec<String>> {
        let beans = self.fetch_collection().await?;
        Ok(beans
            .into_iter()
            .map(|bean| bean.id)
            .filter(|id| !id.trim().is_empty())
            .collect())
    }

    async fn fetch_collection_tagged(&self) -> Result<Catalog> {
        let primary_url = self.endpoints.collection_url();
        match self.fetch_from(&primary_url).await {
            Ok(beans) => {
                return Ok(Catalog {
                    source: CatalogSource::Primary,
                    beans,
                });
            }
            Err(err) => {
                info!(url = %primary_url, error = %err, "primary endpoint failed, trying secondary");
            }
        }

        let secondary_url = self.endpoints.secondary_url();
        let beans = self.fetch_from(&secondary_url).await.inspect_err(|err| {
            info!(url = %secondary_url, error = %err, "secondary endpoint failed");
        })?;

        Ok(Catalog {
            source: CatalogSource::Secondary,
            beans,
        })
    }

    async fn fetch_from(&self, url: &str) -> Result<Vec<Bean>> {
        let payload = self.transport.get_json(url).await?;
        let raw = unwrap_collection(payload)?;
        let total = raw.len();

        let beans: Vec<Bean> = raw
            .iter()
            .map(normalize_bean)
            .filter(Bean::is_complete)
            .collect();

        if beans.len() < total {
            debug!(url, dropped = total - beans.len(), "dropped records without id or name");
        }
        Ok(beans)
    }

    async fn fetch_single_direct(&self, id: &str) -> Result<Option<Bean>> {
        let url = self.endpoints.single_url(id);
        let payload = self.transport.get_json(&url).await?;

        let found = match unwrap_single(payload)? {
            SinglePayload::One(raw) => {
                let bean = normalize_bean(&raw);
                (bean.id.trim() == id).then_some(bean)
            }
            SinglePayload::Many(items) => {
                find_by_id(items.iter().map(normalize_bean).collect(), id)
            }
        };
        Ok(found)
    }

    fn bundled_catalog(&self) -> Catalog {
        Catalog {
            source: CatalogSource::Bundled,
            beans: self.bundled.beans(),
        }
    }
}

fn find_by_id(beans: Vec<Bean>, id: &str) -> Option<Bean> {
    beans.into_iter().find(|bean| bean.id.trim() == id)
}
