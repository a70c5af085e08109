use super::LoadState;
use crate::navigation::open_detail;
use crate::router::Navigation;
use beanshelf_providers::Catalog;
use beanshelf_types::{Bean, Origin};
use std::collections::BTreeSet;

/// Number of buckets selected automatically on first load
pub const AUTO_SELECT_LIMIT: usize = 3;

/// Sorted, de-duplicated buckets of `beans`.
pub fn distinct_buckets(beans: &[Bean]) -> Vec<String> {
    beans
        .iter()
        .map(Bean::bucket)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Gallery view: bucket chips over a card grid
#[derive(Debug, Clone, Default)]
pub struct GalleryView {
    active: BTreeSet<String>,
    pub load: LoadState,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the collection. With no active buckets, the first few buckets
    /// become the active filter; a non-empty selection is left alone.
    pub fn on_loaded(&mut self, catalog: Catalog) {
        self.load = LoadState::Ready(catalog);

        if self.active.is_empty() {
            self.active = self
                .buckets()
                .into_iter()
                .take(AUTO_SELECT_LIMIT)
                .collect();
        }
    }

    pub fn buckets(&self) -> Vec<String> {
        distinct_buckets(self.load.beans())
    }

    pub fn active(&self) -> &BTreeSet<String> {
        &self.active
    }

    pub fn is_active(&self, bucket: &str) -> bool {
        self.active.contains(bucket)
    }

    pub fn toggle(&mut self, bucket: &str) {
        if !self.active.remove(bucket) {
            self.active.insert(bucket.to_string());
        }
    }

    pub fn select(&mut self, buckets: impl IntoIterator<Item = String>) {
        self.active = buckets.into_iter().collect();
    }

    /// Beans in an active bucket, in load order. Everything is shown while
    /// no bucket is active.
    pub fn visible(&self) -> Vec<Bean> {
        let beans = self.load.beans();
        if self.active.is_empty() {
            return beans.to_vec();
        }
        beans
            .iter()
            .filter(|bean| self.active.contains(&bean.bucket()))
            .cloned()
            .collect()
    }

    pub fn open(&self, index: usize) -> Option<Navigation> {
        open_detail(self.visible(), index, Origin::Gallery)
    }
}
