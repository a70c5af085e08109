mod detail;
mod gallery;
mod list;

pub use detail::{DetailState, DetailView, FAILED_MESSAGE, LOADING_MESSAGE, NOT_FOUND_MESSAGE};
pub use gallery::{AUTO_SELECT_LIMIT, GalleryView, distinct_buckets};
pub use list::{ListView, SortDirection, SortKey, filter_beans, sort_beans};

use beanshelf_providers::{Catalog, CatalogSource};
use beanshelf_types::Bean;

/// Collection state shared by the list and gallery views
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
}

impl LoadState {
    pub fn beans(&self) -> &[Bean] {
        match self {
            LoadState::Loading => &[],
            LoadState::Ready(catalog) => &catalog.beans,
        }
    }

    pub fn source(&self) -> Option<CatalogSource> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(catalog) => Some(catalog.source),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
