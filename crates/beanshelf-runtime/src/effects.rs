//! Fetch requests issued by screens and their results.

use beanshelf_providers::{Catalog, SourceFetcher, Transport};
use beanshelf_types::Bean;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Collection for the list or gallery (bundled dataset on failure)
    LoadCollection,
    /// Single record for a deep-linked detail page
    FetchSingle(String),
    /// Raw id list for prev/next on a deep-linked detail page
    FetchIdentifierList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Collection(Catalog),
    Single(Option<Bean>),
    /// Error is kept as display text; it only ever ends up on screen
    Identifiers(Result<Vec<String>, String>),
}

/// Run one effect against the catalog sources.
pub async fn perform<T: Transport>(fetcher: &SourceFetcher<T>, effect: Effect) -> Outcome {
    match effect {
        Effect::LoadCollection => Outcome::Collection(fetcher.fetch_collection_or_bundled().await),
        Effect::FetchSingle(id) => Outcome::Single(fetcher.fetch_single(&id).await),
        Effect::FetchIdentifierList => Outcome::Identifiers(
            fetcher
                .fetch_identifier_list()
                .await
                .map_err(|err| err.to_string()),
        ),
    }
}

/// Run several effects concurrently, keeping their order.
pub async fn perform_all<T: Transport>(
    fetcher: &SourceFetcher<T>,
    effects: Vec<Effect>,
) -> Vec<Outcome> {
    futures::future::join_all(effects.into_iter().map(|effect| perform(fetcher, effect))).await
}
