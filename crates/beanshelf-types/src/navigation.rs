use crate::{Bean, identifier_list};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// View a detail navigation was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    List,
    Gallery,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::List => write!(f, "list"),
            Origin::Gallery => write!(f, "gallery"),
        }
    }
}

/// State carried by a navigation into the detail view.
///
/// Created when a bean is opened from the list or gallery and consumed by
/// the detail view that receives it. It is never persisted; a reload or a
/// directly entered route arrives without one. Records are shared, so
/// stepping through neighbours never copies the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationContext {
    pub ids: Vec<String>,
    pub index: usize,
    pub origin: Option<Origin>,
    pub records: Arc<[Bean]>,
}

impl NavigationContext {
    /// Context for opening `records[index]`, with identifiers derived from
    /// the same ordered collection.
    pub fn from_records(
        records: impl Into<Arc<[Bean]>>,
        index: usize,
        origin: Option<Origin>,
    ) -> Self {
        let records = records.into();
        Self {
            ids: identifier_list(&records),
            index,
            origin,
            records,
        }
    }

    /// Context holding only an identifier list (no records).
    pub fn from_ids(ids: Vec<String>, index: usize, origin: Option<Origin>) -> Self {
        Self {
            ids,
            index,
            origin,
            records: Arc::default(),
        }
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.ids.get(self.index).map(String::as_str)
    }

    pub fn prev_id(&self) -> Option<&str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.ids.get(i))
            .map(String::as_str)
    }

    pub fn next_id(&self) -> Option<&str> {
        self.ids.get(self.index + 1).map(String::as_str)
    }

    /// Same context moved to `index`, keeping the ids, origin and records.
    pub fn at(&self, index: usize) -> Self {
        Self {
            index,
            ..self.clone()
        }
    }
}
