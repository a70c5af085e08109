use super::LoadState;
use crate::navigation::open_detail;
use crate::router::Navigation;
use beanshelf_providers::Catalog;
use beanshelf_types::{Bean, Origin, identifier_list};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Id,
}

impl SortKey {
    pub fn toggled(self) -> Self {
        match self {
            SortKey::Name => SortKey::Id,
            SortKey::Id => SortKey::Name,
        }
    }

    fn value(self, bean: &Bean) -> &str {
        match self {
            SortKey::Name => &bean.name,
            SortKey::Id => &bean.id,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Id => write!(f, "id"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Case-insensitive substring match of `search` against name, group or
/// description. Blank search text keeps everything.
pub fn filter_beans<'a>(beans: &'a [Bean], search: &str) -> Vec<&'a Bean> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return beans.iter().collect();
    }

    beans
        .iter()
        .filter(|bean| {
            [&bean.name, &bean.group, &bean.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable, case-insensitive sort on `key`.
pub fn sort_beans(beans: &mut [Bean], key: SortKey, direction: SortDirection) {
    beans.sort_by(|a, b| {
        let ordering = compare_folded(key.value(a), key.value(b));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// List view: search, sort and open
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub search: String,
    pub sort_key: SortKey,
    pub sort_dir: SortDirection,
    pub load: LoadState,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_loaded(&mut self, catalog: Catalog) {
        self.load = LoadState::Ready(catalog);
    }

    /// Filtered then sorted projection, in display order.
    pub fn visible(&self) -> Vec<Bean> {
        let mut beans: Vec<Bean> = filter_beans(self.load.beans(), &self.search)
            .into_iter()
            .cloned()
            .collect();
        sort_beans(&mut beans, self.sort_key, self.sort_dir);
        beans
    }

    /// Identifiers of the current projection; recomputed on every call.
    pub fn identifiers(&self) -> Vec<String> {
        identifier_list(&self.visible())
    }

    /// Navigation opening the bean at `index` of the current projection.
    pub fn open(&self, index: usize) -> Option<Navigation> {
        open_detail(self.visible(), index, Origin::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use beanshelf_providers::CatalogSource;

    fn loaded(beans: Vec<Bean>) -> ListView {
        let mut view = ListView::new();
        view.on_loaded(Catalog {
            source: CatalogSource::Primary,
            beans,
        });
        view
    }

    fn names(beans: &[Bean]) -> Vec<&str> {
        beans.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_empty_search_is_identity() {
        let beans = vec![
            Bean::new("2", "Banana"),
            Bean::new("1", "Apple"),
            Bean::new("3", "cherry"),
        ];
        let filtered: Vec<Bean> = filter_beans(&beans, "").into_iter().cloned().collect();
        assert_eq!(filtered, beans);
        assert_eq!(filter_beans(&beans, "   ").len(), 3);
    }

    #[test]
    fn test_search_matches_name_group_or_description() {
        let beans = vec![
            Bean::new("1", "Lemon Drop").with_group("Citrus"),
            Bean::new("2", "Mango").with_description("Ripe and CITRUSY"),
            Bean::new("3", "Licorice").with_group("Spice"),
        ];
        assert_eq!(
            filter_beans(&beans, "citrus")
                .iter()
                .map(|b| b.id.as_str())
                .collect::<Vec<_>>(),
            vec!["1", "2"]
        );
        assert_eq!(filter_beans(&beans, "LICO").len(), 1);
        assert!(filter_beans(&beans, "vanilla").is_empty());
    }

    #[test]
    fn test_sort_name_desc_is_case_insensitive() {
        let mut beans = vec![
            Bean::new("1", "Apple"),
            Bean::new("2", "cherry"),
            Bean::new("3", "Banana"),
        ];
        sort_beans(&mut beans, SortKey::Name, SortDirection::Desc);
        assert_eq!(names(&beans), vec!["cherry", "Banana", "Apple"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut beans = vec![
            Bean::new("x", "mint"),
            Bean::new("y", "Mint"),
            Bean::new("z", "MINT"),
        ];
        sort_beans(&mut beans, SortKey::Name, SortDirection::Asc);
        assert_eq!(ids(&beans), vec!["x", "y", "z"]);
        sort_beans(&mut beans, SortKey::Name, SortDirection::Desc);
        assert_eq!(ids(&beans), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_sort_by_id() {
        let mut beans = vec![
            Bean::new("b-2", "One"),
            Bean::new("A-3", "Two"),
            Bean::new("a-1", "Three"),
        ];
        sort_beans(&mut beans, SortKey::Id, SortDirection::Asc);
        assert_eq!(ids(&beans), vec!["a-1", "A-3", "b-2"]);
    }

    fn ids(beans: &[Bean]) -> Vec<&str> {
        beans.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_open_uses_filtered_sorted_projection() {
        let mut view = loaded(vec![
            Bean::new("e", "Elderberry"),
            Bean::new("a", "Apple"),
            Bean::new("d", "Date"),
            Bean::new("", "Cherry"),
            Bean::new("b", "Banana"),
        ]);
        view.sort_key = SortKey::Name;

        let navigation = view.open(2).unwrap();
        assert_eq!(navigation.route, Route::Detail("name-cherry-2".to_string()));

        let state = navigation.state.unwrap();
        assert_eq!(state.index, 2);
        assert_eq!(state.records.len(), 5);
        assert_eq!(state.ids, view.identifiers());
        assert_eq!(state.prev_id(), Some("b"));
        assert_eq!(state.next_id(), Some("d"));
    }

    #[test]
    fn test_loading_view_has_nothing_to_open() {
        let view = ListView::new();
        assert!(view.load.is_loading());
        assert!(view.visible().is_empty());
        assert!(view.open(0).is_none());
    }
}
