//! Navigation bridge between the browsing views and the detail view.
//!
//! Opening a bean packages the ordered collection the user is looking at,
//! the clicked index and the originating view. Stepping from the detail view
//! carries the same collection forward with the index moved by one.

use crate::router::{Navigation, Route};
use beanshelf_types::{Bean, NavigationContext, Origin, stable_id};

/// Navigation to the detail page of `records[index]`.
///
/// Returns `None` when `index` is outside the collection.
pub fn open_detail(records: Vec<Bean>, index: usize, origin: Origin) -> Option<Navigation> {
    let target = stable_id(records.get(index)?, index);
    let context = NavigationContext::from_records(records, index, Some(origin));
    Some(Navigation::with_state(Route::Detail(target), context))
}

/// Navigation to the neighbour `delta` positions away from the context's
/// current index.
pub fn step(context: &NavigationContext, delta: isize) -> Option<Navigation> {
    let index = context.index.checked_add_signed(delta)?;
    let target = context.ids.get(index)?.clone();
    Some(Navigation::with_state(
        Route::Detail(target),
        context.at(index),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beans() -> Vec<Bean> {
        vec![
            Bean::new("a", "Apple"),
            Bean::new("", "Banana"),
            Bean::new("c", "Cherry"),
        ]
    }

    #[test]
    fn test_open_detail_packages_collection() {
        let navigation = open_detail(beans(), 1, Origin::List).unwrap();
        assert_eq!(navigation.route, Route::Detail("name-banana-1".to_string()));

        let state = navigation.state.unwrap();
        assert_eq!(state.index, 1);
        assert_eq!(state.origin, Some(Origin::List));
        assert_eq!(state.ids, vec!["a", "name-banana-1", "c"]);
        assert_eq!(state.records.to_vec(), beans());
    }

    #[test]
    fn test_open_detail_out_of_range() {
        assert!(open_detail(beans(), 3, Origin::Gallery).is_none());
        assert!(open_detail(Vec::new(), 0, Origin::Gallery).is_none());
    }

    #[test]
    fn test_step_keeps_records() {
        let context = NavigationContext::from_records(beans(), 1, Some(Origin::Gallery));

        let next = step(&context, 1).unwrap();
        assert_eq!(next.route, Route::Detail("c".to_string()));
        let next_state = next.state.unwrap();
        assert_eq!(next_state.index, 2);
        assert_eq!(next_state.records.len(), 3);
        assert!(std::sync::Arc::ptr_eq(&next_state.records, &context.records));

        let prev = step(&context, -1).unwrap();
        assert_eq!(prev.route, Route::Detail("a".to_string()));

        assert!(step(&context.at(0), -1).is_none());
        assert!(step(&context.at(2), 1).is_none());
    }
}
