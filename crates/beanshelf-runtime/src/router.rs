//! Route table and navigation history.
//!
//! A navigation pairs a route with an optional `NavigationContext`. The
//! router stores that context untouched and hands it back verbatim, which
//! makes it the only contract between the list/gallery views and the detail
//! view.

use beanshelf_types::NavigationContext;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Gallery,
    Detail(String),
    NotFound(String),
}

impl Route {
    /// Parse a path. `/` redirects to the list; anything unmatched becomes
    /// `NotFound` carrying the original path.
    pub fn parse(path: &str) -> Route {
        let raw = path.trim();
        let without_query = raw.split(['?', '#']).next().unwrap_or_default();
        let trimmed = without_query.trim_end_matches('/');

        let segments: Vec<&str> = trimmed
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::List,
            ["list"] => Route::List,
            ["gallery"] => Route::Gallery,
            ["detail", id] => match urlencoding::decode(id) {
                Ok(decoded) if !decoded.trim().is_empty() => Route::Detail(decoded.into_owned()),
                _ => Route::NotFound(raw.to_string()),
            },
            _ => Route::NotFound(raw.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/list".to_string(),
            Route::Gallery => "/gallery".to_string(),
            Route::Detail(id) => format!("/detail/{}", urlencoding::encode(id)),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub state: Option<NavigationContext>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self { route, state: None }
    }

    pub fn with_state(route: Route, state: NavigationContext) -> Self {
        Self {
            route,
            state: Some(state),
        }
    }

    pub fn parse(path: &str) -> Self {
        Self::to(Route::parse(path))
    }
}

/// History stack of navigations; the last entry is the current page.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Navigation>,
}

impl Router {
    pub fn new(initial: Navigation) -> Self {
        Self {
            history: vec![initial],
        }
    }

    pub fn current(&self) -> &Navigation {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    pub fn push(&mut self, navigation: Navigation) -> &Navigation {
        self.history.push(navigation);
        self.current()
    }

    /// Replace the current entry without growing the history.
    pub fn replace(&mut self, navigation: Navigation) -> &Navigation {
        let last = self.history.len() - 1;
        self.history[last] = navigation;
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Drop the current entry and return the one before it, state included.
    pub fn back(&mut self) -> Option<&Navigation> {
        if !self.can_go_back() {
            return None;
        }
        self.history.pop();
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanshelf_types::{Bean, Origin};

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/list"), Route::List);
        assert_eq!(Route::parse("/gallery/"), Route::Gallery);
        assert_eq!(Route::parse("/detail/abc"), Route::Detail("abc".to_string()));
        assert_eq!(
            Route::parse("/detail/name-very%20cherry-2?from=list"),
            Route::Detail("name-very cherry-2".to_string())
        );
        assert_eq!(
            Route::parse("/detail/"),
            Route::NotFound("/detail/".to_string())
        );
        assert_eq!(
            Route::parse("/beans/1"),
            Route::NotFound("/beans/1".to_string())
        );
    }

    #[test]
    fn test_path_round_trips_detail_ids() {
        let route = Route::Detail("a b/c".to_string());
        assert_eq!(route.path(), "/detail/a%20b%2Fc");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_back_returns_state_verbatim() {
        let ctx = NavigationContext::from_records(
            vec![Bean::new("1", "One"), Bean::new("", "Two")],
            1,
            Some(Origin::Gallery),
        );

        let mut router = Router::new(Navigation::to(Route::Gallery));
        router.push(Navigation::with_state(
            Route::Detail("name-two-1".to_string()),
            ctx.clone(),
        ));
        router.push(Navigation::to(Route::List));

        let previous = router.back().unwrap();
        assert_eq!(previous.state.as_ref(), Some(&ctx));
        let shared = previous.state.as_ref().unwrap();
        assert!(std::sync::Arc::ptr_eq(&shared.records, &ctx.records));

        assert!(router.can_go_back());
        router.back();
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_back_at_root() {
        let mut router = Router::new(Navigation::parse("/detail/x"));
        assert!(!router.can_go_back());
        assert!(router.back().is_none());
        assert_eq!(router.current().route, Route::Detail("x".to_string()));
    }
}
