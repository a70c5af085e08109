//! Browsing session: the router, the mounted screen and its fetches.
//!
//! `Browser` never performs I/O. Mounting a screen yields effects tagged with
//! the mount that issued them; the caller runs them (see [`crate::perform`])
//! and hands the tagged outcomes back through [`Browser::deliver`], which
//! drops anything addressed to a screen that has since been replaced.

use crate::effects::{Effect, Outcome};
use crate::liveness::{Liveness, Mount, Tagged};
use crate::router::{Navigation, Route, Router};
use crate::views::{DetailView, GalleryView, ListView};
use tracing::debug;

#[derive(Debug, Clone)]
pub enum Screen {
    List(ListView),
    Gallery(GalleryView),
    Detail(DetailView),
    NotFound(String),
}

impl Screen {
    /// Build the screen for a navigation along with the fetches it needs.
    pub fn mount(navigation: &Navigation) -> (Screen, Vec<Effect>) {
        match &navigation.route {
            Route::List => (Screen::List(ListView::new()), vec![Effect::LoadCollection]),
            Route::Gallery => (
                Screen::Gallery(GalleryView::new()),
                vec![Effect::LoadCollection],
            ),
            Route::Detail(id) => {
                let (view, effects) = DetailView::enter(id.clone(), navigation.state.clone());
                (Screen::Detail(view), effects)
            }
            Route::NotFound(path) => (Screen::NotFound(path.clone()), Vec::new()),
        }
    }

    /// Feed a fetch result into the screen. Returns false when the screen
    /// has no use for it.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match (self, outcome) {
            (Screen::List(view), Outcome::Collection(catalog)) => {
                view.on_loaded(catalog);
                true
            }
            (Screen::Gallery(view), Outcome::Collection(catalog)) => {
                view.on_loaded(catalog);
                true
            }
            (Screen::Detail(view), Outcome::Single(record)) => {
                view.on_record(record);
                true
            }
            (Screen::Detail(view), Outcome::Identifiers(result)) => {
                view.on_identifiers(result);
                true
            }
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::List(_) => "list",
            Screen::Gallery(_) => "gallery",
            Screen::Detail(_) => "detail",
            Screen::NotFound(_) => "not_found",
        }
    }
}

#[derive(Debug)]
pub struct Browser {
    router: Router,
    screen: Screen,
    liveness: Liveness,
    mount: Mount,
}

impl Browser {
    /// Start a session at `navigation`.
    pub fn open(navigation: Navigation) -> (Self, Vec<Tagged<Effect>>) {
        let mut liveness = Liveness::new();
        let mount = liveness.remount();
        let (screen, effects) = Screen::mount(&navigation);
        debug!(route = %navigation.route, screen = screen.name(), "session opened");

        let browser = Self {
            router: Router::new(navigation),
            screen,
            liveness,
            mount,
        };
        (browser, tag(mount, effects))
    }

    /// Push a navigation and mount its screen.
    pub fn navigate(&mut self, navigation: Navigation) -> Vec<Tagged<Effect>> {
        let current = self.router.push(navigation).clone();
        self.remount(&current)
    }

    /// Return to the previous navigation, state included. With no history
    /// left the list replaces the current page.
    pub fn back(&mut self) -> Vec<Tagged<Effect>> {
        let previous = match self.router.back() {
            Some(previous) => previous.clone(),
            None => self.router.replace(Navigation::to(Route::List)).clone(),
        };
        self.remount(&previous)
    }

    /// Apply a fetch result. Returns whether the screen changed.
    pub fn deliver(&mut self, outcome: Tagged<Outcome>) -> bool {
        if !self.liveness.is_live(outcome.mount) {
            debug!(
                generation = outcome.mount.generation(),
                current = self.mount.generation(),
                "dropping outcome for unmounted screen"
            );
            return false;
        }
        self.screen.apply(outcome.value)
    }

    /// Tear down the mounted screen; pending outcomes are dropped from now on.
    pub fn close(&mut self) {
        self.liveness.unmount();
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn current(&self) -> &Navigation {
        self.router.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    pub fn mount(&self) -> Mount {
        self.mount
    }

    fn remount(&mut self, navigation: &Navigation) -> Vec<Tagged<Effect>> {
        self.mount = self.liveness.remount();
        let (screen, effects) = Screen::mount(navigation);
        debug!(
            route = %navigation.route,
            screen = screen.name(),
            generation = self.mount.generation(),
            "screen mounted"
        );
        self.screen = screen;
        tag(self.mount, effects)
    }
}

fn tag(mount: Mount, effects: Vec<Effect>) -> Vec<Tagged<Effect>> {
    effects
        .into_iter()
        .map(|effect| Tagged::new(mount, effect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanshelf_providers::{Catalog, CatalogSource};
    use beanshelf_types::Bean;

    fn catalog() -> Catalog {
        Catalog {
            source: CatalogSource::Primary,
            beans: vec![
                Bean::new("a", "Apple"),
                Bean::new("b", "Banana"),
                Bean::new("c", "Cherry"),
            ],
        }
    }

    #[test]
    fn test_open_list_requests_collection() {
        let (browser, effects) = Browser::open(Navigation::parse("/"));
        assert_eq!(browser.screen().name(), "list");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].value, Effect::LoadCollection);
        assert_eq!(effects[0].mount, browser.mount());
    }

    #[test]
    fn test_unmatched_route_mounts_not_found() {
        let (browser, effects) = Browser::open(Navigation::parse("/nowhere"));
        assert!(effects.is_empty());
        assert!(matches!(browser.screen(), Screen::NotFound(path) if path == "/nowhere"));
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let (mut browser, effects) = Browser::open(Navigation::to(Route::List));
        let stale = effects[0].mount;

        browser.navigate(Navigation::to(Route::Gallery));
        let applied = browser.deliver(Tagged::new(stale, Outcome::Collection(catalog())));

        assert!(!applied);
        let Screen::Gallery(view) = browser.screen() else {
            panic!("expected gallery");
        };
        assert!(view.load.is_loading());
    }

    #[test]
    fn test_closed_session_ignores_results() {
        let (mut browser, effects) = Browser::open(Navigation::to(Route::List));
        browser.close();
        assert!(!browser.deliver(Tagged::new(effects[0].mount, Outcome::Collection(catalog()))));
    }

    #[test]
    fn test_open_detail_and_back_restores_list() {
        let (mut browser, effects) = Browser::open(Navigation::to(Route::List));
        browser.deliver(effects[0].clone().map(|_| Outcome::Collection(catalog())));

        let Screen::List(list) = browser.screen() else {
            panic!("expected list");
        };
        let navigation = list.open(1).unwrap();
        let effects = browser.navigate(navigation);
        assert!(effects.is_empty());
        assert_eq!(browser.current().route, Route::Detail("b".to_string()));

        let effects = browser.back();
        assert_eq!(browser.screen().name(), "list");
        assert_eq!(effects.len(), 1);
        assert!(!browser.can_go_back());
    }

    #[test]
    fn test_back_at_root_goes_to_list() {
        let (mut browser, _) = Browser::open(Navigation::parse("/detail/zzz"));
        let effects = browser.back();
        assert_eq!(browser.current().route, Route::List);
        assert_eq!(effects[0].value, Effect::LoadCollection);
        assert!(!browser.can_go_back());
    }

    #[test]
    fn test_mismatched_outcome_is_ignored() {
        let (mut browser, effects) = Browser::open(Navigation::to(Route::List));
        let mount = effects[0].mount;
        assert!(!browser.deliver(Tagged::new(mount, Outcome::Single(None))));
    }
}
