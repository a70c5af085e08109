use super::TuiEvent;
use beanshelf_runtime::{Browser, Effect, Navigation, Route, Screen, Tagged};
use beanshelf_types::Origin;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cards per row in the gallery grid.
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the list's search text
    Search,
}

pub struct TuiApp {
    pub browser: Browser,
    pub selected: usize,
    pub mode: InputMode,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            selected: 0,
            mode: InputMode::Normal,
            should_quit: false,
        }
    }

    /// Apply one event; returns the fetches the resulting screen needs.
    pub fn handle(&mut self, event: TuiEvent) -> Vec<Tagged<Effect>> {
        match event {
            TuiEvent::Input(key) if key.kind == KeyEventKind::Press => self.on_key(key),
            TuiEvent::Input(_) | TuiEvent::Resize => Vec::new(),
            TuiEvent::Fetched(outcome) => {
                if self.browser.deliver(outcome) {
                    self.clamp_selection();
                }
                Vec::new()
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Tagged<Effect>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        if self.mode == InputMode::Search {
            self.on_search_key(key);
            return Vec::new();
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Tab => self.switch_tab(),
            KeyCode::Esc | KeyCode::Char('b') => self.back(),
            _ => match self.browser.screen() {
                Screen::List(_) => self.on_list_key(key),
                Screen::Gallery(_) => self.on_gallery_key(key),
                Screen::Detail(_) => self.on_detail_key(key),
                Screen::NotFound(_) => Vec::new(),
            },
        }
    }

    /// Number of selectable rows or cards on the current screen.
    pub fn visible_len(&self) -> usize {
        match self.browser.screen() {
            Screen::List(view) => view.visible().len(),
            Screen::Gallery(view) => view.visible().len(),
            Screen::Detail(_) | Screen::NotFound(_) => 0,
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        let Screen::List(view) = self.browser.screen_mut() else {
            self.mode = InputMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Char(c) => view.search.push(c),
            KeyCode::Backspace => {
                view.search.pop();
            }
            KeyCode::Enter | KeyCode::Esc => self.mode = InputMode::Normal,
            _ => {}
        }
        self.selected = 0;
    }

    fn on_list_key(&mut self, key: KeyEvent) -> Vec<Tagged<Effect>> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter => return self.open_selected(),
            KeyCode::Char('/') => self.mode = InputMode::Search,
            KeyCode::Char('s') => {
                if let Screen::List(view) = self.browser.screen_mut() {
                    view.sort_key = view.sort_key.toggled();
                }
                self.selected = 0;
            }
            KeyCode::Char('d') => {
                if let Screen::List(view) = self.browser.screen_mut() {
                    view.sort_dir = view.sort_dir.toggled();
                }
                self.selected = 0;
            }
            _ => {}
        }
        Vec::new()
    }

    fn on_gallery_key(&mut self, key: KeyEvent) -> Vec<Tagged<Effect>> {
        let columns = GRID_COLUMNS as isize;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-columns),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(columns),
            KeyCode::Enter => return self.open_selected(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Screen::Gallery(view) = self.browser.screen_mut() {
                    let chip = c as usize - '1' as usize;
                    if let Some(bucket) = view.buckets().get(chip) {
                        view.toggle(bucket);
                    }
                }
                self.selected = 0;
            }
            _ => {}
        }
        Vec::new()
    }

    fn on_detail_key(&mut self, key: KeyEvent) -> Vec<Tagged<Effect>> {
        let Screen::Detail(view) = self.browser.screen() else {
            return Vec::new();
        };

        let target = match key.code {
            KeyCode::Left | KeyCode::Char('h') => view.prev(),
            KeyCode::Right | KeyCode::Char('l') => view.next(),
            _ => None,
        };

        match target {
            Some(navigation) => self.navigate(navigation),
            None => Vec::new(),
        }
    }

    fn open_selected(&mut self) -> Vec<Tagged<Effect>> {
        let navigation = match self.browser.screen() {
            Screen::List(view) => view.open(self.selected),
            Screen::Gallery(view) => view.open(self.selected),
            Screen::Detail(_) | Screen::NotFound(_) => None,
        };

        match navigation {
            Some(navigation) => self.navigate(navigation),
            None => Vec::new(),
        }
    }

    fn switch_tab(&mut self) -> Vec<Tagged<Effect>> {
        let route = match self.browser.screen() {
            Screen::List(_) => Route::Gallery,
            Screen::Gallery(_) => Route::List,
            Screen::Detail(view) if view.origin() == Some(Origin::List) => Route::Gallery,
            Screen::Detail(_) | Screen::NotFound(_) => Route::List,
        };
        self.navigate(Navigation::to(route))
    }

    fn navigate(&mut self, navigation: Navigation) -> Vec<Tagged<Effect>> {
        self.selected = 0;
        self.mode = InputMode::Normal;
        self.browser.navigate(navigation)
    }

    fn back(&mut self) -> Vec<Tagged<Effect>> {
        self.selected = 0;
        self.mode = InputMode::Normal;
        self.browser.back()
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(len - 1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanshelf_providers::{Catalog, CatalogSource};
    use beanshelf_runtime::{Outcome, SortKey};
    use beanshelf_types::Bean;

    fn press(code: KeyCode) -> TuiEvent {
        TuiEvent::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn loaded(route: Route) -> TuiApp {
        let (browser, effects) = Browser::open(Navigation::to(route));
        let mut app = TuiApp::new(browser);
        let catalog = Catalog {
            source: CatalogSource::Primary,
            beans: vec![
                Bean::new("c", "Cherry").with_group("Berry"),
                Bean::new("a", "Apple").with_group("Orchard"),
                Bean::new("b", "Banana").with_group("Tropical"),
            ],
        };
        app.handle(TuiEvent::Fetched(
            effects[0].clone().map(|_| Outcome::Collection(catalog)),
        ));
        app
    }

    fn detail_name(app: &TuiApp) -> Option<String> {
        match app.browser.screen() {
            Screen::Detail(view) => view.bean().map(|bean| bean.name.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_open_and_step_through_sorted_list() {
        let mut app = loaded(Route::List);

        app.handle(press(KeyCode::Down));
        assert!(app.handle(press(KeyCode::Enter)).is_empty());
        assert_eq!(detail_name(&app).as_deref(), Some("Banana"));

        assert!(app.handle(press(KeyCode::Right)).is_empty());
        assert_eq!(detail_name(&app).as_deref(), Some("Cherry"));

        // Already at the end of the sorted list
        app.handle(press(KeyCode::Right));
        assert_eq!(detail_name(&app).as_deref(), Some("Cherry"));

        app.handle(press(KeyCode::Esc));
        assert_eq!(detail_name(&app).as_deref(), Some("Banana"));
    }

    #[test]
    fn test_search_mode_edits_list_filter() {
        let mut app = loaded(Route::List);

        app.handle(press(KeyCode::Char('/')));
        assert_eq!(app.mode, InputMode::Search);
        for c in "tro".chars() {
            app.handle(press(KeyCode::Char(c)));
        }
        // 'q' is text while searching
        app.handle(press(KeyCode::Char('q')));
        app.handle(press(KeyCode::Backspace));
        app.handle(press(KeyCode::Enter));

        assert!(!app.should_quit);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.visible_len(), 1);
    }

    #[test]
    fn test_sort_key_toggle() {
        let mut app = loaded(Route::List);
        app.handle(press(KeyCode::Char('s')));

        let Screen::List(view) = app.browser.screen() else {
            panic!("expected list");
        };
        assert_eq!(view.sort_key, SortKey::Id);
    }

    #[test]
    fn test_gallery_chip_toggle_and_grid_moves() {
        let mut app = loaded(Route::Gallery);
        assert_eq!(app.visible_len(), 3);

        app.handle(press(KeyCode::Right));
        app.handle(press(KeyCode::Right));
        app.handle(press(KeyCode::Right));
        assert_eq!(app.selected, 2);

        // Chip 1 is Berry
        app.handle(press(KeyCode::Char('1')));
        assert_eq!(app.visible_len(), 2);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_tab_switches_views_and_requests_collection() {
        let mut app = loaded(Route::List);
        let effects = app.handle(press(KeyCode::Tab));

        assert!(matches!(app.browser.screen(), Screen::Gallery(_)));
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].value, Effect::LoadCollection);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded(Route::List);
        app.handle(TuiEvent::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);

        let mut app = loaded(Route::Gallery);
        app.handle(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
