//! Screen state machine for the interactive dashboard.
//!
//! Two screens mirror the two routes of the tool: the catalog dashboard and
//! the per-product detail view. Each screen owns its own fetch state and
//! query state; nothing is shared across screens and nothing is persisted.
//! Leaving a screen tears its state down, and re-entering starts a fresh
//! fetch under a new generation.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storelens_engine::{categories, filter_products};
use storelens_types::Product;

/// Per-screen request lifecycle. `Idle` exists only between constructing a
/// screen and mounting it; every mounted screen is `Loading` or later.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// A fetch result routed back to the event loop. The generation ties it to
/// the request that spawned it; mismatched generations are discarded.
#[derive(Debug)]
pub enum AppEvent {
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<Product>, String>,
    },
    ProductLoaded {
        generation: u64,
        result: Result<Option<Product>, String>,
    },
}

/// Side effect requested by a state transition, executed by the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    FetchAll { generation: u64 },
    FetchOne { generation: u64, id: String },
}

#[derive(Debug)]
pub enum Screen {
    Dashboard(DashboardState),
    Detail(DetailState),
}

#[derive(Debug)]
pub struct DashboardState {
    pub generation: u64,
    pub fetch: FetchState<Vec<Product>>,
    pub query: String,
    pub category_index: usize,
    pub selected: usize,
    pub fetched_at: Option<DateTime<Local>>,
}

impl DashboardState {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            fetch: FetchState::Idle,
            query: String::new(),
            category_index: 0,
            selected: 0,
            fetched_at: None,
        }
    }

    pub fn items(&self) -> &[Product] {
        match &self.fetch {
            FetchState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn category_options(&self) -> Vec<String> {
        categories(self.items())
    }

    pub fn current_category(&self) -> String {
        let options = self.category_options();
        options
            .get(self.category_index)
            .cloned()
            .unwrap_or_else(|| storelens_engine::filter::ALL_CATEGORIES.to_string())
    }

    pub fn filtered(&self) -> Vec<Product> {
        filter_products(self.items(), &self.query, &self.current_category())
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }
}

#[derive(Debug)]
pub struct DetailState {
    pub generation: u64,
    pub id: String,
    pub fetch: FetchState<Option<Product>>,
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    next_generation: u64,
}

impl App {
    /// Create the app on the dashboard screen with its initial fetch pending.
    pub fn new() -> (Self, FetchCommand) {
        let mut app = Self {
            screen: Screen::Dashboard(DashboardState::new(0)),
            should_quit: false,
            next_generation: 0,
        };
        let command = app.open_dashboard();
        (app, command)
    }

    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    fn open_dashboard(&mut self) -> FetchCommand {
        let generation = self.bump();
        let mut state = DashboardState::new(generation);
        state.fetch = FetchState::Loading;
        self.screen = Screen::Dashboard(state);
        FetchCommand::FetchAll { generation }
    }

    fn open_detail(&mut self, id: String) -> FetchCommand {
        let generation = self.bump();
        self.screen = Screen::Detail(DetailState {
            generation,
            id: id.clone(),
            fetch: FetchState::Loading,
        });
        FetchCommand::FetchOne { generation, id }
    }

    /// Apply a fetch result. Results from a superseded generation (the
    /// screen was left, or replaced by a newer instance) are dropped.
    pub fn apply(&mut self, event: AppEvent) {
        match (&mut self.screen, event) {
            (
                Screen::Dashboard(state),
                AppEvent::CatalogLoaded { generation, result },
            ) if generation == state.generation => {
                state.fetch = match result {
                    Ok(items) => {
                        state.fetched_at = Some(Local::now());
                        FetchState::Loaded(items)
                    }
                    Err(message) => FetchState::Failed(message),
                };
                state.clamp_selection();
            }
            (
                Screen::Detail(state),
                AppEvent::ProductLoaded { generation, result },
            ) if generation == state.generation => {
                state.fetch = match result {
                    Ok(product) => FetchState::Loaded(product),
                    Err(message) => FetchState::Failed(message),
                };
            }
            // Stale or mis-routed response: the requesting screen is gone.
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FetchCommand> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match &mut self.screen {
            Screen::Dashboard(state) => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Char(c) => {
                    state.query.push(c);
                    state.selected = 0;
                    None
                }
                KeyCode::Backspace => {
                    state.query.pop();
                    state.clamp_selection();
                    None
                }
                KeyCode::Left => {
                    let len = state.category_options().len();
                    state.category_index = (state.category_index + len - 1) % len;
                    state.selected = 0;
                    None
                }
                KeyCode::Right => {
                    let len = state.category_options().len();
                    state.category_index = (state.category_index + 1) % len;
                    state.selected = 0;
                    None
                }
                KeyCode::Up => {
                    state.selected = state.selected.saturating_sub(1);
                    None
                }
                KeyCode::Down => {
                    state.selected += 1;
                    state.clamp_selection();
                    None
                }
                KeyCode::Enter => {
                    let id = state.filtered().get(state.selected).map(|p| p.id.to_string());
                    id.map(|id| self.open_detail(id))
                }
                _ => None,
            },
            Screen::Detail(_) => match key.code {
                KeyCode::Esc | KeyCode::Backspace => Some(self.open_dashboard()),
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> App {
        let (mut app, command) = App::new();
        let FetchCommand::FetchAll { generation } = command else {
            panic!("dashboard should fetch the catalog on mount");
        };
        app.apply(AppEvent::CatalogLoaded {
            generation,
            result: Ok(vec![
                product(1, "Red Shirt", "clothing"),
                product(2, "Gold Ring", "jewelery"),
            ]),
        });
        app
    }

    #[test]
    fn mounts_on_dashboard_loading() {
        let (app, command) = App::new();
        assert!(matches!(command, FetchCommand::FetchAll { .. }));
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.fetch, FetchState::Loading);
    }

    #[test]
    fn catalog_result_with_stale_generation_is_discarded() {
        let (mut app, command) = App::new();
        let FetchCommand::FetchAll { generation } = command else {
            panic!("expected catalog fetch");
        };

        app.apply(AppEvent::CatalogLoaded {
            generation: generation + 99,
            result: Ok(vec![product(1, "Ghost", "none")]),
        });

        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.fetch, FetchState::Loading, "stale result must not apply");
    }

    #[test]
    fn superseded_detail_response_never_lands() {
        let mut app = loaded_app();

        // Request product A.
        let cmd_a = app.handle_key(key(KeyCode::Enter)).expect("opens detail");
        let FetchCommand::FetchOne { generation: gen_a, id: id_a } = cmd_a else {
            panic!("expected product fetch");
        };
        assert_eq!(id_a, "1");

        // Before A resolves, go back and request product B.
        app.handle_key(key(KeyCode::Esc)).expect("back refetches catalog");
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        let dash_gen = state.generation;
        app.apply(AppEvent::CatalogLoaded {
            generation: dash_gen,
            result: Ok(vec![
                product(1, "Red Shirt", "clothing"),
                product(2, "Gold Ring", "jewelery"),
            ]),
        });
        app.handle_key(key(KeyCode::Down));
        let cmd_b = app.handle_key(key(KeyCode::Enter)).expect("opens detail");
        let FetchCommand::FetchOne { generation: gen_b, id: id_b } = cmd_b else {
            panic!("expected product fetch");
        };
        assert_eq!(id_b, "2");

        // A's response arrives late and must be dropped.
        app.apply(AppEvent::ProductLoaded {
            generation: gen_a,
            result: Ok(Some(product(1, "Red Shirt", "clothing"))),
        });
        let Screen::Detail(detail) = &app.screen else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.fetch, FetchState::Loading);

        // B's response applies.
        app.apply(AppEvent::ProductLoaded {
            generation: gen_b,
            result: Ok(Some(product(2, "Gold Ring", "jewelery"))),
        });
        let Screen::Detail(detail) = &app.screen else {
            panic!("expected detail screen");
        };
        assert_eq!(
            detail.fetch,
            FetchState::Loaded(Some(product(2, "Gold Ring", "jewelery")))
        );
    }

    #[test]
    fn typing_narrows_and_backspace_widens() {
        let mut app = loaded_app();
        for c in "ring".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.query, "ring");
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].id, 2);

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn category_cycling_wraps_both_directions() {
        let mut app = loaded_app();
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.category_options(), vec!["all", "clothing", "jewelery"]);

        app.handle_key(key(KeyCode::Right));
        let Screen::Dashboard(state) = &app.screen else { unreachable!() };
        assert_eq!(state.current_category(), "clothing");
        assert_eq!(state.filtered().len(), 1);

        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        let Screen::Dashboard(state) = &app.screen else { unreachable!() };
        assert_eq!(state.current_category(), "jewelery");
    }

    #[test]
    fn leaving_detail_resets_dashboard_and_refetches() {
        let mut app = loaded_app();
        for c in "shirt".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter)).expect("opens detail");

        let command = app.handle_key(key(KeyCode::Esc)).expect("back refetches");
        assert!(matches!(command, FetchCommand::FetchAll { .. }));
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.fetch, FetchState::Loading);
        assert_eq!(state.query, "", "query state resets on remount");
    }

    #[test]
    fn selection_stays_within_filtered_bounds() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.selected, 1);

        // Empty filtered list: Enter is a no-op, no fetch spawned.
        let mut app = loaded_app();
        for c in "zzz".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert!(app.handle_key(key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn failed_fetch_is_terminal_for_the_attempt() {
        let (mut app, command) = App::new();
        let FetchCommand::FetchAll { generation } = command else {
            panic!("expected catalog fetch");
        };
        app.apply(AppEvent::CatalogLoaded {
            generation,
            result: Err("HTTP 500".to_string()),
        });
        let Screen::Dashboard(state) = &app.screen else {
            panic!("expected dashboard screen");
        };
        assert_eq!(state.fetch, FetchState::Failed("HTTP 500".to_string()));
    }
}
