//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event or a terminal resize. All pending events are
//! drained before the next draw.
//!
//! ## Presentation State
//!
//! `TuiState` keeps one `ViewState` per navigation stack entry. Going back
//! drops the top entry and reveals the previous screen's cursor untouched;
//! going forward starts the new screen from the top.

mod component;
mod components;
mod event;
mod ui;

pub use event::TuiEvent;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::assets::{AssetResolver, BundledAssets, DirectoryAssets};
use crate::core::config::ResolvedConfig;
use crate::core::screens::ActiveScreen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailScroll, ListSelection, RowActivated};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Presentation state for one navigation stack entry.
#[derive(Default)]
pub struct ViewState {
    pub selection: ListSelection,
    pub scroll: DetailScroll,
}

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    views: Vec<ViewState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            views: vec![ViewState::default()],
        }
    }

    /// Match the number of views to the navigation depth. Extra views are
    /// dropped, missing ones start fresh.
    pub fn sync_depth(&mut self, depth: usize) {
        let depth = depth.max(1);
        self.views.truncate(depth);
        self.views.resize_with(depth, ViewState::default);
    }

    /// State for the screen on top of the stack.
    pub fn top(&mut self) -> &mut ViewState {
        if self.views.is_empty() {
            self.views.push(ViewState::default());
        }
        let top = self.views.len() - 1;
        &mut self.views[top]
    }

    pub fn depth(&self) -> usize {
        self.views.len()
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Route one input event to the core or to the active component.
///
/// Quit and Back always reach `update`. Everything else depends on the
/// screen: lists move their cursor and turn activations into
/// `Action::Select`, the detail view scrolls, an error screen ignores it.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    tui.sync_depth(app.navigator.depth());

    let effect = match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Back => update(app, Action::Back),
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        _ => match app.active_screen() {
            Ok(ActiveScreen::Details(_)) => {
                tui.top().scroll.handle_event(&event);
                Effect::None
            }
            Ok(screen) => {
                let selection = &mut tui.top().selection;
                selection.set_len(screen.row_count());
                match selection.handle_event(&event) {
                    Some(RowActivated(index)) => update(app, Action::Select(index)),
                    None => Effect::None,
                }
            }
            Err(e) => {
                debug!("Ignoring {:?} on error screen: {}", event, e);
                Effect::None
            }
        },
    };

    if let Effect::Navigated(screen) = effect {
        debug!("Now on {} (depth {})", screen, app.navigator.depth());
        tui.sync_depth(app.navigator.depth());
    }
    effect
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Image resolver for the configured asset source. `None` hides images.
pub fn build_resolver(config: &ResolvedConfig) -> Option<Box<dyn AssetResolver>> {
    if !config.show_images {
        return None;
    }
    match &config.assets_dir {
        Some(dir) => {
            info!("Resolving images against {}", dir.display());
            Some(Box::new(DirectoryAssets::new(dir.clone())))
        }
        None => Some(Box::new(BundledAssets)),
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> io::Result<()> {
    let images = build_resolver(config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui, images.as_deref()));
    ratatui::restore();

    info!("Eatery shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    images: Option<&dyn AssetResolver>,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui, images))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(app, tui, event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CATALOG;
    use crate::core::deep_link::DeepLink;
    use crate::core::route::ScreenId;
    use crate::core::screens::ScreenError;
    use crate::test_support::test_app;
    use log::LevelFilter;
    use std::path::PathBuf;

    fn config(show_images: bool, assets_dir: Option<PathBuf>) -> ResolvedConfig {
        ResolvedConfig {
            start: DeepLink::Restaurants,
            show_images,
            assets_dir,
            log_file: PathBuf::from("eatery.log"),
            log_level: LevelFilter::Off,
        }
    }

    #[test]
    fn test_enter_opens_highlighted_restaurant() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        let effect = handle_event(&mut app, &mut tui, TuiEvent::Select);

        assert_eq!(effect, Effect::Navigated(ScreenId::Menu));
        match app.active_screen().unwrap() {
            ActiveScreen::Menu(menu) => assert_eq!(menu.items(), CATALOG[2].menu),
            other => panic!("expected menu, got {:?}", other.id()),
        }
        assert_eq!(tui.depth(), 2);
    }

    #[test]
    fn test_new_screen_starts_at_first_row() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Select);
        handle_event(&mut app, &mut tui, TuiEvent::Select);

        match app.active_screen().unwrap() {
            ActiveScreen::Details(details) => {
                assert_eq!(details.item().title, CATALOG[1].menu[0].title)
            }
            other => panic!("expected details, got {:?}", other.id()),
        }
    }

    #[test]
    fn test_back_restores_previous_cursor() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        handle_event(&mut app, &mut tui, TuiEvent::End);
        handle_event(&mut app, &mut tui, TuiEvent::Select);
        assert_eq!(tui.depth(), 2);

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Back);
        assert_eq!(effect, Effect::Navigated(ScreenId::Restaurants));
        assert_eq!(tui.depth(), 1);
        assert_eq!(tui.top().selection.selected(), Some(CATALOG.len() - 1));
    }

    #[test]
    fn test_back_at_root_is_a_no_op() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Back), Effect::None);
        assert_eq!(app.current_screen(), ScreenId::Restaurants);
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, TuiEvent::Select);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
    }

    #[test]
    fn test_error_screen_ignores_selection_but_allows_back() {
        let mut app = test_app();
        app.open(&DeepLink::Menu { restaurant: None }).unwrap();
        let mut tui = TuiState::new();

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Select), Effect::None);
        assert_eq!(
            app.active_screen(),
            Err(ScreenError::MissingParameter {
                screen: ScreenId::Menu
            })
        );

        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::Back),
            Effect::Navigated(ScreenId::Restaurants)
        );
    }

    #[test]
    fn test_sync_depth_drops_and_adds_views() {
        let mut tui = TuiState::new();
        tui.sync_depth(3);
        assert_eq!(tui.depth(), 3);
        tui.sync_depth(1);
        assert_eq!(tui.depth(), 1);
        tui.sync_depth(0);
        assert_eq!(tui.depth(), 1);
    }

    #[test]
    fn test_build_resolver_respects_config() {
        assert!(build_resolver(&config(false, None)).is_none());

        let bundled = build_resolver(&config(true, None)).unwrap();
        assert!(bundled.resolve(&CATALOG[0].image).is_ok());

        let dir = tempfile::tempdir().unwrap();
        let on_disk = build_resolver(&config(true, Some(dir.path().to_path_buf()))).unwrap();
        assert!(on_disk.resolve(&CATALOG[0].image).is_err());
    }
}
