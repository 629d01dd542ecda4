use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::assets::AssetResolver;
use crate::core::screens::ActiveScreen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorView, ItemDetail, MenuList, RestaurantList, TitleBar};

/// Draw one frame: title bar on top, the active screen below it.
pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    images: Option<&dyn AssetResolver>,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(app.navigator.trail().collect(), app.status_message.clone());
    title_bar.render(frame, title_area);

    tui.sync_depth(app.navigator.depth());
    let view = tui.top();

    // Main area - show the screen OR why it could not be entered
    match app.active_screen() {
        Ok(ActiveScreen::Restaurants(screen)) => {
            RestaurantList::new(&screen, &mut view.selection, images).render(frame, main_area);
        }
        Ok(ActiveScreen::Menu(screen)) => {
            MenuList::new(&screen, &mut view.selection).render(frame, main_area);
        }
        Ok(ActiveScreen::Details(screen)) => {
            ItemDetail::new(&screen, &mut view.scroll, images).render(frame, main_area);
        }
        Err(error) => ErrorView::new(error).render(frame, main_area),
    }
}
