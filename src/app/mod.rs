//! App module - contains the main application state and navigation

mod modals;
mod tasks;
mod views;

pub(crate) use modals::CreateStarForm;
pub(crate) use tasks::TaskMessage;

use crate::api::{ApiClient, StarsApi};
use crate::flash::FlashStore;
use crate::page::StarsPage;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Where the app currently is; replaces the `/universes/{id}/stars` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AllStars,
    Universe(u64),
}

impl Route {
    pub fn from_scope(scope: Option<u64>) -> Self {
        scope.map_or(Route::AllStars, Route::Universe)
    }

    pub fn scope(self) -> Option<u64> {
        match self {
            Route::AllStars => None,
            Route::Universe(id) => Some(id),
        }
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) api: Arc<dyn StarsApi>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) task_tx: mpsc::UnboundedSender<TaskMessage>,
    pub(crate) task_rx: mpsc::UnboundedReceiver<TaskMessage>,
    // Navigation
    pub(crate) route: Route,
    pub(crate) page: StarsPage,
    /// Bumped on every navigation so results for a left page are ignored
    pub(crate) page_generation: u64,
    pub(crate) flash: FlashStore,
    pub(crate) universe_input: String,
    pub(crate) needs_initial_load: bool,
    // Create dialog
    pub(crate) create_form: Option<CreateStarForm>,
    // Settings
    /// Effective URL, may come from the environment
    pub(crate) api_base_url: String,
    pub(crate) configured_api_url: String,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let client = ApiClient::new(&settings.api_base_url());
        let api_base_url = client.base_url().to_string();
        info!(url = %api_base_url, "Using stars API");
        let api: Arc<dyn StarsApi> = Arc::new(client);

        let route = Route::from_scope(settings.last_universe_id);
        let (task_tx, task_rx) = mpsc::unbounded_channel();

        Self {
            api,
            runtime,
            task_tx,
            task_rx,
            route,
            page: StarsPage::new(route.scope()),
            page_generation: 0,
            flash: FlashStore::new(),
            universe_input: route.scope().map(|id| id.to_string()).unwrap_or_default(),
            needs_initial_load: true,
            create_form: None,
            api_base_url,
            configured_api_url: settings.api_base_url.clone(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_base_url: self.configured_api_url.clone(),
            last_universe_id: self.route.scope(),
        };
        settings.save(&self.data_dir);
    }

    /// Leave the current page and mount a fresh one for `route`.
    pub fn navigate(&mut self, ctx: &egui::Context, route: Route) {
        info!(?route, "Navigating");
        self.route = route;
        self.page_generation += 1;
        self.page = StarsPage::new(route.scope());
        self.universe_input = route.scope().map(|id| id.to_string()).unwrap_or_default();
        self.create_form = None;

        let request = self.page.load_data(&mut self.flash);
        self.spawn_load(ctx, request);
    }

    /// Parse the universe field of the top bar
    pub(crate) fn parse_universe_input(input: &str) -> Option<u64> {
        input.trim().parse().ok().filter(|id| *id > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_round_trips_scope() {
        assert_eq!(Route::from_scope(None), Route::AllStars);
        assert_eq!(Route::from_scope(Some(4)).scope(), Some(4));
        assert_eq!(Route::AllStars.scope(), None);
    }

    #[test]
    fn universe_input_parsing() {
        assert_eq!(App::parse_universe_input(" 12 "), Some(12));
        assert_eq!(App::parse_universe_input("0"), None);
        assert_eq!(App::parse_universe_input("abc"), None);
        assert_eq!(App::parse_universe_input(""), None);
    }
}
