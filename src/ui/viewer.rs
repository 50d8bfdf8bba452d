//! Native window around the home page
//!
//! The page lives behind an `Arc`; population and click handling run on the
//! tokio runtime and ask for a repaint when they touch the document.

use crate::api::HttpApi;
use crate::app::{lock_document, HomePage};
use crate::navigation::Navigator;
use crate::session::{SessionProbe, Storage};
use crate::settings::Settings;
use crate::theme;
use crate::ui::components::paint_node;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub struct HomeApp {
    page: Arc<HomePage<HttpApi>>,
    runtime: tokio::runtime::Runtime,
    settings: Settings,
    data_dir: PathBuf,
    window_pos: Option<egui::Pos2>,
    window_size: Option<egui::Vec2>,
}

impl HomeApp {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: HttpApi,
        session: Arc<dyn SessionProbe>,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        theme::apply_visuals(&cc.egui_ctx);

        let ctx = cc.egui_ctx.clone();
        let mut page = HomePage::new(api, session, storage, navigator)
            .with_repaint(Arc::new(move || ctx.request_repaint()));
        page.assemble();

        let app = Self {
            page: Arc::new(page),
            runtime,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
        };
        app.start_population();
        app
    }

    /// Feed and sidebar are requested independently; either may land first
    fn start_population(&self) {
        info!("Requesting posts and bloggers");
        let page = self.page.clone();
        self.runtime.spawn(async move { page.populate_feed().await });
        let page = self.page.clone();
        self.runtime.spawn(async move { page.populate_sidebar().await });
    }

    fn dispatch_clicks(&self, clicks: Vec<crate::dom::NodeId>) {
        for target in clicks {
            debug!(node = ?target, "Click");
            let page = self.page.clone();
            self.runtime
                .spawn(async move { page.dispatch_click(target).await });
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}

impl eframe::App for HomeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        let mut clicks = Vec::new();
        let document = self.page.document();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_PAGE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let doc = lock_document(&document);
                        for &child in doc.children(doc.body()) {
                            paint_node(ui, &doc, child, &mut clicks);
                        }
                    });
            });

        // Handlers lock the document themselves
        self.dispatch_clicks(clicks);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Blog Home closing");
        self.save_settings();
    }
}
