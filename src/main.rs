//! Blog Home - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod db;
mod dom;
mod navigation;
mod session;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use anyhow::Context as _;
use api::HttpApi;
use app::{lock_document, HomePage};
use clap::{Parser, Subcommand};
use constants::*;
use db::SessionStore;
use eframe::egui;
use navigation::BrowserNavigator;
use session::Storage;
use settings::Settings;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use utils::get_data_dir;

#[derive(Parser)]
#[command(name = "blog-home", version, about = "Home view for the postcards blog")]
struct Cli {
    /// Base URL of the REST API (overrides settings.json)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Base URL the site pages are served from (overrides settings.json)
    #[arg(long, global = true)]
    site: Option<String>,

    /// Directory for settings, session database and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the home page window (default)
    View,
    /// Load the home page and write it out as HTML
    Export {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Store a session token
    Login { token: String },
    /// Clear all session storage
    Logout,
}

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "blog-home.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,blog_home=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(get_data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Blog Home starting");

    // Overrides apply to this run only; settings.json keeps its own values
    let settings = Settings::load(&data_dir);
    let api_base = cli.api.clone().unwrap_or_else(|| settings.api_base_url.clone());
    let site_base = cli.site.clone().unwrap_or_else(|| settings.site_base_url.clone());

    let db_path = data_dir.join("session.db");
    let store = match SessionStore::open(&db_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(error = %e, path = %db_path.display(), "Failed to open session database");
            return Err(e).context("Failed to open session database");
        }
    };

    match cli.command.unwrap_or(Command::View) {
        Command::Login { token } => {
            store.set(SESSION_TOKEN_KEY, &token)?;
            info!("Session token stored");
            println!("Logged in");
        }
        Command::Logout => {
            store.clear()?;
            info!("Session storage cleared");
            println!("Logged out");
        }
        Command::Export { out } => {
            let navigator = Arc::new(BrowserNavigator::new(&site_base, false)?);
            let mut page = HomePage::new(HttpApi::new(&api_base), store.clone(), store, navigator);
            page.assemble();

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(page.populate());

            let html = {
                let document = page.document();
                let doc = lock_document(&document);
                dom::render::to_document_html(&doc, "Welcome to Your Workspace")
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Home page exported");
                }
                None => print!("{html}"),
            }
        }
        Command::View => {
            let navigator = Arc::new(BrowserNavigator::new(
                &site_base,
                settings.open_links_in_browser,
            )?);
            let runtime = tokio::runtime::Runtime::new()?;
            let api = HttpApi::new(&api_base);

            let mut viewport = egui::ViewportBuilder::default()
                .with_inner_size(match (settings.window_w, settings.window_h) {
                    (Some(w), Some(h)) => egui::vec2(w, h),
                    _ => egui::vec2(1200.0, 800.0),
                })
                .with_min_inner_size([800.0, 600.0])
                .with_title("Blog Home");
            if let (Some(x), Some(y)) = (settings.window_x, settings.window_y) {
                viewport = viewport.with_position(egui::pos2(x, y));
            }

            let options = eframe::NativeOptions {
                viewport,
                ..Default::default()
            };

            eframe::run_native(
                "Blog Home",
                options,
                Box::new(move |cc| {
                    Ok(Box::new(ui::viewer::HomeApp::new(
                        cc,
                        api,
                        store.clone(),
                        store,
                        navigator,
                        runtime,
                        settings,
                        data_dir,
                    )))
                }),
            )
            .map_err(|e| anyhow::anyhow!("Failed to run window: {e}"))?;
        }
    }

    Ok(())
}
