mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{config::normalize_server_url, load_settings};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::DishFinderApp,
};

#[derive(Parser, Debug)]
#[command(name = "dish-gui", version)]
struct Args {
    /// Overrides the configured recommender url.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = &args.server_url {
        settings.server_url = normalize_server_url(url);
    }
    tracing::info!("Food recommendation client initialized");
    tracing::info!(
        server_url = %settings.server_url,
        "make sure the recommendation server is running"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let server_url = settings.server_url.clone();
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dish Finder")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Dish Finder",
        options,
        Box::new(|_cc| Ok(Box::new(DishFinderApp::new(server_url, cmd_tx, ui_rx)))),
    )
}
