use std::sync::Arc;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{
    load_client_settings, notify::DEFAULT_TOAST_TTL, HttpCodecBackend, OperationController,
    SharedPanel, ToastSurface, UiBindings,
};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::Mode;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime::OperationWorker},
    controller::events::UiEvent,
    ui::{
        app::{PersistedGuiSettings, SETTINGS_STORAGE_KEY},
        CodecGuiApp, StartupConfig,
    },
};

#[derive(Parser, Debug)]
#[command(name = "desktop_gui", about = "Base64 encoder/decoder desktop client")]
struct Args {
    /// Backend base URL; overrides client.toml and APP__SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    /// Request timeout in seconds, 0 disables it.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let startup = StartupConfig::resolve(load_client_settings(), args.server_url, args.timeout_secs);
    let backend = HttpCodecBackend::from_settings(&startup.client_settings())?;
    tracing::info!(server_url = backend.server_url(), "starting desktop gui");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build backend runtime")?;
    let toasts = ToastSurface::new(runtime.handle().clone(), DEFAULT_TOAST_TTL);

    let encode = SharedPanel::new(Mode::Encode);
    let decode = SharedPanel::new(Mode::Decode);
    let worker = Arc::new(OperationWorker {
        controller: OperationController::new(backend, Arc::new(toasts.clone())),
        bindings: UiBindings::from_shared(&encode, &decode, Arc::new(toasts.clone())),
    });

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(runtime, cmd_rx, ui_tx, worker);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Base64 Encoder/Decoder")
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([480.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    let server_url = startup.server_url.clone();
    eframe::run_native(
        "Base64 Encoder/Decoder",
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedGuiSettings>(&text).ok())
            });
            Ok(Box::new(CodecGuiApp::new(
                cmd_tx,
                ui_rx,
                encode,
                decode,
                toasts,
                server_url,
                persisted_settings,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with error: {err}"))
}
