use std::time::Duration;

use client_core::{
    clipboard::copy_to_clipboard,
    files::{load_dropped_files, read_dropped_path, DroppedFile},
    ui::{clear_panel, input_placeholder, Key as ShortcutKey},
    ClientSettings, Notifier, SharedPanel, SharedText, TabState, TextSurface,
    ToastSurface, UiBindings,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::{Mode, Severity};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{status_line, UiEvent},
        orchestration::dispatch_operation,
    },
    ui::{
        clipboard::{EguiClipboard, SystemClipboard},
        widgets::{auto_rows, MAX_TEXT_ROWS, MIN_TEXT_ROWS},
    },
};

pub const SETTINGS_STORAGE_KEY: &str = "codec_gui_settings";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
    pub request_timeout: Option<Duration>,
}

impl StartupConfig {
    /// Command line values win over `client.toml` and `APP__*` variables.
    pub fn resolve(
        base: ClientSettings,
        server_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            server_url: server_url.unwrap_or(base.server_url),
            request_timeout: match timeout_secs {
                Some(0) => None,
                Some(secs) => Some(Duration::from_secs(secs)),
                None => base.request_timeout,
            },
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            server_url: self.server_url.clone(),
            request_timeout: self.request_timeout,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedGuiSettings {
    #[serde(default)]
    pub active_tab: Option<Mode>,
}

pub struct CodecGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    encode: SharedPanel,
    decode: SharedPanel,
    bindings: UiBindings,
    toasts: ToastSurface,
    tabs: TabState,
    server_url: String,
    status: String,
}

impl CodecGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        encode: SharedPanel,
        decode: SharedPanel,
        toasts: ToastSurface,
        server_url: String,
        persisted: Option<PersistedGuiSettings>,
    ) -> Self {
        let bindings = UiBindings::from_shared(&encode, &decode, std::sync::Arc::new(toasts.clone()));
        let mut tabs = TabState::default();
        if let Some(mode) = persisted.and_then(|settings| settings.active_tab) {
            tabs.switch_to(mode);
        }
        Self {
            cmd_tx,
            ui_rx,
            encode,
            decode,
            bindings,
            toasts,
            tabs,
            server_url,
            status: "Ready".to_string(),
        }
    }

    fn panel(&self, mode: Mode) -> &SharedPanel {
        match mode {
            Mode::Encode => &self.encode,
            Mode::Decode => &self.decode,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::OperationFinished { mode, result } => {
                    self.status = status_line(mode, &result);
                }
            }
        }
    }

    fn trigger(&mut self, mode: Mode) {
        let trigger = self.panel(mode).trigger.clone();
        dispatch_operation(
            &self.cmd_tx,
            BackendCommand::RunOperation { mode },
            &trigger,
            &mut self.status,
        );
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (ctrl, key) = ctx.input(|i| {
            let key = if i.key_pressed(egui::Key::Enter) {
                ShortcutKey::Enter
            } else {
                ShortcutKey::Other
            };
            (i.modifiers.ctrl, key)
        });
        if let Some(mode) = self.tabs.shortcut_target(ctrl, key) {
            self.trigger(mode);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(first) = dropped.into_iter().next() else {
            return;
        };

        let file = if let Some(bytes) = &first.bytes {
            Some(DroppedFile::new(first.name.clone(), bytes.to_vec()))
        } else if let Some(path) = &first.path {
            match read_dropped_path(path) {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to read dropped file");
                    self.toasts.notify(
                        &format!("Could not read \"{}\"", path.display()),
                        Severity::Error,
                    );
                    None
                }
            }
        } else {
            None
        };

        if let Some(file) = file {
            let target = self.panel(self.tabs.active()).input.clone();
            load_dropped_files(&target, [file], &self.toasts);
        }
    }

    fn open_file(&mut self, mode: Mode) {
        let Some(path) = rfd::FileDialog::new().pick_file() else {
            return;
        };
        match read_dropped_path(&path) {
            Ok(file) => {
                let target = self.panel(mode).input.clone();
                load_dropped_files(&target, [file], &self.toasts);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to open file");
                self.toasts.notify(
                    &format!("Could not read \"{}\"", path.display()),
                    Severity::Error,
                );
            }
        }
    }

    fn show_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in Mode::ALL {
                let label = match mode {
                    Mode::Encode => "Encode",
                    Mode::Decode => "Decode",
                };
                if ui.selectable_label(self.tabs.is_visible(mode), label).clicked() {
                    self.tabs.switch_to(mode);
                }
            }
        });
    }

    fn show_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, mode: Mode) {
        let panel = self.panel(mode).clone();

        ui.label(match mode {
            Mode::Encode => "Text",
            Mode::Decode => "Base64",
        });
        editable_text_area(ui, &panel.input, input_placeholder(mode));

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let control = panel.trigger.snapshot();
            if ui
                .add_enabled(control.enabled, egui::Button::new(control.label))
                .clicked()
            {
                self.trigger(mode);
            }
            if ui.button("Clear").clicked() {
                clear_panel(mode, &self.bindings);
            }
            if ui.button("Open file…").clicked() {
                self.open_file(mode);
            }
            ui.label(
                egui::RichText::new("Ctrl+Enter to run, or drop a file onto the window")
                    .small()
                    .weak(),
            );
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Result");
            if ui.small_button("Copy").clicked() {
                copy_to_clipboard(
                    &panel.output,
                    &SystemClipboard,
                    &EguiClipboard(ctx),
                    &self.toasts,
                );
            }
        });
        read_only_text_area(ui, &panel.output);
    }

    fn show_toast(&self, ctx: &egui::Context) {
        let Some(toast) = self.toasts.current() else {
            return;
        };
        let fill = match toast.severity {
            Severity::Info => egui::Color32::from_rgb(23, 162, 184),
            Severity::Success => egui::Color32::from_rgb(40, 167, 69),
            Severity::Error => egui::Color32::from_rgb(220, 53, 69),
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&toast.message).color(egui::Color32::WHITE));
                    });
            });
    }
}

fn editable_text_area(ui: &mut egui::Ui, surface: &SharedText, hint: &str) {
    let mut text = surface.text();
    let rows = auto_rows(&text, MIN_TEXT_ROWS, MAX_TEXT_ROWS);
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text(hint)
            .font(egui::TextStyle::Monospace)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        surface.set_text(&text);
    }
}

fn read_only_text_area(ui: &mut egui::Ui, surface: &SharedText) {
    let text = surface.text();
    let rows = auto_rows(&text, MIN_TEXT_ROWS, MAX_TEXT_ROWS);
    let mut view = text.as_str();
    ui.add(
        egui::TextEdit::multiline(&mut view)
            .font(egui::TextStyle::Monospace)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
}

impl eframe::App for CodecGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.server_url).small().weak());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Base64 Encoder/Decoder");
            ui.add_space(8.0);
            self.show_tabs(ui);
            ui.separator();

            if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
                ui.colored_label(
                    egui::Color32::from_rgb(0, 123, 255),
                    "Release to load the file into the input",
                );
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                let mode = self.tabs.active();
                self.show_panel(ui, ctx, mode);
            });
        });

        self.show_toast(ctx);
        ctx.request_repaint_after(Duration::from_millis(100));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedGuiSettings {
            active_tab: Some(self.tabs.active()),
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
