//! Platform seams the controller talks to, plus in-memory implementations
//! shared by the terminal and desktop front-ends.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shared::domain::{Mode, Severity};

/// A control that can be put into a busy state while a request is in flight.
pub trait BusyableControl: Send + Sync {
    fn label(&self) -> String;
    fn is_enabled(&self) -> bool;
    fn set_label(&self, label: &str);
    fn set_enabled(&self, enabled: bool);
}

pub trait TextSurface: Send + Sync {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SharedControl {
    state: Arc<Mutex<ControlState>>,
}

impl SharedControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControlState {
                label: label.into(),
                enabled: true,
            })),
        }
    }

    pub fn snapshot(&self) -> ControlState {
        lock(&self.state).clone()
    }
}

impl BusyableControl for SharedControl {
    fn label(&self) -> String {
        lock(&self.state).label.clone()
    }

    fn is_enabled(&self) -> bool {
        lock(&self.state).enabled
    }

    fn set_label(&self, label: &str) {
        lock(&self.state).label = label.to_string();
    }

    fn set_enabled(&self, enabled: bool) {
        lock(&self.state).enabled = enabled;
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedText {
    text: Arc<Mutex<String>>,
}

impl SharedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(Mutex::new(text.into())),
        }
    }
}

impl TextSurface for SharedText {
    fn text(&self) -> String {
        lock(&self.text).clone()
    }

    fn set_text(&self, text: &str) {
        *lock(&self.text) = text.to_string();
    }
}

/// Logical element names of the two panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    EncodeInput,
    EncodeOutput,
    EncodeButton,
    DecodeInput,
    DecodeOutput,
    DecodeButton,
}

impl ElementId {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::EncodeInput => "encode-input",
            ElementId::EncodeOutput => "encode-output",
            ElementId::EncodeButton => "encode-button",
            ElementId::DecodeInput => "decode-input",
            ElementId::DecodeOutput => "decode-output",
            ElementId::DecodeButton => "decode-button",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        [
            ElementId::EncodeInput,
            ElementId::EncodeOutput,
            ElementId::EncodeButton,
            ElementId::DecodeInput,
            ElementId::DecodeOutput,
            ElementId::DecodeButton,
        ]
        .into_iter()
        .find(|id| id.as_str() == name)
    }

    pub fn mode(self) -> Mode {
        match self {
            ElementId::EncodeInput | ElementId::EncodeOutput | ElementId::EncodeButton => {
                Mode::Encode
            }
            ElementId::DecodeInput | ElementId::DecodeOutput | ElementId::DecodeButton => {
                Mode::Decode
            }
        }
    }
}

#[derive(Clone)]
pub struct PanelBindings {
    pub input: Arc<dyn TextSurface>,
    pub output: Arc<dyn TextSurface>,
    pub trigger: Arc<dyn BusyableControl>,
}

/// Built once per front-end and handed to the controller.
#[derive(Clone)]
pub struct UiBindings {
    encode: PanelBindings,
    decode: PanelBindings,
    notifier: Arc<dyn Notifier>,
}

impl UiBindings {
    pub fn new(encode: PanelBindings, decode: PanelBindings, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            encode,
            decode,
            notifier,
        }
    }

    pub fn from_shared(
        encode: &SharedPanel,
        decode: &SharedPanel,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(encode.bindings(), decode.bindings(), notifier)
    }

    pub fn panel(&self, mode: Mode) -> &PanelBindings {
        match mode {
            Mode::Encode => &self.encode,
            Mode::Decode => &self.decode,
        }
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn text_surface(&self, id: ElementId) -> Option<Arc<dyn TextSurface>> {
        let panel = self.panel(id.mode());
        match id {
            ElementId::EncodeInput | ElementId::DecodeInput => Some(Arc::clone(&panel.input)),
            ElementId::EncodeOutput | ElementId::DecodeOutput => Some(Arc::clone(&panel.output)),
            ElementId::EncodeButton | ElementId::DecodeButton => None,
        }
    }

    pub fn control(&self, id: ElementId) -> Option<Arc<dyn BusyableControl>> {
        match id {
            ElementId::EncodeButton | ElementId::DecodeButton => {
                Some(Arc::clone(&self.panel(id.mode()).trigger))
            }
            _ => None,
        }
    }
}

/// Concrete in-memory panel; clones share state.
#[derive(Debug, Clone)]
pub struct SharedPanel {
    pub input: SharedText,
    pub output: SharedText,
    pub trigger: SharedControl,
}

impl SharedPanel {
    pub fn new(mode: Mode) -> Self {
        Self {
            input: SharedText::default(),
            output: SharedText::default(),
            trigger: SharedControl::new(mode.idle_label()),
        }
    }

    pub fn bindings(&self) -> PanelBindings {
        PanelBindings {
            input: Arc::new(self.input.clone()),
            output: Arc::new(self.output.clone()),
            trigger: Arc::new(self.trigger.clone()),
        }
    }
}

pub fn clear_panel(mode: Mode, bindings: &UiBindings) {
    let panel = bindings.panel(mode);
    panel.input.set_text("");
    panel.output.set_text("");
    bindings
        .notifier()
        .notify(mode.cleared_message(), Severity::Info);
}

pub fn input_placeholder(mode: Mode) -> &'static str {
    match mode {
        Mode::Encode => "Enter text to encode...\n\nExample: Hello, World!",
        Mode::Decode => "Enter base64 string to decode...\n\nExample: SGVsbG8sIFdvcmxkIQ==",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Which panel is visible. Exactly one is at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: Mode,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            active: Mode::Encode,
        }
    }
}

impl TabState {
    pub fn active(&self) -> Mode {
        self.active
    }

    pub fn switch_to(&mut self, mode: Mode) {
        self.active = mode;
    }

    pub fn is_visible(&self, mode: Mode) -> bool {
        self.active == mode
    }

    /// Ctrl+Enter runs the operation of the visible panel.
    pub fn shortcut_target(&self, ctrl: bool, key: Key) -> Option<Mode> {
        (ctrl && key == Key::Enter).then_some(self.active)
    }
}

#[cfg(test)]
#[path = "tests/ui_tests.rs"]
mod tests;
