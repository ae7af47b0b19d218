//! Recording doubles for the UI seams.

use std::sync::{Arc, Mutex};

use shared::domain::Severity;

use crate::ui::{lock, BusyableControl, Notifier};

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<(String, Severity)> {
        lock(&self.seen).clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        lock(&self.seen).last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        lock(&self.seen).push((message.to_string(), severity));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    Label(String),
    Enabled(bool),
}

/// Control that remembers every mutation applied to it.
#[derive(Debug, Clone)]
pub struct RecordingControl {
    label: Arc<Mutex<String>>,
    enabled: Arc<Mutex<bool>>,
    events: Arc<Mutex<Vec<ControlEvent>>>,
}

impl RecordingControl {
    pub fn new(label: &str, enabled: bool) -> Self {
        Self {
            label: Arc::new(Mutex::new(label.to_string())),
            enabled: Arc::new(Mutex::new(enabled)),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<ControlEvent> {
        lock(&self.events).clone()
    }

    /// Number of times the control was disabled.
    pub fn busy_transitions(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| **event == ControlEvent::Enabled(false))
            .count()
    }
}

impl BusyableControl for RecordingControl {
    fn label(&self) -> String {
        lock(&self.label).clone()
    }

    fn is_enabled(&self) -> bool {
        *lock(&self.enabled)
    }

    fn set_label(&self, label: &str) {
        *lock(&self.label) = label.to_string();
        lock(&self.events).push(ControlEvent::Label(label.to_string()));
    }

    fn set_enabled(&self, enabled: bool) {
        *lock(&self.enabled) = enabled;
        lock(&self.events).push(ControlEvent::Enabled(enabled));
    }
}
