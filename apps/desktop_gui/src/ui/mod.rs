//! UI layer for desktop GUI: app shell, clipboard strategies and small widget helpers.

pub mod app;
pub mod clipboard;
pub mod widgets;

pub use app::{CodecGuiApp, StartupConfig};
