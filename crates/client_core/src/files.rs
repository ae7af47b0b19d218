use std::{fs, io, path::Path};

use shared::domain::Severity;

use crate::ui::{Notifier, TextSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Contents read as UTF-8; invalid sequences become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents).into_owned()
    }
}

pub fn read_dropped_path(path: &Path) -> io::Result<DroppedFile> {
    let contents = fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(DroppedFile { name, contents })
}

pub fn loaded_message(name: &str) -> String {
    format!("File \"{name}\" loaded")
}

/// Replaces the target text with the file contents. Only the first of several files is used.
pub fn load_dropped_files(
    target: &dyn TextSurface,
    files: impl IntoIterator<Item = DroppedFile>,
    notifier: &dyn Notifier,
) -> Option<String> {
    let file = files.into_iter().next()?;
    target.set_text(&file.text());
    notifier.notify(&loaded_message(&file.name), Severity::Success);
    tracing::debug!(name = %file.name, bytes = file.contents.len(), "file loaded");
    Some(file.name)
}
