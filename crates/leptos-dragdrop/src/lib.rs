//! Leptos DragDrop Utilities
//!
//! File drag-and-drop for Leptos upload areas.
//! A drop area and a hidden file input share one selected-file signal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Name and size of the selected file, cheap to clone into views
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: f64,
}

impl FileSummary {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size_bytes: file.size(),
        }
    }

    /// Size in megabytes with two decimals, e.g. "1.50 MB"
    pub fn size_label(&self) -> String {
        format_megabytes(self.size_bytes)
    }
}

pub fn format_megabytes(size_bytes: f64) -> String {
    format!("{:.2} MB", size_bytes / 1024.0 / 1024.0)
}

/// Drop area state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// A drag is hovering over the area
    pub is_over_read: ReadSignal<bool>,
    pub is_over_write: WriteSignal<bool>,
    /// Selected file handle (browser object, kept in local storage)
    pub file_read: ReadSignal<Option<web_sys::File>, LocalStorage>,
    pub file_write: WriteSignal<Option<web_sys::File>, LocalStorage>,
    /// Display summary of the selected file
    pub summary_read: ReadSignal<Option<FileSummary>>,
    pub summary_write: WriteSignal<Option<FileSummary>>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (is_over_read, is_over_write) = signal(false);
    let (file_read, file_write) = signal_local(None::<web_sys::File>);
    let (summary_read, summary_write) = signal(None::<FileSummary>);
    FileDropSignals {
        is_over_read,
        is_over_write,
        file_read,
        file_write,
        summary_read,
        summary_write,
    }
}

/// Select a file (or clear the selection with `None`)
pub fn select_file(drop: &FileDropSignals, file: Option<web_sys::File>) {
    drop.summary_write.set(file.as_ref().map(FileSummary::from_file));
    drop.file_write.set(file);
}

/// Clear selection and hover state
pub fn reset(drop: &FileDropSignals) {
    drop.is_over_write.set(false);
    select_file(drop, None);
}

/// Take the selected file without tracking
pub fn selected_file(drop: &FileDropSignals) -> Option<web_sys::File> {
    drop.file_read.get_untracked()
}

fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

/// Create dragover handler: accept the drop and highlight the area
pub fn make_on_dragover(drop: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drop.is_over_write.set(true);
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(drop: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        drop.is_over_write.set(false);
    }
}

/// Create drop handler: keeps the first dropped file
pub fn make_on_drop(drop: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drop.is_over_write.set(false);
        let file = first_file(ev.data_transfer().and_then(|dt| dt.files()));
        if file.is_some() {
            select_file(&drop, file);
        }
    }
}

/// Create change handler for the backing `<input type="file">`
pub fn make_on_input_change(drop: FileDropSignals) -> impl Fn(web_sys::Event) + Copy + 'static {
    move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = first_file(input.files());
        if file.is_some() {
            select_file(&drop, file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0.0), "0.00 MB");
        assert_eq!(format_megabytes(1024.0 * 1024.0 * 1.5), "1.50 MB");
        assert_eq!(format_megabytes(10_000.0), "0.01 MB");
    }

    #[test]
    fn test_summary_label() {
        let summary = FileSummary {
            name: "shot.png".to_string(),
            size_bytes: 3.0 * 1024.0 * 1024.0,
        };
        assert_eq!(summary.size_label(), "3.00 MB");
    }
}
