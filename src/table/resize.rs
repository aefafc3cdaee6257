//! Column resize gesture.
//!
//! The host owns the pointer: it binds window-level move/up listeners for the
//! duration of one drag and must unbind them unconditionally on drag-end.
//! The table only tracks which column is being dragged and keeps the widths
//! in settings current on every move; the single persist happens on drag-end.

use super::state::MIN_COLUMN_WIDTH;
use super::TableView;

impl TableView {
    /// Starts a resize drag on `column`.
    ///
    /// `measured` carries the rendered width of every currently visible
    /// column; snapshotting them into settings freezes the auto layout into
    /// fixed pixel widths before the drag moves anything.
    pub fn begin_resize(&mut self, column: &str, measured: &[(String, u32)]) {
        for (id, width) in measured {
            if let Some(setting) = self.settings.column_mut(id) {
                setting.options.width = Some(*width);
            }
        }
        self.resizing = Some(column.to_string());
    }

    /// Tracks one pointer move: writes the clamped width of the dragged
    /// column into settings. No-op outside a drag.
    pub fn resize_to(&mut self, width: i64) {
        let Some(column) = self.resizing.clone() else {
            return;
        };
        let clamped = width.max(MIN_COLUMN_WIDTH as i64) as u32;
        if let Some(setting) = self.settings.column_mut(&column) {
            setting.options.width = Some(clamped);
        }
    }

    /// Ends the drag and persists the settings once. Safe to call without a
    /// drag in progress.
    pub fn end_resize(&mut self) {
        if self.resizing.take().is_some() {
            self.save_settings();
        }
    }
}
