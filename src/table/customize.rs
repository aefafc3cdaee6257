//! Column visibility and reorder editing.
//!
//! The edit surface itself (checklist plus drag widget) is an external
//! collaborator; the table supplies the entries to show, applies the
//! toggles and the final drag order, and persists when the surface closes.

use super::TableView;
use crate::collection::Collection;

/// One column as shown by the customize surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizeEntry {
    /// Column id, used as the checkbox value.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Current visibility; decides the included/excluded partition.
    pub visible: bool,
}

impl TableView {
    /// Entries for the customize surface: every known column in settings
    /// order, stale ids skipped.
    pub fn customize_entries(&self) -> Vec<CustomizeEntry> {
        self.settings
            .columns
            .iter()
            .filter_map(|setting| {
                self.config.declaration(&setting.id).map(|decl| CustomizeEntry {
                    id: setting.id.clone(),
                    label: decl.label(),
                    visible: setting.options.visible,
                })
            })
            .collect()
    }

    /// Applies one checkbox toggle. Unknown ids are ignored.
    pub fn set_column_visible(&mut self, id: &str, visible: bool) {
        if let Some(setting) = self.settings.column_mut(id) {
            setting.options.visible = visible;
        }
    }

    /// Applies the widget's final displayed order of visible columns.
    ///
    /// Stable re-sort of the settings sequence by position in
    /// `visible_order`; entries not listed (the invisible ones) keep their
    /// relative order.
    pub fn apply_visible_order(&mut self, visible_order: &[String]) {
        self.settings.columns.sort_by_key(|setting| {
            visible_order
                .iter()
                .position(|id| *id == setting.id)
                .map(|position| position as i64)
                .unwrap_or(-1)
        });
    }

    /// The edit surface closed: re-render and persist, whether or not
    /// anything changed.
    pub fn finish_customize(&mut self, collection: &mut dyn Collection) {
        self.render(collection);
        self.save_settings();
    }
}
