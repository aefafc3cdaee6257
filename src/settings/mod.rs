//! Persisted per-user display settings.
//!
//! One [`TableSettings`] value per table instance, keyed under
//! [`SETTINGS_PREFIX`] by the table's configured id. The settings value is
//! exclusively owned by the component; the store only ever holds a serialized
//! copy.

mod resolve;
mod store;

pub use resolve::resolve_columns;
pub use store::MemoryBackend;
pub use store::SettingsBackend;
pub use store::SettingsStore;

use serde::Deserialize;
use serde::Serialize;

use crate::query::OrderSpec;

/// Namespace prefix for settings keys in the backing store.
pub const SETTINGS_PREFIX: &str = "table_settings/";

/// User-adjustable options for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOptions {
    /// Whether the column is shown.
    pub visible: bool,
    /// Fixed width in pixels; `None` means auto-sized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// One column's entry in the persisted layout.
///
/// Position within [`TableSettings::columns`] is the display order. The id
/// set covers every declared column (reconciliation appends missing ids) and
/// may additionally retain ids a schema change removed; those are ignored at
/// render time but never purged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSetting {
    /// Declared column id.
    pub id: String,
    /// User-adjustable options.
    pub options: ColumnOptions,
}

impl ColumnSetting {
    /// Creates a setting with the given visibility and no width.
    pub fn new(id: impl Into<String>, visible: bool) -> Self {
        Self {
            id: id.into(),
            options: ColumnOptions {
                visible,
                width: None,
            },
        }
    }
}

/// The persisted unit: everything the user can change about a table.
///
/// Written whole after every mutating interaction; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Collection page size.
    pub per_page: u32,
    /// Current ordering, tie-break key included.
    pub order: OrderSpec,
    /// Column layout, in display order.
    pub columns: Vec<ColumnSetting>,
}

impl TableSettings {
    /// Returns a mutable handle to the setting for `id`, if present.
    pub fn column_mut(&mut self, id: &str) -> Option<&mut ColumnSetting> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    /// Returns the setting for `id`, if present.
    pub fn column(&self, id: &str) -> Option<&ColumnSetting> {
        self.columns.iter().find(|c| c.id == id)
    }
}

/// A loaded settings blob before merge.
///
/// Field-wise optional: the stored value wins per field, structural defaults
/// fill the rest. An unparsable blob loads as `StoredSettings::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub order: Option<OrderSpec>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnSetting>>,
}
