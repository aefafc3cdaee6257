//! Table configuration.

use std::sync::Arc;

use crate::columns::ColumnDeclaration;
use crate::model::Record;
use crate::query::OrderKey;

/// Maps a record to a navigable target, switching row semantics from plain
/// rows to link rows.
pub type LinkFn = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Page-size choices offered by the pagination controls.
pub const PER_PAGE_CHOICES: [u32; 3] = [25, 50, 100];

/// Everything a caller can configure about a table, with defaults filled at
/// construction.
///
/// # Example
///
/// ```
/// use recordgrid::columns::ColumnDeclaration;
/// use recordgrid::table::TableConfig;
///
/// let config = TableConfig::new("projects")
///     .columns(vec![
///         ColumnDeclaration::new("name").sortable_by("name"),
///         ColumnDeclaration::new("status"),
///     ])
///     .default_columns(["name", "status"]);
/// ```
#[derive(Clone)]
pub struct TableConfig {
    /// Required identifier; namespaces the persisted settings and tags the
    /// rendered table for hosts and tests.
    pub id: String,
    /// Declared column schema.
    pub columns: Vec<ColumnDeclaration>,
    /// Ids visible by default, in default display order.
    pub default_columns: Vec<String>,
    /// Optional record-to-target link; rows carry the result as an href.
    pub link: Option<LinkFn>,
    /// Overrides the number of loader placeholder rows.
    pub loader_count: Option<usize>,
    /// Whether the pagination summary is shown and counts are requested.
    pub pagination: bool,
    /// Fixed tie-break ordering key.
    pub secondary_sort: OrderKey,
    /// When `false`, the table renders from the collection's current state
    /// but never itself triggers a fetch.
    pub manage_collection: bool,
    /// Eager-loading hint applied once at init.
    pub include: Option<String>,
}

impl TableConfig {
    /// Creates a configuration with defaults: pagination on, collection
    /// management on, tie-break `updated_at desc`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            columns: Vec::new(),
            default_columns: Vec::new(),
            link: None,
            loader_count: None,
            pagination: true,
            secondary_sort: OrderKey::desc("updated_at"),
            manage_collection: true,
            include: None,
        }
    }

    /// Sets the declared columns.
    pub fn columns(mut self, columns: Vec<ColumnDeclaration>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the default-visible column ids.
    pub fn default_columns<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_columns = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the row link function.
    pub fn link(mut self, f: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
        self.link = Some(Arc::new(f));
        self
    }

    /// Overrides the loader placeholder row count.
    pub fn loader_count(mut self, count: usize) -> Self {
        self.loader_count = Some(count);
        self
    }

    /// Enables or disables the pagination summary.
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    /// Replaces the tie-break ordering key.
    pub fn secondary_sort(mut self, key: OrderKey) -> Self {
        self.secondary_sort = key;
        self
    }

    /// Enables or disables collection management (fetch-on-render and
    /// fetch-on-sort).
    pub fn manage_collection(mut self, enabled: bool) -> Self {
        self.manage_collection = enabled;
        self
    }

    /// Sets the eager-loading hint.
    pub fn include(mut self, spec: impl Into<String>) -> Self {
        self.include = Some(spec.into());
        self
    }

    /// Looks up a declaration by id.
    pub fn declaration(&self, id: &str) -> Option<&ColumnDeclaration> {
        self.columns.iter().find(|c| c.id == id)
    }
}
