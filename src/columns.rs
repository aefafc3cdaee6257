//! Column declarations.

use std::sync::Arc;

use crate::model::Record;

/// Cell renderer shared across rows.
pub type RenderFn = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Where a column's cell content comes from.
///
/// Resolved once at declaration time: either a direct attribute lookup on the
/// record or a caller-supplied render function.
#[derive(Clone)]
pub enum CellSource {
    /// Look the named attribute up on the record; null renders empty.
    Attribute(String),
    /// Caller-supplied renderer.
    Custom(RenderFn),
}

impl CellSource {
    /// Renders one cell for the given record.
    pub fn render(&self, record: &Record) -> String {
        match self {
            CellSource::Attribute(name) => record.display(name),
            CellSource::Custom(f) => f(record),
        }
    }
}

impl std::fmt::Debug for CellSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellSource::Attribute(name) => f.debug_tuple("Attribute").field(name).finish(),
            CellSource::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Static declaration of one grid column.
///
/// Declarations are immutable for the life of the component; everything a
/// user can change (order, visibility, width) lives in the persisted
/// [`ColumnSetting`](crate::settings::ColumnSetting) instead.
///
/// # Example
///
/// ```
/// use recordgrid::columns::ColumnDeclaration;
///
/// let column = ColumnDeclaration::new("updated_at")
///     .header("Last Update")
///     .sortable_by("updated_at")
///     .class("text-small");
///
/// assert_eq!(column.label(), "Last Update");
/// ```
#[derive(Debug, Clone)]
pub struct ColumnDeclaration {
    /// Unique column id.
    pub id: String,
    /// Header label; falls back to the title-cased id.
    pub header: Option<String>,
    /// Attribute the collection can order by when this header is clicked.
    pub sort: Option<String>,
    /// Class hint passed through to the render surface.
    pub class: Option<String>,
    /// Number of placeholder lines a loader cell shows for this column.
    pub loader_rows: Option<u32>,
    /// Cell content source.
    pub source: CellSource,
}

impl ColumnDeclaration {
    /// Creates a declaration whose cells read the attribute named by `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            source: CellSource::Attribute(id.clone()),
            id,
            header: None,
            sort: None,
            class: None,
            loader_rows: None,
        }
    }

    /// Sets the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Makes the column sortable by the given collection attribute.
    pub fn sortable_by(mut self, attribute: impl Into<String>) -> Self {
        self.sort = Some(attribute.into());
        self
    }

    /// Sets the class hint.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the number of loader placeholder lines for this column.
    pub fn loader_rows(mut self, rows: u32) -> Self {
        self.loader_rows = Some(rows);
        self
    }

    /// Replaces the attribute lookup with a custom render function.
    pub fn render(mut self, f: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
        self.source = CellSource::Custom(Arc::new(f));
        self
    }

    /// The label shown in the header row.
    pub fn label(&self) -> String {
        self.header.clone().unwrap_or_else(|| titleize(&self.id))
    }
}

/// Turns a snake_case id into a header label: `updated_at` → `Updated At`.
pub(crate) fn titleize(id: &str) -> String {
    id.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
