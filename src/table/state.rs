//! Render-ready view model types.
//!
//! The table never touches a render surface; it maintains these values and
//! the host draws them. Everything here is plain data.

use rand::seq::IndexedRandom;
use uuid::Uuid;

use crate::query::Direction;

/// Minimum column width a resize drag can produce, in pixels.
pub const MIN_COLUMN_WIDTH: u32 = 50;

/// Placeholder bar widths, in percent, sampled per loader line.
const LOADER_BAR_WIDTHS: [u8; 3] = [100, 75, 50];

/// Table sizing mode.
///
/// `Fixed` once the leading settings entry carries an explicit width (the
/// state every resize snapshot produces), `Auto` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Columns size themselves to content.
    Auto,
    /// Columns use the widths stored in settings.
    Fixed,
}

/// One rendered header cell, visible columns only, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column id.
    pub id: String,
    /// Label text.
    pub label: String,
    /// Attribute a click sorts by; `None` renders an inert header.
    pub sort: Option<String>,
    /// Class hint from the declaration.
    pub class: Option<String>,
    /// Fixed width, when set.
    pub width: Option<u32>,
    /// Set when this column's sort attribute is the active primary key.
    pub active: Option<Direction>,
}

/// One rendered body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Rendered text content.
    pub content: String,
    /// Class hint from the declaration.
    pub class: Option<String>,
}

/// One placeholder cell within a loader row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderCell {
    /// Fixed width, when the column has one.
    pub width: Option<u32>,
    /// Bar widths in percent, one per placeholder line.
    pub lines: Vec<u8>,
}

impl LoaderCell {
    /// Builds a placeholder cell with `lines` bars of sampled width.
    pub(crate) fn sampled(width: Option<u32>, lines: u32) -> Self {
        let mut rng = rand::rng();
        let lines = (0..lines.max(1))
            .map(|_| LOADER_BAR_WIDTHS.choose(&mut rng).copied().unwrap_or(100))
            .collect();
        Self { width, lines }
    }
}

/// One rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Transient placeholder shown while a fetch is outstanding.
    Loader(Vec<LoaderCell>),
    /// A loaded record.
    Record {
        /// Record identity, for removal matching and host row ids.
        id: Uuid,
        /// Navigable target when the table is configured with a link.
        href: Option<String>,
        /// Cells for visible columns, in display order.
        cells: Vec<Cell>,
    },
    /// The single "no records" notice shown after an empty sync.
    EmptyNotice,
}

impl Row {
    /// Returns `true` for loader placeholder rows.
    pub fn is_loader(&self) -> bool {
        matches!(self, Row::Loader(_))
    }

    /// Returns `true` for record rows.
    pub fn is_record(&self) -> bool {
        matches!(self, Row::Record { .. })
    }
}

/// Pagination summary state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Currently loaded record count.
    pub loaded: usize,
    /// Total count, once the collection's asynchronous count resolves.
    pub total: Option<u64>,
    /// Plural noun for the "N <records> loaded of M" line.
    pub noun: String,
    /// Current page size.
    pub per_page: u32,
}

impl PaginationSummary {
    /// Whether the load-more control (and the page-size select next to it)
    /// is shown: hidden only once the known total equals the loaded count.
    pub fn load_more_visible(&self) -> bool {
        match self.total {
            Some(total) => total != self.loaded as u64,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_cell_samples_known_widths() {
        let cell = LoaderCell::sampled(Some(120), 3);
        assert_eq!(cell.width, Some(120));
        assert_eq!(cell.lines.len(), 3);
        assert!(cell.lines.iter().all(|w| [100, 75, 50].contains(w)));
    }

    #[test]
    fn test_loader_cell_has_at_least_one_line() {
        assert_eq!(LoaderCell::sampled(None, 0).lines.len(), 1);
    }

    #[test]
    fn test_load_more_hidden_once_total_reached() {
        let mut summary = PaginationSummary {
            loaded: 25,
            total: None,
            noun: "records".into(),
            per_page: 25,
        };
        assert!(summary.load_more_visible());
        summary.total = Some(60);
        assert!(summary.load_more_visible());
        summary.total = Some(25);
        assert!(!summary.load_more_visible());
    }
}
