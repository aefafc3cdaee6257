//! The view binding coordinator.
//!
//! [`TableView`] keeps a render-ready view model (header cells, body rows,
//! pagination summary) consistent with a bound [`Collection`] and the user's
//! persisted [`TableSettings`]. The host pumps collection lifecycle events
//! into [`TableView::handle_event`] and forwards user interactions (header
//! clicks, resize drags, the customize widget) to the corresponding methods;
//! every mutating interaction persists the whole settings value.
//!
//! # Example
//!
//! ```ignore
//! let store = SettingsStore::new(MemoryBackend::new());
//! let config = TableConfig::new("projects")
//!     .columns(vec![
//!         ColumnDeclaration::new("name").sortable_by("name"),
//!         ColumnDeclaration::new("status"),
//!         ColumnDeclaration::new("updated_at"),
//!     ])
//!     .default_columns(["name", "status"]);
//!
//! let mut table = TableView::new(config, store, &mut collection)?;
//! table.render(&mut collection);
//! // host event loop:
//! while let Some(event) = events.next() {
//!     table.handle_event(&mut collection, event);
//!     draw(table.header(), table.body(), table.pagination());
//! }
//! ```

mod config;
mod customize;
mod events;
mod resize;
mod state;

pub use config::LinkFn;
pub use config::PER_PAGE_CHOICES;
pub use config::TableConfig;
pub use customize::CustomizeEntry;
pub use state::Cell;
pub use state::HeaderCell;
pub use state::LoaderCell;
pub use state::MIN_COLUMN_WIDTH;
pub use state::PaginationSummary;
pub use state::Row;
pub use state::TableLayout;

use log::debug;
use log::warn;

use crate::collection::Collection;
use crate::collection::SubscriptionId;
use crate::columns::ColumnDeclaration;
use crate::error::GridError;
use crate::model::Record;
use crate::query::Direction;
use crate::settings::resolve_columns;
use crate::settings::ColumnSetting;
use crate::settings::SettingsStore;
use crate::settings::TableSettings;
use crate::settings::SETTINGS_PREFIX;
use crate::sort::SortController;

/// A paginated, sortable, column-customizable table bound to a remote-backed
/// record collection.
///
/// Exclusively owns its [`TableSettings`]; the settings store only ever holds
/// a serialized copy. Single-threaded by design: every method runs to
/// completion on the host's UI thread.
pub struct TableView {
    config: TableConfig,
    store: SettingsStore,
    key: String,
    settings: TableSettings,
    sort: SortController,
    body: Vec<Row>,
    pagination: Option<PaginationSummary>,
    resizing: Option<String>,
    subscription: Option<SubscriptionId>,
    count_pending: bool,
}

impl TableView {
    /// Builds the table: loads and reconciles persisted settings, applies
    /// page size and order to the collection (silently), applies the
    /// eager-loading hint if configured, and registers the collection
    /// subscription.
    ///
    /// # Errors
    ///
    /// [`GridError::MissingStoreKey`] when the configured id is blank; no
    /// partially initialized table is usable.
    pub fn new(
        config: TableConfig,
        store: SettingsStore,
        collection: &mut dyn Collection,
    ) -> Result<Self, GridError> {
        if config.id.trim().is_empty() {
            return Err(GridError::MissingStoreKey);
        }
        let key = format!("{SETTINGS_PREFIX}{}", config.id);

        let stored = store.load(&key);
        let sort = SortController::new(config.secondary_sort.clone());

        let settings = TableSettings {
            per_page: stored.per_page.unwrap_or_else(|| collection.page_size()),
            order: stored
                .order
                .filter(|order| !order.is_empty())
                .unwrap_or_else(|| sort.seed()),
            columns: resolve_columns(&config.columns, &config.default_columns, stored.columns),
        };
        debug!(
            "seeded table {}: per_page={} columns={}",
            config.id,
            settings.per_page,
            settings.columns.len()
        );

        collection.set_page_size(settings.per_page, true);
        collection.order(&settings.order, true);
        if let Some(include) = &config.include {
            collection.include_related(include, true);
        }
        let subscription = Some(collection.subscribe());

        Ok(Self {
            config,
            store,
            key,
            settings,
            sort,
            body: Vec::new(),
            pagination: None,
            resizing: None,
            subscription,
            count_pending: false,
        })
    }

    // =========================================================================
    // View model accessors
    // =========================================================================

    /// The current settings.
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Body rows in render order.
    pub fn body(&self) -> &[Row] {
        &self.body
    }

    /// Pagination summary; `None` when pagination is disabled or the table
    /// has not rendered yet.
    pub fn pagination(&self) -> Option<&PaginationSummary> {
        self.pagination.as_ref()
    }

    /// Header cells for the visible columns, in display order.
    pub fn header(&self) -> Vec<HeaderCell> {
        let active = self.active_sort();
        self.visible()
            .map(|(setting, decl)| HeaderCell {
                id: decl.id.clone(),
                label: decl.label(),
                sort: decl.sort.clone(),
                class: decl.class.clone(),
                width: setting.options.width,
                active: decl.sort.as_deref().and_then(|attr| match active {
                    Some((current, direction)) if current == attr => Some(direction),
                    _ => None,
                }),
            })
            .collect()
    }

    /// Table sizing mode: fixed once the leading settings entry carries an
    /// explicit width, auto otherwise.
    pub fn layout(&self) -> TableLayout {
        match self.settings.columns.first() {
            Some(column) if column.options.width.is_some() => TableLayout::Fixed,
            _ => TableLayout::Auto,
        }
    }

    /// Attribute and direction of the active primary order key.
    pub fn active_sort(&self) -> Option<(&str, Direction)> {
        SortController::active(&self.settings.order)
    }

    // =========================================================================
    // User operations
    // =========================================================================

    /// Full rebuild: body rows from the collection's loaded records,
    /// pagination summary, and (when the table manages the collection) a
    /// fetch of the current page.
    pub fn render(&mut self, collection: &mut dyn Collection) {
        self.body = collection
            .records()
            .iter()
            .map(|record| self.record_row(record))
            .collect();
        self.refresh_pagination(collection);
        if self.config.manage_collection {
            collection.fetch();
        }
    }

    /// Handles a sort-header click.
    ///
    /// Applies toggle semantics, pushes the new order to the collection
    /// without an implicit re-fetch signal, persists, fetches when the table
    /// manages the collection, and clears the rendered record rows so every
    /// row on screen originates from the new order. The control surface only
    /// exposes sortable columns; passing an attribute no column declares is a
    /// caller error.
    pub fn toggle_sort(&mut self, collection: &mut dyn Collection, attribute: &str) {
        self.settings.order = self.sort.toggle(&self.settings.order, attribute);
        collection.order(&self.settings.order, true);
        self.save_settings();
        if self.config.manage_collection {
            collection.fetch();
        }
        collection.clear();
        self.body.retain(|row| !row.is_record());
    }

    /// Loads the next page, keeping already loaded records.
    pub fn load_more(&mut self, collection: &mut dyn Collection) {
        collection.increment_page();
    }

    /// Applies a new page size. Persistence happens when the collection
    /// echoes the change back as [`CollectionEvent::PageSizeChanged`].
    ///
    /// [`CollectionEvent::PageSizeChanged`]: crate::collection::CollectionEvent::PageSizeChanged
    pub fn set_per_page(&mut self, collection: &mut dyn Collection, per_page: u32) {
        self.settings.per_page = per_page;
        collection.set_page_size(per_page, false);
    }

    /// Restores the default layout: every width cleared, visibility back to
    /// the default-visible set, full re-render, persist.
    pub fn reset_columns(&mut self, collection: &mut dyn Collection) {
        for column in &mut self.settings.columns {
            column.options.width = None;
            column.options.visible = self.config.default_columns.contains(&column.id);
        }
        self.render(collection);
        self.save_settings();
    }

    /// Releases the collection subscription. Call on teardown; the table is
    /// inert afterwards unless events keep being pumped in.
    pub fn detach(&mut self, collection: &mut dyn Collection) {
        if let Some(id) = self.subscription.take() {
            collection.unsubscribe(id);
        }
    }

    // =========================================================================
    // Internals shared with the event/gesture impls
    // =========================================================================

    /// Visible columns in display order, stale ids skipped.
    fn visible(&self) -> impl Iterator<Item = (&ColumnSetting, &ColumnDeclaration)> {
        self.settings
            .columns
            .iter()
            .filter(|c| c.options.visible)
            .filter_map(|c| self.config.declaration(&c.id).map(|d| (c, d)))
    }

    fn record_row(&self, record: &Record) -> Row {
        Row::Record {
            id: record.id(),
            href: self.config.link.as_ref().map(|link| link(record)),
            cells: self
                .visible()
                .map(|(_, decl)| Cell {
                    content: decl.source.render(record),
                    class: decl.class.clone(),
                })
                .collect(),
        }
    }

    fn refresh_pagination(&mut self, collection: &mut dyn Collection) {
        if !self.config.pagination {
            self.pagination = None;
            return;
        }
        self.pagination = Some(PaginationSummary {
            loaded: collection.len(),
            total: None,
            noun: collection.display_name().to_string(),
            per_page: self.settings.per_page,
        });
        self.count_pending = true;
        collection.count();
    }

    fn save_settings(&self) {
        if let Err(err) = self.store.save(&self.key, &self.settings) {
            warn!("failed to persist settings for {}: {err}", self.key);
        }
    }
}
