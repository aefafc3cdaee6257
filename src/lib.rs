//! Headless data-grid state engine
//!
//! `recordgrid` keeps a paginated, sortable, column-customizable table
//! consistent with a remote-backed record collection, and persists per-user
//! display preferences (column order, visibility, widths, sort, page size)
//! losslessly across sessions.
//!
//! The crate is deliberately headless: rendering, storage, and the
//! column-edit widget are collaborators behind traits. The host implements
//! [`collection::Collection`] over its transport and a
//! [`settings::SettingsBackend`] over its key-value store, pumps collection
//! lifecycle events into [`table::TableView::handle_event`], and draws the
//! view model ([`table::TableView::header`], [`table::TableView::body`],
//! [`table::TableView::pagination`]) however it likes.

pub mod collection;
pub mod columns;
pub mod error;
pub mod model;
pub mod query;
pub mod settings;
pub mod sort;
pub mod table;

pub use error::GridError;
pub use table::TableConfig;
pub use table::TableView;
