//! Collection lifecycle event handling.

use uuid::Uuid;

use super::state::LoaderCell;
use super::Row;
use super::TableView;
use crate::collection::Collection;
use crate::collection::CollectionEvent;
use crate::model::Record;

impl TableView {
    /// Applies one collection lifecycle event to the view model.
    ///
    /// The host routes every event its subscription delivers through here, in
    /// emission order.
    pub fn handle_event(&mut self, collection: &mut dyn Collection, event: CollectionEvent) {
        match event {
            CollectionEvent::Added(record) => self.on_added(&record),
            CollectionEvent::Removed(id) => self.on_removed(id),
            CollectionEvent::RequestStarted => self.on_request_started(collection),
            CollectionEvent::Synced => self.on_synced(collection),
            CollectionEvent::PageSizeChanged(per_page) => {
                self.settings.per_page = per_page;
                self.save_settings();
            }
            CollectionEvent::CountReceived(total) => self.on_count_received(total),
        }
    }

    /// A fetch went out: append loader placeholder rows, one per expected
    /// record. The explicit `loader_count` override wins, else the currently
    /// loaded record count, else the page size.
    fn on_request_started(&mut self, collection: &dyn Collection) {
        let loaded = collection.len();
        let rows = self
            .config
            .loader_count
            .filter(|n| *n > 0)
            .or_else(|| (loaded > 0).then_some(loaded))
            .unwrap_or(self.settings.per_page as usize);

        for _ in 0..rows {
            let cells = self
                .visible()
                .map(|(setting, decl)| {
                    LoaderCell::sampled(setting.options.width, decl.loader_rows.unwrap_or(1))
                })
                .collect();
            self.body.push(Row::Loader(cells));
        }
    }

    /// A fetch completed: refresh the pagination summary, drop every loader
    /// and any stale empty notice, then show the notice if nothing loaded.
    fn on_synced(&mut self, collection: &mut dyn Collection) {
        self.refresh_pagination(collection);
        self.body
            .retain(|row| !matches!(row, Row::Loader(_) | Row::EmptyNotice));
        if collection.is_empty() {
            self.body.push(Row::EmptyNotice);
        }
    }

    /// One record arrived: append its row, consuming one loader placeholder
    /// if any remain.
    fn on_added(&mut self, record: &Record) {
        let row = self.record_row(record);
        self.body.push(row);
        if let Some(loader) = self.body.iter().position(Row::is_loader) {
            self.body.remove(loader);
        }
    }

    fn on_removed(&mut self, id: Uuid) {
        self.body
            .retain(|row| !matches!(row, Row::Record { id: row_id, .. } if *row_id == id));
    }

    /// A count resolved. Applied only while a count is pending; when requests
    /// overlap the last arrival wins, same as the collaborator's own
    /// fire-and-forget semantics.
    fn on_count_received(&mut self, total: u64) {
        if !self.count_pending {
            return;
        }
        self.count_pending = false;
        if let Some(pagination) = &mut self.pagination {
            pagination.total = Some(total);
        }
    }
}
