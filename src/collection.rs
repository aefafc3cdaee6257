//! The bound collection contract.
//!
//! The grid never talks to a transport itself; it drives a [`Collection`]
//! collaborator and reacts to the lifecycle events the collection emits. The
//! host owns the event loop: it pumps each [`CollectionEvent`] into
//! [`TableView::handle_event`](crate::table::TableView::handle_event).

use uuid::Uuid;

use crate::model::Record;
use crate::query::OrderSpec;

/// Handle for one registered observer of a collection.
///
/// Issued by [`Collection::subscribe`]; the grid keeps the handle it was
/// issued and releases it through [`Collection::unsubscribe`] on teardown, so
/// the component's lifecycle owns its subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Lifecycle notifications emitted by the bound collection.
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// A record was added to the loaded set.
    Added(Record),
    /// A record was removed from the loaded set.
    Removed(Uuid),
    /// A fetch request was issued.
    RequestStarted,
    /// A fetch request completed and the loaded set is current.
    Synced,
    /// The page size changed to the given value.
    PageSizeChanged(u32),
    /// A previously requested [`Collection::count`] resolved.
    ///
    /// Fire-and-forget with no cancellation: when counts overlap, responses
    /// apply in arrival order and the last one wins.
    CountReceived(u64),
}

/// A remote-backed, server-ordered, paginated record collection.
///
/// Fetching and counting are asynchronous on the collaborator's side; from
/// the grid's point of view both are fire-and-forget requests whose outcomes
/// arrive later as [`CollectionEvent`]s. `silent` mirrors the collaborator's
/// convention: a silent mutation emits no lifecycle event.
pub trait Collection {
    /// Number of currently loaded records.
    fn len(&self) -> usize;

    /// Returns `true` if no records are loaded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The currently loaded records, in server order.
    fn records(&self) -> &[Record];

    /// Current page size.
    fn page_size(&self) -> u32;

    /// Sets the page size.
    fn set_page_size(&mut self, per_page: u32, silent: bool);

    /// Applies an ordering. Never triggers a re-fetch by itself.
    fn order(&mut self, spec: &OrderSpec, silent: bool);

    /// Eager-loading hint for related data, applied once at init.
    fn include_related(&mut self, spec: &str, silent: bool);

    /// Requests the current page. Emits `RequestStarted`, later `Synced`.
    fn fetch(&mut self);

    /// Requests the total record count; resolves as `CountReceived`.
    fn count(&mut self);

    /// Advances to the next page without dropping loaded records, then
    /// fetches it.
    fn increment_page(&mut self);

    /// Drops all loaded records.
    fn clear(&mut self);

    /// Registers an observer and returns its handle.
    fn subscribe(&mut self) -> SubscriptionId;

    /// Releases a previously issued observer handle.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Human-readable plural noun for the pagination summary.
    fn display_name(&self) -> &str {
        "records"
    }
}
