//! Ordering types sent to the bound collection.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Placement of null values within an ordered key.
///
/// User-selected primary keys always order nulls last; that policy is fixed
/// and not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullsOrder {
    /// Whatever the collection's backend does by default.
    Default,
    /// Nulls sort after all non-null values, regardless of direction.
    Last,
}

/// One key of an [`OrderSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderKey {
    /// The attribute to order by.
    pub attribute: String,
    /// Sort direction.
    pub direction: Direction,
    /// Null placement policy.
    #[serde(default = "NullsOrder::default_policy")]
    pub nulls: NullsOrder,
}

impl NullsOrder {
    fn default_policy() -> Self {
        NullsOrder::Default
    }
}

impl OrderKey {
    /// Creates an ascending key with default null placement.
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: Direction::Asc,
            nulls: NullsOrder::Default,
        }
    }

    /// Creates a descending key with default null placement.
    pub fn desc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: Direction::Desc,
            nulls: NullsOrder::Default,
        }
    }

    /// Sets the null placement policy.
    pub fn nulls(mut self, nulls: NullsOrder) -> Self {
        self.nulls = nulls;
        self
    }
}

/// The ordering applied to the bound collection.
///
/// Always ends with a fixed secondary tie-break key, so the sequence is never
/// empty; at most one user-selected primary key precedes it.
///
/// # Example
///
/// ```
/// use recordgrid::query::{OrderKey, OrderSpec};
///
/// let order = OrderSpec::single(OrderKey::desc("updated_at"));
/// assert_eq!(order.keys().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderSpec {
    keys: Vec<OrderKey>,
}

impl OrderSpec {
    /// Creates an order with a single key (the seeded state, where the
    /// tie-break key is the only key).
    pub fn single(key: OrderKey) -> Self {
        Self { keys: vec![key] }
    }

    /// Creates an order of exactly `[primary, secondary]`.
    pub fn with_primary(primary: OrderKey, secondary: OrderKey) -> Self {
        Self {
            keys: vec![primary, secondary],
        }
    }

    /// Returns the ordered keys.
    pub fn keys(&self) -> &[OrderKey] {
        &self.keys
    }

    /// Returns the leading key, if any.
    ///
    /// A deserialized blob may be empty; mutators re-establish the non-empty
    /// invariant and seeding rejects empty stored orders.
    pub fn first(&self) -> Option<&OrderKey> {
        self.keys.first()
    }

    /// Returns `true` if the order has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
