//! Sort state transitions.

use crate::query::Direction;
use crate::query::NullsOrder;
use crate::query::OrderKey;
use crate::query::OrderSpec;

/// Maintains the primary+secondary ordering key list.
///
/// The secondary tie-break key is fixed at construction and survives every
/// toggle; the user-selected primary key always orders nulls last.
#[derive(Debug, Clone)]
pub struct SortController {
    secondary: OrderKey,
}

impl SortController {
    /// Creates a controller with the given tie-break key.
    pub fn new(secondary: OrderKey) -> Self {
        Self { secondary }
    }

    /// The order to use before any header has been clicked: the tie-break
    /// key alone.
    pub fn seed(&self) -> OrderSpec {
        OrderSpec::single(self.secondary.clone())
    }

    /// Applies header-click toggle semantics to the current order.
    ///
    /// The new primary direction is descending only when the current leading
    /// key is already `attribute` ascending; any other state (different
    /// attribute, currently descending, or no key) starts ascending. The
    /// result is exactly `[primary, secondary]`.
    pub fn toggle(&self, current: &OrderSpec, attribute: &str) -> OrderSpec {
        let direction = match current.first() {
            Some(key) if key.attribute == attribute && key.direction == Direction::Asc => {
                Direction::Desc
            }
            _ => Direction::Asc,
        };

        let primary = OrderKey {
            attribute: attribute.to_string(),
            direction,
            nulls: NullsOrder::Last,
        };
        OrderSpec::with_primary(primary, self.secondary.clone())
    }

    /// The attribute and direction of the leading order key, for the
    /// active-sort header indicator.
    pub fn active(order: &OrderSpec) -> Option<(&str, Direction)> {
        order.first().map(|k| (k.attribute.as_str(), k.direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SortController {
        SortController::new(OrderKey::desc("updated_at"))
    }

    #[test]
    fn test_toggle_from_seed_is_ascending_nulls_last() {
        let c = controller();
        let order = c.toggle(&c.seed(), "status");
        let keys = order.keys();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].attribute, "status");
        assert_eq!(keys[0].direction, Direction::Asc);
        assert_eq!(keys[0].nulls, NullsOrder::Last);
        assert_eq!(keys[1], OrderKey::desc("updated_at"));
    }

    #[test]
    fn test_repeat_toggle_flips_to_descending_then_back() {
        let c = controller();
        let asc = c.toggle(&c.seed(), "status");
        let desc = c.toggle(&asc, "status");
        assert_eq!(desc.keys()[0].direction, Direction::Desc);
        let asc_again = c.toggle(&desc, "status");
        assert_eq!(asc_again.keys()[0].direction, Direction::Asc);
    }

    #[test]
    fn test_switching_attribute_starts_ascending() {
        let c = controller();
        let by_status = c.toggle(&c.seed(), "status");
        let by_name = c.toggle(&by_status, "name");
        assert_eq!(by_name.keys()[0].attribute, "name");
        assert_eq!(by_name.keys()[0].direction, Direction::Asc);
        // tie-break key untouched
        assert_eq!(by_name.keys()[1], OrderKey::desc("updated_at"));
    }

    #[test]
    fn test_active_reads_leading_key() {
        let c = controller();
        assert_eq!(
            SortController::active(&c.seed()),
            Some(("updated_at", Direction::Desc))
        );
    }
}
