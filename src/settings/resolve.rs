//! Column schema reconciliation.

use super::ColumnSetting;
use crate::columns::ColumnDeclaration;

/// Reconciles the declared column schema against a previously stored layout.
///
/// With no stored layout, synthesizes one: the ordered union of the
/// default-visible ids followed by the remaining declared ids, first-seen
/// duplicates dropped, ids not in the declared set dropped; an id is visible
/// iff it is in the default set.
///
/// With a stored layout, its order and options are kept as the base and every
/// declared id it lacks is appended invisible, in declared order — a schema
/// change never silently gains or loses columns in an old layout. Ids the
/// stored layout carries that are no longer declared are retained untouched
/// (reconciliation is additive-only) and skipped at render time instead.
///
/// Resolving twice with the same inputs yields identical output.
pub fn resolve_columns(
    declared: &[ColumnDeclaration],
    default_visible: &[String],
    stored: Option<Vec<ColumnSetting>>,
) -> Vec<ColumnSetting> {
    let mut columns = match stored {
        Some(prior) => prior,
        None => synthesize(declared, default_visible),
    };

    for decl in declared {
        if !columns.iter().any(|c| c.id == decl.id) {
            columns.push(ColumnSetting::new(&decl.id, false));
        }
    }

    columns
}

fn synthesize(declared: &[ColumnDeclaration], default_visible: &[String]) -> Vec<ColumnSetting> {
    let mut seen: Vec<&str> = Vec::new();
    let mut columns = Vec::with_capacity(declared.len());

    let ordered = default_visible
        .iter()
        .map(String::as_str)
        .chain(declared.iter().map(|d| d.id.as_str()));

    for id in ordered {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        if !declared.iter().any(|d| d.id == id) {
            continue;
        }
        let visible = default_visible.iter().any(|d| d == id);
        columns.push(ColumnSetting::new(id, visible));
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(ids: &[&str]) -> Vec<ColumnDeclaration> {
        ids.iter().map(|id| ColumnDeclaration::new(*id)).collect()
    }

    fn names(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_synthesized_order_is_defaults_then_rest() {
        let columns = resolve_columns(
            &decls(&["name", "status", "updated_at"]),
            &names(&["status", "name"]),
            None,
        );
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["status", "name", "updated_at"]);
        assert!(columns[0].options.visible);
        assert!(columns[1].options.visible);
        assert!(!columns[2].options.visible);
    }

    #[test]
    fn test_undeclared_default_is_dropped() {
        let columns = resolve_columns(&decls(&["name"]), &names(&["ghost", "name"]), None);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["name"]);
    }

    #[test]
    fn test_stored_layout_gains_new_declared_columns_invisible() {
        let stored = vec![
            ColumnSetting::new("status", true),
            ColumnSetting::new("name", false),
        ];
        let columns = resolve_columns(
            &decls(&["name", "status", "created_at", "updated_at"]),
            &names(&["name"]),
            Some(stored),
        );
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["status", "name", "created_at", "updated_at"]);
        assert!(!columns[2].options.visible);
        assert!(!columns[3].options.visible);
    }

    #[test]
    fn test_stale_stored_ids_are_retained() {
        let stored = vec![
            ColumnSetting::new("legacy", true),
            ColumnSetting::new("name", true),
        ];
        let columns = resolve_columns(&decls(&["name"]), &names(&["name"]), Some(stored));
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["legacy", "name"]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let declared = decls(&["a", "b", "c"]);
        let defaults = names(&["b"]);
        let once = resolve_columns(&declared, &defaults, None);
        let twice = resolve_columns(&declared, &defaults, Some(once.clone()));
        assert_eq!(once, twice);
    }
}
