//! Dynamic record with stable identity

use std::collections::HashMap;

use uuid::Uuid;

use super::Value;

/// A record loaded from the bound collection.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing the grid
/// to look up any attribute a column points at. Identity is a stable [`Uuid`]
/// used to match rendered rows across add/remove events.
///
/// # Example
///
/// ```
/// use recordgrid::model::Record;
/// use uuid::Uuid;
///
/// let record = Record::new(Uuid::new_v4())
///     .set("name", "Contoso")
///     .set("status", "active");
///
/// assert!(record.contains("status"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The unique identifier of the record.
    pub(crate) id: Uuid,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given identity.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns the field rendered for a table cell.
    ///
    /// Missing fields and `Value::Null` both render as the empty string.
    pub fn display(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
