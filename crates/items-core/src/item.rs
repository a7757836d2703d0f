//! The `Item` record.

use serde::{Deserialize, Deserializer, Serialize};

/// A named record identified by a caller-assigned string ID.
///
/// Missing and `null` fields decode to empty strings and unknown fields are
/// ignored, so `{}` is a valid item. A field of any other non-string JSON
/// type is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Identity of the item. Unique within a store.
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    /// Free-form name. May be empty or shared with other items.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns this item re-keyed under `id`, keeping its name.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
