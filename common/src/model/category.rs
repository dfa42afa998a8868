use serde::{Deserialize, Serialize};

/// A product category offered as an optional report filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Value stored in the form when this category is picked.
    ///
    /// The id when the source knows it, otherwise the name. A name coerces to
    /// `null` in the request, which the backend reads as "all categories".
    pub fn option_value(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => self.name.clone(),
        }
    }
}
