//! Category model

use serde::{Deserialize, Serialize};

/// Event category.
///
/// The API returns either bare names or `{id, name}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CategoryRepr")]
pub struct Category {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), id: None }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Name(String),
    Object {
        #[serde(default)]
        id: Option<i64>,
        name: String,
    },
}

impl From<CategoryRepr> for Category {
    fn from(repr: CategoryRepr) -> Self {
        match repr {
            CategoryRepr::Name(name) => Category { name, id: None },
            CategoryRepr::Object { id, name } => Category { name, id },
        }
    }
}
