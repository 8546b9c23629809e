//! Reader (library member) model

use serde::{Deserialize, Serialize};

/// Library member, identified by a manager-assigned integer id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    #[serde(rename = "Id", default)]
    pub id: i32,
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Free text, never validated
    #[serde(rename = "Email", default)]
    pub email: String,
}

impl Reader {
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
