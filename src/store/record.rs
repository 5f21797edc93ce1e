use serde::{Deserialize, Serialize};

/// One tracked show. Field order is the on-disk column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Free-text title. Doubles as the record's folder name under the dramas root.
    pub name: String,
    pub genre: String,
}

impl Record {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }
}
