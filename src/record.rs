use serde::{Deserialize, Serialize};

/// A single scored record as supplied by the loader.
///
/// Records are plain values: equality is structural, so two records with
/// identical fields are indistinguishable. The core never mutates a record
/// and never validates field formats - that is the loader's job. The only
/// requirement is a non-negative score, which the type already guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub id: String,
    pub group: String,
    pub score: u64,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        group: impl Into<String>,
        score: u64,
    ) -> Self {
        Record {
            name: name.into(),
            id: id.into(),
            group: group.into(),
            score,
        }
    }

    /// Return a short reference in the format "name (group)"
    pub fn short_ref(&self) -> String {
        format!("{} ({})", self.name, self.group)
    }
}
