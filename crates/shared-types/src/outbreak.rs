use serde::{Deserialize, Serialize};

/// One of the two disjoint tracked datasets. Each category lives in its
/// own backend table — there is no shared table or discriminator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutbreakCategory {
    Asf,
    RedTide,
}

impl OutbreakCategory {
    /// Backend table holding this category's rows.
    pub fn table(&self) -> &'static str {
        match self {
            OutbreakCategory::Asf => "asf",
            OutbreakCategory::RedTide => "redTide",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutbreakCategory::Asf => "African Swine Fever",
            OutbreakCategory::RedTide => "Red Tide",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            OutbreakCategory::Asf => "ASF",
            OutbreakCategory::RedTide => "Red Tide",
        }
    }
}

/// A persisted outbreak location row. The server is authoritative; the
/// client list is a cache patched in place after each confirmed mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutbreakLocation {
    pub id: i64,
    pub location: String,
    #[serde(default)]
    pub coordinates: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<String>,
}

/// Insert payload for a new outbreak location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOutbreakLocation {
    pub location: String,
    pub coordinates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<String>,
}

/// Append rows returned by a confirmed insert, verbatim and in order.
/// Existing elements are left untouched.
pub fn append_rows(list: &mut Vec<OutbreakLocation>, rows: Vec<OutbreakLocation>) {
    list.extend(rows);
}

/// Remove the row with the given id after a confirmed delete.
/// Every other element is left in place.
pub fn remove_by_id(list: &mut Vec<OutbreakLocation>, id: i64) {
    list.retain(|row| row.id != id);
}
