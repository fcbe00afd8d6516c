//! Raw input records as supplied by the data-loading layer.
//!
//! Records are loose: every column is an optional string and
//! required-field validation happens in the graph builder, which knows the
//! row index to report. JSON cells may arrive as numbers or booleans;
//! those are rendered back to strings. CSV input is read as text by the
//! loader and never goes through that coercion.

use serde::{Deserialize, Deserializer, Serialize};

/// Marker value that flags a connection as an original membership.
pub const ORIGINAL_MARKER: &str = "YES";

/// One row of the elements table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Node label (required).
    #[serde(
        rename = "Label",
        alias = "label",
        default,
        deserialize_with = "cell"
    )]
    pub label: Option<String>,
    /// Node type; `Band` and `Musician` are meaningful.
    #[serde(
        rename = "Type",
        alias = "type",
        default,
        deserialize_with = "cell",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<String>,
}

impl EntityRecord {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, node_type: Option<&str>) -> Self {
        Self {
            label: Some(label.into()),
            node_type: node_type.map(str::to_string),
        }
    }
}

/// One row of the connections table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// First endpoint label (required).
    #[serde(rename = "From", alias = "from", default, deserialize_with = "cell")]
    pub from: Option<String>,
    /// Second endpoint label (required).
    #[serde(rename = "To", alias = "to", default, deserialize_with = "cell")]
    pub to: Option<String>,
    /// Original-member marker; `YES` in any casing means true.
    #[serde(
        rename = "Original Member",
        alias = "original_member",
        default,
        deserialize_with = "cell",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_member: Option<String>,
}

impl ConnectionRecord {
    /// Convenience constructor.
    pub fn new(from: impl Into<String>, to: impl Into<String>, marker: Option<&str>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            original_member: marker.map(str::to_string),
        }
    }

    /// Parsed original-member flag.
    pub fn is_original(&self) -> bool {
        is_original_marker(self.original_member.as_deref())
    }
}

/// Interpret an `Original Member` cell.
///
/// The trimmed value is compared to `YES` ignoring case. Anything else,
/// including an absent cell, is `false`.
pub fn is_original_marker(raw: Option<&str>) -> bool {
    raw.map_or(false, |v| v.trim().eq_ignore_ascii_case(ORIGINAL_MARKER))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Cell>::deserialize(deserializer)?;
    Ok(value.map(|c| match c {
        Cell::Text(s) => s,
        Cell::Int(i) => i.to_string(),
        Cell::Float(f) => f.to_string(),
        Cell::Bool(b) => b.to_string(),
    }))
}
