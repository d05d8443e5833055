use serde::{Deserialize, Serialize};

/// A block of cells, as sent and received by the `values` endpoints.
///
/// The API leaves out `values` entirely for an empty range and drops trailing empty cells
/// from each row.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,

    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    pub fn rows(values: Vec<Vec<String>>) -> ValueRange {
        ValueRange {
            range: None,
            major_dimension: Some("ROWS".to_owned()),
            values,
        }
    }
}

/// Body of `values:batchClear`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchClear {
    pub ranges: Vec<String>,
}
