use serde::{Deserialize, Serialize};

/// One row of the bundled country table: display name plus ISO 3166-1
/// alpha-2 code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub name: String,
    pub alpha2: String,
}
