use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question category. Seeded out-of-band and read-only to the API.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}
