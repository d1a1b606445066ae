//! Wire types for the genetics backend, beyond the snapshot payloads the
//! `canvas` crate decodes itself.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One entry of the bundled `ecosystems.json` catalogue: a display name
/// plus an opaque bag of backend configuration properties.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Ecosystem {
    pub name: String,
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Body for `POST /genetics/v1.0/world`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorldRequest {
    pub world: String,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub ticks_per_day: u32,
    /// Raw DNA text seeding the world. The backend does its own gene
    /// splitting, so this goes over the wire as pasted.
    pub zoo: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl CreateWorldRequest {
    /// Request with the stock world dimensions, seeded from one ecosystem.
    #[must_use]
    pub fn standard(world: String, zoo: String, ecosystem: &Ecosystem) -> Self {
        Self {
            world,
            width: 90,
            height: 90,
            depth: 90,
            ticks_per_day: 10,
            zoo,
            properties: ecosystem.properties.clone(),
        }
    }
}

/// Response from `POST /genetics/v1.0/world`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateWorldResponse {
    pub id: String,
}

/// Response from `GET /genetics/v1/inspect/:world?x=&y=`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct InspectResponse {
    pub terrain: Option<serde_json::Map<String, serde_json::Value>>,
    pub cell: Option<CellInfo>,
}

/// Per-cell detail inside an inspect response.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellInfo {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub total_energy_collected: Option<f64>,
    pub total_energy_metabolized: Option<f64>,
    pub genes: Vec<String>,
    pub organism: Option<String>,
}
