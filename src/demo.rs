//! Built-in sample map with two house groups and five electrical poles.

use crate::model::MapInfo;

const DEMO_MAP_JSON: &str = include_str!("demo_map.json");

/// The raw sample document, as a client would upload it.
pub fn demo_map_json() -> &'static str {
    DEMO_MAP_JSON
}

pub fn demo_map() -> Result<MapInfo, serde_json::Error> {
    serde_json::from_str(DEMO_MAP_JSON)
}
