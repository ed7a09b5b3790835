//! Error types for map validation, layout solving and map storage.

use std::io;

use thiserror::Error;

/// Errors returned by the layout solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("no such house pole id: {house_id}")]
    HouseNotFound { house_id: String },

    #[error("map has no electrical poles")]
    NoElectricalPoles,
}

/// A violated map invariant, as reported by `MapInfo::validate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapIssue {
    #[error("house group {group_index} has no house poles")]
    EmptyGroup { group_index: usize },

    #[error("house group {group_index} lists house pole {house_id} more than once")]
    DuplicateHouse { group_index: usize, house_id: String },

    #[error("map has no electrical poles")]
    NoElectricalPoles,

    #[error("pole {pole_id} has a non-finite coordinate")]
    NonFiniteCoordinate { pole_id: String },
}

/// Errors returned by map repositories.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no map named {name}")]
    MapNotFound { name: String },

    #[error("map rejected: {0}")]
    Malformed(#[from] MapIssue),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("map store I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("map store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_not_found_message() {
        let err = LayoutError::HouseNotFound {
            house_id: "#55".to_string(),
        };
        assert_eq!(err.to_string(), "no such house pole id: #55");
    }

    #[test]
    fn test_issue_converts_into_registry_error() {
        let err: RegistryError = MapIssue::EmptyGroup { group_index: 2 }.into();
        assert!(matches!(err, RegistryError::Malformed(MapIssue::EmptyGroup { group_index: 2 })));
        assert_eq!(err.to_string(), "map rejected: house group 2 has no house poles");
    }

    #[test]
    fn test_layout_error_is_transparent() {
        let err: RegistryError = LayoutError::NoElectricalPoles.into();
        assert_eq!(err.to_string(), "map has no electrical poles");
    }
}
