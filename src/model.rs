//! Map model: poles, house groups, maps and route solutions.
//!
//! Field names on the wire follow the JSON documents exchanged with the map
//! service, so the serde renames here are load-bearing.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::MapIssue;
use crate::traits::Positioned;

/// Free-form payload attached to a pole. Never inspected by the solver.
pub type Extra = Map<String, Value>;

/// An identified 2D point: an electrical pole, a house, or a group end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub extra: Extra,
}

impl Pole {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            extra: Extra::new(),
        }
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }
}

impl Positioned for Pole {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Extra, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Extra>::deserialize(deserializer)?.unwrap_or_default())
}

/// One cable run: houses in front-to-back order between two possible grid ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseGroup {
    #[serde(rename = "group_front_pole")]
    pub front_pole: Pole,
    #[serde(rename = "group_back_pole")]
    pub back_pole: Pole,
    #[serde(rename = "group_front_valid")]
    pub front_valid: bool,
    #[serde(rename = "group_back_valid")]
    pub back_valid: bool,
    pub house_poles: Vec<Pole>,
}

impl HouseGroup {
    /// A group with both ends open for connection.
    pub fn new(front_pole: Pole, back_pole: Pole, house_poles: Vec<Pole>) -> Self {
        Self {
            front_pole,
            back_pole,
            front_valid: true,
            back_valid: true,
            house_poles,
        }
    }

    pub fn with_validity(mut self, front_valid: bool, back_valid: bool) -> Self {
        self.front_valid = front_valid;
        self.back_valid = back_valid;
        self
    }

    /// Position of the house pole with the given id.
    pub fn house_index(&self, house_id: &str) -> Option<usize> {
        self.house_poles.iter().position(|pole| pole.id == house_id)
    }
}

/// The full input: electrical poles plus the house groups to search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    pub elec_poles: Vec<Pole>,
    pub house_groups: Vec<HouseGroup>,
}

impl MapInfo {
    pub fn new(elec_poles: Vec<Pole>, house_groups: Vec<HouseGroup>) -> Self {
        Self {
            elec_poles,
            house_groups,
        }
    }

    /// Check the invariants the solver relies on. Returns the first violation.
    pub fn validate(&self) -> Result<(), MapIssue> {
        if self.elec_poles.is_empty() {
            return Err(MapIssue::NoElectricalPoles);
        }

        for (group_index, group) in self.house_groups.iter().enumerate() {
            if group.house_poles.is_empty() {
                return Err(MapIssue::EmptyGroup { group_index });
            }

            let mut seen = HashSet::new();
            for pole in &group.house_poles {
                if !seen.insert(pole.id.as_str()) {
                    return Err(MapIssue::DuplicateHouse {
                        group_index,
                        house_id: pole.id.clone(),
                    });
                }
            }
        }

        match self.poles().find(|pole| !(pole.x.is_finite() && pole.y.is_finite())) {
            Some(pole) => Err(MapIssue::NonFiniteCoordinate {
                pole_id: pole.id.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Every pole in the map: electrical poles first, then each group's ends and houses.
    pub fn poles(&self) -> impl Iterator<Item = &Pole> {
        self.elec_poles.iter().chain(self.house_groups.iter().flat_map(|group| {
            [&group.front_pole, &group.back_pole]
                .into_iter()
                .chain(group.house_poles.iter())
        }))
    }
}

/// One candidate wiring layout for a house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total cable length.
    pub distance: f64,
    /// House poles from the requested house to one end of the chain, inclusive.
    pub path: Vec<Pole>,
    pub house_endpoint_pole: Pole,
    pub elec_pole: Pole,
}
