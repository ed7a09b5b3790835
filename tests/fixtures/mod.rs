//! Test fixtures for pole-layout.
//!
//! Builders for house groups and maps with sensible defaults.

#![allow(dead_code)]

use pole_layout::model::{HouseGroup, MapInfo, Pole};

pub fn pole(id: &str, x: f64, y: f64) -> Pole {
    Pole::new(id, x, y)
}

/// Builder for a house group; both ends open unless told otherwise.
#[derive(Clone, Debug)]
pub struct GroupBuilder {
    front: Pole,
    back: Pole,
    front_valid: bool,
    back_valid: bool,
    houses: Vec<Pole>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self {
            front: pole("front", 0.0, 0.0),
            back: pole("back", 0.0, 0.0),
            front_valid: true,
            back_valid: true,
            houses: Vec::new(),
        }
    }

    pub fn front(mut self, x: f64, y: f64) -> Self {
        self.front = pole(&self.front.id, x, y);
        self
    }

    pub fn back(mut self, x: f64, y: f64) -> Self {
        self.back = pole(&self.back.id, x, y);
        self
    }

    pub fn ends_named(mut self, front: &str, back: &str) -> Self {
        self.front.id = front.to_string();
        self.back.id = back.to_string();
        self
    }

    pub fn house(mut self, id: &str, x: f64, y: f64) -> Self {
        self.houses.push(pole(id, x, y));
        self
    }

    pub fn front_closed(mut self) -> Self {
        self.front_valid = false;
        self
    }

    pub fn back_closed(mut self) -> Self {
        self.back_valid = false;
        self
    }

    pub fn build(self) -> HouseGroup {
        HouseGroup::new(self.front, self.back, self.houses).with_validity(self.front_valid, self.back_valid)
    }
}

/// The straight-line run used throughout the tests:
/// houses P0(0,0), H(3,0), P2(10,0); front end (-5,0), back end (20,0).
pub fn straight_run() -> GroupBuilder {
    GroupBuilder::new()
        .front(-5.0, 0.0)
        .back(20.0, 0.0)
        .house("P0", 0.0, 0.0)
        .house("H", 3.0, 0.0)
        .house("P2", 10.0, 0.0)
}

pub fn map_of(elec_poles: Vec<Pole>, groups: Vec<HouseGroup>) -> MapInfo {
    MapInfo::new(elec_poles, groups)
}

pub fn ids(poles: &[Pole]) -> Vec<&str> {
    poles.iter().map(|pole| pole.id.as_str()).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
