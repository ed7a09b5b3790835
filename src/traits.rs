//! Core seams for the layout solver.
//!
//! The solver needs coordinates and a way to pick the nearest electrical pole;
//! callers additionally get a place to keep named maps.

use crate::model::{MapInfo, Pole};
use crate::error::RegistryError;

/// Anything with a 2D position.
pub trait Positioned {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn position(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

impl Positioned for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

/// Picks the electrical pole closest to a target point.
///
/// Implementations must be deterministic: among equally close poles the one
/// appearing first in `poles` is returned.
pub trait NearestPoleFinder {
    fn nearest<'a, P: Positioned + ?Sized>(&self, poles: &'a [Pole], target: &P) -> Option<&'a Pole>;
}

/// Storage for named maps.
///
/// `get` hands out an owned snapshot so a solve never observes a concurrent write.
pub trait MapRepository {
    fn get(&self, name: &str) -> Result<MapInfo, RegistryError>;

    fn put(&self, name: &str, map: MapInfo) -> Result<(), RegistryError>;

    /// Registered map names in ascending order.
    fn names(&self) -> Vec<String>;
}
