//! Solve every house of a map.
//!
//! Each house is solved on its own with [`solve`]; nothing is shared between
//! houses, so the work is spread across the rayon pool.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::LayoutError;
use crate::model::{MapInfo, Route};
use crate::solver::solve;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseReport {
    pub house_id: String,
    /// Index of the house group the house was resolved in.
    pub group_index: usize,
    pub routes: Vec<Route>,
    /// Index into `routes` of the shortest route, if any.
    pub best: Option<usize>,
}

impl HouseReport {
    pub fn best_route(&self) -> Option<&Route> {
        self.best.and_then(|index| self.routes.get(index))
    }
}

/// Reports for every distinct house id, in group then house order.
///
/// A house id repeated in a later group is reported once, against the first
/// group holding it, since that is where [`solve`] resolves it.
pub fn survey(map: &MapInfo) -> Result<Vec<HouseReport>, LayoutError> {
    if map.elec_poles.is_empty() {
        return Err(LayoutError::NoElectricalPoles);
    }

    let mut seen = HashSet::new();
    let houses: Vec<(usize, &str)> = map
        .house_groups
        .iter()
        .enumerate()
        .flat_map(|(group_index, group)| {
            group
                .house_poles
                .iter()
                .map(move |pole| (group_index, pole.id.as_str()))
        })
        .filter(|(_, house_id)| seen.insert(*house_id))
        .collect();

    let reports = houses
        .par_iter()
        .map(|&(group_index, house_id)| -> Result<HouseReport, LayoutError> {
            let routes = solve(map, house_id)?;
            Ok(HouseReport {
                house_id: house_id.to_string(),
                group_index,
                best: shortest(&routes),
                routes,
            })
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    debug!(
        houses = reports.len(),
        unconnected = reports.iter().filter(|report| report.routes.is_empty()).count(),
        "survey complete"
    );

    Ok(reports)
}

/// Index of the shortest route; the first one on ties.
fn shortest(routes: &[Route]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, route) in routes.iter().enumerate() {
        match best {
            Some(current) if routes[current].distance <= route.distance => {}
            _ => best = Some(index),
        }
    }
    best
}
