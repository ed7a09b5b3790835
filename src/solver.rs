//! Layout solver: wire one house to the nearest usable electrical pole.
//!
//! Greedy and local to the requested house. Each end of the house's group
//! connects to its own nearest electrical pole; when both ends would take the
//! same pole, the end with the shorter connection keeps it.

use crate::distance::{chain_length, distance};
use crate::error::LayoutError;
use crate::model::{HouseGroup, MapInfo, Route};
use crate::nearest::LinearScan;
use crate::traits::NearestPoleFinder;

/// Candidate routes for `house_id`, front route first.
///
/// Returns zero routes when neither end of the house's group may connect.
pub fn solve(map: &MapInfo, house_id: &str) -> Result<Vec<Route>, LayoutError> {
    solve_with(map, house_id, &LinearScan)
}

/// Same as [`solve`], with a caller-supplied nearest-pole lookup.
pub fn solve_with<F>(map: &MapInfo, house_id: &str, finder: &F) -> Result<Vec<Route>, LayoutError>
where
    F: NearestPoleFinder,
{
    let (group, house_index) = locate_house(map, house_id)?;
    let houses = &group.house_poles;

    // Cable from the first house up to the requested one, and from there to the last.
    let lead_length = chain_length(&houses[..=house_index]);
    let trail_length = chain_length(&houses[house_index..]);

    let front_nearest = finder
        .nearest(&map.elec_poles, &group.front_pole)
        .ok_or(LayoutError::NoElectricalPoles)?;
    let back_nearest = finder
        .nearest(&map.elec_poles, &group.back_pole)
        .ok_or(LayoutError::NoElectricalPoles)?;

    let front_link = distance(front_nearest, &group.front_pole);
    let back_link = distance(back_nearest, &group.back_pole);

    let mut front_valid = group.front_valid;
    let mut back_valid = group.back_valid;

    if front_valid && back_valid && front_nearest.id == back_nearest.id {
        if front_link < back_link {
            back_valid = false;
        } else {
            front_valid = false;
        }
    }

    let mut routes = Vec::with_capacity(2);

    // NOTE: each route is charged the run length on the opposite side of the
    // house (front + trail, back + lead). Pending confirmation of the intended pairing.
    if front_valid {
        routes.push(Route {
            distance: front_link + trail_length,
            path: houses[..=house_index].iter().rev().cloned().collect(),
            house_endpoint_pole: group.front_pole.clone(),
            elec_pole: front_nearest.clone(),
        });
    }

    if back_valid {
        routes.push(Route {
            distance: back_link + lead_length,
            path: houses[house_index..].to_vec(),
            house_endpoint_pole: group.back_pole.clone(),
            elec_pole: back_nearest.clone(),
        });
    }

    Ok(routes)
}

/// First group (in map order) holding `house_id`, with the house's position in it.
pub fn locate_house<'a>(map: &'a MapInfo, house_id: &str) -> Result<(&'a HouseGroup, usize), LayoutError> {
    map.house_groups
        .iter()
        .find_map(|group| group.house_index(house_id).map(|index| (group, index)))
        .ok_or_else(|| LayoutError::HouseNotFound {
            house_id: house_id.to_string(),
        })
}
