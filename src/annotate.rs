//! Flatten a route into tagged points for drawing.
//!
//! Order is path houses, then the group end, then the electrical pole, which is
//! the order a front end can draw as one polyline.

use serde::{Deserialize, Serialize};

use crate::model::{Pole, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    House,
    Endpoint,
    Elec,
}

/// A pole tagged with the role it plays in a route.
///
/// Serializes as the pole's own fields plus `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub pole: Pole,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

pub fn annotate(route: &Route) -> Vec<RoutePoint> {
    let houses = route.path.iter().map(|pole| RoutePoint {
        pole: pole.clone(),
        kind: PointKind::House,
    });

    houses
        .chain([
            RoutePoint {
                pole: route.house_endpoint_pole.clone(),
                kind: PointKind::Endpoint,
            },
            RoutePoint {
                pole: route.elec_pole.clone(),
                kind: PointKind::Elec,
            },
        ])
        .collect()
}

/// One annotated polyline per route, in route order.
pub fn annotate_all(routes: &[Route]) -> Vec<Vec<RoutePoint>> {
    routes.iter().map(annotate).collect()
}
