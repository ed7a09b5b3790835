//! Brute-force nearest electrical pole lookup.
//!
//! Scans every pole. Fine for the pole counts a single settlement map carries;
//! a spatial index can replace it behind `NearestPoleFinder`.

use crate::distance::distance;
use crate::model::Pole;
use crate::traits::{NearestPoleFinder, Positioned};

/// Linear min-search over all poles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl NearestPoleFinder for LinearScan {
    fn nearest<'a, P: Positioned + ?Sized>(&self, poles: &'a [Pole], target: &P) -> Option<&'a Pole> {
        let mut best: Option<(&Pole, f64)> = None;

        for pole in poles {
            let d = distance(pole, target);
            // Strict comparison: the first of equally close poles is kept.
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((pole, d));
            }
        }

        best.map(|(pole, _)| pole)
    }
}
