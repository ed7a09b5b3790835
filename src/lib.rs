//! pole-layout core
//!
//! Assigns houses strung along cable runs to the nearest usable electrical pole.

pub mod traits;
pub mod error;
pub mod model;
pub mod distance;
pub mod nearest;
pub mod solver;
pub mod annotate;
pub mod registry;
pub mod survey;
pub mod demo;
