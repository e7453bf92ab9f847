//! The built-in arena: an outer room with a corridor and two pillars.

use crate::core::{Map, MapError};

const OUTER: &[(f64, f64)] = &[
    (20.0, 20.0),
    (50.0, 20.0),
    (50.0, 50.0),
    (40.0, 50.0),
    (40.0, 70.0),
    (50.0, 70.0),
    (50.0, 75.0),
    (20.0, 75.0),
    (20.0, 70.0),
    (35.0, 70.0),
    (35.0, 50.0),
    (20.0, 50.0),
];

const CORNER_BLOCK: &[(f64, f64)] = &[(20.0, 20.0), (20.0, 30.0), (30.0, 30.0), (30.0, 20.0)];

const PILLAR: &[(f64, f64)] = &[(35.0, 35.0), (35.0, 40.0), (40.0, 40.0), (40.0, 35.0)];

/// The default map. The default pose (45, 45) facing +x stands inside it.
pub fn demo_map() -> Result<Map, MapError> {
    Map::from_coords(&[OUTER, CORNER_BLOCK, PILLAR])
}
