use crate::{
    prelude::*,
    quantity::{Quantity, rate::EmissionRate},
};

/// World-average grid intensity, also the fallback for unknown keys.
pub const WORLD_AVERAGE: EmissionRate = Quantity(0.475);

/// Regional grid intensities in kg CO2 per kWh, keyed by every accepted
/// spelling. Approximate national averages.
pub const REGION_FACTORS: &[(&[&str], f64)] = &[
    (&["US", "USA", "UNITED STATES"], 0.475),
    (&["CN", "CHINA"], 0.704),
    (&["IN", "INDIA"], 0.707),
    (&["DE", "GERMANY"], 0.318),
    (&["FR", "FRANCE"], 0.059),
    (&["JP", "JAPAN"], 0.503),
    (&["GB", "UK", "UNITED KINGDOM"], 0.285),
    (&["BR", "BRAZIL"], 0.116),
    (&["CA", "CANADA"], 0.129),
    (&["AU", "AUSTRALIA"], 0.798),
    (&["EU", "EUROPEAN UNION"], 0.299),
];

/// Grid-mix intensities in kg CO2 per kWh.
pub const GRID_FACTORS: &[(&str, f64)] = &[
    ("coal", 0.95),
    ("gas", 0.47),
    ("oil", 0.82),
    ("renewable", 0.05),
    ("solar", 0.045),
    ("wind", 0.015),
    ("hydro", 0.02),
    ("nuclear", 0.012),
    ("mixed", 0.475),
];

/// Looks a region up by code or name, case-insensitively. Unknown regions
/// resolve to the world average rather than failing.
#[must_use]
pub fn for_region(region: &str) -> EmissionRate {
    let key = region.to_uppercase();
    for (aliases, factor) in REGION_FACTORS {
        if aliases.contains(&key.as_str()) {
            return Quantity(*factor);
        }
    }
    warn!(region, "unknown region, using the world average");
    WORLD_AVERAGE
}

/// Looks a grid mix up, case-insensitively. Unknown mixes resolve to the world
/// average rather than failing.
#[must_use]
pub fn for_grid_mix(grid_mix: &str) -> EmissionRate {
    let key = grid_mix.to_lowercase();
    for (name, factor) in GRID_FACTORS {
        if *name == key {
            return Quantity(*factor);
        }
    }
    warn!(grid_mix, "unknown grid mix, using the world average");
    WORLD_AVERAGE
}
