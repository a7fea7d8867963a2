//! Bounding-box filtering of the overlay dataset.
//!
//! DESIGN
//! ======
//! Bounds are normalized into a [`FilterRequest`] on a thousandth-of-a-degree
//! grid before filtering: minimums are floored, maximums are floored then
//! widened by one step unless they already sit on the axis limit. The grid
//! makes requests hashable so they can key the overlay cache, and the
//! widening keeps a feature drawn at the typed maximum inside the box.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use super::bounds::{Axis, Bounds};
use super::geo::{GeoData, GeoFeature};

/// Grid steps per degree.
const STEPS_PER_DEGREE: f64 = 1000.0;

/// Bounds snapped to the filter grid, in thousandths of a degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterRequest {
    min_lat: i32,
    max_lat: i32,
    min_lon: i32,
    max_lon: i32,
}

impl FilterRequest {
    #[must_use]
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self {
            min_lat: grid_floor(bounds.min_lat),
            max_lat: grid_ceiling(bounds.max_lat, Axis::Latitude),
            min_lon: grid_floor(bounds.min_lon),
            max_lon: grid_ceiling(bounds.max_lon, Axis::Longitude),
        }
    }

    #[must_use]
    pub fn min_lat(&self) -> f64 {
        from_grid(self.min_lat)
    }

    #[must_use]
    pub fn max_lat(&self) -> f64 {
        from_grid(self.max_lat)
    }

    #[must_use]
    pub fn min_lon(&self) -> f64 {
        from_grid(self.min_lon)
    }

    #[must_use]
    pub fn max_lon(&self) -> f64 {
        from_grid(self.max_lon)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat()..=self.max_lat()).contains(&lat) && (self.min_lon()..=self.max_lon()).contains(&lon)
    }
}

/// Keep the features lying entirely inside `request`.
#[must_use]
pub fn filter_features(data: &GeoData, request: &FilterRequest) -> GeoData {
    let features = data
        .features
        .iter()
        .filter(|feature| feature_within(feature, request))
        .cloned()
        .collect();
    GeoData::from_features(features)
}

/// A feature is inside when it has at least one position and every
/// `[lon, lat]` position is contained. Features without geometry never match.
fn feature_within(feature: &GeoFeature, request: &FilterRequest) -> bool {
    let Some(geometry) = &feature.geometry else {
        return false;
    };
    let mut positions = geometry.positions().peekable();
    if positions.peek().is_none() {
        return false;
    }
    positions.all(|position| match position {
        [lon, lat, ..] => request.contains(*lat, *lon),
        _ => false,
    })
}

/// Floor onto the grid. The value is first snapped to a much finer grid so
/// binary representation noise (`-71.4 * 1000 = -71400.00000000001`) does not
/// drop it a whole step.
#[allow(clippy::cast_possible_truncation)]
fn grid_floor(value: f64) -> i32 {
    let scaled = value * STEPS_PER_DEGREE;
    let snapped = (scaled * 1e6).round() / 1e6;
    snapped.floor() as i32
}

#[allow(clippy::cast_possible_truncation)]
fn grid_ceiling(value: f64, axis: Axis) -> i32 {
    let limit = (axis.limit() * STEPS_PER_DEGREE) as i32;
    let floored = grid_floor(value);
    if floored >= limit { limit } else { floored + 1 }
}

fn from_grid(steps: i32) -> f64 {
    f64::from(steps) / STEPS_PER_DEGREE
}
