//! Four-corner acquisition footprints.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// A geographic point in degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The four-corner ground footprint of one acquisition.
///
/// Corners are named by their position along the acquisition: first/last line,
/// near/far range. Ring order is fixed as first-near, last-near, last-far,
/// first-far, closing implicitly back to the first corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub first_near: GeoPoint,
    pub first_far: GeoPoint,
    pub last_near: GeoPoint,
    pub last_far: GeoPoint,
}

impl Footprint {
    /// The corners in polygon ring order.
    pub fn ring(&self) -> [GeoPoint; 4] {
        [self.first_near, self.last_near, self.last_far, self.first_far]
    }

    /// The ring closed back to the first corner, as [lon, lat] pairs.
    ///
    /// This is the coordinate layout GeoJSON-style consumers expect.
    pub fn closed_ring_lonlat(&self) -> Vec<[f64; 2]> {
        let mut ring: Vec<[f64; 2]> = self.ring().iter().map(|p| [p.lon, p.lat]).collect();
        ring.push([self.first_near.lon, self.first_near.lat]);
        ring
    }

    /// Axis-aligned bounds of the four corners.
    pub fn bounds(&self) -> BoundingBox {
        let ring = self.ring();
        let mut bounds = BoundingBox::new(ring[0].lon, ring[0].lat, ring[0].lon, ring[0].lat);
        for corner in &ring[1..] {
            bounds.min_lon = bounds.min_lon.min(corner.lon);
            bounds.min_lat = bounds.min_lat.min(corner.lat);
            bounds.max_lon = bounds.max_lon.max(corner.lon);
            bounds.max_lat = bounds.max_lat.max(corner.lat);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Footprint {
        Footprint {
            first_near: GeoPoint::new(44.0, -10.0),
            first_far: GeoPoint::new(44.1, -9.5),
            last_near: GeoPoint::new(43.5, -10.1),
            last_far: GeoPoint::new(43.6, -9.6),
        }
    }

    #[test]
    fn test_ring_order() {
        let fp = sample();
        let ring = fp.ring();
        assert_eq!(ring[0], fp.first_near);
        assert_eq!(ring[1], fp.last_near);
        assert_eq!(ring[2], fp.last_far);
        assert_eq!(ring[3], fp.first_far);
    }

    #[test]
    fn test_closed_ring_repeats_first_corner() {
        let ring = sample().closed_ring_lonlat();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        // [lon, lat] order
        assert_eq!(ring[0], [-10.0, 44.0]);
    }

    #[test]
    fn test_bounds() {
        let bounds = sample().bounds();
        assert_eq!(bounds.min_lon, -10.1);
        assert_eq!(bounds.max_lon, -9.5);
        assert_eq!(bounds.min_lat, 43.5);
        assert_eq!(bounds.max_lat, 44.1);
    }
}
