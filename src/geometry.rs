//! Planar geometry primitives used by the measuring tools.
//!
//! Coordinates are map units (meters in a projected CRS). The types here only
//! carry what the measurement session publishes for rendering: a cursor point,
//! an open line, a single-ring polygon and the angle helper circle.

use serde::{Deserialize, Serialize};

/// A 2D map coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// Single position, used for the cursor marker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point(pub Coordinate);

/// Open polyline through an ordered list of coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<Coordinate>,
}

impl LineString {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Sum of all segment lengths. Zero for fewer than two coordinates.
    pub fn length(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

/// Polygon with a single exterior ring.
///
/// The ring is stored open; the closing segment back to the first coordinate
/// is implied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(exterior: Vec<Coordinate>) -> Self {
        Self { exterior }
    }

    /// Unsigned area of the ring (shoelace formula).
    pub fn area(&self) -> f64 {
        let ring = &self.exterior;
        if ring.len() < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for (i, current) in ring.iter().enumerate() {
            let next = &ring[(i + 1) % ring.len()];
            twice_area += current.x * next.y - next.x * current.y;
        }
        (twice_area / 2.0).abs()
    }

    /// Bounding box of the ring, `None` when the ring is empty.
    pub fn extent(&self) -> Option<Extent> {
        let first = self.exterior.first()?;
        let mut extent = Extent {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for c in &self.exterior[1..] {
            extent.min_x = extent.min_x.min(c.x);
            extent.min_y = extent.min_y.min(c.y);
            extent.max_x = extent.max_x.max(c.x);
            extent.max_y = extent.max_y.max(c.y);
        }
        Some(extent)
    }

    /// A point guaranteed to sit inside non-degenerate rings.
    ///
    /// Casts a horizontal line through the vertical centre of the extent and
    /// returns the midpoint of the widest chord it cuts out of the ring. Falls
    /// back to the extent centre when no chord exists (degenerate rings), and
    /// to the origin for an empty ring.
    pub fn interior_point(&self) -> Coordinate {
        let Some(extent) = self.extent() else {
            return Coordinate::ORIGIN;
        };
        let y = (extent.min_y + extent.max_y) / 2.0;

        let ring = &self.exterior;
        let mut crossings: Vec<f64> = Vec::new();
        for (i, a) in ring.iter().enumerate() {
            let b = &ring[(i + 1) % ring.len()];
            // Half-open test so a vertex lying on the scan line is counted once.
            if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                let t = (y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f64::total_cmp);

        let widest = crossings
            .chunks_exact(2)
            .max_by(|l, r| (l[1] - l[0]).total_cmp(&(r[1] - r[0])));
        match widest {
            Some(chord) if chord[1] > chord[0] => Coordinate::new((chord[0] + chord[1]) / 2.0, y),
            _ => extent.center(),
        }
    }
}

/// Circle used as the angle helper.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coordinate,
    pub radius: f64,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn line_length_sums_segments() {
        let line = LineString::new(vec![c(0.0, 0.0), c(3.0, 4.0), c(3.0, 10.0)]);
        assert!((line.length() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn line_length_of_single_coordinate_is_zero() {
        assert_eq!(LineString::new(vec![c(5.0, 5.0)]).length(), 0.0);
        assert_eq!(LineString::default().length(), 0.0);
    }

    #[test]
    fn polygon_area_ignores_winding() {
        let ccw = Polygon::new(vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 5.0), c(0.0, 5.0)]);
        let cw = Polygon::new(ccw.exterior.iter().rev().copied().collect());
        assert!((ccw.area() - 50.0).abs() < 1e-12);
        assert!((cw.area() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn polygon_area_of_degenerate_ring_is_zero() {
        assert_eq!(Polygon::new(vec![c(1.0, 1.0), c(2.0, 2.0)]).area(), 0.0);
        assert_eq!(Polygon::default().area(), 0.0);
    }

    #[test]
    fn interior_point_of_concave_ring_stays_inside() {
        // U shape: the extent centre (5, 5) lies in the notch.
        let ring = Polygon::new(vec![
            c(0.0, 0.0),
            c(10.0, 0.0),
            c(10.0, 10.0),
            c(7.0, 10.0),
            c(7.0, 2.0),
            c(3.0, 2.0),
            c(3.0, 10.0),
            c(0.0, 10.0),
        ]);
        let p = ring.interior_point();
        assert_eq!(p.y, 5.0);
        assert!(p.x < 3.0 || p.x > 7.0, "point {p:?} landed in the notch");
    }

    #[test]
    fn interior_point_falls_back_for_degenerate_rings() {
        let line_ring = Polygon::new(vec![c(0.0, 0.0), c(4.0, 0.0)]);
        assert_eq!(line_ring.interior_point(), c(2.0, 0.0));
        assert_eq!(Polygon::default().interior_point(), Coordinate::ORIGIN);
    }
}
