//! Parametric-ray traversal over a unit-cell grid.
//!
//! Cells are 1×1 boxes centred on integer coordinates.  A cell counts as
//! crossed when the ray's carrier line intersects any of the box's four
//! edges: its height at the left or right edge falls inside the vertical
//! span, or its inverse at the bottom or top edge inside the horizontal
//! span.  A vertical ray has no direct function and a horizontal ray no
//! inverse; the corresponding edge checks are skipped.
//!
//! Candidates are enumerated from the origin cell outward in the direction
//! quadrant, with the loop nesting chosen by the dominant axis, so the
//! output order is stable and origin-first along the dominant axis.

use sg_core::GridPoint;

// ── Direction classification ──────────────────────────────────────────────────

/// Quadrant of the direction vector; drives candidate enumeration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

// ── Ray ───────────────────────────────────────────────────────────────────────

/// A ray anchored at an integer cell with an integer direction vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ray {
    pub origin: GridPoint,
    pub dir: GridPoint,
}

impl Ray {
    #[inline]
    pub fn new(origin: GridPoint, dir: GridPoint) -> Self {
        Self { origin, dir }
    }

    fn quadrant(&self) -> Quadrant {
        if self.dir.x < 0 {
            if self.dir.y >= 0 { Quadrant::TopLeft } else { Quadrant::BottomLeft }
        } else if self.dir.y >= 0 {
            Quadrant::TopRight
        } else {
            Quadrant::BottomRight
        }
    }

    fn dominant_axis(&self) -> Axis {
        if self.dir.x.abs() >= self.dir.y.abs() { Axis::X } else { Axis::Y }
    }

    /// Unit cells crossed by the ray within `0..=max_x` × `0..=max_y`,
    /// in enumeration order.
    pub fn cells(&self, max_x: i32, max_y: i32) -> Vec<GridPoint> {
        let line = Line::from_ray(self);
        self.candidates(max_x, max_y)
            .into_iter()
            .filter(|&cell| line.crosses(cell))
            .collect()
    }

    /// Candidate cell indices from the origin toward the quadrant bounds.
    fn candidates(&self, max_x: i32, max_y: i32) -> Vec<GridPoint> {
        let o = self.origin;
        let mut cells = Vec::new();
        let mut push = |x: i32, y: i32| cells.push(GridPoint::new(x, y));

        match (self.quadrant(), self.dominant_axis()) {
            (Quadrant::TopLeft, Axis::X) => {
                for y in o.y..=max_y {
                    for x in (0..=o.x).rev() {
                        push(x, y);
                    }
                }
            }
            (Quadrant::TopLeft, Axis::Y) => {
                for x in (0..=o.x).rev() {
                    for y in o.y..=max_y {
                        push(x, y);
                    }
                }
            }
            (Quadrant::TopRight, Axis::X) => {
                for y in o.y..=max_y {
                    for x in o.x..=max_x {
                        push(x, y);
                    }
                }
            }
            (Quadrant::TopRight, Axis::Y) => {
                for x in o.x..=max_x {
                    for y in o.y..=max_y {
                        push(x, y);
                    }
                }
            }
            (Quadrant::BottomLeft, Axis::X) => {
                for y in (0..=o.y).rev() {
                    for x in (0..=o.x).rev() {
                        push(x, y);
                    }
                }
            }
            (Quadrant::BottomLeft, Axis::Y) => {
                for x in (0..=o.x).rev() {
                    for y in (0..=o.y).rev() {
                        push(x, y);
                    }
                }
            }
            (Quadrant::BottomRight, Axis::X) => {
                for y in (0..=o.y).rev() {
                    for x in o.x..=max_x {
                        push(x, y);
                    }
                }
            }
            (Quadrant::BottomRight, Axis::Y) => {
                for x in o.x..=max_x {
                    for y in (0..=o.y).rev() {
                        push(x, y);
                    }
                }
            }
        }

        cells
    }
}

// ── Carrier line ──────────────────────────────────────────────────────────────

/// The ray's carrier line `y = kx + n` and its inverse.
///
/// `slope = None` encodes a vertical line (no direct function); a zero
/// slope has no inverse.
struct Line {
    slope: Option<f64>,
    intercept: f64,
    origin_x: f64,
}

impl Line {
    fn from_ray(ray: &Ray) -> Self {
        let slope = if ray.dir.x != 0 {
            Some(f64::from(ray.dir.y) / f64::from(ray.dir.x))
        } else {
            None
        };
        let intercept = match slope {
            Some(k) => f64::from(ray.origin.y) - k * f64::from(ray.origin.x),
            None => 0.0,
        };
        Self { slope, intercept, origin_x: f64::from(ray.origin.x) }
    }

    /// Height of the line at `x`; `None` for a vertical line.
    fn value_at(&self, x: f64) -> Option<f64> {
        self.slope.map(|k| k * x + self.intercept)
    }

    /// `x` where the line reaches height `y`; `None` for a horizontal line.
    fn x_at(&self, y: f64) -> Option<f64> {
        match self.slope {
            None => Some(self.origin_x),
            Some(k) if k == 0.0 => None,
            Some(k) => Some((y - self.intercept) / k),
        }
    }

    /// Does the line intersect the 1×1 box centred on `cell`?
    fn crosses(&self, cell: GridPoint) -> bool {
        let (x, y) = (f64::from(cell.x), f64::from(cell.y));

        // Left and right edges: line height inside the vertical span.
        for edge_x in [x - 0.5, x + 0.5] {
            if let Some(height) = self.value_at(edge_x) {
                if (y - 0.5..=y + 0.5).contains(&height) {
                    return true;
                }
            }
        }
        // Bottom and top edges: inverse inside the horizontal span.
        for edge_y in [y - 0.5, y + 0.5] {
            if let Some(reach) = self.x_at(edge_y) {
                if (x - 0.5..=x + 0.5).contains(&reach) {
                    return true;
                }
            }
        }
        false
    }
}
