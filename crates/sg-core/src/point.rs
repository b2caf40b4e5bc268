//! Integer grid coordinate and the two distance metrics of the pipeline.

/// A cell coordinate on the world grid.
///
/// `x` indexes rows and `y` columns, matching the column-major order of the
/// input stream (outer loop over `y`, inner loop over `x`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance — the metric of the capital fallback search.
    #[inline]
    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Euclidean distance truncated toward zero.
    ///
    /// Truncated, not rounded: inter-capital edge weights are defined as
    /// `floor(sqrt(dx² + dy²))` and the cost output depends on it exactly.
    pub fn euclid_trunc(self, other: GridPoint) -> u32 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt() as u32
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
