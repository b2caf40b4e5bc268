//! Unit tests for sg-ray.
//!
//! Expected cell lists are worked out by hand against the ±0.5 box-edge
//! crossing rule; corner touches count.

#[cfg(test)]
mod cells {
    use sg_core::GridPoint;

    use crate::Ray;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn horizontal_ray_sweeps_one_row() {
        let ray = Ray::new(p(0, 0), p(1, 0));
        assert_eq!(ray.cells(3, 3), vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    }

    #[test]
    fn vertical_ray_sweeps_one_column() {
        // No direct line function exists; only the inverse checks fire.
        let ray = Ray::new(p(1, 0), p(0, 1));
        assert_eq!(ray.cells(3, 3), vec![p(1, 0), p(1, 1), p(1, 2), p(1, 3)]);
    }

    #[test]
    fn diagonal_ray_includes_corner_touches() {
        // y = x passes exactly through box corners, picking up the cells on
        // both sides of each corner.
        let ray = Ray::new(p(0, 0), p(1, 1));
        assert_eq!(
            ray.cells(2, 2),
            vec![p(0, 0), p(1, 0), p(0, 1), p(1, 1), p(2, 1), p(1, 2), p(2, 2)]
        );
    }

    #[test]
    fn bottom_left_ray_enumerates_downward() {
        // Same carrier line as the diagonal test, opposite direction: the
        // traversal starts at the origin cell and walks toward (0,0).
        let ray = Ray::new(p(2, 2), p(-1, -1));
        assert_eq!(
            ray.cells(3, 3),
            vec![p(2, 2), p(1, 2), p(2, 1), p(1, 1), p(0, 1), p(1, 0), p(0, 0)]
        );
    }

    #[test]
    fn steep_ray_is_enumerated_column_major() {
        // dir (1,2): y dominates, so candidates nest x-outer and the output
        // groups by column.
        let ray = Ray::new(p(0, 0), p(1, 2));
        assert_eq!(
            ray.cells(3, 3),
            vec![p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(1, 3), p(2, 3)]
        );
    }

    #[test]
    fn bounds_clip_the_sweep() {
        let ray = Ray::new(p(0, 0), p(1, 0));
        assert_eq!(ray.cells(1, 1), vec![p(0, 0), p(1, 0)]);
    }

    #[test]
    fn ray_anchored_at_far_corner_stays_in_bounds() {
        let ray = Ray::new(p(3, 3), p(1, 1));
        assert_eq!(ray.cells(3, 3), vec![p(3, 3)]);
    }
}
