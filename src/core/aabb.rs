/// Axis-aligned bounding box in tile units.
///
/// Built from a top-left `(row, col)` and a `(width, depth)` footprint.
/// `left`/`right` run along columns, `top`/`bottom` along rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn from_footprint(row: f32, col: f32, width: f32, depth: f32) -> Self {
        Self {
            left: col,
            right: col + width,
            top: row,
            bottom: row + depth,
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }

    /// Overlap extents on (column, row) axes; zero on an axis means no
    /// overlap there.
    pub fn overlap_extents(&self, other: &Aabb) -> (f32, f32) {
        let horizontal = (self.right.min(other.right) - self.left.max(other.left)).max(0.0);
        let vertical = (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0);
        (horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_extents_match_geometry() {
        let a = Aabb::from_footprint(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::from_footprint(1.5, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        let (h, v) = a.overlap_extents(&b);
        assert!((h - 1.0).abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::from_footprint(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::from_footprint(0.0, 1.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
        assert_eq!(a.overlap_extents(&b), (0.0, 1.0));
    }
}
