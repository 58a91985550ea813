//! Pairwise collision detection.
//!
//! Broad phase is a cheap axis-distance cull; narrow phase is a vertical
//! height-band test followed by exact AABB overlap on row/col. Static
//! bodies never get here - the wall resolver owns them.

use crate::domain::object::PhysicsState;

/// Overlap extents for a colliding pair, both strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Overlap along the column axis.
    pub horizontal: f32,
    /// Overlap along the row axis.
    pub vertical: f32,
}

/// Test a pair of bodies, culling with `range` before any exact math.
pub fn detect(a: &PhysicsState, b: &PhysicsState, range: f32) -> Option<Contact> {
    // Broad phase: skip pairs whose centers are far apart on either axis.
    // Measured from centers, not corners, so a wide footprint cannot cull
    // a pair whose boxes still touch.
    let ca = a.center();
    let cb = b.center();
    if (ca.x - cb.x).abs() > range || (ca.y - cb.y).abs() > range {
        return None;
    }

    // Vertical band: one body flying above the other's extent misses it.
    if a.height > b.height + b.extent || b.height > a.height + a.extent {
        return None;
    }

    let (horizontal, vertical) = a.aabb().overlap_extents(&b.aabb());
    if horizontal > 0.0 && vertical > 0.0 {
        Some(Contact {
            horizontal,
            vertical,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(row: f32, col: f32) -> PhysicsState {
        PhysicsState {
            row,
            col,
            width: 1.0,
            depth: 1.0,
            extent: 1.0,
            angle: 0.0,
            velocity: 0.0,
            friction: 0.0,
            height: 0.0,
            vertical_velocity: 0.0,
            bounce_strength: 0.5,
            mass: 1.0,
            active: true,
        }
    }

    #[test]
    fn overlapping_pair_reports_extents() {
        let a = state_at(0.0, 0.0);
        let b = state_at(0.5, 0.25);
        let contact = detect(&a, &b, 10.0).unwrap();
        assert!((contact.horizontal - 0.75).abs() < 1e-6);
        assert!((contact.vertical - 0.5).abs() < 1e-6);
    }

    #[test]
    fn wide_footprint_survives_the_broad_phase() {
        // A 12-tile counter field with an item at its far edge: the
        // top-left corners are 11 columns apart but the centers are
        // within range and the boxes overlap.
        let mut field = state_at(0.0, 0.0);
        field.width = 12.0;
        let item = state_at(0.0, 11.0);
        assert!(field.aabb().overlaps(&item.aabb()));
        let contact = detect(&field, &item, 10.0).unwrap();
        assert!((contact.horizontal - 1.0).abs() < 1e-6);
    }

    #[test]
    fn broad_phase_culls_distant_pairs() {
        let a = state_at(0.0, 0.0);
        let b = state_at(0.0, 50.0);
        assert!(detect(&a, &b, 10.0).is_none());
    }

    #[test]
    fn height_band_separates_stacked_objects() {
        let a = state_at(0.0, 0.0);
        let mut b = state_at(0.0, 0.0);
        b.height = 1.5; // above a's 1-tile extent
        assert!(detect(&a, &b, 10.0).is_none());
        b.height = 0.5; // bands overlap again
        assert!(detect(&a, &b, 10.0).is_some());
    }

    #[test]
    fn touching_edges_are_not_a_contact() {
        let a = state_at(0.0, 0.0);
        let b = state_at(0.0, 1.0);
        assert!(detect(&a, &b, 10.0).is_none());
    }
}
