//! Impulse-based resolution for a colliding pair of finite-mass dynamics.
//!
//! Standard elastic-impulse exchange along the center-to-center normal,
//! restitution = min of the two bounce strengths, plus a small fixed
//! positional push to keep pairs from staying interlocked across ticks.
//! Field objects and infinite-mass bodies never reach this function.

use crate::core::Vec2;
use crate::domain::object::PhysicsState;
use crate::simulation::PhysicsConfig;

/// Apply the velocity exchange and separation push for one contact.
/// `normal` must be unit length, pointing from `a` toward `b`.
pub fn resolve_pair(
    a: &mut PhysicsState,
    b: &mut PhysicsState,
    normal: Vec2,
    config: &PhysicsConfig,
) {
    let mut v1 = Vec2::from_heading(a.angle, a.velocity);
    let mut v2 = Vec2::from_heading(b.angle, b.velocity);

    let inv_mass_a = 1.0 / a.mass;
    let inv_mass_b = 1.0 / b.mass;
    let inv_sum = inv_mass_a + inv_mass_b;

    let relative = v2 - v1;
    let along_normal = relative.dot(normal);

    // Impulse only when closing in; separating pairs are left alone.
    if along_normal < 0.0 {
        let restitution = a.bounce_strength.min(b.bounce_strength);
        let impulse = -(1.0 + restitution) * along_normal / inv_sum;
        v1 = v1 - normal * (impulse * inv_mass_a);
        v2 = v2 + normal * (impulse * inv_mass_b);
    }

    // Anti-overlap push, split by inverse-mass ratio so the heavier body
    // yields less ground.
    let push = config.separation_push;
    let share_a = inv_mass_a / inv_sum;
    let share_b = inv_mass_b / inv_sum;
    a.col -= normal.x * push * share_a;
    a.row -= normal.y * push * share_a;
    b.col += normal.x * push * share_b;
    b.row += normal.y * push * share_b;

    a.angle = v1.heading_deg();
    a.velocity = v1.length();
    b.angle = v2.heading_deg();
    b.velocity = v2.length();

    a.recompute_active();
    b.recompute_active();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(col: f32, angle: f32, velocity: f32, mass: f32, bounce: f32) -> PhysicsState {
        PhysicsState {
            row: 0.0,
            col,
            width: 1.0,
            depth: 1.0,
            extent: 1.0,
            angle,
            velocity,
            friction: 0.0,
            height: 0.0,
            vertical_velocity: 0.0,
            bounce_strength: bounce,
            mass,
            active: true,
        }
    }

    fn normal_col() -> Vec2 {
        Vec2::new(1.0, 0.0)
    }

    #[test]
    fn equal_mass_elastic_head_on_swaps_velocities() {
        // a heads right at 2, b heads left at 2, restitution 1.
        let mut a = body(0.0, 0.0, 2.0, 1.0, 1.0);
        let mut b = body(0.9, 180.0, 2.0, 1.0, 1.0);
        resolve_pair(&mut a, &mut b, normal_col(), &PhysicsConfig::default());

        assert!((a.velocity - 2.0).abs() < 1e-4);
        assert!((a.angle - 180.0).abs() < 1e-3);
        assert!((b.velocity - 2.0).abs() < 1e-4);
        assert!(b.angle.abs() < 1e-3 || (b.angle - 360.0).abs() < 1e-3);
    }

    #[test]
    fn elastic_collision_preserves_normal_kinetic_energy() {
        let mut a = body(0.0, 0.0, 3.0, 2.0, 1.0);
        let mut b = body(0.9, 180.0, 1.0, 5.0, 1.0);
        let n = normal_col();

        let energy_before = 0.5 * a.mass * (Vec2::from_heading(a.angle, a.velocity).dot(n)).powi(2)
            + 0.5 * b.mass * (Vec2::from_heading(b.angle, b.velocity).dot(n)).powi(2);

        resolve_pair(&mut a, &mut b, n, &PhysicsConfig::default());

        let energy_after = 0.5 * a.mass * (Vec2::from_heading(a.angle, a.velocity).dot(n)).powi(2)
            + 0.5 * b.mass * (Vec2::from_heading(b.angle, b.velocity).dot(n)).powi(2);
        assert!((energy_before - energy_after).abs() < 1e-3);
    }

    #[test]
    fn inelastic_collision_zeroes_relative_normal_velocity() {
        let mut a = body(0.0, 0.0, 4.0, 1.0, 0.0);
        let mut b = body(0.9, 180.0, 2.0, 3.0, 0.0);
        let n = normal_col();
        resolve_pair(&mut a, &mut b, n, &PhysicsConfig::default());

        let v1 = Vec2::from_heading(a.angle, a.velocity);
        let v2 = Vec2::from_heading(b.angle, b.velocity);
        assert!((v2 - v1).dot(n).abs() < 1e-4);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        // Already flying apart; only the separation push moves them.
        let mut a = body(0.0, 180.0, 2.0, 1.0, 1.0);
        let mut b = body(0.9, 0.0, 2.0, 1.0, 1.0);
        resolve_pair(&mut a, &mut b, normal_col(), &PhysicsConfig::default());
        assert!((a.velocity - 2.0).abs() < 1e-4);
        assert!((a.angle - 180.0).abs() < 1e-3);
        assert!((b.velocity - 2.0).abs() < 1e-4);
    }

    #[test]
    fn separation_push_favors_the_heavier_body() {
        let mut a = body(0.0, 0.0, 0.0, 1.0, 1.0);
        let mut b = body(0.5, 0.0, 0.0, 9.0, 1.0);
        let config = PhysicsConfig::default();
        resolve_pair(&mut a, &mut b, normal_col(), &config);
        let moved_a = -a.col;
        let moved_b = b.col - 0.5;
        assert!(moved_a > moved_b);
        assert!((moved_a + moved_b - config.separation_push).abs() < 1e-5);
    }
}
