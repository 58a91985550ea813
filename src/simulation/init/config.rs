//! Physics constants, lifted into one struct so tests can override them
//! deterministically.

/// Tuning knobs for the whole engine. Units are tiles and seconds unless
/// stated otherwise.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConfig {
    /// Downward acceleration on airborne bodies, tiles/s^2.
    pub gravity: f32,
    /// Fixed simulation step, seconds.
    pub fixed_dt: f32,
    /// Cap on a single frame's delta before accumulation, ms.
    pub max_frame_delta_ms: f64,
    /// Wall-clock gap treated as a pause (tab backgrounded), ms.
    pub pause_gap_ms: f64,
    /// Velocity scale applied when resuming from a pause.
    pub pause_damping: f32,
    /// Speeds below this snap to zero.
    pub stop_threshold: f32,
    /// Height/vertical-velocity band force-settled to exactly zero.
    pub rest_epsilon: f32,
    /// Fraction of impact speed converted to a vertical hop on wall hits.
    pub bounce_kick: f32,
    /// Hard cap on horizontal and vertical speed, tiles/s.
    pub max_speed: f32,
    /// |row| / |col| beyond this triggers an out-of-bounds reset.
    pub world_bound: f32,
    /// Broad-phase axis-distance cull for pair tests, tiles.
    pub broad_phase_range: f32,
    /// Fixed anti-overlap push per resolved contact, tiles.
    pub separation_push: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            fixed_dt: 1.0 / 60.0,
            max_frame_delta_ms: 50.0,
            pause_gap_ms: 1000.0,
            pause_damping: 0.5,
            stop_threshold: 0.1,
            rest_epsilon: 0.01,
            bounce_kick: 0.2,
            max_speed: 40.0,
            world_bound: 512.0,
            broad_phase_range: 10.0,
            separation_push: 0.05,
        }
    }
}
