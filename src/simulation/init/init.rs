use std::collections::HashSet;

use crate::core::Clock;

use super::scheduler::{LoopState, NullScheduler};
use super::{PhysicsConfig, WorldCore};

pub(super) fn create_world_core(config: PhysicsConfig) -> WorldCore {
    WorldCore {
        objects: Vec::new(),
        config,

        loop_state: LoopState::Stopped,
        visible: true,
        last_tick_ms: None,
        accumulator_ms: 0.0,
        scheduler: Box::new(NullScheduler),
        clock: Clock::start(),
        frame_count: 0,

        obstacles: Vec::new(),
        statics_dirty: true,
        overlaps: HashSet::new(),
        events: Vec::new(),
        transform_buffer: Vec::new(),
        rng_state: 12345,
    }
}
