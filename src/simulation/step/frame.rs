//! Frame pacing: fixed-timestep accumulator over host animation frames,
//! with loop lifecycle and the page-visibility pause path.

use crate::systems::stability;

use super::scheduler::LoopState;
use super::{step, WorldCore};

pub(super) fn start(world: &mut WorldCore) {
    if world.loop_state == LoopState::Running {
        return;
    }
    world.loop_state = LoopState::Running;
    world.last_tick_ms = None;
    world.accumulator_ms = 0.0;
    if world.visible {
        world.scheduler.request_tick();
    }
}

pub(super) fn stop(world: &mut WorldCore) {
    if world.loop_state == LoopState::Stopped {
        return;
    }
    world.loop_state = LoopState::Stopped;
    world.scheduler.cancel();
}

pub(super) fn set_visible(world: &mut WorldCore, visible: bool) {
    if world.visible == visible {
        return;
    }
    world.visible = visible;
    if !visible {
        // Keep the loop state; just stop asking for frames. The resume
        // path re-stamps the clock so the hidden interval never enters
        // the accumulator.
        world.scheduler.cancel();
    } else if world.loop_state == LoopState::Running {
        world.last_tick_ms = None;
        world.scheduler.request_tick();
    }
}

/// Wake the loop after a command put a body in motion. This is the push
/// counterpart of the active-set watch: Stopped -> Running the moment the
/// active set becomes non-empty.
pub(super) fn wake(world: &mut WorldCore) {
    if world.loop_state == LoopState::Stopped && world.has_active() {
        start(world);
    }
}

pub(super) fn frame(world: &mut WorldCore, now_ms: f64) {
    if world.loop_state != LoopState::Running || !world.visible {
        return;
    }

    let Some(last) = world.last_tick_ms else {
        // First frame after start/resume only stamps the clock.
        world.last_tick_ms = Some(now_ms);
        world.scheduler.request_tick();
        return;
    };

    let raw_delta = now_ms - last;
    world.last_tick_ms = Some(now_ms);

    let step_ms = world.config.fixed_dt as f64 * 1000.0;
    if raw_delta > world.config.pause_gap_ms {
        // Long gap (tab backgrounded without a visibility signal): dampen
        // and take exactly one fixed step instead of catching up.
        stability::dampen_after_pause(&mut world.objects, &world.config);
        world.accumulator_ms = step_ms;
    } else {
        world.accumulator_ms += raw_delta.max(0.0).min(world.config.max_frame_delta_ms);
    }

    while world.accumulator_ms >= step_ms {
        step::fixed_step(world, world.config.fixed_dt);
        world.accumulator_ms -= step_ms;
    }

    // Running -> Stopped the moment the active set drains.
    if world.has_active() {
        world.scheduler.request_tick();
    } else {
        stop(world);
    }
}
