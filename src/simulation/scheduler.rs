//! Frame scheduling abstraction.
//!
//! The loop never talks to `requestAnimationFrame` directly; it tells a
//! [`FrameScheduler`] when it wants the next tick and when to stand down.
//! The browser host polls [`super::World::wants_frame`] through the
//! default [`NullScheduler`]; tests install a recording scheduler and feed
//! synthetic timestamps.

/// Where the loop gets its next animation frame from.
pub trait FrameScheduler {
    /// Ask the host to deliver one more frame callback.
    fn request_tick(&mut self);
    /// Withdraw any pending frame request.
    fn cancel(&mut self);
}

/// Scheduler for hosts that poll instead of being pushed to. The wasm
/// facade uses this: JS keeps calling `frame()` while `wants_frame()` is
/// true, so there is nothing to request or cancel.
#[derive(Default)]
pub struct NullScheduler;

impl FrameScheduler for NullScheduler {
    fn request_tick(&mut self) {}
    fn cancel(&mut self) {}
}

/// Loop lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}
