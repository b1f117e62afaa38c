//! Animation scheduler
//!
//! Owns running animations, advances them once per host frame, and retires
//! the ones that finish.

use slotmap::{new_key_type, SlotMap};

use crate::tween::Animation;

new_key_type! {
    /// Stable id for a scheduled animation.
    pub struct AnimationId;
}

/// The scheduler that ticks all spawned animations.
///
/// The host calls [`tick`](Scheduler::tick) once per frame with its own
/// frame delta; the scheduler never reads a clock. Relative ordering of
/// different animations' property writes within one tick is unspecified.
///
/// The core driver has no cancellation; [`cancel`](Scheduler::cancel) is
/// the layered primitive that stops an animation mid-flight.
pub struct Scheduler {
    animations: SlotMap<AnimationId, Box<dyn Animation>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
        }
    }

    /// Start running an animation. Finished animations are retired on the
    /// next tick, so spawning an already-finished one is harmless.
    pub fn spawn(&mut self, animation: Box<dyn Animation>) -> AnimationId {
        let id = self.animations.insert(animation);
        log::trace!("Spawned animation {:?} ({} active)", id, self.animations.len());
        id
    }

    /// Stop an animation mid-flight, returning it if it was still running.
    pub fn cancel(&mut self, id: AnimationId) -> Option<Box<dyn Animation>> {
        let animation = self.animations.remove(id);
        if animation.is_some() {
            log::debug!("Cancelled animation {:?}", id);
        }
        animation
    }

    /// Advance every animation by `dt` seconds and retire the finished ones.
    pub fn tick(&mut self, dt: f32) {
        let mut finished = Vec::new();
        for (id, animation) in self.animations.iter_mut() {
            if !animation.tick(dt) {
                finished.push(id);
            }
        }
        for id in finished {
            self.animations.remove(id);
            log::trace!("Animation {:?} finished", id);
        }
    }

    /// Check if any animations are still running.
    pub fn has_active(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Number of animations currently scheduled.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
