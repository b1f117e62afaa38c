//! Run several animations concurrently and join on their completion.

use crate::tween::Animation;

/// A counting join over independent animations.
///
/// Every unfinished child is ticked once per tick; the runner reports
/// finished only once all children have. Relative ordering of the
/// children's property writes within one tick is unspecified. A group of
/// zero animations is finished from construction.
///
/// There are no partial-failure semantics: a child that never reaches its
/// exit condition keeps the whole group live.
pub struct Parallel {
    children: Vec<Box<dyn Animation>>,
    live: usize,
}

impl Parallel {
    pub fn new(children: Vec<Box<dyn Animation>>) -> Self {
        let live = children.iter().filter(|c| !c.is_finished()).count();
        Self { children, live }
    }

    /// Number of children still running.
    pub fn live(&self) -> usize {
        self.live
    }
}

impl Animation for Parallel {
    fn tick(&mut self, dt: f32) -> bool {
        if self.live == 0 {
            return false;
        }
        for child in &mut self.children {
            if !child.is_finished() && !child.tick(dt) {
                self.live -= 1;
            }
        }
        if self.live == 0 {
            log::trace!("Parallel group of {} animations complete", self.children.len());
        }
        self.live > 0
    }

    fn is_finished(&self) -> bool {
        self.live == 0
    }
}
