//! A shape identity plus its ordered chain of motions

use easel_core::{Keyframe, Shape};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::motion::Motion;

/// One shape and the ordered motions that animate it.
///
/// Continuity is enforced on append: a motion whose start state does not
/// continue the previous motion's end state is rejected outright, never
/// silently corrected. Because of that, at most one motion covers any tick,
/// and the shape's implicit per-tick states reduce to: before the first
/// keyframe → invisible, inside a motion → that motion's interpolation,
/// beyond the last motion or inside a gap → invisible.
#[derive(Clone, Debug)]
pub struct AnimatedShape {
    shape: Shape,
    motions: SmallVec<[Motion; 4]>,
    keyframes: SmallVec<[Keyframe; 8]>,
}

impl AnimatedShape {
    /// Wrap a shape with no motions yet.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            motions: SmallVec::new(),
            keyframes: SmallVec::new(),
        }
    }

    pub fn id(&self) -> &str {
        self.shape.id()
    }

    /// The shape's live rendered state, as an independent copy.
    pub fn shape(&self) -> Shape {
        self.shape.clone()
    }

    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Append a motion, enforcing continuity with the previous one.
    ///
    /// The motion's end keyframe is recorded; its start keyframe too when it
    /// is the shape's first.
    pub fn add_motion(&mut self, motion: Motion) -> Result<()> {
        if let Some(last) = self.motions.last() {
            if motion.is_teleported_from(last) {
                return Err(TimelineError::Teleportation {
                    id: self.id().to_string(),
                    start: motion.start_tick(),
                });
            }
        }
        debug!(
            id = self.id(),
            start = motion.start_tick(),
            end = motion.end_tick(),
            "motion appended"
        );
        if self.keyframes.is_empty() {
            self.keyframes.push(motion.start_keyframe());
        }
        self.keyframes.push(motion.end_keyframe());
        self.motions.push(motion);
        Ok(())
    }

    fn motion_at(&self, tick: i32) -> Option<&Motion> {
        self.motions.iter().find(|m| m.occurs_at(tick))
    }

    /// Mutate the live rendered state to the result of querying `tick`.
    ///
    /// Invisible is the fallback when no motion covers the tick.
    pub fn apply_tick(&mut self, tick: i32) {
        match self.motion_at(tick).and_then(|m| m.state_at(tick)).copied() {
            Some(state) => self.shape.set_state(state),
            None => self.shape.make_invisible(),
        }
    }

    /// The shape's state at `tick`, as a fresh copy; never mutates.
    ///
    /// An exact keyframe match takes precedence over motion interpolation so
    /// boundary ticks stay exact even across gaps.
    pub fn shape_at(&self, tick: i32) -> Shape {
        let mut copy = self.shape.clone();
        if let Some(kf) = self.keyframes.iter().find(|kf| kf.tick == tick) {
            copy.apply_keyframe(kf);
            return copy;
        }
        match self.motion_at(tick).and_then(|m| m.state_at(tick)) {
            Some(state) => copy.set_state(*state),
            None => copy.make_invisible(),
        }
        copy
    }

    /// The shape's state at its first motion's start tick; invisible when no
    /// motion exists.
    pub fn shape_at_start(&self) -> Shape {
        match self.motions.first() {
            Some(first) => self.shape_at(first.start_tick()),
            None => {
                let mut copy = self.shape.clone();
                copy.make_invisible();
                copy
            }
        }
    }

    /// The first keyframe's tick, or `None` for a shape with no keyframes.
    pub fn first_tick(&self) -> Option<i32> {
        self.keyframes.first().map(|kf| kf.tick)
    }

    /// The last motion's end tick; 1 for a shape with no motions.
    pub fn last_tick(&self) -> i32 {
        self.motions.last().map_or(1, Motion::end_tick)
    }
}
