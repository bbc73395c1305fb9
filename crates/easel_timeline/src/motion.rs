//! Linear interpolation between two keyframes
//!
//! A [`Motion`] owns a per-tick state cache built once at construction;
//! queries afterwards are O(1) index lookups, never recomputed.

use easel_core::{Color, Keyframe, Location, ShapeError, ShapeState};

use crate::error::{Result, TimelineError};

/// An interpolation contract between a start and an end keyframe, valid over
/// the closed tick range they bound.
///
/// A motion whose start and end tick coincide is a "pin": it has no
/// interpolation and every in-range query returns the end values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Motion {
    start: Keyframe,
    end: Keyframe,
    frames: Vec<ShapeState>,
}

impl Motion {
    /// Build a motion between two keyframes and precompute its per-tick
    /// states.
    ///
    /// Rejects non-positive ticks, an end tick before the start tick, and
    /// negative widths or heights.
    pub fn new(start: Keyframe, end: Keyframe) -> Result<Self> {
        if start.tick <= 0 || end.tick <= 0 {
            return Err(TimelineError::NonPositiveTick {
                start: start.tick,
                end: end.tick,
            });
        }
        if end.tick < start.tick {
            return Err(TimelineError::ReversedTicks {
                start: start.tick,
                end: end.tick,
            });
        }
        for kf in [&start, &end] {
            if kf.width < 0 || kf.height < 0 {
                return Err(ShapeError::InvalidSize {
                    width: kf.width,
                    height: kf.height,
                }
                .into());
            }
        }
        let frames = interpolate(&start, &end);
        Ok(Self { start, end, frames })
    }

    pub fn start_tick(&self) -> i32 {
        self.start.tick
    }

    pub fn end_tick(&self) -> i32 {
        self.end.tick
    }

    pub fn start_keyframe(&self) -> Keyframe {
        self.start
    }

    pub fn end_keyframe(&self) -> Keyframe {
        self.end
    }

    /// Whether this motion covers the given tick.
    pub fn occurs_at(&self, tick: i32) -> bool {
        tick >= self.start.tick && tick <= self.end.tick
    }

    /// The cached state at `tick`, or `None` outside the motion's range.
    ///
    /// The caller decides what an out-of-range query means; the animated
    /// shape falls back to invisible.
    pub fn state_at(&self, tick: i32) -> Option<&ShapeState> {
        if !self.occurs_at(tick) {
            return None;
        }
        if self.start.tick == self.end.tick {
            return self.frames.first();
        }
        self.frames.get((tick - self.start.tick) as usize)
    }

    /// Whether appending `self` after `prev` would teleport the shape.
    ///
    /// True when the start state differs by value from `prev`'s end state in
    /// any field, or when `self` starts before `prev` ends. A forward gap in
    /// time is legal; ticks inside it simply query as invisible.
    pub fn is_teleported_from(&self, prev: &Motion) -> bool {
        self.start.tick < prev.end.tick
            || self.start.color != prev.end.color
            || self.start.width != prev.end.width
            || self.start.height != prev.end.height
            || self.start.location != prev.end.location
    }
}

/// Precompute the state at every tick in the closed range.
///
/// Each scalar field advances by its own per-tick delta; values round to the
/// nearest integer with ties away from zero. Both endpoints come out exact
/// and every field is monotonic across the range.
fn interpolate(start: &Keyframe, end: &Keyframe) -> Vec<ShapeState> {
    let span = end.tick - start.tick;
    if span == 0 {
        return vec![end.state()];
    }
    let ticks = f64::from(span);
    let dx = f64::from(end.location.x - start.location.x) / ticks;
    let dy = f64::from(end.location.y - start.location.y) / ticks;
    let dw = f64::from(end.width - start.width) / ticks;
    let dh = f64::from(end.height - start.height) / ticks;
    let dr = f64::from(end.color.r() - start.color.r()) / ticks;
    let dg = f64::from(end.color.g() - start.color.g()) / ticks;
    let db = f64::from(end.color.b() - start.color.b()) / ticks;

    let mut frames = Vec::with_capacity(span as usize + 1);
    for i in 0..=span {
        let step = |base: i32, delta: f64| (f64::from(base) + delta * f64::from(i)).round() as i32;
        // Channels interpolated between valid endpoints stay in range; the
        // clamp only guards float noise at the edges.
        let color = Color::from_rgb8(
            step(start.color.r(), dr).clamp(0, 255) as u8,
            step(start.color.g(), dg).clamp(0, 255) as u8,
            step(start.color.b(), db).clamp(0, 255) as u8,
        );
        frames.push(ShapeState {
            width: step(start.width, dw),
            height: step(start.height, dh),
            color,
            location: Location::new(step(start.location.x, dx), step(start.location.y, dy)),
        });
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kf(tick: i32, x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Keyframe {
        Keyframe::from_values(tick, x, y, w, h, r, g, b).unwrap()
    }

    #[test]
    fn rejects_non_positive_ticks() {
        let err = Motion::new(kf(0, 0, 0, 10, 10, 0, 0, 0), kf(5, 0, 0, 10, 10, 0, 0, 0));
        assert_eq!(err, Err(TimelineError::NonPositiveTick { start: 0, end: 5 }));
    }

    #[test]
    fn rejects_reversed_ticks() {
        let err = Motion::new(kf(10, 0, 0, 10, 10, 0, 0, 0), kf(5, 0, 0, 10, 10, 0, 0, 0));
        assert_eq!(err, Err(TimelineError::ReversedTicks { start: 10, end: 5 }));
    }

    #[test]
    fn rejects_negative_sizes() {
        let err = Motion::new(kf(1, 0, 0, -1, 10, 0, 0, 0), kf(5, 0, 0, 10, 10, 0, 0, 0));
        assert_eq!(
            err,
            Err(TimelineError::Shape(ShapeError::InvalidSize {
                width: -1,
                height: 10
            }))
        );
    }

    #[test]
    fn endpoints_are_exact() {
        let m = Motion::new(
            kf(10, 200, 200, 50, 100, 255, 0, 0),
            kf(50, 300, 300, 50, 100, 255, 0, 0),
        )
        .unwrap();
        assert_eq!(m.state_at(10), Some(&kf(10, 200, 200, 50, 100, 255, 0, 0).state()));
        assert_eq!(m.state_at(50), Some(&kf(50, 300, 300, 50, 100, 255, 0, 0).state()));
    }

    #[test]
    fn midpoint_is_exact_at_half_progress() {
        // 50% through ticks 10..50 the location must be (250,250) with the
        // untouched fields unchanged.
        let m = Motion::new(
            kf(10, 200, 200, 50, 100, 255, 0, 0),
            kf(50, 300, 300, 50, 100, 255, 0, 0),
        )
        .unwrap();
        let state = m.state_at(30).unwrap();
        assert_eq!(state.location, Location::new(250, 250));
        assert_eq!(state.width, 50);
        assert_eq!(state.height, 100);
        assert_eq!(state.color, Color::new(255, 0, 0).unwrap());
    }

    #[test]
    fn ties_round_away_from_zero() {
        // Per-tick delta of 0.5: tick 2 sits exactly on a tie.
        let m = Motion::new(kf(1, 0, 0, 0, 0, 0, 0, 0), kf(3, 1, -1, 0, 0, 0, 0, 0)).unwrap();
        let state = m.state_at(2).unwrap();
        assert_eq!(state.location, Location::new(1, -1));
    }

    #[test]
    fn interpolation_is_monotonic_without_overshoot() {
        let m = Motion::new(
            kf(1, 0, 100, 10, 80, 0, 255, 10),
            kf(17, 37, 13, 90, 3, 254, 0, 10),
        )
        .unwrap();
        let mut prev = *m.state_at(1).unwrap();
        for tick in 2..=17 {
            let cur = *m.state_at(tick).unwrap();
            assert!(cur.location.x >= prev.location.x && cur.location.x <= 37);
            assert!(cur.location.y <= prev.location.y && cur.location.y >= 13);
            assert!(cur.width >= prev.width && cur.width <= 90);
            assert!(cur.height <= prev.height && cur.height >= 3);
            assert!(cur.color.r() >= prev.color.r() && cur.color.r() <= 254);
            assert!(cur.color.g() <= prev.color.g() && cur.color.g() >= 0);
            assert_eq!(cur.color.b(), 10);
            prev = cur;
        }
    }

    #[test]
    fn out_of_range_queries_return_none() {
        let m = Motion::new(kf(10, 0, 0, 5, 5, 0, 0, 0), kf(20, 0, 0, 5, 5, 0, 0, 0)).unwrap();
        assert!(m.state_at(9).is_none());
        assert!(m.state_at(21).is_none());
    }

    #[test]
    fn pin_serves_end_values() {
        let m = Motion::new(kf(7, 1, 2, 3, 4, 5, 6, 7), kf(7, 1, 2, 3, 4, 5, 6, 7)).unwrap();
        assert_eq!(m.state_at(7), Some(&kf(7, 1, 2, 3, 4, 5, 6, 7).state()));
        assert!(m.state_at(8).is_none());
    }

    #[test]
    fn teleport_detects_state_mismatch() {
        let a = Motion::new(kf(1, 0, 0, 10, 10, 0, 0, 0), kf(5, 3, 3, 10, 10, 0, 0, 0)).unwrap();
        let continued =
            Motion::new(kf(5, 3, 3, 10, 10, 0, 0, 0), kf(9, 6, 6, 10, 10, 0, 0, 0)).unwrap();
        let moved = Motion::new(kf(5, 4, 3, 10, 10, 0, 0, 0), kf(9, 6, 6, 10, 10, 0, 0, 0)).unwrap();
        let recolored =
            Motion::new(kf(5, 3, 3, 10, 10, 1, 0, 0), kf(9, 6, 6, 10, 10, 1, 0, 0)).unwrap();
        assert!(!continued.is_teleported_from(&a));
        assert!(moved.is_teleported_from(&a));
        assert!(recolored.is_teleported_from(&a));
    }

    #[test]
    fn teleport_allows_forward_gaps_but_not_overlap() {
        let a = Motion::new(kf(1, 0, 0, 10, 10, 0, 0, 0), kf(5, 3, 3, 10, 10, 0, 0, 0)).unwrap();
        let gapped =
            Motion::new(kf(9, 3, 3, 10, 10, 0, 0, 0), kf(12, 6, 6, 10, 10, 0, 0, 0)).unwrap();
        let overlapping =
            Motion::new(kf(4, 3, 3, 10, 10, 0, 0, 0), kf(9, 6, 6, 10, 10, 0, 0, 0)).unwrap();
        assert!(!gapped.is_teleported_from(&a));
        assert!(overlapping.is_teleported_from(&a));
    }
}
