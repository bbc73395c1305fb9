//! Textual description of an animation
//!
//! Three sections separated by blank lines: creation lines per shape,
//! appearance windows, then per-motion change lines globally sorted by each
//! motion's start tick. Only fields that actually change produce a line.

use easel_core::ShapeKind;
use easel_timeline::{Motion, Scene};

/// Renders a scene as the line-oriented textual description format.
pub struct TextExporter;

impl TextExporter {
    pub fn export(scene: &Scene) -> String {
        let shapes = scene.animated_shapes();
        let mut out = String::new();

        for shape in &shapes {
            let Some(first) = shape.first_tick() else {
                continue;
            };
            let snapshot = shape.shape_at(first);
            let Some(state) = snapshot.state() else {
                continue;
            };
            match snapshot.kind() {
                ShapeKind::Rectangle => out.push_str(&format!(
                    "Create {} {} {} with corner at {}, width: {} and height {}\n",
                    state.color,
                    snapshot.kind().label(),
                    snapshot.id(),
                    state.location,
                    state.width,
                    state.height
                )),
                ShapeKind::Oval => out.push_str(&format!(
                    "Create {} {} {} with center at {}, radius {} and {}\n",
                    state.color,
                    snapshot.kind().label(),
                    snapshot.id(),
                    state.location,
                    state.width,
                    state.height
                )),
            }
        }
        out.push('\n');

        for shape in &shapes {
            let Some(first) = shape.first_tick() else {
                continue;
            };
            out.push_str(&format!(
                "{} appears at time t={} and disappears at time t={}\n",
                shape.id(),
                first,
                shape.last_tick()
            ));
        }
        out.push('\n');

        let mut motions: Vec<(&str, &Motion)> = Vec::new();
        for shape in &shapes {
            for motion in shape.motions() {
                motions.push((shape.id(), motion));
            }
        }
        // Stable sort keeps insertion order within equal start ticks.
        motions.sort_by_key(|(_, m)| m.start_tick());
        for (id, motion) in motions {
            push_changes(&mut out, id, motion);
        }

        if out.ends_with('\n') {
            out.pop();
        }
        out
    }
}

fn push_changes(out: &mut String, id: &str, motion: &Motion) {
    let from = motion.start_keyframe();
    let to = motion.end_keyframe();
    let window = format!("from time t={} to t={}", from.tick, to.tick);
    if from.location != to.location {
        out.push_str(&format!(
            "{} moves from {} to {} {}\n",
            id, from.location, to.location, window
        ));
    }
    if from.color != to.color {
        out.push_str(&format!(
            "{} changes from {} to {} {}\n",
            id, from.color, to.color, window
        ));
    }
    if from.width != to.width {
        out.push_str(&format!(
            "{} changes width from {} to {} {}\n",
            id, from.width, to.width, window
        ));
    }
    if from.height != to.height {
        out.push_str(&format!(
            "{} changes height from {} to {} {}\n",
            id, from.height, to.height, window
        ));
    }
}
