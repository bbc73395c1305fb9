//! SVG markup for an animation
//!
//! One element per shape with nested `<animate>` tags. Rectangles use
//! corner+extent attributes, ovals center+radius; tick times become
//! milliseconds through the configured ticks-per-second speed.

use easel_core::ShapeKind;
use easel_timeline::{AnimatedShape, Motion, Scene};

use crate::error::{ExportError, Result};

/// Renders a scene as SVG markup at a fixed playback speed.
#[derive(Debug)]
pub struct SvgExporter {
    ticks_per_second: i32,
}

impl SvgExporter {
    /// Create an exporter; the speed must be positive.
    pub fn new(ticks_per_second: i32) -> Result<Self> {
        if ticks_per_second <= 0 {
            return Err(ExportError::InvalidSpeed(ticks_per_second));
        }
        Ok(Self { ticks_per_second })
    }

    pub fn export(&self, scene: &Scene) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<svg viewbox=\"{} {} {} {}\" version=\"1.1\"\n     xmlns=\"http://www.w3.org/2000/svg\">\n",
            scene.canvas_starting_x(),
            scene.canvas_starting_y(),
            scene.canvas_width(),
            scene.canvas_height()
        ));
        for shape in scene.animated_shapes() {
            self.push_shape(&mut out, &shape, scene.last_tick());
        }
        out.push_str("</svg>");
        out
    }

    fn push_shape(&self, out: &mut String, shape: &AnimatedShape, scene_last: i32) {
        let Some(first_motion) = shape.motions().first() else {
            return;
        };
        let start = shape.shape_at_start();
        let Some(state) = start.state() else {
            return;
        };
        let kind = start.kind();

        out.push_str(&format!(
            "<{} id=\"{}\" {}=\"{}\" {}=\"{}\" {}=\"{}\" {}=\"{}\" fill=\"{}\" visibility=\"",
            kind.svg_element(),
            start.id(),
            x_label(kind),
            position(kind, state.location.x, state.width),
            y_label(kind),
            position(kind, state.location.y, state.height),
            width_label(kind),
            dimension(kind, state.width),
            height_label(kind),
            dimension(kind, state.height),
            state.color
        ));

        let hidden = first_motion.start_tick() > 1;
        out.push_str(if hidden { "hidden" } else { "visible" });
        out.push_str("\" >\n");

        if hidden {
            out.push_str(&format!(
                "\t<animate attributeType=\"xml\" begin=\"{}ms\" dur=\"{}ms\" attributeName=\"visibility\" from=\"hidden\" to=\"visible\" fill=\"freeze\"/>\n",
                self.ms(1),
                self.ms(first_motion.start_tick() - 1)
            ));
        }

        let motions = shape.motions();
        for (i, motion) in motions.iter().enumerate() {
            let is_last = i == motions.len() - 1;
            self.push_motion(out, motion, kind, is_last, shape.last_tick(), scene_last);
        }

        out.push_str(&format!("</{}>\n", kind.svg_element()));
    }

    fn push_motion(
        &self,
        out: &mut String,
        motion: &Motion,
        kind: ShapeKind,
        is_last: bool,
        shape_last: i32,
        scene_last: i32,
    ) {
        let fill = if is_last && shape_last == scene_last {
            "remove"
        } else {
            "freeze"
        };
        let from = motion.start_keyframe();
        let to = motion.end_keyframe();
        let begin = self.ms(from.tick);
        let dur = self.ms(to.tick - from.tick);

        let mut animate = |attribute: &str, from_value: String, to_value: String| {
            out.push_str(&format!(
                "\t<animate attributeType=\"xml\" begin=\"{}ms\" dur=\"{}ms\" attributeName=\"{}\" from=\"{}\" to=\"{}\" fill=\"{}\"/>\n",
                begin, dur, attribute, from_value, to_value, fill
            ));
        };

        if from.color != to.color {
            animate("fill", from.color.to_string(), to.color.to_string());
        }
        if from.height != to.height {
            animate(
                height_label(kind),
                dimension(kind, from.height),
                dimension(kind, to.height),
            );
        }
        if from.width != to.width {
            animate(
                width_label(kind),
                dimension(kind, from.width),
                dimension(kind, to.width),
            );
        }
        if from.location.x != to.location.x {
            animate(
                x_label(kind),
                position(kind, from.location.x, from.width),
                position(kind, to.location.x, to.width),
            );
        }
        if from.location.y != to.location.y {
            animate(
                y_label(kind),
                position(kind, from.location.y, from.height),
                position(kind, to.location.y, to.height),
            );
        }

        if is_last && shape_last < scene_last {
            out.push_str(&format!(
                "\t<animate attributeType=\"xml\" begin=\"{}ms\" dur=\"0.1ms\" attributeName=\"visibility\" from=\"visible\" to=\"hidden\" fill=\"freeze\"/>\n",
                self.ms(to.tick)
            ));
        }
    }

    /// A tick as milliseconds at the configured speed, one decimal place.
    fn ms(&self, tick: i32) -> String {
        let seconds = tick as f32 / self.ticks_per_second as f32;
        format!("{:.1}", seconds * 1000.0)
    }
}

fn x_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "x",
        ShapeKind::Oval => "cx",
    }
}

fn y_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "y",
        ShapeKind::Oval => "cy",
    }
}

fn width_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "width",
        ShapeKind::Oval => "rx",
    }
}

fn height_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "height",
        ShapeKind::Oval => "ry",
    }
}

/// A coordinate: the corner itself for rectangles, the center (corner plus
/// half the extent, one decimal place) for ovals.
fn position(kind: ShapeKind, coordinate: i32, extent: i32) -> String {
    match kind {
        ShapeKind::Rectangle => coordinate.to_string(),
        ShapeKind::Oval => format!("{:.1}", f64::from(coordinate) + f64::from(extent) / 2.0),
    }
}

/// An extent: as-is for rectangles, halved to a radius for ovals.
fn dimension(kind: ShapeKind, extent: i32) -> String {
    match kind {
        ShapeKind::Rectangle => extent.to_string(),
        ShapeKind::Oval => format!("{:.1}", f64::from(extent) / 2.0),
    }
}
