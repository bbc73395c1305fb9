//! End-to-end scenarios driven through the scene builder.

use easel_core::{Color, Keyframe, Location};
use easel_timeline::{Scene, SceneBuilder};

fn kf(tick: i32, x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Keyframe {
    Keyframe::from_values(tick, x, y, w, h, r, g, b).unwrap()
}

/// Rectangle "R" at (200,200) from tick 1, moving to (300,300) over [10,50].
fn moving_rectangle() -> Scene {
    let mut builder = SceneBuilder::new();
    builder.set_bounds(200, 70, 360, 360).unwrap();
    builder.declare_shape("R", "rectangle").unwrap();
    builder
        .add_motion(
            "R",
            kf(1, 200, 200, 50, 100, 255, 0, 0),
            kf(10, 200, 200, 50, 100, 255, 0, 0),
        )
        .unwrap();
    builder
        .add_motion(
            "R",
            kf(10, 200, 200, 50, 100, 255, 0, 0),
            kf(50, 300, 300, 50, 100, 255, 0, 0),
        )
        .unwrap();
    builder.build()
}

#[test]
fn rectangle_reaches_the_exact_midpoint_at_half_progress() {
    let scene = moving_rectangle();
    let shape = scene.shape_at("R", 30).unwrap();
    let state = shape.state().unwrap();
    assert_eq!(state.location, Location::new(250, 250));
    assert_eq!(state.width, 50);
    assert_eq!(state.height, 100);
    assert_eq!(state.color, Color::new(255, 0, 0).unwrap());
}

#[test]
fn oval_is_invisible_before_its_first_keyframe() {
    let mut builder = SceneBuilder::new();
    builder.declare_shape("C", "ellipse").unwrap();
    builder
        .add_motion(
            "C",
            kf(6, 440, 70, 120, 60, 0, 0, 255),
            kf(20, 440, 70, 120, 60, 0, 0, 255),
        )
        .unwrap();
    builder
        .add_motion(
            "C",
            kf(20, 440, 70, 120, 60, 0, 0, 255),
            kf(50, 440, 250, 120, 60, 0, 0, 255),
        )
        .unwrap();
    let scene = builder.build();
    assert!(!scene.shape_at("C", 10).unwrap().is_visible());
    assert!(scene.shape_at("C", 20).unwrap().is_visible());
}

#[test]
fn gapped_motions_are_accepted_and_the_gap_is_invisible() {
    let mut builder = SceneBuilder::new();
    builder.declare_shape("R", "rectangle").unwrap();
    builder
        .add_motion(
            "R",
            kf(1, 0, 0, 10, 10, 0, 0, 0),
            kf(5, 3, 3, 10, 10, 0, 0, 0),
        )
        .unwrap();
    // Same boundary state, later start: legal.
    builder
        .add_motion(
            "R",
            kf(12, 3, 3, 10, 10, 0, 0, 0),
            kf(20, 9, 9, 10, 10, 0, 0, 0),
        )
        .unwrap();
    let scene = builder.build();
    assert!(!scene.shape_at("R", 8).unwrap().is_visible());
    assert!(scene.shape_at("R", 12).unwrap().is_visible());
    assert_eq!(scene.last_tick(), 20);
}

#[test]
fn scene_cursor_follows_apply_tick_across_shapes() {
    let mut scene = moving_rectangle();
    scene.apply_tick(30);
    assert_eq!(scene.tick(), 30);
    let live = scene.shapes();
    assert_eq!(live[0].state().unwrap().location, Location::new(250, 250));

    scene.apply_tick(200);
    assert!(!scene.shapes()[0].is_visible());
}

#[test]
fn snapshots_survive_later_ticks() {
    let mut scene = moving_rectangle();
    scene.apply_tick(30);
    let snapshot = scene.shape("R").unwrap();
    scene.apply_tick(50);
    // The earlier snapshot is an independent copy.
    assert_eq!(snapshot.state().unwrap().location, Location::new(250, 250));
    assert_eq!(
        scene.shape("R").unwrap().state().unwrap().location,
        Location::new(300, 300)
    );
}
