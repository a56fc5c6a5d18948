//! Overlay geometry, drawing and resize-gesture properties.

use proptest::prelude::*;

use reticle::events::{AppEvent, PointerButton};
use reticle::handlers::{Dispatcher, WindowBackend};
use reticle::model::{OverlayState, Shape, MIN_SIZE};
use reticle::overlay::drawing::{scene, shape_commands};
use reticle::overlay::resize::size_step;
use reticle::overlay::{DragResize, DrawCommand, Point, Rect, Scene};

/// Backend that only remembers the frames it was asked to place.
#[derive(Default)]
struct FrameLog {
    frames: Vec<Rect>,
}

impl WindowBackend for FrameLog {
    fn place_overlay(&mut self, frame: Rect) {
        self.frames.push(frame);
    }
    fn redraw_overlay(&mut self, _scene: &Scene) {}
    fn show_overlay(&mut self) {}
    fn close_overlay(&mut self) {}
    fn show_panel(&mut self, _activate: bool) {}
    fn hide_panel(&mut self) {}
    fn release_global_hooks(&mut self) {}
    fn accept_close(&mut self) {}
}

// === Drawing ===

#[test]
fn hidden_state_draws_nothing() {
    let mut state = OverlayState::default();
    state.visible = false;
    for shape in Shape::ALL {
        state.shape = shape;
        assert!(scene(&state).is_blank());
    }
}

#[test]
fn visible_state_draws_current_shape_in_current_color() {
    let mut state = OverlayState::default();
    state.shape = Shape::Square;
    state.set_size(64);
    state.set_color_index(5).unwrap();

    let s = scene(&state);
    assert_eq!(s.color, state.color());
    assert_eq!(s.pen_width, 2.0);
    assert_eq!(
        s.commands,
        vec![DrawCommand::Rectangle {
            bounds: Rect::new(0, 0, 64, 64)
        }]
    );
}

#[test]
fn triangle_has_exactly_three_vertices() {
    let cmds = shape_commands(Shape::Triangle, 50);
    assert_eq!(cmds.len(), 1);
    let DrawCommand::Polygon { points } = &cmds[0] else {
        panic!("triangle must be a polygon, got {:?}", cmds[0]);
    };
    assert_eq!(
        points,
        &vec![Point::new(25, 0), Point::new(0, 50), Point::new(50, 50)]
    );
}

// === Resize Gesture ===

#[test]
fn gesture_scenario_from_idle_to_idle() {
    let mut drag = DragResize::default();
    assert!(!drag.is_active());
    assert!(drag.press(400, true));
    assert_eq!(drag.drag_to(425), Some(5));
    drag.release();
    assert_eq!(drag, DragResize::Idle);
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::ALL.to_vec())
}

proptest! {
    #[test]
    fn size_stays_at_or_above_minimum_for_any_drag(
        start in 10u32..400,
        moves in prop::collection::vec(-2_000i32..2_000, 0..40),
    ) {
        let center = Point::new(800, 450);
        let mut state = OverlayState::default();
        state.set_size(start);
        let mut d = Dispatcher::with_state(center, state);
        let mut b = FrameLog::default();

        d.dispatch(&AppEvent::PointerPressed {
            button: PointerButton::Left,
            x: center.x,
            y: center.y,
            modifier: true,
        }, &mut b);

        for x in moves {
            d.dispatch(&AppEvent::PointerMoved { x, y: center.y }, &mut b);
            prop_assert!(d.state().size() >= MIN_SIZE);
        }
    }

    #[test]
    fn every_placed_frame_is_centered_on_screen(
        cx in 0i32..4_000,
        cy in 0i32..2_500,
        moves in prop::collection::vec(-500i32..500, 1..30),
    ) {
        let center = Point::new(cx, cy);
        let mut d = Dispatcher::new(center);
        let mut b = FrameLog::default();

        d.dispatch(&AppEvent::PointerPressed {
            button: PointerButton::Left,
            x: cx,
            y: cy,
            modifier: true,
        }, &mut b);
        for dx in moves {
            d.dispatch(&AppEvent::PointerMoved { x: cx + dx, y: cy }, &mut b);
        }

        for frame in &b.frames {
            prop_assert_eq!(frame.center(), center);
            prop_assert_eq!(frame.width, frame.height);
        }
        prop_assert_eq!(d.overlay_frame().center(), center);
    }

    #[test]
    fn size_change_equals_sum_of_rounded_steps_above_minimum(
        xs in prop::collection::vec(-20i32..60, 1..20),
    ) {
        // Start large so the floor is never reached
        let mut state = OverlayState::default();
        state.set_size(10_000);
        let mut d = Dispatcher::with_state(Point::new(0, 0), state);
        let mut b = FrameLog::default();

        d.dispatch(&AppEvent::PointerPressed {
            button: PointerButton::Left,
            x: 0,
            y: 0,
            modifier: true,
        }, &mut b);

        let mut anchor = 0i64;
        let mut expected = 10_000i64;
        for x in xs {
            expected += size_step(i64::from(x) - anchor);
            anchor = i64::from(x);
            d.dispatch(&AppEvent::PointerMoved { x, y: 0 }, &mut b);
        }
        prop_assert_eq!(i64::from(d.state().size()), expected);
    }

    #[test]
    fn every_shape_stays_inside_its_box(shape in arb_shape(), size in 10u32..500) {
        let s = size as i32;
        let inside = |p: &Point| (0..=s).contains(&p.x) && (0..=s).contains(&p.y);
        for cmd in shape_commands(shape, size) {
            match cmd {
                DrawCommand::Ellipse { bounds } | DrawCommand::Rectangle { bounds } => {
                    prop_assert_eq!(bounds, Rect::new(0, 0, s, s));
                }
                DrawCommand::Polygon { points } => {
                    prop_assert!(points.iter().all(inside));
                }
                DrawCommand::Line { from, to } => {
                    prop_assert!(inside(&from) && inside(&to));
                }
            }
        }
    }

    #[test]
    fn toggling_visibility_twice_is_identity(
        shape in arb_shape(),
        size in 10u32..200,
        color in 0usize..8,
    ) {
        let mut state = OverlayState::default();
        state.shape = shape;
        state.set_size(size);
        state.set_color_index(color).unwrap();
        let before = state.clone();

        state.toggle_visible();
        state.toggle_visible();
        prop_assert_eq!(state, before);
    }
}
