//! Shape geometry for the overlay, independent of any graphics API.
//!
//! `scene()` turns the overlay state into a list of stroke primitives in
//! window-local coordinates (the `size × size` box at the origin). The
//! platform renderer rasterizes them.

use super::geometry::{Point, Rect};
use crate::model::constants::PEN_WIDTH;
use crate::model::{OverlayState, Rgb, Shape};

/// One stroked primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Ellipse inscribed in `bounds`.
    Ellipse { bounds: Rect },
    /// Rectangle outline along `bounds`.
    Rectangle { bounds: Rect },
    /// Closed polygon through `points`.
    Polygon { points: Vec<Point> },
    /// Straight segment.
    Line { from: Point, to: Point },
}

/// Everything needed to draw one frame of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub color: Rgb,
    pub pen_width: f32,
    /// Empty when the crosshair is hidden: the frame is cleared and nothing
    /// else is drawn.
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the scene for the current state.
pub fn scene(state: &OverlayState) -> Scene {
    let commands = if state.visible {
        shape_commands(state.shape, state.size())
    } else {
        Vec::new()
    };
    Scene {
        color: state.color(),
        pen_width: PEN_WIDTH,
        commands,
    }
}

/// Primitives for `shape` inside a `size × size` box at the origin.
pub fn shape_commands(shape: Shape, size: u32) -> Vec<DrawCommand> {
    let s = i32::try_from(size).unwrap_or(i32::MAX);
    let bounds = Rect::new(0, 0, s, s);
    match shape {
        Shape::Circle => vec![DrawCommand::Ellipse { bounds }],
        Shape::Square => vec![DrawCommand::Rectangle { bounds }],
        Shape::Triangle => vec![DrawCommand::Polygon {
            points: vec![Point::new(s / 2, 0), Point::new(0, s), Point::new(s, s)],
        }],
        Shape::Cross => vec![
            DrawCommand::Line {
                from: Point::new(0, 0),
                to: Point::new(s, s),
            },
            DrawCommand::Line {
                from: Point::new(s, 0),
                to: Point::new(0, s),
            },
        ],
    }
}
