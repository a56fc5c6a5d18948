//! Crosshair shapes.

/// The four shapes the overlay can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Two diagonals, corner to corner.
    Cross,
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// All shapes, in the order the control panel lists them.
    pub const ALL: [Shape; 4] = [Shape::Cross, Shape::Triangle, Shape::Square, Shape::Circle];

    /// Label shown next to the panel's selector.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Cross => "X",
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_shape_once() {
        for shape in [Shape::Cross, Shape::Circle, Shape::Square, Shape::Triangle] {
            assert_eq!(Shape::ALL.iter().filter(|s| **s == shape).count(), 1);
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = Shape::ALL.iter().map(Shape::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Shape::ALL.len());
    }
}
