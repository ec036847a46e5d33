use crate::scene::*;

/// Surface size in physical pixels. Signed so that degenerate host sizes pass through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// One drawing instruction. Angles are degrees, 0° pointing east and growing clockwise (y-down).
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    FilledRect { bounds: Rect, color: Color },
    StrokedRect { bounds: Rect, color: Color, stroke: Stroke },
    StrokedArc {
        bounds: Rect,
        start_angle_deg: f32,
        sweep_angle_deg: f32,
        color: Color,
        stroke: Stroke,
    },
    Line { from: [f32; 2], to: [f32; 2], color: Color, stroke: Stroke },
    StrokedCircle { center: [f32; 2], radius: f32, color: Color, stroke: Stroke },
    FilledCircle { center: [f32; 2], radius: f32, color: Color },
}

impl Primitive {
    pub fn style(&self) -> PaintStyle {
        match self {
            Primitive::FilledRect { .. } | Primitive::FilledCircle { .. } => PaintStyle::Fill,
            _ => PaintStyle::Stroke,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Primitive::FilledRect { color, .. }
            | Primitive::StrokedRect { color, .. }
            | Primitive::StrokedArc { color, .. }
            | Primitive::Line { color, .. }
            | Primitive::StrokedCircle { color, .. }
            | Primitive::FilledCircle { color, .. } => *color,
        }
    }

    /// Stroke width for stroked primitives, `None` for fills.
    pub fn stroke_width(&self) -> Option<f32> {
        match self {
            Primitive::StrokedRect { stroke, .. }
            | Primitive::StrokedArc { stroke, .. }
            | Primitive::Line { stroke, .. }
            | Primitive::StrokedCircle { stroke, .. } => Some(stroke.width),
            Primitive::FilledRect { .. } | Primitive::FilledCircle { .. } => None,
        }
    }
}

/// Ordered primitives for one frame. Painted in list order, later ones on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
