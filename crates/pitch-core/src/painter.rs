use crate::display_list::{DisplayList, Primitive, Viewport};
use crate::scene::*;

/// Records primitives into a [`DisplayList`] in call order.
pub struct Painter {
    list: DisplayList,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                primitives: Vec::new(),
            },
        }
    }

    pub fn with_capacity(viewport: Viewport, capacity: usize) -> Self {
        Self {
            list: DisplayList {
                viewport,
                primitives: Vec::with_capacity(capacity),
            },
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.list.viewport
    }

    pub fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.list.primitives.push(Primitive::FilledRect { bounds, color });
    }

    pub fn stroke_rect(&mut self, bounds: Rect, stroke: Stroke, color: Color) {
        self.list
            .primitives
            .push(Primitive::StrokedRect { bounds, color, stroke });
    }

    /// Stroke the part of the oval inscribed in `bounds` from `start_deg`, turning `sweep_deg` clockwise.
    pub fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_deg: f32,
        sweep_deg: f32,
        stroke: Stroke,
        color: Color,
    ) {
        self.list.primitives.push(Primitive::StrokedArc {
            bounds,
            start_angle_deg: start_deg,
            sweep_angle_deg: sweep_deg,
            color,
            stroke,
        });
    }

    pub fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke, color: Color) {
        self.list.primitives.push(Primitive::Line {
            from,
            to,
            color,
            stroke,
        });
    }

    pub fn stroke_circle(&mut self, center: [f32; 2], radius: f32, stroke: Stroke, color: Color) {
        self.list.primitives.push(Primitive::StrokedCircle {
            center,
            radius,
            color,
            stroke,
        });
    }

    pub fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color) {
        self.list.primitives.push(Primitive::FilledCircle {
            center,
            radius,
            color,
        });
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
