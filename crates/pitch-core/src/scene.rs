/// Axis-aligned rectangle in physical pixels, stored as edges (y-down).
///
/// Edges are kept exactly as computed: a rect whose `right < left` or
/// `bottom < top` is a valid value and is never normalized here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `2 * radius` centered on `center`.
    pub fn around(center: [f32; 2], radius: f32) -> Self {
        Self::from_ltrb(
            center[0] - radius,
            center[1] - radius,
            center[0] + radius,
            center[1] + radius,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> [f32; 2] {
        [
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        ]
    }

    /// Same rect with edges swapped where needed so that `left <= right` and `top <= bottom`.
    pub fn normalized(&self) -> Self {
        Self::from_ltrb(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorLinPremul {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Alias for the premultiplied linear color type, for a friendlier name in APIs.
pub type Color = ColorLinPremul;

// Constructors for ColorLinPremul are defined in color.rs to keep scene.rs focused

/// Whether a primitive is painted by filling its interior or stroking its outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
}
