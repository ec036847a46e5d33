use std::path::Path as FsPath;

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use pitch_core::{Color, DisplayList, Primitive, Viewport};
use tiny_skia::{FillRule, Paint, Path, Pixmap, Stroke, Transform};

use crate::renderer::Renderer;
use crate::shapes;

/// CPU rasterizer drawing a [`DisplayList`] onto a `tiny-skia` pixmap with anti-aliasing.
///
/// The pixmap is (re)allocated to the list's viewport on every render, so one
/// renderer can follow a surface through resizes.
#[derive(Default)]
pub struct RasterRenderer {
    pixmap: Option<Pixmap>,
}

impl RasterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame, if any.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Unpremultiplied sRGB pixel of the last frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let pixmap = self.pixmap.as_ref().context("nothing rendered yet")?;
        pixmap.encode_png().context("failed to encode PNG")
    }

    pub fn save_png<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let pixmap = self.pixmap.as_ref().context("nothing rendered yet")?;
        pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote {}x{} pitch to {}", pixmap.width(), pixmap.height(), path.display());
        Ok(())
    }

    fn target(&mut self, viewport: Viewport) -> Result<&mut Pixmap> {
        let (Ok(w), Ok(h)) = (u32::try_from(viewport.width), u32::try_from(viewport.height)) else {
            bail!("cannot rasterize a {}x{} surface", viewport.width, viewport.height);
        };
        let reuse = matches!(&self.pixmap, Some(p) if p.width() == w && p.height() == h);
        if reuse {
            if let Some(p) = self.pixmap.as_mut() {
                p.fill(tiny_skia::Color::TRANSPARENT);
            }
        } else {
            let pixmap = Pixmap::new(w, h)
                .with_context(|| format!("cannot allocate a {}x{} pixmap", w, h))?;
            self.pixmap = Some(pixmap);
        }
        self.pixmap.as_mut().context("pixmap missing after allocation")
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn stroke_path(pixmap: &mut Pixmap, path: Option<Path>, color: Color, width: f32, what: &str) {
    let Some(path) = path else {
        warn!("skipping degenerate {}", what);
        return;
    };
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
}

fn fill_path(pixmap: &mut Pixmap, path: Option<Path>, color: Color, what: &str) {
    let Some(path) = path else {
        warn!("skipping degenerate {}", what);
        return;
    };
    pixmap.fill_path(
        &path,
        &paint_for(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn draw(pixmap: &mut Pixmap, primitive: &Primitive) {
    match primitive {
        Primitive::FilledRect { bounds, color } => {
            let r = bounds.normalized();
            if r.width() == 0.0 || r.height() == 0.0 {
                warn!("skipping empty filled rect {:?}", bounds);
                return;
            }
            match tiny_skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom) {
                Some(rect) => {
                    pixmap.fill_rect(rect, &paint_for(*color), Transform::identity(), None)
                }
                None => warn!("skipping unrepresentable filled rect {:?}", bounds),
            }
        }
        Primitive::StrokedRect { bounds, color, stroke } => {
            stroke_path(pixmap, shapes::rect_path(*bounds), *color, stroke.width, "rect")
        }
        Primitive::StrokedArc {
            bounds,
            start_angle_deg,
            sweep_angle_deg,
            color,
            stroke,
        } => stroke_path(
            pixmap,
            shapes::arc_path(*bounds, *start_angle_deg, *sweep_angle_deg),
            *color,
            stroke.width,
            "arc",
        ),
        Primitive::Line { from, to, color, stroke } => {
            stroke_path(pixmap, shapes::line_path(*from, *to), *color, stroke.width, "line")
        }
        Primitive::StrokedCircle { center, radius, color, stroke } => stroke_path(
            pixmap,
            shapes::circle_path(*center, *radius),
            *color,
            stroke.width,
            "circle",
        ),
        Primitive::FilledCircle { center, radius, color } => {
            fill_path(pixmap, shapes::circle_path(*center, *radius), *color, "spot")
        }
    }
}

impl Renderer for RasterRenderer {
    fn render(&mut self, list: &DisplayList) -> Result<()> {
        let pixmap = self.target(list.viewport)?;
        for primitive in list {
            draw(pixmap, primitive);
        }
        debug!(
            "rasterized {} primitives onto {}x{}",
            list.len(),
            list.viewport.width,
            list.viewport.height
        );
        Ok(())
    }
}
