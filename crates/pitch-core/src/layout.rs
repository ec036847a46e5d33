//! Pitch geometry: turns a surface size and a [`PitchConfig`] into an ordered
//! [`DisplayList`].
//!
//! Paint order is fixed and is part of the contract, since a renderer paints
//! sequentially with no depth buffer:
//!
//! 1. grass bands
//! 2. outer border
//! 3. home goal post, home goal line, away goal post, away goal line
//! 4. corner arcs: top-left, top-right, bottom-left, bottom-right
//! 5. center line, center circle (stroke), center spot (fill)
//!
//! Every input is accepted. Tiny, zero or negative surfaces give overlapping
//! or inverted shapes rather than an error.

use log::trace;

use crate::display_list::{DisplayList, Viewport};
use crate::painter::Painter;
use crate::pitch::PitchConfig;
use crate::scene::{Rect, Stroke};

/// Primitives emitted besides the grass bands: border, 4 goal boxes, 4 arcs, line, 2 circles.
pub const MARKING_PRIMITIVES: usize = 12;

/// Number of primitives `layout` produces for `config`.
pub fn primitive_count(config: &PitchConfig) -> usize {
    grass_band_count(config) + MARKING_PRIMITIVES
}

/// One band more than the configured row count, so the bottom edge stays covered
/// when the height does not divide evenly.
pub fn grass_band_count(config: &PitchConfig) -> usize {
    config.grass_row_count().get() as usize + 1
}

/// Height of one grass band: `surface_height / rows`, truncated.
pub fn grass_row_height(surface_height: i32, config: &PitchConfig) -> i32 {
    let rows = i32::try_from(config.grass_row_count().get()).unwrap_or(i32::MAX);
    surface_height / rows
}

/// Lay out a full pitch for a `surface_width` × `surface_height` pixel surface.
pub fn layout(surface_width: i32, surface_height: i32, config: &PitchConfig) -> DisplayList {
    let viewport = Viewport {
        width: surface_width,
        height: surface_height,
    };
    let mut painter = Painter::with_capacity(viewport, primitive_count(config));

    grass_bands(&mut painter, config);
    border(&mut painter, config);
    goal_areas(&mut painter, config);
    corner_arcs(&mut painter, config);
    center_markings(&mut painter, config);

    let list = painter.finish();
    trace!(
        "pitch layout {}x{}: {} primitives",
        surface_width,
        surface_height,
        list.len()
    );
    list
}

fn line_stroke(config: &PitchConfig) -> Stroke {
    Stroke {
        width: config.line_width(),
    }
}

fn grass_bands(painter: &mut Painter, config: &PitchConfig) {
    let Viewport { width, height } = painter.viewport();
    let row_height = grass_row_height(height, config) as f32;
    for i in 0..grass_band_count(config) {
        let top = i as f32 * row_height;
        let color = if i % 2 == 0 {
            config.grass_color_light()
        } else {
            config.grass_color_dark()
        };
        painter.fill_rect(Rect::from_ltrb(0.0, top, width as f32, top + row_height), color);
    }
}

fn border(painter: &mut Painter, config: &PitchConfig) {
    let Viewport { width, height } = painter.viewport();
    let pad = config.padding();
    painter.stroke_rect(
        Rect::from_ltrb(pad, pad, width as f32 - pad, height as f32 - pad),
        line_stroke(config),
        config.line_color(),
    );
}

/// Which end of the pitch a goal box hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    /// Top edge.
    Home,
    /// Bottom edge.
    Away,
}

/// Box centered on the vertical midline and anchored on the goal line of `end`,
/// reaching `half_height` into the pitch.
pub fn goal_box(
    surface_width: i32,
    surface_height: i32,
    padding: f32,
    half_width: f32,
    half_height: f32,
    end: End,
) -> Rect {
    let cx = surface_width as f32 * 0.5;
    let (top, bottom) = match end {
        End::Home => (padding, padding + half_height),
        End::Away => {
            let goal_line = surface_height as f32 - padding;
            (goal_line - half_height, goal_line)
        }
    };
    Rect::from_ltrb(cx - half_width, top, cx + half_width, bottom)
}

fn goal_areas(painter: &mut Painter, config: &PitchConfig) {
    let Viewport { width, height } = painter.viewport();
    let stroke = line_stroke(config);
    for end in [End::Home, End::Away] {
        let post = goal_box(
            width,
            height,
            config.padding(),
            config.goal_post_half_width(),
            config.goal_post_half_height(),
            end,
        );
        let area = goal_box(
            width,
            height,
            config.padding(),
            config.goal_area_half_width(),
            config.goal_area_half_height(),
            end,
        );
        painter.stroke_rect(post, stroke, config.line_color());
        painter.stroke_rect(area, stroke, config.line_color());
    }
}

/// Border corners with the start angle of each quarter arc, in paint order.
fn corner_anchors(surface_width: i32, surface_height: i32, padding: f32) -> [([f32; 2], f32); 4] {
    let left = padding;
    let top = padding;
    let right = surface_width as f32 - padding;
    let bottom = surface_height as f32 - padding;
    [
        ([left, top], 0.0),
        ([right, top], 90.0),
        ([left, bottom], 270.0),
        ([right, bottom], 180.0),
    ]
}

fn corner_arcs(painter: &mut Painter, config: &PitchConfig) {
    let Viewport { width, height } = painter.viewport();
    let stroke = line_stroke(config);
    for (anchor, start) in corner_anchors(width, height, config.padding()) {
        painter.stroke_arc(
            Rect::around(anchor, config.corner_radius()),
            start,
            90.0,
            stroke,
            config.line_color(),
        );
    }
}

fn center_markings(painter: &mut Painter, config: &PitchConfig) {
    let Viewport { width, height } = painter.viewport();
    let center = [width as f32 * 0.5, height as f32 * 0.5];
    let stroke = line_stroke(config);
    let pad = config.padding();

    painter.line(
        [pad, center[1]],
        [width as f32 - pad, center[1]],
        stroke,
        config.line_color(),
    );
    painter.stroke_circle(center, config.center_outer_radius(), stroke, config.line_color());
    painter.fill_circle(center, config.center_inner_radius(), config.line_color());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::Primitive;
    use std::num::NonZeroU32;

    fn rows(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn row_height_truncates() {
        let cfg = PitchConfig::default();
        assert_eq!(grass_row_height(500, &cfg), 62);
        assert_eq!(grass_row_height(7, &cfg), 0);
        assert_eq!(grass_row_height(-17, &cfg), -2);
    }

    #[test]
    fn count_tracks_row_count() {
        let cfg = PitchConfig::builder().grass_row_count(rows(3)).build();
        assert_eq!(grass_band_count(&cfg), 4);
        assert_eq!(primitive_count(&cfg), 16);
        assert_eq!(layout(120, 90, &cfg).len(), 16);
    }

    #[test]
    fn goal_boxes_hang_inward_from_each_goal_line() {
        let home = goal_box(300, 500, 16.0, 16.0, 12.0, End::Home);
        let away = goal_box(300, 500, 16.0, 16.0, 12.0, End::Away);
        assert_eq!(home, Rect::from_ltrb(134.0, 16.0, 166.0, 28.0));
        assert_eq!(away, Rect::from_ltrb(134.0, 472.0, 166.0, 484.0));
    }

    #[test]
    fn corner_arcs_turn_into_the_pitch() {
        // The midpoint of each arc must sit inside the border, i.e. toward the pitch center.
        let cfg = PitchConfig::default();
        let list = layout(300, 500, &cfg);
        let arcs: Vec<_> = list
            .iter()
            .filter_map(|p| match p {
                Primitive::StrokedArc {
                    bounds,
                    start_angle_deg,
                    sweep_angle_deg,
                    ..
                } => Some((*bounds, *start_angle_deg, *sweep_angle_deg)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 4);
        for (bounds, start, sweep) in arcs {
            let mid = (start + sweep * 0.5).to_radians();
            let [cx, cy] = bounds.center();
            let r = bounds.width() * 0.5;
            let (x, y) = (cx + r * mid.cos(), cy + r * mid.sin());
            assert!(x > 16.0 && x < 284.0, "arc midpoint x {x} outside border");
            assert!(y > 16.0 && y < 484.0, "arc midpoint y {y} outside border");
        }
    }

    #[test]
    fn only_the_center_spot_is_filled_in_line_color() {
        let cfg = PitchConfig::default();
        let list = layout(300, 500, &cfg);
        let filled_lines: Vec<_> = list
            .iter()
            .filter(|p| p.style() == crate::PaintStyle::Fill && p.color() == cfg.line_color())
            .collect();
        assert_eq!(filled_lines.len(), 1);
        assert!(matches!(filled_lines[0], Primitive::FilledCircle { radius, .. } if *radius == 6.0));
    }
}
