use pitch_core::Rect;
use tiny_skia::{Path, PathBuilder};

/// Segments used for a full turn; partial arcs get a proportional share.
const SEGMENTS_PER_TURN: f32 = 64.0;

/// Points along the oval inscribed in `bounds`, from `start_deg` turning `sweep_deg`
/// clockwise (y-down, 0° east).
pub fn arc_points(bounds: Rect, start_deg: f32, sweep_deg: f32) -> Vec<[f32; 2]> {
    let [cx, cy] = bounds.center();
    let rx = bounds.width().abs() * 0.5;
    let ry = bounds.height().abs() * 0.5;
    let segs = ((sweep_deg.abs() / 360.0) * SEGMENTS_PER_TURN).ceil().max(1.0) as u32;
    (0..=segs)
        .map(|i| {
            let t = i as f32 / segs as f32;
            let ang = (start_deg + sweep_deg * t).to_radians();
            [cx + rx * ang.cos(), cy + ry * ang.sin()]
        })
        .collect()
}

/// Open polyline path for an arc. `None` when the arc is empty.
pub fn arc_path(bounds: Rect, start_deg: f32, sweep_deg: f32) -> Option<Path> {
    if bounds.width() == 0.0 || bounds.height() == 0.0 || sweep_deg == 0.0 {
        return None;
    }
    polyline(&arc_points(bounds, start_deg, sweep_deg))
}

pub fn line_path(from: [f32; 2], to: [f32; 2]) -> Option<Path> {
    polyline(&[from, to])
}

/// Closed outline of `bounds`, normalized so that inverted rects still draw.
pub fn rect_path(bounds: Rect) -> Option<Path> {
    let r = bounds.normalized();
    let mut pb = PathBuilder::new();
    pb.move_to(r.left, r.top);
    pb.line_to(r.right, r.top);
    pb.line_to(r.right, r.bottom);
    pb.line_to(r.left, r.bottom);
    pb.close();
    pb.finish()
}

pub fn circle_path(center: [f32; 2], radius: f32) -> Option<Path> {
    if radius <= 0.0 {
        return None;
    }
    PathBuilder::from_circle(center[0], center[1], radius)
}

fn polyline(points: &[[f32; 2]]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first[0], first[1]);
    for p in rest {
        pb.line_to(p[0], p[1]);
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-3 && (a[1] - b[1]).abs() < 1e-3
    }

    #[test]
    fn quarter_arc_runs_clockwise_from_start() {
        // top-left corner arc: east, then down to south
        let pts = arc_points(Rect::around([16.0, 16.0], 12.0), 0.0, 90.0);
        assert_eq!(pts.len(), 17);
        assert!(close(pts[0], [28.0, 16.0]));
        assert!(close(*pts.last().unwrap(), [16.0, 28.0]));
    }

    #[test]
    fn bottom_right_arc_ends_north() {
        let pts = arc_points(Rect::around([284.0, 484.0], 12.0), 180.0, 90.0);
        assert!(close(pts[0], [272.0, 484.0]));
        assert!(close(*pts.last().unwrap(), [284.0, 472.0]));
    }

    #[test]
    fn empty_shapes_have_no_path() {
        assert!(arc_path(Rect::around([0.0, 0.0], 0.0), 0.0, 90.0).is_none());
        assert!(circle_path([5.0, 5.0], 0.0).is_none());
        assert!(rect_path(Rect::from_ltrb(10.0, 10.0, 2.0, 30.0)).is_some());
    }
}
