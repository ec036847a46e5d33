use anyhow::Result;
use log::debug;
use pitch_core::{PitchConfig, Viewport, layout};

use crate::renderer::Renderer;

/// Host-side model of the pitch widget.
///
/// Holds the resolved config and the current surface size. Any change marks the
/// view dirty; [`PitchView::redraw`] lays out from scratch and hands the result to a renderer.
pub struct PitchView {
    config: PitchConfig,
    size: Viewport,
    dirty: bool,
}

impl PitchView {
    pub fn new(config: PitchConfig) -> Self {
        Self {
            config,
            size: Viewport::default(),
            dirty: true,
        }
    }

    pub fn with_size(config: PitchConfig, width: i32, height: i32) -> Self {
        let mut view = Self::new(config);
        view.size = Viewport { width, height };
        view
    }

    pub fn config(&self) -> &PitchConfig {
        &self.config
    }

    pub fn size(&self) -> Viewport {
        self.size
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Surface size changed. No-op when the size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = Viewport { width, height };
        if size != self.size {
            debug!(
                "pitch view resized {}x{} -> {}x{}",
                self.size.width, self.size.height, width, height
            );
            self.size = size;
            self.dirty = true;
        }
    }

    pub fn set_config(&mut self, config: PitchConfig) {
        if config != self.config {
            self.config = config;
            self.dirty = true;
        }
    }

    /// Lay out at the current size and render. The view stays dirty if rendering fails.
    pub fn redraw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        let list = layout(self.size.width, self.size.height, &self.config);
        renderer.render(&list)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use pitch_core::{DisplayList, Rect};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<DisplayList>,
        fail: bool,
    }

    impl Renderer for Recorder {
        fn render(&mut self, list: &DisplayList) -> Result<()> {
            if self.fail {
                bail!("surface lost");
            }
            self.frames.push(list.clone());
            Ok(())
        }
    }

    #[test]
    fn redraw_uses_current_size_and_clears_dirty() {
        let mut view = PitchView::new(PitchConfig::default());
        assert!(view.needs_redraw());
        view.resize(300, 500);
        assert_eq!(view.size(), Viewport { width: 300, height: 500 });

        let mut rec = Recorder::default();
        view.redraw(&mut rec).unwrap();
        assert!(!view.needs_redraw());
        assert_eq!(rec.frames.len(), 1);
        assert_eq!(rec.frames[0].viewport, Viewport { width: 300, height: 500 });
        assert_eq!(rec.frames[0], layout(300, 500, &PitchConfig::default()));
    }

    #[test]
    fn only_real_changes_dirty_the_view() {
        let mut view = PitchView::with_size(PitchConfig::default(), 100, 100);
        let mut rec = Recorder::default();
        view.redraw(&mut rec).unwrap();

        view.resize(100, 100);
        view.set_config(PitchConfig::default());
        assert!(!view.needs_redraw());

        view.set_config(PitchConfig::builder().padding(4.0).build());
        assert!(view.needs_redraw());
        view.redraw(&mut rec).unwrap();
        match &rec.frames[1].primitives[9] {
            pitch_core::Primitive::StrokedRect { bounds, .. } => {
                assert_eq!(*bounds, Rect::from_ltrb(4.0, 4.0, 96.0, 96.0))
            }
            other => panic!("expected border, got {other:?}"),
        }
    }

    #[test]
    fn failed_render_leaves_view_dirty() {
        let mut view = PitchView::with_size(PitchConfig::default(), 10, 10);
        let mut rec = Recorder {
            fail: true,
            ..Default::default()
        };
        assert!(view.redraw(&mut rec).is_err());
        assert!(view.needs_redraw());
    }

    #[test]
    fn redraws_through_a_boxed_renderer() {
        let mut view = PitchView::with_size(PitchConfig::default(), 40, 40);
        let mut boxed: Box<dyn Renderer> = Box::new(Recorder::default());
        view.redraw(&mut boxed).unwrap();
        view.invalidate();
        assert!(view.needs_redraw());
    }
}
