use anyhow::Result;
use pitch_core::DisplayList;

/// Consumes a display list and draws it, in list order, onto whatever surface it owns.
pub trait Renderer {
    fn render(&mut self, list: &DisplayList) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, list: &DisplayList) -> Result<()> {
        (**self).render(list)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, list: &DisplayList) -> Result<()> {
        (**self).render(list)
    }
}
