//! pitch-surface: renderers and the host-side view on top of pitch-core.

mod raster;
mod renderer;
pub mod shapes;
mod view;

pub use raster::RasterRenderer;
pub use renderer::Renderer;
pub use view::PitchView;
