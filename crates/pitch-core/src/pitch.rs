use std::num::NonZeroU32;

use crate::dpi;
use crate::scene::Color;

/// Sizes of a pitch in density-independent units, before conversion to physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DpMetrics {
    pub line_width: f32,
    pub padding: f32,
    pub goal_post_half_width: f32,
    pub goal_post_half_height: f32,
    pub goal_area_half_width: f32,
    pub goal_area_half_height: f32,
    pub corner_radius: f32,
    pub center_outer_radius: f32,
    pub center_inner_radius: f32,
}

impl Default for DpMetrics {
    fn default() -> Self {
        Self {
            line_width: 4.0,
            padding: 16.0,
            goal_post_half_width: 16.0,
            goal_post_half_height: 12.0,
            goal_area_half_width: 52.0,
            goal_area_half_height: 32.0,
            corner_radius: 12.0,
            center_outer_radius: 24.0,
            center_inner_radius: 6.0,
        }
    }
}

/// Everything the layout needs to draw a pitch. Sizes are physical pixels.
///
/// Goal areas are expected to enclose the goal posts, but nothing checks it;
/// a smaller area simply draws inside the post.
#[derive(Clone, Debug, PartialEq)]
pub struct PitchConfig {
    grass_row_count: NonZeroU32,
    grass_color_light: Color,
    grass_color_dark: Color,
    line_color: Color,
    line_width: f32,
    padding: f32,
    goal_post_half_width: f32,
    goal_post_half_height: f32,
    goal_area_half_width: f32,
    goal_area_half_height: f32,
    corner_radius: f32,
    center_outer_radius: f32,
    center_inner_radius: f32,
}

pub const DEFAULT_GRASS_ROWS: NonZeroU32 = match NonZeroU32::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

impl Default for PitchConfig {
    fn default() -> Self {
        Self::from_dp(&DpMetrics::default(), 1.0)
    }
}

impl PitchConfig {
    pub fn builder() -> PitchConfigBuilder {
        PitchConfigBuilder::default()
    }

    /// Default colors and row count with every size taken from `metrics` scaled by `density`.
    pub fn from_dp(metrics: &DpMetrics, density: f32) -> Self {
        let px = |dp: f32| dpi::to_px(dp, density);
        Self {
            grass_row_count: DEFAULT_GRASS_ROWS,
            grass_color_light: Color::rgb_hex(0x99cc00),
            grass_color_dark: Color::rgb_hex(0x669900),
            line_color: Color::rgb_hex(0xffffff),
            line_width: px(metrics.line_width),
            padding: px(metrics.padding),
            goal_post_half_width: px(metrics.goal_post_half_width),
            goal_post_half_height: px(metrics.goal_post_half_height),
            goal_area_half_width: px(metrics.goal_area_half_width),
            goal_area_half_height: px(metrics.goal_area_half_height),
            corner_radius: px(metrics.corner_radius),
            center_outer_radius: px(metrics.center_outer_radius),
            center_inner_radius: px(metrics.center_inner_radius),
        }
    }

    /// Start a builder seeded with this config's values.
    pub fn to_builder(&self) -> PitchConfigBuilder {
        PitchConfigBuilder {
            config: self.clone(),
        }
    }

    pub fn grass_row_count(&self) -> NonZeroU32 {
        self.grass_row_count
    }
    pub fn grass_color_light(&self) -> Color {
        self.grass_color_light
    }
    pub fn grass_color_dark(&self) -> Color {
        self.grass_color_dark
    }
    pub fn line_color(&self) -> Color {
        self.line_color
    }
    pub fn line_width(&self) -> f32 {
        self.line_width
    }
    pub fn padding(&self) -> f32 {
        self.padding
    }
    pub fn goal_post_half_width(&self) -> f32 {
        self.goal_post_half_width
    }
    pub fn goal_post_half_height(&self) -> f32 {
        self.goal_post_half_height
    }
    pub fn goal_area_half_width(&self) -> f32 {
        self.goal_area_half_width
    }
    pub fn goal_area_half_height(&self) -> f32 {
        self.goal_area_half_height
    }
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }
    pub fn center_outer_radius(&self) -> f32 {
        self.center_outer_radius
    }
    pub fn center_inner_radius(&self) -> f32 {
        self.center_inner_radius
    }
}

/// Chainable construction of a [`PitchConfig`], starting from the defaults.
#[derive(Clone, Debug, Default)]
pub struct PitchConfigBuilder {
    config: PitchConfig,
}

impl PitchConfigBuilder {
    pub fn grass_row_count(mut self, rows: NonZeroU32) -> Self {
        self.config.grass_row_count = rows;
        self
    }

    pub fn grass_colors(mut self, light: Color, dark: Color) -> Self {
        self.config.grass_color_light = light;
        self.config.grass_color_dark = dark;
        self
    }

    pub fn line_color(mut self, color: Color) -> Self {
        self.config.line_color = color;
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.config.line_width = width;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.config.padding = padding;
        self
    }

    pub fn goal_post_half_extents(mut self, half_width: f32, half_height: f32) -> Self {
        self.config.goal_post_half_width = half_width;
        self.config.goal_post_half_height = half_height;
        self
    }

    pub fn goal_area_half_extents(mut self, half_width: f32, half_height: f32) -> Self {
        self.config.goal_area_half_width = half_width;
        self.config.goal_area_half_height = half_height;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.config.corner_radius = radius;
        self
    }

    pub fn center_radii(mut self, outer: f32, inner: f32) -> Self {
        self.config.center_outer_radius = outer;
        self.config.center_inner_radius = inner;
        self
    }

    pub fn build(self) -> PitchConfig {
        self.config
    }
}
