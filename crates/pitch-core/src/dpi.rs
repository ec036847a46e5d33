//! Density helpers for turning authored density-independent units (dp) into
//! physical pixels before a [`PitchConfig`](crate::PitchConfig) is built.
//!
//! Callers provide the display density (physical pixels per dp) as `f32`.
//! Layout never consults a density itself.

/// Clamp a platform density to something usable; non-finite or non-positive values become 1.0.
#[inline]
pub fn sanitize_density(density: f32) -> f32 {
    if density.is_finite() && density > 0.0 {
        density
    } else {
        1.0
    }
}

/// dp → whole physical pixels, truncating toward zero.
#[inline]
pub fn to_px(dp: f32, density: f32) -> f32 {
    (dp * sanitize_density(density)).trunc()
}

/// Physical pixels → whole dp, truncating toward zero.
#[inline]
pub fn to_dp(px: f32, density: f32) -> f32 {
    (px / sanitize_density(density)).trunc()
}
