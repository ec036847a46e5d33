//! Pitch configuration system
//!
//! Loads drawing settings from `pitch.toml`, applies environment overrides and
//! resolves everything into a [`PitchConfig`] in physical pixels.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use log::warn;
use pitch_core::{Color, DpMetrics, PitchConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "pitch.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("grass.rows must be at least 1")]
    ZeroGrassRows,
    #[error("display.density must be a positive number, got {0}")]
    NonPositiveDensity(f32),
}

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PitchSettings {
    pub display: DisplayConfig,
    pub grass: GrassConfig,
    pub lines: LineConfig,
    pub geometry: GeometryConfig,
    pub output: OutputConfig,
}

/// Display density settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Physical pixels per dp
    pub density: f32,
}

/// Grass stripe settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GrassConfig {
    /// Number of stripes
    pub rows: u32,
    /// CSS color of even stripes
    pub light: String,
    /// CSS color of odd stripes
    pub dark: String,
}

/// Line marking settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LineConfig {
    pub color: String,
    /// Stroke width in dp
    pub width: f32,
}

/// Marking geometry, all in dp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryConfig {
    pub padding: f32,
    pub goal_post_half_width: f32,
    pub goal_post_half_height: f32,
    pub goal_area_half_width: f32,
    pub goal_area_half_height: f32,
    pub corner_radius: f32,
    pub center_outer_radius: f32,
    pub center_inner_radius: f32,
}

/// Rendered image settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Surface width in physical pixels
    pub width: u32,
    /// Surface height in physical pixels
    pub height: u32,
    pub path: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            rows: pitch_core::DEFAULT_GRASS_ROWS.get(),
            light: "#99cc00".to_string(),
            dark: "#669900".to_string(),
        }
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            width: DpMetrics::default().line_width,
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let dp = DpMetrics::default();
        Self {
            padding: dp.padding,
            goal_post_half_width: dp.goal_post_half_width,
            goal_post_half_height: dp.goal_post_half_height,
            goal_area_half_width: dp.goal_area_half_width,
            goal_area_half_height: dp.goal_area_half_height,
            corner_radius: dp.corner_radius,
            center_outer_radius: dp.center_outer_radius,
            center_inner_radius: dp.center_inner_radius,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 360,
            height: 600,
            path: PathBuf::from("pitch.png"),
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    let parsed = csscolorparser::parse(value.trim()).map_err(|_| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })?;
    Ok(Color::from_srgba_u8(parsed.to_rgba8()))
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    match val.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid value", key, val);
            None
        }
    }
}

impl GeometryConfig {
    fn metrics(&self, line_width: f32) -> DpMetrics {
        DpMetrics {
            line_width,
            padding: self.padding,
            goal_post_half_width: self.goal_post_half_width,
            goal_post_half_height: self.goal_post_half_height,
            goal_area_half_width: self.goal_area_half_width,
            goal_area_half_height: self.goal_area_half_height,
            corner_radius: self.corner_radius,
            center_outer_radius: self.center_outer_radius,
            center_inner_radius: self.center_inner_radius,
        }
    }
}

impl PitchSettings {
    /// Load settings from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `pitch.toml` from the current directory, or defaults when it is missing or unreadable
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(settings) => settings,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Merge settings with environment variables
    ///
    /// Environment variables take precedence over file values.
    pub fn merge_with_env(&mut self) {
        if let Some(density) = env_parse("PITCH_DENSITY") {
            self.display.density = density;
        }

        if let Some(rows) = env_parse("PITCH_GRASS_ROWS") {
            self.grass.rows = rows;
        }
        if let Ok(light) = std::env::var("PITCH_GRASS_LIGHT") {
            self.grass.light = light;
        }
        if let Ok(dark) = std::env::var("PITCH_GRASS_DARK") {
            self.grass.dark = dark;
        }

        if let Ok(color) = std::env::var("PITCH_LINE_COLOR") {
            self.lines.color = color;
        }
        if let Some(width) = env_parse("PITCH_LINE_WIDTH") {
            self.lines.width = width;
        }

        if let Some(padding) = env_parse("PITCH_PADDING") {
            self.geometry.padding = padding;
        }

        if let Some(width) = env_parse("PITCH_WIDTH") {
            self.output.width = width;
        }
        if let Some(height) = env_parse("PITCH_HEIGHT") {
            self.output.height = height;
        }
        if let Ok(path) = std::env::var("PITCH_OUTPUT") {
            self.output.path = PathBuf::from(path);
        }
    }

    /// Load settings with environment variable overrides
    ///
    /// 1. Load from pitch.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut settings = Self::load_or_default();
        settings.merge_with_env();
        settings
    }

    /// Convert dp sizes to pixels at the configured density and parse colors.
    pub fn resolve(&self) -> Result<PitchConfig, ConfigError> {
        let density = self.display.density;
        if !(density.is_finite() && density > 0.0) {
            return Err(ConfigError::NonPositiveDensity(density));
        }
        let rows = NonZeroU32::new(self.grass.rows).ok_or(ConfigError::ZeroGrassRows)?;
        let light = parse_color("grass.light", &self.grass.light)?;
        let dark = parse_color("grass.dark", &self.grass.dark)?;
        let line = parse_color("lines.color", &self.lines.color)?;

        let metrics = self.geometry.metrics(self.lines.width);
        Ok(PitchConfig::from_dp(&metrics, density)
            .to_builder()
            .grass_row_count(rows)
            .grass_colors(light, dark)
            .line_color(line)
            .build())
    }

    /// Output surface size in pixels, as the signed size the layout takes.
    pub fn surface_size(&self) -> (i32, i32) {
        (
            i32::try_from(self.output.width).unwrap_or(i32::MAX),
            i32::try_from(self.output.height).unwrap_or(i32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_resolve_to_default_config() {
        let config = PitchSettings::default().resolve().unwrap();
        assert_eq!(config, PitchConfig::default());
    }

    #[test]
    fn test_toml_serialization() {
        let settings = PitchSettings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: PitchSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = PitchSettings::from_toml_str(
            r#"
            [display]
            density = 2.0

            [grass]
            rows = 12
            light = "lightgreen"
            "#,
        )
        .unwrap();
        assert_eq!(settings.grass.rows, 12);
        assert_eq!(settings.grass.dark, "#669900");

        let config = settings.resolve().unwrap();
        assert_eq!(config.grass_row_count().get(), 12);
        assert_eq!(config.padding(), 32.0);
        assert_eq!(config.line_width(), 8.0);
        assert_eq!(
            config.grass_color_light().to_srgba_u8(),
            [0x90, 0xee, 0x90, 0xff]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geometry]\ncorner_radius = 20.0\n[lines]\ncolor = \"#ff0000\"").unwrap();

        let settings = PitchSettings::load_from_file(file.path()).unwrap();
        let config = settings.resolve().unwrap();
        assert_eq!(config.corner_radius(), 20.0);
        assert_eq!(config.line_color(), Color::rgba(255, 0, 0, 255));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PitchSettings::load_from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let err = PitchSettings::from_toml_str("[grass]\nrows = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_resolve_rejects_bad_values() {
        let mut settings = PitchSettings::default();
        settings.grass.rows = 0;
        assert!(matches!(settings.resolve(), Err(ConfigError::ZeroGrassRows)));

        let mut settings = PitchSettings::default();
        settings.display.density = 0.0;
        assert!(matches!(
            settings.resolve(),
            Err(ConfigError::NonPositiveDensity(_))
        ));

        let mut settings = PitchSettings::default();
        settings.lines.color = "not-a-color".to_string();
        assert!(matches!(
            settings.resolve(),
            Err(ConfigError::InvalidColor { field: "lines.color", .. })
        ));
    }

    #[test]
    fn test_inverted_goal_extents_are_accepted() {
        let mut settings = PitchSettings::default();
        settings.geometry.goal_area_half_width = 4.0;
        let config = settings.resolve().unwrap();
        assert!(config.goal_area_half_width() < config.goal_post_half_width());
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("PITCH_GRASS_ROWS", "4");
            std::env::set_var("PITCH_LINE_COLOR", "yellow");
            std::env::set_var("PITCH_WIDTH", "not-a-number");
        }

        let mut settings = PitchSettings::default();
        settings.merge_with_env();

        assert_eq!(settings.grass.rows, 4);
        assert_eq!(settings.lines.color, "yellow");
        assert_eq!(settings.output.width, 360);

        unsafe {
            std::env::remove_var("PITCH_GRASS_ROWS");
            std::env::remove_var("PITCH_LINE_COLOR");
            std::env::remove_var("PITCH_WIDTH");
        }
    }
}
