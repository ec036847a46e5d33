//! Render a soccer pitch to a PNG.
//!
//! Usage: `soccer-pitch [WIDTH HEIGHT [OUTPUT]]`
//!
//! Settings come from `pitch.toml` and `PITCH_*` environment variables;
//! positional arguments override the `[output]` section.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;
use pitch_config::PitchSettings;
use pitch_core::primitive_count;
use pitch_surface::{PitchView, RasterRenderer};

fn apply_args(settings: &mut PitchSettings, args: &[String]) -> Result<()> {
    match args {
        [] => {}
        [width, height, rest @ ..] => {
            settings.output.width = width
                .parse()
                .with_context(|| format!("invalid width {:?}", width))?;
            settings.output.height = height
                .parse()
                .with_context(|| format!("invalid height {:?}", height))?;
            match rest {
                [] => {}
                [path] => settings.output.path = PathBuf::from(path),
                _ => bail!("usage: soccer-pitch [WIDTH HEIGHT [OUTPUT]]"),
            }
        }
        _ => bail!("usage: soccer-pitch [WIDTH HEIGHT [OUTPUT]]"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings = PitchSettings::load();
    let args: Vec<String> = std::env::args().skip(1).collect();
    apply_args(&mut settings, &args)?;

    let config = settings.resolve().context("invalid pitch settings")?;
    let (width, height) = settings.surface_size();

    let mut view = PitchView::with_size(config, width, height);
    let mut renderer = RasterRenderer::new();
    view.redraw(&mut renderer)?;
    renderer.save_png(&settings.output.path)?;

    let size = view.size();
    info!(
        "rendered {} primitives at {}x{} (density {}) to {}",
        primitive_count(view.config()),
        size.width,
        size.height,
        settings.display.density,
        settings.output.path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_args_override_output() {
        let mut settings = PitchSettings::default();
        apply_args(&mut settings, &args(&["300", "500", "out.png"])).unwrap();
        assert_eq!(settings.output.width, 300);
        assert_eq!(settings.output.height, 500);
        assert_eq!(settings.output.path, PathBuf::from("out.png"));
    }

    #[test]
    fn no_args_keep_settings() {
        let mut settings = PitchSettings::default();
        apply_args(&mut settings, &[]).unwrap();
        assert_eq!(settings, PitchSettings::default());
    }

    #[test]
    fn bad_args_are_rejected() {
        let mut settings = PitchSettings::default();
        assert!(apply_args(&mut settings, &args(&["300"])).is_err());
        assert!(apply_args(&mut settings, &args(&["wide", "500"])).is_err());
        assert!(apply_args(&mut settings, &args(&["1", "2", "a", "b"])).is_err());
    }
}
