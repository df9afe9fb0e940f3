use anyhow::Context;
use image::Rgba;
use spacewar_simulator::{ScreenConfig, Sprite};
use std::{fs, path::Path};

pub const DEFAULT_SPRITE_WIDTH: u32 = 32;
pub const DEFAULT_SPRITE_HEIGHT: u32 = 16;

pub fn load_screen_config(path: Option<&Path>) -> anyhow::Result<ScreenConfig> {
    match path {
        Some(path) => {
            log::info!("Reading screen config {:?}", path);
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            Ok(ScreenConfig::from_json(&json)?)
        }
        None => Ok(ScreenConfig::default()),
    }
}

/// Loads a PNG sprite, or falls back to a plain arrow.
pub fn load_sprite(path: Option<&Path>) -> anyhow::Result<Sprite> {
    match path {
        Some(path) => Ok(Sprite::load(path)?),
        None => Ok(Sprite::arrow(
            DEFAULT_SPRITE_WIDTH,
            DEFAULT_SPRITE_HEIGHT,
            Rgba([255, 255, 255, 255]),
        )?),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("spacewar-tools-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config() {
        assert_eq!(load_screen_config(None).unwrap(), ScreenConfig::default());
    }

    #[test]
    fn test_config_file() {
        let path = scratch_path("screen.json");
        fs::write(&path, r#"{"width": 640, "height": 480, "max_fps": 30}"#).unwrap();
        let config = load_screen_config(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 480.0);
        assert_eq!(config.max_fps, 30);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(load_screen_config(Some(scratch_path("missing.json").as_path())).is_err());
    }

    #[test]
    fn test_sprite_round_trips_through_png() {
        let sprite = load_sprite(None).unwrap();
        let path = scratch_path("arrow.png");
        sprite.image().save(&path).unwrap();
        let loaded = load_sprite(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.image(), sprite.image());
    }
}
