//! Asset catalog - indexed image and sound paths plus startup validation.
//!
//! The game consumes assets by logical index (backgrounds, crosshairs) or
//! name (sound clips). All paths are relative to the `assets/` directory
//! that Bevy's asset server reads from. A missing file is a fatal startup
//! error; nothing is loaded lazily at a point where failure could be
//! handled.

use std::path::{Path, PathBuf};

use bevy::app::AppExit;
use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Title screen backdrop.
pub const WELCOME: &str = "welcome/1.png";

/// Background images, cycled by the selector with LEFT/RIGHT.
pub const BACKGROUNDS: [&str; 6] = [
    "background/1.png",
    "background/2.png",
    "background/3.png",
    "background/4.png",
    "background/5.png",
    "background/6.png",
];

/// Foreground overlays, drawn in front of the ducks. Same index as the
/// selected background.
pub const FOREGROUNDS: [&str; 6] = [
    "foreground/1.png",
    "foreground/2.png",
    "foreground/3.png",
    "foreground/4.png",
    "foreground/5.png",
    "foreground/6.png",
];

/// Crosshair images, cycled by the selector with UP/DOWN.
pub const CROSSHAIRS: [&str; 7] = [
    "crosshair/1.png",
    "crosshair/2.png",
    "crosshair/3.png",
    "crosshair/4.png",
    "crosshair/5.png",
    "crosshair/6.png",
    "crosshair/7.png",
];

/// Named sound clips.
pub mod sounds {
    /// Looping title/selector music.
    pub const TITLE: &str = "effects/title.ogg";
    /// Jingle played during the start countdown.
    pub const INTRO: &str = "effects/intro.ogg";
    pub const GUNSHOT: &str = "effects/gunshot.ogg";
    pub const DUCK_FALLS: &str = "effects/duck_falls.ogg";
    pub const LEVEL_COMPLETED: &str = "effects/level_completed.ogg";
    pub const GAME_COMPLETED: &str = "effects/game_completed.ogg";
    pub const GAME_OVER: &str = "effects/game_over.ogg";

    pub const ALL: [&str; 7] = [
        TITLE,
        INTRO,
        GUNSHOT,
        DUCK_FALLS,
        LEVEL_COMPLETED,
        GAME_COMPLETED,
        GAME_OVER,
    ];
}

/// Duck sprite colors. Each color has its own frame set on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DuckColor {
    Black,
    Blue,
    Red,
}

impl DuckColor {
    fn dir(self) -> &'static str {
        match self {
            DuckColor::Black => "duck_black",
            DuckColor::Blue => "duck_blue",
            DuckColor::Red => "duck_red",
        }
    }

    /// Path of one numbered frame (1-8) for this color.
    pub fn frame(self, number: u8) -> String {
        format!("{}/{}.png", self.dir(), number)
    }
}

/// Which flap frame set a duck uses.
///
/// Frames 1-3 show the duck angled for diving flight paths, frames 4-6
/// show it level for straight gliding. Frame 7 is the hit pose and
/// frame 8 the falling pose for both styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FlightStyle {
    Gliding,
    Diving,
}

impl FlightStyle {
    /// The three flap frame numbers for this style.
    pub fn flap_frames(self) -> [u8; 3] {
        match self {
            FlightStyle::Gliding => [4, 5, 6],
            FlightStyle::Diving => [1, 2, 3],
        }
    }
}

/// Frame number of the hit pose.
pub const HIT_FRAME: u8 = 7;
/// Frame number of the falling pose.
pub const FALL_FRAME: u8 = 8;

/// Errors from the startup asset check.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The assets directory itself is missing.
    #[error("Asset directory not found: {0}")]
    MissingRoot(PathBuf),

    /// A catalogued file is missing.
    #[error("Missing asset: {0}")]
    MissingAsset(PathBuf),
}

/// Every path the catalog references, relative to the asset root.
pub fn all_paths() -> Vec<String> {
    let mut paths = vec![WELCOME.to_string()];
    paths.extend(BACKGROUNDS.iter().map(|p| p.to_string()));
    paths.extend(FOREGROUNDS.iter().map(|p| p.to_string()));
    paths.extend(CROSSHAIRS.iter().map(|p| p.to_string()));
    for color in [DuckColor::Black, DuckColor::Blue, DuckColor::Red] {
        for frame in 1..=8 {
            paths.push(color.frame(frame));
        }
    }
    paths.extend(sounds::ALL.iter().map(|p| p.to_string()));
    paths
}

/// Check that every catalogued asset exists under `root`.
pub fn validate(root: &Path) -> Result<(), CatalogError> {
    if !root.is_dir() {
        return Err(CatalogError::MissingRoot(root.to_path_buf()));
    }
    for path in all_paths() {
        let full = root.join(&path);
        if !full.is_file() {
            return Err(CatalogError::MissingAsset(full));
        }
    }
    Ok(())
}

/// Startup system: abort the launch if any catalogued asset is missing.
pub fn validate_assets(mut exit: EventWriter<AppExit>) {
    match validate(Path::new("assets")) {
        Ok(()) => info!("Asset catalog validated"),
        Err(e) => {
            error!("Asset check failed: {e}");
            exit.send(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_follow_color_layout() {
        assert_eq!(DuckColor::Black.frame(4), "duck_black/4.png");
        assert_eq!(DuckColor::Blue.frame(HIT_FRAME), "duck_blue/7.png");
        assert_eq!(DuckColor::Red.frame(FALL_FRAME), "duck_red/8.png");
    }

    #[test]
    fn flap_frames_per_style() {
        assert_eq!(FlightStyle::Gliding.flap_frames(), [4, 5, 6]);
        assert_eq!(FlightStyle::Diving.flap_frames(), [1, 2, 3]);
    }

    #[test]
    fn catalog_lists_every_duck_frame() {
        let paths = all_paths();
        // 1 welcome + 6 + 6 + 7 + 3 colors * 8 frames + 7 sounds
        assert_eq!(paths.len(), 1 + 6 + 6 + 7 + 24 + 7);
        assert!(paths.iter().any(|p| p == "duck_red/3.png"));
        assert!(paths.iter().any(|p| p == sounds::GUNSHOT));
    }

    #[test]
    fn validate_reports_missing_root() {
        let err = validate(Path::new("definitely/not/here")).unwrap_err();
        assert!(matches!(err, CatalogError::MissingRoot(_)));
    }
}
