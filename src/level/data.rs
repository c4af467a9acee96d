//! Level definitions and RON loading.
//!
//! Each level is one RON file under `assets/data/levels/`. A definition is
//! pure data: how many ducks, their colors, their scripted flight paths,
//! and the ammo allotment. One generic level runner consumes whichever
//! definition matches the session's current level number.

use bevy::app::AppExit;
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::catalog::{DuckColor, FlightStyle};

use super::error::DataLoadError;

const LEVELS_DIR: &str = "assets/data/levels";

/// One duck's appearance and scripted motion.
///
/// The `x` and `y` tracks are keyframe lists of `(time, value)` pairs in
/// seconds and world units. The whole schedule loops every `cycle` seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct DuckSpec {
    pub color: DuckColor,
    pub style: FlightStyle,
    /// Loop length of the motion schedule, in seconds
    pub cycle: f32,
    pub x: Vec<(f32, f32)>,
    pub y: Vec<(f32, f32)>,
}

/// Static configuration for one level.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelSpec {
    /// Level number, 1-based
    pub number: usize,
    /// Shots the player gets for this level
    pub ammo: u32,
    pub ducks: Vec<DuckSpec>,
}

impl LevelSpec {
    /// Check the spec invariants. Violations are fatal at load time.
    pub fn validate(&self) -> Result<(), String> {
        if self.number == 0 {
            return Err("level numbers are 1-based".into());
        }
        if self.ammo == 0 {
            return Err("ammo allotment must be positive".into());
        }
        if self.ducks.is_empty() || self.ducks.len() > 3 {
            return Err(format!("expected 1-3 ducks, got {}", self.ducks.len()));
        }
        for (i, duck) in self.ducks.iter().enumerate() {
            if duck.cycle <= 0.0 {
                return Err(format!("duck {i}: cycle must be positive"));
            }
            for (name, track) in [("x", &duck.x), ("y", &duck.y)] {
                if track.is_empty() {
                    return Err(format!("duck {i}: empty {name} track"));
                }
                for pair in track.windows(2) {
                    if pair[1].0 <= pair[0].0 {
                        return Err(format!(
                            "duck {i}: {name} keyframe times must be strictly increasing"
                        ));
                    }
                }
                if track.last().is_some_and(|kf| kf.0 > duck.cycle) {
                    return Err(format!("duck {i}: {name} keyframe past end of cycle"));
                }
            }
        }
        Ok(())
    }
}

/// Resource holding all loaded level definitions, sorted by number.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    levels: Vec<LevelSpec>,
}

impl LevelRegistry {
    /// Get a level definition by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&LevelSpec> {
        self.levels.get(number.checked_sub(1)?)
    }

    /// Number of the final level.
    pub fn last_level(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Read and validate every level file in a directory.
///
/// Levels must come out as a contiguous run 1..=N with no duplicates.
pub fn load_dir(dir: &Path) -> Result<Vec<LevelSpec>, DataLoadError> {
    if !dir.is_dir() {
        return Err(DataLoadError::MissingDirectory(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
        path: dir.display().to_string(),
        details: e.to_string(),
    })?;

    let mut levels: Vec<LevelSpec> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "ron") {
            continue;
        }
        let display = path.display().to_string();

        let contents = fs::read_to_string(&path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        let spec: LevelSpec =
            ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
                path: display.clone(),
                details: e.to_string(),
            })?;
        spec.validate().map_err(|details| DataLoadError::InvalidSpec {
            path: display.clone(),
            details,
        })?;

        if levels.iter().any(|l| l.number == spec.number) {
            return Err(DataLoadError::DuplicateLevel(spec.number));
        }
        levels.push(spec);
    }

    levels.sort_by_key(|l| l.number);
    for (i, level) in levels.iter().enumerate() {
        if level.number != i + 1 {
            return Err(DataLoadError::MissingLevel(i + 1));
        }
    }
    Ok(levels)
}

/// Load all level definitions at boot. Any failure aborts the launch.
pub fn load_level_definitions(
    mut registry: ResMut<LevelRegistry>,
    mut exit: EventWriter<AppExit>,
) {
    match load_dir(Path::new(LEVELS_DIR)) {
        Ok(levels) if !levels.is_empty() => {
            info!("Loaded {} level definitions", levels.len());
            registry.levels = levels;
        }
        Ok(_) => {
            error!("No level definitions found in {LEVELS_DIR}");
            exit.send(AppExit::error());
        }
        Err(e) => {
            error!("Failed to load level definitions: {e}");
            exit.send(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_duck(cycle: f32, x: Vec<(f32, f32)>, y: Vec<(f32, f32)>) -> DuckSpec {
        DuckSpec {
            color: DuckColor::Black,
            style: FlightStyle::Gliding,
            cycle,
            x,
            y,
        }
    }

    #[test]
    fn parses_a_level_file() {
        let spec: LevelSpec = ron::from_str(
            r#"(
                number: 1,
                ammo: 3,
                ducks: [
                    (
                        color: Black,
                        style: Gliding,
                        cycle: 3.6,
                        x: [(0.0, -354.0), (1.8, 354.0), (3.6, -354.0)],
                        y: [(0.0, 180.0)],
                    ),
                ],
            )"#,
        )
        .unwrap();
        assert_eq!(spec.number, 1);
        assert_eq!(spec.ammo, 3);
        assert_eq!(spec.ducks.len(), 1);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn rejects_zero_ammo() {
        let spec = LevelSpec {
            number: 1,
            ammo: 0,
            ducks: vec![one_duck(2.0, vec![(0.0, 0.0)], vec![(0.0, 0.0)])],
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_unsorted_keyframes() {
        let spec = LevelSpec {
            number: 1,
            ammo: 3,
            ducks: vec![one_duck(
                2.0,
                vec![(0.0, 0.0), (1.5, 10.0), (1.0, 20.0)],
                vec![(0.0, 0.0)],
            )],
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_keyframe_past_cycle_end() {
        let spec = LevelSpec {
            number: 1,
            ammo: 3,
            ducks: vec![one_duck(2.0, vec![(0.0, 0.0), (2.5, 10.0)], vec![(0.0, 0.0)])],
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_too_many_ducks() {
        let duck = one_duck(2.0, vec![(0.0, 0.0)], vec![(0.0, 0.0)]);
        let spec = LevelSpec {
            number: 1,
            ammo: 12,
            ducks: vec![duck.clone(), duck.clone(), duck.clone(), duck],
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn shipped_levels_parse_and_progress() {
        // cargo runs unit tests from the crate root
        let levels = load_dir(Path::new(LEVELS_DIR)).unwrap();
        assert_eq!(levels.len(), 6);
        let expected_ducks = [1, 1, 2, 2, 3, 3];
        for (level, &ducks) in levels.iter().zip(expected_ducks.iter()) {
            assert_eq!(level.ducks.len(), ducks);
            assert_eq!(level.ammo, 3 * ducks as u32);
        }
    }

    #[test]
    fn registry_lookup_is_one_based() {
        let mut registry = LevelRegistry::default();
        registry.levels = vec![LevelSpec {
            number: 1,
            ammo: 3,
            ducks: vec![one_duck(2.0, vec![(0.0, 0.0)], vec![(0.0, 0.0)])],
        }];
        assert!(registry.get(0).is_none());
        assert!(registry.get(1).is_some());
        assert!(registry.get(2).is_none());
        assert_eq!(registry.last_level(), 1);
    }
}
