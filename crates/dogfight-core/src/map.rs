//! Map load format.
//!
//! A map is an ordered set of initial field-sets per entity kind,
//! consumed once by the world's `load_map`. The field-sets match each
//! kind's settable fields, so loading is just `apply` per entry.

use serde::{Deserialize, Serialize};

use crate::constants::RUNWAY_HEALTH_MAX;
use crate::enums::{FacingDirection, Team};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagData {
    pub x: f64,
    pub y: f64,
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HillData {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayData {
    pub x: f64,
    pub y: f64,
    pub direction: FacingDirection,
    pub team: Team,
    #[serde(default = "full_runway_health")]
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerData {
    pub x: f64,
    pub y: f64,
    pub direction: FacingDirection,
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub direction: FacingDirection,
}

fn full_runway_health() -> i32 {
    RUNWAY_HEALTH_MAX
}

/// The shapes consumed by the world loader. Entities are inserted in
/// field order: grounds, flags, hills, runways, towers, waters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameMap {
    #[serde(default)]
    pub grounds: Vec<GroundData>,
    #[serde(default)]
    pub flags: Vec<FlagData>,
    #[serde(default)]
    pub hills: Vec<HillData>,
    #[serde(default)]
    pub runways: Vec<RunwayData>,
    #[serde(default)]
    pub towers: Vec<TowerData>,
    #[serde(default)]
    pub waters: Vec<WaterData>,
}

impl GameMap {
    /// The built-in two-team island map: one landmass per side with a
    /// runway, flag, and tower each, open water in the middle.
    pub fn classic() -> Self {
        Self {
            grounds: vec![
                GroundData {
                    x: -1500.0,
                    y: 0.0,
                    width: 1400.0,
                },
                GroundData {
                    x: 1500.0,
                    y: 0.0,
                    width: 1400.0,
                },
            ],
            flags: vec![
                FlagData {
                    x: -2100.0,
                    y: 20.0,
                    team: Team::Centrals,
                },
                FlagData {
                    x: 2100.0,
                    y: 20.0,
                    team: Team::Allies,
                },
            ],
            hills: vec![
                HillData { x: -900.0, y: 40.0 },
                HillData { x: 900.0, y: 40.0 },
            ],
            runways: vec![
                RunwayData {
                    x: -1400.0,
                    y: 0.0,
                    direction: FacingDirection::Right,
                    team: Team::Centrals,
                    health: RUNWAY_HEALTH_MAX,
                },
                RunwayData {
                    x: 1400.0,
                    y: 0.0,
                    direction: FacingDirection::Left,
                    team: Team::Allies,
                    health: RUNWAY_HEALTH_MAX,
                },
            ],
            towers: vec![
                TowerData {
                    x: -1800.0,
                    y: 10.0,
                    direction: FacingDirection::Right,
                    team: Team::Centrals,
                },
                TowerData {
                    x: 1800.0,
                    y: 10.0,
                    direction: FacingDirection::Left,
                    team: Team::Allies,
                },
            ],
            waters: vec![WaterData {
                x: 0.0,
                y: -20.0,
                width: 1600.0,
                direction: FacingDirection::Right,
            }],
        }
    }
}
