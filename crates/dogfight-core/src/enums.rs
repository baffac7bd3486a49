//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Fixed tag identifying an entity's category.
///
/// The tag determines the entity's field set and which registry
/// collection owns it; the kind-to-collection mapping is fixed at
/// compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ground,
    Water,
    Runway,
    Flag,
    Tower,
    Hill,
    Trooper,
    Player,
    Plane,
}

/// The two sides of the war.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[default]
    Centrals,
    Allies,
}

impl Team {
    /// Plane types this team is permitted to fly.
    pub fn planes(&self) -> &'static [PlaneType] {
        match self {
            Team::Centrals => &[PlaneType::Albatros, PlaneType::Fokker, PlaneType::Junkers],
            Team::Allies => &[PlaneType::Bristol, PlaneType::Salmson, PlaneType::Sopwith],
        }
    }
}

/// Which way a runway or tower faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDirection {
    Left,
    #[default]
    Right,
}

/// Flyable plane models. The first three belong to the Centrals,
/// the rest to the Allies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneType {
    Albatros,
    Fokker,
    Junkers,
    Bristol,
    Salmson,
    Sopwith,
}

impl PlaneType {
    /// Minimum airspeed needed to stay airborne (units/s).
    pub fn min_speed(&self) -> f64 {
        match self {
            PlaneType::Albatros => 100.0,
            PlaneType::Fokker => 105.0,
            PlaneType::Junkers => 115.0,
            PlaneType::Bristol => 100.0,
            PlaneType::Salmson => 110.0,
            PlaneType::Sopwith => 95.0,
        }
    }

    /// Top airspeed under full throttle (units/s).
    pub fn max_speed(&self) -> f64 {
        match self {
            PlaneType::Albatros => 230.0,
            PlaneType::Fokker => 240.0,
            PlaneType::Junkers => 220.0,
            PlaneType::Bristol => 245.0,
            PlaneType::Salmson => 235.0,
            PlaneType::Sopwith => 250.0,
        }
    }

    /// Thrust/drag rate applied toward or away from `max_speed` (units/s^2).
    pub fn acceleration(&self) -> f64 {
        match self {
            PlaneType::Albatros => 55.0,
            PlaneType::Fokker => 60.0,
            PlaneType::Junkers => 45.0,
            PlaneType::Bristol => 60.0,
            PlaneType::Salmson => 50.0,
            PlaneType::Sopwith => 65.0,
        }
    }

    /// Turn rate in rotation steps per second.
    pub fn turn_rate(&self) -> f64 {
        match self {
            PlaneType::Albatros => 128.0,
            PlaneType::Fokker => 144.0,
            PlaneType::Junkers => 96.0,
            PlaneType::Bristol => 128.0,
            PlaneType::Salmson => 112.0,
            PlaneType::Sopwith => 160.0,
        }
    }

    /// Seconds of engine burn on a full tank.
    pub fn fuel_capacity(&self) -> f64 {
        match self {
            PlaneType::Albatros => 100.0,
            PlaneType::Fokker => 90.0,
            PlaneType::Junkers => 120.0,
            PlaneType::Bristol => 100.0,
            PlaneType::Salmson => 110.0,
            PlaneType::Sopwith => 85.0,
        }
    }
}

/// Player lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// In the pre-flight screen, awaiting a successful takeoff.
    #[default]
    Takeoff,
    /// Controlling an entity in the world.
    Playing,
}

/// What a player currently operates. Paired with an [`crate::types::EntityId`]
/// on the player record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    #[default]
    None,
    Plane,
    Trooper,
}

/// Resolved rotation input of a plane.
///
/// `None` is the canonical rest state, produced when left and right
/// are both held or both released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    #[default]
    None,
    Left,
    Right,
}

/// Logical input keys, already abstracted away from physical devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InputKey {
    Left,
    Right,
    /// Flip the plane's orientation (edge-triggered).
    Up,
    /// Toggle the engine (edge-triggered).
    Down,
    /// Eject from the controlled entity (edge-triggered).
    Jump,
}

/// Trooper behavior state. Troopers are registry-resident today;
/// no behavior system acts on them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrooperState {
    #[default]
    Parachuting,
    Falling,
    Standing,
}
