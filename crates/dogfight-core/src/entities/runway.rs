use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::constants::RUNWAY_HEALTH_MAX;
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{EntityKind, FacingDirection, Team};
use crate::map::RunwayData;
use crate::types::EntityId;

/// A landing strip owned by a team.
///
/// Health at or below zero makes the runway unusable for takeoffs but
/// does not remove it from the world.
#[derive(Debug, Clone)]
pub struct Runway {
    id: EntityId,
    x: f64,
    y: f64,
    direction: FacingDirection,
    team: Team,
    health: i32,
}

impl Runway {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            direction: FacingDirection::Right,
            team: Team::Centrals,
            health: RUNWAY_HEALTH_MAX,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn direction(&self) -> FacingDirection {
        self.direction
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    recorded_setters!(EntityKind::Runway => {
        set_x(x: f64);
        set_y(y: f64);
        set_direction(direction: FacingDirection);
        set_team(team: Team);
        set_health(health: i32);
    });

    pub fn apply(&mut self, cache: &mut ChangeCache, data: &RunwayData) {
        self.set_x(cache, data.x);
        self.set_y(cache, data.y);
        self.set_direction(cache, data.direction);
        self.set_team(cache, data.team);
        self.set_health(cache, data.health);
    }
}

impl Entity for Runway {
    const KIND: EntityKind = EntityKind::Runway;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("direction".to_string(), self.direction.into()),
            ("team".to_string(), self.team.into()),
            ("health".to_string(), self.health.into()),
        ])
    }
}
