use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{EntityKind, FacingDirection, Team};
use crate::map::TowerData;
use crate::types::EntityId;

/// A control tower.
#[derive(Debug, Clone)]
pub struct Tower {
    id: EntityId,
    x: f64,
    y: f64,
    direction: FacingDirection,
    team: Team,
}

impl Tower {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            direction: FacingDirection::Right,
            team: Team::Centrals,
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

    recorded_setters!(EntityKind::Tower => {
        set_x(x: f64);
        set_y(y: f64);
        set_direction(direction: FacingDirection);
        set_team(team: Team);
    });

    pub fn apply(&mut self, cache: &mut ChangeCache, data: &TowerData) {
        self.set_x(cache, data.x);
        self.set_y(cache, data.y);
        self.set_direction(cache, data.direction);
        self.set_team(cache, data.team);
    }
}

impl Entity for Tower {
    const KIND: EntityKind = EntityKind::Tower;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("direction".to_string(), self.direction.into()),
            ("team".to_string(), self.team.into()),
        ])
    }
}
