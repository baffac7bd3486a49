use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{EntityKind, Team};
use crate::map::FlagData;
use crate::types::EntityId;

/// A team flag marking territory.
#[derive(Debug, Clone)]
pub struct Flag {
    id: EntityId,
    x: f64,
    y: f64,
    team: Team,
}

impl Flag {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            team: Team::Centrals,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn team(&self) -> Team {
        self.team
    }

    recorded_setters!(EntityKind::Flag => {
        set_x(x: f64);
        set_y(y: f64);
        set_team(team: Team);
    });

    pub fn apply(&mut self, cache: &mut ChangeCache, data: &FlagData) {
        self.set_x(cache, data.x);
        self.set_y(cache, data.y);
        self.set_team(cache, data.team);
    }
}

impl Entity for Flag {
    const KIND: EntityKind = EntityKind::Flag;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("team".to_string(), self.team.into()),
        ])
    }
}
