use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::constants::TROOPER_HEALTH_MAX;
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{EntityKind, Team, TrooperState};
use crate::types::EntityId;

/// A paratrooper. Registry-resident; no behavior system drives
/// troopers yet, but they participate in snapshots and deletion like
/// any other kind.
#[derive(Debug, Clone)]
pub struct Trooper {
    id: EntityId,
    x: f64,
    y: f64,
    state: TrooperState,
    team: Team,
    health: i32,
}

impl Trooper {
    pub fn new(id: EntityId, team: Team) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            state: TrooperState::Parachuting,
            team,
            health: TROOPER_HEALTH_MAX,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn state(&self) -> TrooperState {
        self.state
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    recorded_setters!(EntityKind::Trooper => {
        set_x(x: f64);
        set_y(y: f64);
        set_state(state: TrooperState);
        set_team(team: Team);
        set_health(health: i32);
    });

    pub fn set_pos(&mut self, cache: &mut ChangeCache, x: f64, y: f64) {
        self.set_x(cache, x);
        self.set_y(cache, y);
    }
}

impl Entity for Trooper {
    const KIND: EntityKind = EntityKind::Trooper;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
            ("state".to_string(), self.state.into()),
            ("team".to_string(), self.team.into()),
            ("health".to_string(), self.health.into()),
        ])
    }
}
