use std::collections::BTreeMap;

use super::{recorded_setters, Entity};
use crate::delta::{ChangeCache, FieldValue};
use crate::enums::{ControlKind, EntityKind, PlayerStatus, Team};
use crate::input::KeySet;
use crate::types::EntityId;

/// A connected player: team assignment, lifecycle status, and the
/// control reference naming the entity it currently operates.
///
/// The held-key snapshot is session state for input resolution, not
/// world state: it is mutated directly and excluded from `snapshot()`.
#[derive(Debug, Clone)]
pub struct Player {
    id: EntityId,
    team: Team,
    status: PlayerStatus,
    control_kind: ControlKind,
    control_id: EntityId,
    keys: KeySet,
}

impl Player {
    pub fn new(id: EntityId, team: Team) -> Self {
        Self {
            id,
            team,
            status: PlayerStatus::Takeoff,
            control_kind: ControlKind::None,
            control_id: EntityId(0),
            keys: KeySet::default(),
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn control_kind(&self) -> ControlKind {
        self.control_kind
    }

    pub fn control_id(&self) -> EntityId {
        self.control_id
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeySet {
        &mut self.keys
    }

    recorded_setters!(EntityKind::Player => {
        set_team(team: Team);
        set_status(status: PlayerStatus);
    });

    /// Assign what this player operates. `ControlKind::None` with id 0
    /// is the cleared state.
    pub fn set_control(&mut self, cache: &mut ChangeCache, kind: ControlKind, id: EntityId) {
        if self.control_kind != kind {
            self.control_kind = kind;
            cache.record(self.id, Self::KIND, "control_kind", kind.into());
        }
        if self.control_id != id {
            self.control_id = id;
            cache.record(self.id, Self::KIND, "control_id", id.into());
        }
    }
}

impl Entity for Player {
    const KIND: EntityKind = EntityKind::Player;

    fn id(&self) -> EntityId {
        self.id
    }

    fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        BTreeMap::from([
            ("team".to_string(), self.team.into()),
            ("status".to_string(), self.status.into()),
            ("control_kind".to_string(), self.control_kind.into()),
            ("control_id".to_string(), self.control_id.into()),
        ])
    }
}
