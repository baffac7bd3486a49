//! The change cache — the sole channel through which world state
//! reaches external observers.
//!
//! Every mutation that goes through an entity setter lands here as a
//! field-level delta keyed by entity id. Flushing at the end of a tick
//! yields the minimal change set for that tick and clears the cache.
//! An entry whose field map is empty is the deletion sentinel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{
    ControlKind, EntityKind, FacingDirection, PlaneType, PlayerStatus, RotationDirection, Team,
    TrooperState,
};
use crate::types::EntityId;

/// A single changed field value on the wire.
///
/// Enum-typed field values encode as their discriminant so consumers
/// see a compact integer. The `kind` tag on an entry is not a field
/// value and keeps its variant-name encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<EntityId> for FieldValue {
    fn from(v: EntityId) -> Self {
        FieldValue::Int(v.0 as i64)
    }
}

impl From<Team> for FieldValue {
    fn from(v: Team) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<FacingDirection> for FieldValue {
    fn from(v: FacingDirection) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<PlaneType> for FieldValue {
    fn from(v: PlaneType) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<PlayerStatus> for FieldValue {
    fn from(v: PlayerStatus) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<ControlKind> for FieldValue {
    fn from(v: ControlKind) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<RotationDirection> for FieldValue {
    fn from(v: RotationDirection) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<TrooperState> for FieldValue {
    fn from(v: TrooperState) -> Self {
        FieldValue::Int(v as i64)
    }
}

/// Changed fields of one entity since the last flush.
///
/// An empty `fields` map is the deletion sentinel: the entity was
/// removed this tick. Consumers must treat it as distinct from the
/// entity simply being absent from the change set ("unchanged").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDelta {
    pub kind: EntityKind,
    pub fields: BTreeMap<String, FieldValue>,
}

impl EntityDelta {
    pub fn is_deletion(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The tick output: entity id -> changed fields. Also the shape of a
/// full-state query, where every entry carries the complete field set.
///
/// `BTreeMap` keeps serialization order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet(pub BTreeMap<EntityId, EntityDelta>);

impl ChangeSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityDelta> {
        self.0.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &EntityDelta)> {
        self.0.iter()
    }
}

/// Per-tick accumulator of entity deltas.
///
/// Owned exclusively by the world orchestrator and passed explicitly
/// into every mutation; entities never hold a handle to it.
#[derive(Debug, Default)]
pub struct ChangeCache {
    entries: BTreeMap<EntityId, EntityDelta>,
}

impl ChangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single field change.
    ///
    /// No-op when the cached value for the field already equals
    /// `value`, and no-op when the entity's entry is a deletion
    /// sentinel: deletion is terminal within a tick.
    pub fn record(&mut self, id: EntityId, kind: EntityKind, field: &str, value: FieldValue) {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                debug_assert_eq!(entry.kind, kind, "kind mismatch recording entity {id}");
                if entry.is_deletion() {
                    return;
                }
                if entry.fields.get(field) == Some(&value) {
                    return;
                }
                entry.fields.insert(field.to_string(), value);
            }
            None => {
                let mut fields = BTreeMap::new();
                fields.insert(field.to_string(), value);
                self.entries.insert(id, EntityDelta { kind, fields });
            }
        }
    }

    /// Record a newly inserted entity with its complete field snapshot.
    pub fn record_created(
        &mut self,
        id: EntityId,
        kind: EntityKind,
        fields: BTreeMap<String, FieldValue>,
    ) {
        debug_assert!(
            !fields.is_empty(),
            "creation entry for {id} would be indistinguishable from a deletion"
        );
        self.entries.insert(id, EntityDelta { kind, fields });
    }

    /// Record an entity removal: overwrite any accumulated fields with
    /// the deletion sentinel.
    pub fn record_deleted(&mut self, id: EntityId, kind: EntityKind) {
        self.entries.insert(
            id,
            EntityDelta {
                kind,
                fields: BTreeMap::new(),
            },
        );
    }

    /// Return the accumulated change set and clear internal state for
    /// the next tick.
    pub fn flush(&mut self) -> ChangeSet {
        ChangeSet(std::mem::take(&mut self.entries))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
