//! Typed entity storage.
//!
//! One collection per kind, fixed at compile time, plus the global
//! monotonic id counter. An entity is owned by exactly one collection;
//! lookups search only within the requested kind, so a cross-kind id
//! is simply not found.

use std::collections::BTreeMap;

use dogfight_core::delta::{ChangeCache, ChangeSet, EntityDelta};
use dogfight_core::entities::{
    Entity, Flag, Ground, Hill, Plane, Player, Runway, Tower, Trooper, Water,
};
use dogfight_core::enums::EntityKind;
use dogfight_core::types::EntityId;

#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) players: Vec<Player>,
    pub(crate) planes: Vec<Plane>,
    pub(crate) flags: Vec<Flag>,
    pub(crate) grounds: Vec<Ground>,
    pub(crate) hills: Vec<Hill>,
    pub(crate) runways: Vec<Runway>,
    pub(crate) towers: Vec<Tower>,
    pub(crate) troopers: Vec<Trooper>,
    pub(crate) waters: Vec<Water>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh id. Counts up, never reuses, never resets
    /// during a world's lifetime.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Drop all entities and restart the id counter. Full world reset
    /// is the only caller.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --- Inserts: push into the kind's collection and record a
    // creation entry carrying the full snapshot. ---

    pub fn insert_player(&mut self, cache: &mut ChangeCache, player: Player) {
        record_insert(cache, &player);
        self.players.push(player);
    }

    pub fn insert_plane(&mut self, cache: &mut ChangeCache, plane: Plane) {
        record_insert(cache, &plane);
        self.planes.push(plane);
    }

    pub fn insert_flag(&mut self, cache: &mut ChangeCache, flag: Flag) {
        record_insert(cache, &flag);
        self.flags.push(flag);
    }

    pub fn insert_ground(&mut self, cache: &mut ChangeCache, ground: Ground) {
        record_insert(cache, &ground);
        self.grounds.push(ground);
    }

    pub fn insert_hill(&mut self, cache: &mut ChangeCache, hill: Hill) {
        record_insert(cache, &hill);
        self.hills.push(hill);
    }

    pub fn insert_runway(&mut self, cache: &mut ChangeCache, runway: Runway) {
        record_insert(cache, &runway);
        self.runways.push(runway);
    }

    pub fn insert_tower(&mut self, cache: &mut ChangeCache, tower: Tower) {
        record_insert(cache, &tower);
        self.towers.push(tower);
    }

    pub fn insert_trooper(&mut self, cache: &mut ChangeCache, trooper: Trooper) {
        record_insert(cache, &trooper);
        self.troopers.push(trooper);
    }

    pub fn insert_water(&mut self, cache: &mut ChangeCache, water: Water) {
        record_insert(cache, &water);
        self.waters.push(water);
    }

    // --- Lookups ---

    pub fn player(&self, id: EntityId) -> Option<&Player> {
        self.players.iter().find(|e| e.id() == id)
    }

    pub fn player_mut(&mut self, id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|e| e.id() == id)
    }

    pub fn plane(&self, id: EntityId) -> Option<&Plane> {
        self.planes.iter().find(|e| e.id() == id)
    }

    pub fn plane_mut(&mut self, id: EntityId) -> Option<&mut Plane> {
        self.planes.iter_mut().find(|e| e.id() == id)
    }

    pub fn runway(&self, id: EntityId) -> Option<&Runway> {
        self.runways.iter().find(|e| e.id() == id)
    }

    pub fn runway_mut(&mut self, id: EntityId) -> Option<&mut Runway> {
        self.runways.iter_mut().find(|e| e.id() == id)
    }

    pub fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        match kind {
            EntityKind::Ground => self.grounds.iter().any(|e| e.id() == id),
            EntityKind::Water => self.waters.iter().any(|e| e.id() == id),
            EntityKind::Runway => self.runways.iter().any(|e| e.id() == id),
            EntityKind::Flag => self.flags.iter().any(|e| e.id() == id),
            EntityKind::Tower => self.towers.iter().any(|e| e.id() == id),
            EntityKind::Hill => self.hills.iter().any(|e| e.id() == id),
            EntityKind::Trooper => self.troopers.iter().any(|e| e.id() == id),
            EntityKind::Player => self.players.iter().any(|e| e.id() == id),
            EntityKind::Plane => self.planes.iter().any(|e| e.id() == id),
        }
    }

    /// Remove an entity and record the deletion sentinel. Not-found is
    /// a silent no-op and records nothing. Returns whether an entity
    /// was removed.
    pub fn remove(&mut self, cache: &mut ChangeCache, kind: EntityKind, id: EntityId) -> bool {
        let removed = match kind {
            EntityKind::Ground => remove_from(&mut self.grounds, id),
            EntityKind::Water => remove_from(&mut self.waters, id),
            EntityKind::Runway => remove_from(&mut self.runways, id),
            EntityKind::Flag => remove_from(&mut self.flags, id),
            EntityKind::Tower => remove_from(&mut self.towers, id),
            EntityKind::Hill => remove_from(&mut self.hills, id),
            EntityKind::Trooper => remove_from(&mut self.troopers, id),
            EntityKind::Player => remove_from(&mut self.players, id),
            EntityKind::Plane => remove_from(&mut self.planes, id),
        };
        if removed {
            cache.record_deleted(id, kind);
        }
        removed
    }

    /// Complete materialization of every live entity, each entry a
    /// creation. Independent of the per-tick cache; used when a new
    /// observer attaches mid-session.
    pub fn full_state(&self) -> ChangeSet {
        let mut entries = BTreeMap::new();
        collect(&mut entries, &self.players);
        collect(&mut entries, &self.flags);
        collect(&mut entries, &self.grounds);
        collect(&mut entries, &self.hills);
        collect(&mut entries, &self.runways);
        collect(&mut entries, &self.towers);
        collect(&mut entries, &self.troopers);
        collect(&mut entries, &self.waters);
        collect(&mut entries, &self.planes);
        ChangeSet(entries)
    }
}

fn record_insert<E: Entity>(cache: &mut ChangeCache, entity: &E) {
    cache.record_created(entity.id(), E::KIND, entity.snapshot());
}

fn remove_from<E: Entity>(collection: &mut Vec<E>, id: EntityId) -> bool {
    match collection.iter().position(|e| e.id() == id) {
        Some(index) => {
            collection.remove(index);
            true
        }
        None => false,
    }
}

fn collect<E: Entity>(entries: &mut BTreeMap<EntityId, EntityDelta>, collection: &[E]) {
    for entity in collection {
        entries.insert(
            entity.id(),
            EntityDelta {
                kind: E::KIND,
                fields: entity.snapshot(),
            },
        );
    }
}
