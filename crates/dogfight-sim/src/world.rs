//! The game world: exclusive owner of all entities, queues, and the
//! change cache.
//!
//! One tick is one atomic unit of work. External callers interact only
//! through the enqueue operations and the tick/snapshot operations;
//! serializing those calls onto a single logical thread is the
//! responsibility of the embedding layer.

use std::collections::VecDeque;

use tracing::{debug, info};

use dogfight_core::delta::{ChangeCache, ChangeSet};
use dogfight_core::entities::{Flag, Ground, Hill, Player, Runway, Tower, Water};
use dogfight_core::enums::{EntityKind, InputKey, Team};
use dogfight_core::input::InputQueue;
use dogfight_core::map::GameMap;
use dogfight_core::takeoff::{TakeoffEntry, TakeoffRequest};
use dogfight_core::types::EntityId;

use crate::registry::Registry;
use crate::systems;

#[derive(Debug, Default)]
pub struct GameWorld {
    cache: ChangeCache,
    registry: Registry,
    input_queue: InputQueue,
    takeoff_queue: VecDeque<TakeoffEntry>,
}

impl GameWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full world reset: the only point at which the id counter
    /// restarts.
    pub fn reset(&mut self) {
        self.cache = ChangeCache::new();
        self.registry.reset();
        self.input_queue.clear();
        self.takeoff_queue.clear();
    }

    /// Advance the simulation by `delta_ms` and return the minimal set
    /// of changes accumulated during the tick.
    ///
    /// Phase order is fixed: inputs, takeoffs, flight, flush.
    pub fn tick(&mut self, delta_ms: u64) -> ChangeSet {
        systems::input::run(&mut self.registry, &mut self.cache, &mut self.input_queue);
        systems::takeoff::run(&mut self.registry, &mut self.cache, &mut self.takeoff_queue);
        systems::flight::run(&mut self.registry, &mut self.cache, delta_ms);
        self.cache.flush()
    }

    /// Add a player to the game and return its id. Takes effect
    /// immediately; the creation entry lands in the current cache.
    pub fn add_player(&mut self, team: Team) -> EntityId {
        let id = self.registry.allocate();
        self.registry
            .insert_player(&mut self.cache, Player::new(id, team));
        info!(player = %id, ?team, "player joined");
        id
    }

    /// Remove a player. Unknown ids are a silent no-op.
    ///
    /// TODO: also despawn a plane the player was controlling; for now
    /// it keeps flying unowned, matching the original server.
    pub fn remove_player(&mut self, id: EntityId) {
        if self.registry.remove(&mut self.cache, EntityKind::Player, id) {
            info!(player = %id, "player left");
        } else {
            debug!(player = %id, "remove_player: unknown id");
        }
    }

    /// Queue a key-state change for resolution at the next tick.
    /// Per key, the last write before the tick wins.
    pub fn queue_input(&mut self, player_id: EntityId, key: InputKey, pressed: bool) {
        self.input_queue
            .entry(player_id)
            .or_default()
            .insert(key, pressed);
    }

    /// Queue a takeoff request for the next tick.
    ///
    /// Team/plane-type membership is enforced here, at submission
    /// time: a disallowed request is never enqueued. All other
    /// validation happens when the queue drains.
    pub fn request_takeoff(&mut self, player_id: EntityId, request: TakeoffRequest) {
        let Some(player) = self.registry.player(player_id) else {
            debug!(player = %player_id, "takeoff request from unknown player dropped");
            return;
        };
        if !player.team().planes().contains(&request.plane_type) {
            debug!(
                player = %player_id,
                plane_type = ?request.plane_type,
                "takeoff request for disallowed plane type dropped"
            );
            return;
        }
        self.takeoff_queue.push_back(TakeoffEntry {
            player: player_id,
            request,
        });
    }

    /// Consume a map structure, inserting its entities in field order
    /// with monotonically increasing ids.
    pub fn load_map(&mut self, map: &GameMap) {
        for data in &map.grounds {
            let id = self.registry.allocate();
            let mut ground = Ground::new(id);
            ground.apply(&mut self.cache, data);
            self.registry.insert_ground(&mut self.cache, ground);
        }
        for data in &map.flags {
            let id = self.registry.allocate();
            let mut flag = Flag::new(id);
            flag.apply(&mut self.cache, data);
            self.registry.insert_flag(&mut self.cache, flag);
        }
        for data in &map.hills {
            let id = self.registry.allocate();
            let mut hill = Hill::new(id);
            hill.apply(&mut self.cache, data);
            self.registry.insert_hill(&mut self.cache, hill);
        }
        for data in &map.runways {
            let id = self.registry.allocate();
            let mut runway = Runway::new(id);
            runway.apply(&mut self.cache, data);
            self.registry.insert_runway(&mut self.cache, runway);
        }
        for data in &map.towers {
            let id = self.registry.allocate();
            let mut tower = Tower::new(id);
            tower.apply(&mut self.cache, data);
            self.registry.insert_tower(&mut self.cache, tower);
        }
        for data in &map.waters {
            let id = self.registry.allocate();
            let mut water = Water::new(id);
            water.apply(&mut self.cache, data);
            self.registry.insert_water(&mut self.cache, water);
        }
        info!(
            grounds = map.grounds.len(),
            runways = map.runways.len(),
            "map loaded"
        );
    }

    /// Complete state of every live entity, for late-joining
    /// observers. Does not touch the per-tick cache.
    pub fn full_state(&self) -> ChangeSet {
        self.registry.full_state()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
