//! Tests for the registry, the tick phases, and the change-set
//! contract observers rely on.

use dogfight_core::constants::{ROTATION_DIRECTIONS, TICK_INTERVAL_MS};
use dogfight_core::delta::{ChangeCache, FieldValue};
use dogfight_core::entities::{Entity, Plane};
use dogfight_core::enums::*;
use dogfight_core::map::{GameMap, GroundData, RunwayData, WaterData};
use dogfight_core::takeoff::TakeoffRequest;
use dogfight_core::types::EntityId;

use crate::registry::Registry;
use crate::world::GameWorld;

fn classic_world() -> GameWorld {
    let mut world = GameWorld::new();
    world.load_map(&GameMap::classic());
    world
}

/// Id of the first live runway belonging to `team`.
fn runway_for(world: &GameWorld, team: Team) -> EntityId {
    world
        .registry()
        .runways
        .iter()
        .find(|r| r.team() == team)
        .map(|r| r.id())
        .expect("map should have a runway per team")
}

/// Put a player in the air and return (player, plane) ids.
fn airborne_player(world: &mut GameWorld, team: Team) -> (EntityId, EntityId) {
    let player = world.add_player(team);
    let request = TakeoffRequest {
        plane_type: team.planes()[0],
        runway: runway_for(world, team),
    };
    world.request_takeoff(player, request);
    world.tick(TICK_INTERVAL_MS);

    let plane = world.registry().player(player).unwrap().control_id();
    assert_eq!(
        world.registry().player(player).unwrap().control_kind(),
        ControlKind::Plane
    );
    (player, plane)
}

// ---- Determinism ----

#[test]
fn test_determinism_lockstep() {
    let mut world_a = classic_world();
    let mut world_b = classic_world();

    for world in [&mut world_a, &mut world_b] {
        let centrals = world.add_player(Team::Centrals);
        let allies = world.add_player(Team::Allies);
        let request = TakeoffRequest {
            plane_type: PlaneType::Fokker,
            runway: runway_for(world, Team::Centrals),
        };
        world.request_takeoff(centrals, request);
        let request = TakeoffRequest {
            plane_type: PlaneType::Sopwith,
            runway: runway_for(world, Team::Allies),
        };
        world.request_takeoff(allies, request);
        world.queue_input(centrals, InputKey::Left, true);
        world.queue_input(allies, InputKey::Down, true);
    }

    for tick in 0..100 {
        let json_a = serde_json::to_string(&world_a.tick(TICK_INTERVAL_MS)).unwrap();
        let json_b = serde_json::to_string(&world_b.tick(TICK_INTERVAL_MS)).unwrap();
        assert_eq!(json_a, json_b, "change sets diverged at tick {tick}");
    }

    let full_a = serde_json::to_string(&world_a.full_state()).unwrap();
    let full_b = serde_json::to_string(&world_b.full_state()).unwrap();
    assert_eq!(full_a, full_b);
}

#[test]
fn test_idle_world_produces_no_deltas() {
    let mut world = classic_world();
    // First flush carries the map-load creations.
    assert!(!world.tick(TICK_INTERVAL_MS).is_empty());
    // Nothing moves afterwards: terrain has no behavior.
    assert!(world.tick(TICK_INTERVAL_MS).is_empty());
    assert!(world.tick(TICK_INTERVAL_MS).is_empty());
}

// ---- Identity ----

#[test]
fn test_ids_are_never_reused() {
    let mut world = GameWorld::new();
    let first = world.add_player(Team::Centrals);
    let second = world.add_player(Team::Allies);
    world.remove_player(first);
    world.remove_player(second);
    let third = world.add_player(Team::Centrals);

    assert!(second > first);
    assert!(
        third > second,
        "allocation after removals must exceed all previously issued ids"
    );
}

#[test]
fn test_load_map_assigns_monotonic_unique_ids() {
    let map = GameMap {
        grounds: vec![
            GroundData {
                x: 0.0,
                y: 0.0,
                width: 100.0,
            },
            GroundData {
                x: 200.0,
                y: 0.0,
                width: 100.0,
            },
        ],
        runways: vec![RunwayData {
            x: 50.0,
            y: 0.0,
            direction: FacingDirection::Right,
            team: Team::Centrals,
            health: 255,
        }],
        waters: vec![WaterData {
            x: 400.0,
            y: 0.0,
            width: 80.0,
            direction: FacingDirection::Left,
        }],
        ..Default::default()
    };

    let mut world = GameWorld::new();
    world.load_map(&map);

    let full = world.full_state();
    assert_eq!(full.len(), 4);
    let ids: Vec<u64> = full.iter().map(|(id, _)| id.0).collect();
    assert_eq!(ids, vec![0, 1, 2, 3], "ids must be unique and increasing");
    assert!(full.iter().all(|(_, entry)| !entry.is_deletion()));

    // The same four creations are delivered through the tick delta.
    let delta = world.tick(TICK_INTERVAL_MS);
    assert_eq!(delta.len(), 4);
    let ground = delta.get(EntityId(0)).unwrap();
    assert_eq!(ground.kind, EntityKind::Ground);
    assert_eq!(ground.fields.get("width"), Some(&FieldValue::Float(100.0)));
}

// ---- Registry lifecycle ----

#[test]
fn test_create_then_remove_same_tick_leaves_only_the_sentinel() {
    let mut registry = Registry::new();
    let mut cache = ChangeCache::new();

    let id = registry.allocate();
    registry.insert_plane(&mut cache, Plane::new(id, PlaneType::Bristol, Team::Allies));
    assert!(registry.remove(&mut cache, EntityKind::Plane, id));

    let set = cache.flush();
    assert_eq!(set.len(), 1);
    let entry = set.get(id).unwrap();
    assert!(entry.is_deletion(), "creation fields leaked past removal");
    assert_eq!(entry.kind, EntityKind::Plane);
}

#[test]
fn test_remove_not_found_records_nothing() {
    let mut registry = Registry::new();
    let mut cache = ChangeCache::new();
    assert!(!registry.remove(&mut cache, EntityKind::Runway, EntityId(42)));
    assert!(cache.flush().is_empty());
}

#[test]
fn test_cross_kind_lookup_is_not_found() {
    let mut world = classic_world();
    let player = world.add_player(Team::Centrals);
    assert!(world.registry().runway(player).is_none());
    assert!(!world.registry().contains(EntityKind::Plane, player));
}

#[test]
fn test_remove_player_sentinel_and_silent_noop() {
    let mut world = GameWorld::new();
    let player = world.add_player(Team::Allies);
    world.tick(TICK_INTERVAL_MS);

    world.remove_player(player);
    let delta = world.tick(TICK_INTERVAL_MS);
    assert!(delta.get(player).unwrap().is_deletion());

    world.remove_player(EntityId(999));
    assert!(world.tick(TICK_INTERVAL_MS).is_empty());
}

#[test]
fn test_full_state_leaves_the_tick_cache_alone() {
    let mut world = GameWorld::new();
    let player = world.add_player(Team::Centrals);

    let full = world.full_state();
    assert_eq!(full.len(), 1);

    // The pending creation still flushes through the next tick.
    let delta = world.tick(TICK_INTERVAL_MS);
    assert!(delta.get(player).is_some());
}

// ---- Takeoff pipeline ----

#[test]
fn test_takeoff_unknown_runway_is_dropped() {
    let mut world = classic_world();
    let player = world.add_player(Team::Centrals);
    world.request_takeoff(
        player,
        TakeoffRequest {
            plane_type: PlaneType::Albatros,
            runway: EntityId(9999),
        },
    );
    world.tick(TICK_INTERVAL_MS);

    assert!(world.registry().planes.is_empty());
    assert_eq!(
        world.registry().player(player).unwrap().status(),
        PlayerStatus::Takeoff
    );
}

#[test]
fn test_takeoff_dead_runway_dropped_healthy_succeeds() {
    let map = GameMap {
        runways: vec![
            RunwayData {
                x: 0.0,
                y: 0.0,
                direction: FacingDirection::Right,
                team: Team::Centrals,
                health: 0,
            },
            RunwayData {
                x: 0.0,
                y: 0.0,
                direction: FacingDirection::Right,
                team: Team::Centrals,
                health: 1,
            },
        ],
        ..Default::default()
    };
    let mut world = GameWorld::new();
    world.load_map(&map);
    let player = world.add_player(Team::Centrals);

    world.request_takeoff(
        player,
        TakeoffRequest {
            plane_type: PlaneType::Albatros,
            runway: EntityId(0),
        },
    );
    world.tick(TICK_INTERVAL_MS);
    assert!(
        world.registry().planes.is_empty(),
        "dead runway must not launch planes"
    );

    world.request_takeoff(
        player,
        TakeoffRequest {
            plane_type: PlaneType::Albatros,
            runway: EntityId(1),
        },
    );
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(world.registry().planes.len(), 1);
}

#[test]
fn test_takeoff_spawn_mirrors_runway_facing() {
    let mut world = classic_world();

    // Centrals runway faces right: negative offset, positive velocity.
    let (_, plane) = airborne_player(&mut world, Team::Centrals);
    let runway_x = world
        .registry()
        .runway(runway_for(&world, Team::Centrals))
        .unwrap()
        .x();
    let plane = world.registry().plane(plane).unwrap();
    assert!(plane.vx() > 0.0);
    assert!(plane.x() < runway_x);
    assert!(!plane.flipped());

    // Allies runway faces left: positive offset, negative velocity,
    // plane spawns flipped and rotated half the circle.
    let (_, plane) = airborne_player(&mut world, Team::Allies);
    let runway_x = world
        .registry()
        .runway(runway_for(&world, Team::Allies))
        .unwrap()
        .x();
    let plane = world.registry().plane(plane).unwrap();
    assert!(plane.vx() < 0.0);
    assert!(plane.x() > runway_x);
    assert!(plane.flipped());
    // Direction was set to half the circle at spawn; the first flight
    // phase may already have stepped it, but not by a full quadrant.
    let quarter = ROTATION_DIRECTIONS / 4;
    let half = ROTATION_DIRECTIONS / 2;
    assert!(plane.direction() > half - quarter && plane.direction() < half + quarter);
}

#[test]
fn test_disallowed_plane_type_never_enqueued() {
    let mut world = classic_world();
    let player = world.add_player(Team::Centrals);
    world.request_takeoff(
        player,
        TakeoffRequest {
            plane_type: PlaneType::Sopwith,
            runway: runway_for(&world, Team::Centrals),
        },
    );
    world.tick(TICK_INTERVAL_MS);

    assert!(world.registry().planes.is_empty());
    assert_eq!(
        world.registry().player(player).unwrap().control_kind(),
        ControlKind::None
    );
}

#[test]
fn test_takeoff_while_already_controlling_is_dropped() {
    let mut world = classic_world();
    let (player, plane) = airborne_player(&mut world, Team::Centrals);

    world.request_takeoff(
        player,
        TakeoffRequest {
            plane_type: PlaneType::Junkers,
            runway: runway_for(&world, Team::Centrals),
        },
    );
    world.tick(TICK_INTERVAL_MS);

    assert_eq!(world.registry().planes.len(), 1);
    assert_eq!(world.registry().player(player).unwrap().control_id(), plane);
}

// ---- Input resolution ----

#[test]
fn test_rotation_truth_table() {
    let mut world = classic_world();
    let (player, plane) = airborne_player(&mut world, Team::Centrals);
    let rotation = |world: &GameWorld| world.registry().plane(plane).unwrap().rotation();

    // left only -> rotate left
    world.queue_input(player, InputKey::Left, true);
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(rotation(&world), RotationDirection::Left);

    // both held -> canonical rest
    world.queue_input(player, InputKey::Right, true);
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(rotation(&world), RotationDirection::None);

    // right only -> rotate right
    world.queue_input(player, InputKey::Left, false);
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(rotation(&world), RotationDirection::Right);

    // neither held -> canonical rest
    world.queue_input(player, InputKey::Right, false);
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(rotation(&world), RotationDirection::None);
}

#[test]
fn test_up_and_down_toggle_on_press_only() {
    let mut world = classic_world();
    let (player, plane) = airborne_player(&mut world, Team::Centrals);
    let flipped = world.registry().plane(plane).unwrap().flipped();
    let engine = world.registry().plane(plane).unwrap().engine_on();

    world.queue_input(player, InputKey::Up, true);
    world.queue_input(player, InputKey::Down, true);
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(world.registry().plane(plane).unwrap().flipped(), !flipped);
    assert_eq!(world.registry().plane(plane).unwrap().engine_on(), !engine);

    // Releases are not transitions to pressed; nothing toggles back.
    world.queue_input(player, InputKey::Up, false);
    world.queue_input(player, InputKey::Down, false);
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(world.registry().plane(plane).unwrap().flipped(), !flipped);
    assert_eq!(world.registry().plane(plane).unwrap().engine_on(), !engine);
}

#[test]
fn test_eject_destroys_plane_and_resets_player() {
    let mut world = classic_world();
    let (player, plane) = airborne_player(&mut world, Team::Centrals);
    world.tick(TICK_INTERVAL_MS);

    world.queue_input(player, InputKey::Jump, true);
    let delta = world.tick(TICK_INTERVAL_MS);

    assert!(delta.get(plane).unwrap().is_deletion());
    assert!(world.registry().plane(plane).is_none());
    let player_state = world.registry().player(player).unwrap();
    assert_eq!(player_state.status(), PlayerStatus::Takeoff);
    assert_eq!(player_state.control_kind(), ControlKind::None);

    // Back in pre-flight, the player can take off again.
    world.request_takeoff(
        player,
        TakeoffRequest {
            plane_type: PlaneType::Albatros,
            runway: runway_for(&world, Team::Centrals),
        },
    );
    world.tick(TICK_INTERVAL_MS);
    assert_eq!(world.registry().planes.len(), 1);
    assert!(world.registry().player(player).unwrap().control_id() > plane);
}

#[test]
fn test_input_for_unknown_player_is_dropped() {
    let mut world = classic_world();
    world.queue_input(EntityId(777), InputKey::Left, true);
    world.tick(TICK_INTERVAL_MS);
    let delta = world.tick(TICK_INTERVAL_MS);
    assert!(delta.is_empty());
}

#[test]
fn test_input_without_control_is_ignored() {
    let mut world = classic_world();
    let player = world.add_player(Team::Allies);
    world.tick(TICK_INTERVAL_MS);

    world.queue_input(player, InputKey::Up, true);
    let delta = world.tick(TICK_INTERVAL_MS);
    assert!(delta.is_empty(), "no controlled entity means no action");
}

// ---- Flight ----

#[test]
fn test_airborne_plane_keeps_producing_deltas() {
    let mut world = classic_world();
    let (_, plane) = airborne_player(&mut world, Team::Centrals);
    world.tick(TICK_INTERVAL_MS);

    let x0 = world.registry().plane(plane).unwrap().x();
    let delta = world.tick(TICK_INTERVAL_MS);
    let entry = delta.get(plane).unwrap();
    assert!(entry.fields.contains_key("x"));
    assert!(world.registry().plane(plane).unwrap().x() > x0);
}
