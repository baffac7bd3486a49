//! Input resolution: converts queued key-state changes into concrete
//! control actions on the entity each player operates.
//!
//! Edge-triggered toggles (flip, engine, eject) run strictly before
//! the level-triggered rotation resolution; the ordering is observable
//! under simultaneous key combinations and must not change.

use tracing::debug;

use dogfight_core::delta::ChangeCache;
use dogfight_core::entities::{Entity, Plane, Player};
use dogfight_core::enums::{ControlKind, EntityKind, InputKey, PlayerStatus, RotationDirection};
use dogfight_core::input::{InputQueue, KeyChanges};
use dogfight_core::types::EntityId;

use crate::registry::Registry;

/// Drain the input queue and apply per-player control actions.
pub fn run(registry: &mut Registry, cache: &mut ChangeCache, queue: &mut InputQueue) {
    for (player_id, changes) in std::mem::take(queue) {
        let players = &mut registry.players;
        let planes = &mut registry.planes;

        let Some(player) = players.iter_mut().find(|p| p.id() == player_id) else {
            debug!(player = %player_id, "input for unknown player dropped");
            continue;
        };

        // Only planes have input handling today. A player controlling
        // nothing (or a kind without handling) takes no action; the
        // held-key snapshot still tracks the transitions.
        match player.control_kind() {
            ControlKind::Plane => plane_input(player, planes, cache, &changes),
            ControlKind::None | ControlKind::Trooper => {
                for (&key, &pressed) in &changes {
                    player.keys_mut().set(key, pressed);
                }
            }
        }
    }
}

fn plane_input(
    player: &mut Player,
    planes: &mut Vec<Plane>,
    cache: &mut ChangeCache,
    changes: &KeyChanges,
) {
    let plane_id = player.control_id();

    for (&key, &pressed) in changes {
        player.keys_mut().set(key, pressed);
        if !pressed {
            continue;
        }
        match key {
            // Level-triggered; resolved below after all transitions.
            InputKey::Left | InputKey::Right => {}
            InputKey::Up => {
                if let Some(plane) = find_plane(planes, plane_id) {
                    let flipped = !plane.flipped();
                    plane.set_flipped(cache, flipped);
                }
            }
            InputKey::Down => {
                if let Some(plane) = find_plane(planes, plane_id) {
                    let engine_on = !plane.engine_on();
                    plane.set_engine_on(cache, engine_on);
                }
            }
            InputKey::Jump => {
                eject(player, planes, cache, plane_id);
            }
        }
    }

    // Rotation resolution against the held-key state after all
    // transitions. Skipped when an eject above cleared the control.
    if player.control_kind() != ControlKind::Plane {
        return;
    }
    let Some(plane) = find_plane(planes, plane_id) else {
        return;
    };
    let left = player.keys().get(InputKey::Left);
    let right = player.keys().get(InputKey::Right);
    let rotation = match (left, right) {
        (true, false) => RotationDirection::Left,
        (false, true) => RotationDirection::Right,
        // Both or neither held cancels rotation.
        _ => RotationDirection::None,
    };
    plane.set_rotation(cache, rotation);
}

/// Destroy the controlled plane and put the player back in the
/// pre-flight state.
fn eject(player: &mut Player, planes: &mut Vec<Plane>, cache: &mut ChangeCache, plane_id: EntityId) {
    if let Some(index) = planes.iter().position(|p| p.id() == plane_id) {
        planes.remove(index);
        cache.record_deleted(plane_id, EntityKind::Plane);
    }
    player.set_status(cache, PlayerStatus::Takeoff);
    player.set_control(cache, ControlKind::None, EntityId(0));
}

fn find_plane(planes: &mut [Plane], id: EntityId) -> Option<&mut Plane> {
    planes.iter_mut().find(|p| p.id() == id)
}
