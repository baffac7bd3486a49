//! Takeoff pipeline: validates queued requests in FIFO order and
//! spawns the successful ones into controllable planes.
//!
//! Rejections are normal outcomes, not errors: the entry is dropped
//! silently and the reason goes to the debug log only. Team/plane-type
//! membership was already enforced at submission time, so it is not
//! re-checked here.

use std::collections::VecDeque;

use thiserror::Error;
use tracing::debug;

use dogfight_core::constants::{
    ROTATION_DIRECTIONS, TAKEOFF_ALTITUDE, TAKEOFF_OFFSET_X, TAKEOFF_SPEED_MARGIN,
};
use dogfight_core::delta::ChangeCache;
use dogfight_core::entities::Plane;
use dogfight_core::enums::{ControlKind, FacingDirection, PlayerStatus};
use dogfight_core::takeoff::TakeoffEntry;
use dogfight_core::types::EntityId;

use crate::registry::Registry;

/// Why a queued takeoff entry was dropped.
#[derive(Debug, Error)]
pub enum TakeoffRejection {
    #[error("player {0} no longer exists")]
    UnknownPlayer(EntityId),
    #[error("player {0} is already controlling an entity")]
    AlreadyControlling(EntityId),
    #[error("runway {0} does not exist")]
    UnknownRunway(EntityId),
    #[error("runway {0} is destroyed")]
    DeadRunway(EntityId),
}

/// Drain the takeoff queue in submission order.
pub fn run(registry: &mut Registry, cache: &mut ChangeCache, queue: &mut VecDeque<TakeoffEntry>) {
    while let Some(entry) = queue.pop_front() {
        if let Err(rejection) = process(registry, cache, &entry) {
            debug!(player = %entry.player, %rejection, "takeoff dropped");
        }
    }
}

fn process(
    registry: &mut Registry,
    cache: &mut ChangeCache,
    entry: &TakeoffEntry,
) -> Result<(), TakeoffRejection> {
    let player = registry
        .player(entry.player)
        .ok_or(TakeoffRejection::UnknownPlayer(entry.player))?;
    if player.control_kind() != ControlKind::None {
        return Err(TakeoffRejection::AlreadyControlling(entry.player));
    }
    let team = player.team();

    let runway = registry
        .runway(entry.request.runway)
        .ok_or(TakeoffRejection::UnknownRunway(entry.request.runway))?;
    if runway.health() <= 0 {
        return Err(TakeoffRejection::DeadRunway(entry.request.runway));
    }
    let runway_x = runway.x();
    let facing = runway.direction();

    // Spawn placement mirrors the runway facing: the lateral offset is
    // negated and the velocity sign is positive for right-facing
    // strips; left-facing strips spawn planes already rotated 180
    // degrees and flipped.
    let mut offset_x = TAKEOFF_OFFSET_X;
    let mut velocity_sign = -1.0;
    if facing == FacingDirection::Right {
        offset_x = -offset_x;
        velocity_sign = 1.0;
    }

    let plane_id = registry.allocate();
    let mut plane = Plane::new(plane_id, entry.request.plane_type, team);
    plane.set_pos(cache, runway_x + offset_x, TAKEOFF_ALTITUDE);
    plane.set_velocity(
        cache,
        plane.plane_type().min_speed() * velocity_sign * TAKEOFF_SPEED_MARGIN,
        0.0,
    );
    plane.set_flipped(cache, facing == FacingDirection::Left);
    let direction = if facing == FacingDirection::Left {
        ROTATION_DIRECTIONS / 2
    } else {
        0
    };
    plane.set_direction(cache, direction);
    registry.insert_plane(cache, plane);

    let Some(player) = registry.player_mut(entry.player) else {
        // Existence was checked above; the registry cannot lose a
        // player between the two lookups within one tick.
        unreachable!("player {} vanished during takeoff", entry.player);
    };
    player.set_control(cache, ControlKind::Plane, plane_id);
    player.set_status(cache, PlayerStatus::Playing);

    debug!(player = %entry.player, plane = %plane_id, "takeoff complete");
    Ok(())
}
