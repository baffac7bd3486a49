//! Takeoff submission types.

use serde::{Deserialize, Serialize};

use crate::enums::PlaneType;
use crate::types::EntityId;

/// A player's request to spawn into a plane from a runway.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TakeoffRequest {
    pub plane_type: PlaneType,
    pub runway: EntityId,
}

/// A queued takeoff: requests are deferred to the takeoff phase of the
/// next tick so concurrent submissions serialize deterministically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TakeoffEntry {
    pub player: EntityId,
    pub request: TakeoffRequest,
}
