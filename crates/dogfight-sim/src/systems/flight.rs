//! Flight integration: advances every plane by the tick delta.
//!
//! Per-plane kinematics live on `Plane::advance`; this system is the
//! seam where world-level consequences (fuel-out destruction,
//! collisions) will attach.

use dogfight_core::delta::ChangeCache;

use crate::registry::Registry;

pub fn run(registry: &mut Registry, cache: &mut ChangeCache, delta_ms: u64) {
    for plane in &mut registry.planes {
        plane.advance(cache, delta_ms);
    }
}
