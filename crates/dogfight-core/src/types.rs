//! Fundamental identity and geometry types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::ROTATION_DIRECTIONS;

/// Process-unique entity identifier.
///
/// Assigned once at creation from a monotonically increasing counter.
/// Never reused and never reset during a world's lifetime (reset only
/// on a full world reset).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unit vector for a plane heading expressed in rotation steps.
///
/// Direction 0 points along +x (a right-facing takeoff);
/// `ROTATION_DIRECTIONS / 2` points along -x.
pub fn heading_vector(direction: u16) -> DVec2 {
    let angle = direction as f64 / ROTATION_DIRECTIONS as f64 * std::f64::consts::TAU;
    DVec2::new(angle.cos(), angle.sin())
}
